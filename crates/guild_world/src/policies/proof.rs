//! Proof-policy gate for manual return closes.

use crate::command::CloseDecision;
use crate::state::{ProofPolicy, TrophyQuality};

pub const BLOCK_DAMAGED_PROOF: &str = "strict_policy_damaged_proof";
pub const BLOCK_THEFT_SUSPECTED: &str = "strict_policy_theft_suspected";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseGate {
    Allow,
    Block { reason: &'static str },
}

/// Whether the policy permits this close. REJECT is always allowed; it is
/// the terminal path for a return STRICT would otherwise hold forever.
pub fn can_close(
    policy: ProofPolicy,
    decision: CloseDecision,
    quality: TrophyQuality,
    suspected_theft: bool,
) -> CloseGate {
    if decision == CloseDecision::Reject {
        return CloseGate::Allow;
    }
    match policy {
        ProofPolicy::Fast | ProofPolicy::Soft => CloseGate::Allow,
        ProofPolicy::Strict => {
            if quality == TrophyQuality::Damaged {
                CloseGate::Block {
                    reason: BLOCK_DAMAGED_PROOF,
                }
            } else if suspected_theft {
                CloseGate::Block {
                    reason: BLOCK_THEFT_SUSPECTED,
                }
            } else {
                CloseGate::Allow
            }
        }
    }
}
