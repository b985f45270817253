//! Guild standing and region stability.

use serde::Deserialize;

use crate::ids::Rank;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guild {
    pub guild_rank: Rank,
    pub reputation: i64,
    pub completed_contracts_total: i64,
    pub contracts_for_next_rank: i64,
    pub proof_policy: ProofPolicy,
}

/// How strictly return proofs are checked before a close is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProofPolicy {
    Fast,
    Soft,
    Strict,
}

impl ProofPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            ProofPolicy::Fast => "FAST",
            ProofPolicy::Soft => "SOFT",
            ProofPolicy::Strict => "STRICT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub stability: i64,
}
