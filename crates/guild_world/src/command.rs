//! The sealed command vocabulary. Adapters build these; only the reducer
//! consumes them.

use crate::ids::{ActiveContractId, CommandId, ContractId};
use crate::state::{ProofPolicy, SalvagePolicy};

/// A command plus the caller-assigned id echoed on its events.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandEnvelope {
    pub id: CommandId,
    pub command: Command,
}

impl CommandEnvelope {
    pub fn new(id: CommandId, command: Command) -> Self {
        Self { id, command }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AdvanceDay,
    PostContract {
        inbox_id: ContractId,
        fee: i64,
        salvage: SalvagePolicy,
    },
    CreateContract {
        title: String,
        rank: i64,
        difficulty: i64,
        reward: i64,
        salvage: SalvagePolicy,
    },
    UpdateContractTerms {
        contract_id: ContractId,
        new_fee: Option<i64>,
        new_salvage: Option<SalvagePolicy>,
    },
    CancelContract {
        contract_id: ContractId,
    },
    CloseReturn {
        active_contract_id: ActiveContractId,
        decision: CloseDecision,
    },
    SellTrophies {
        amount: i64,
    },
    PayTax {
        amount: i64,
    },
    SetProofPolicy {
        policy: ProofPolicy,
    },
}

impl Command {
    /// Stable name used by `CommandRejected` events.
    pub fn cmd_type(&self) -> &'static str {
        match self {
            Command::AdvanceDay => "ADVANCE_DAY",
            Command::PostContract { .. } => "POST_CONTRACT",
            Command::CreateContract { .. } => "CREATE_CONTRACT",
            Command::UpdateContractTerms { .. } => "UPDATE_CONTRACT_TERMS",
            Command::CancelContract { .. } => "CANCEL_CONTRACT",
            Command::CloseReturn { .. } => "CLOSE_RETURN",
            Command::SellTrophies { .. } => "SELL_TROPHIES",
            Command::PayTax { .. } => "PAY_TAX",
            Command::SetProofPolicy { .. } => "SET_PROOF_POLICY",
        }
    }
}

/// Player verdict on a return packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    Accept,
    Reject,
    Unspecified,
}

impl CloseDecision {
    pub fn as_str(self) -> &'static str {
        match self {
            CloseDecision::Accept => "ACCEPT",
            CloseDecision::Reject => "REJECT",
            CloseDecision::Unspecified => "UNSPECIFIED",
        }
    }
}
