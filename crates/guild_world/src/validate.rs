//! Command validation: pure, RNG-free, never mutates.
//!
//! Every user-caused failure lands here as a `Reject` with one of three
//! reason codes; handlers may assume a validated command. Detail strings
//! are deterministic so replays reproduce rejection events byte-for-byte.

use crate::command::{CloseDecision, Command};
use crate::ids::Rank;
use crate::state::{BoardStatus, GameState, ProofPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    NotFound,
    InvalidArg,
    InvalidState,
}

impl RejectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::NotFound => "NOT_FOUND",
            RejectReason::InvalidArg => "INVALID_ARG",
            RejectReason::InvalidState => "INVALID_STATE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Accept,
    Reject {
        reason: RejectReason,
        detail: String,
    },
}

fn reject(reason: RejectReason, detail: impl Into<String>) -> Validation {
    Validation::Reject {
        reason,
        detail: detail.into(),
    }
}

pub fn can_apply(state: &GameState, command: &Command) -> Validation {
    match command {
        Command::AdvanceDay => Validation::Accept,

        Command::PostContract { inbox_id, fee, .. } => {
            let Some(draft) = state.find_draft(*inbox_id) else {
                return reject(RejectReason::NotFound, format!("draft {inbox_id} not found"));
            };
            if *fee < 0 {
                return reject(RejectReason::InvalidArg, format!("fee {fee} is negative"));
            }
            let needed = (*fee - draft.client_deposit).max(0);
            let available = state.economy.available_copper();
            if needed > available {
                return reject(
                    RejectReason::InvalidState,
                    format!("posting needs {needed} copper but only {available} available"),
                );
            }
            Validation::Accept
        }

        Command::CreateContract {
            title,
            rank,
            difficulty,
            reward,
            ..
        } => {
            if title.trim().is_empty() {
                return reject(RejectReason::InvalidArg, "title is blank");
            }
            if !Rank::is_valid_value(*rank) {
                return reject(RejectReason::InvalidArg, format!("rank {rank} out of 1..7"));
            }
            if !(0..=100).contains(difficulty) {
                return reject(
                    RejectReason::InvalidArg,
                    format!("difficulty {difficulty} out of 0..100"),
                );
            }
            if *reward < 0 {
                return reject(
                    RejectReason::InvalidArg,
                    format!("reward {reward} is negative"),
                );
            }
            Validation::Accept
        }

        Command::UpdateContractTerms {
            contract_id,
            new_fee,
            new_salvage,
        } => {
            if new_fee.is_none() && new_salvage.is_none() {
                return reject(RejectReason::InvalidArg, "no terms provided");
            }
            if let Some(fee) = new_fee {
                if *fee < 0 {
                    return reject(RejectReason::InvalidArg, format!("fee {fee} is negative"));
                }
            }
            if state.find_draft(*contract_id).is_some() {
                return Validation::Accept;
            }
            let Some(item) = state.find_board(*contract_id) else {
                return reject(
                    RejectReason::NotFound,
                    format!("contract {contract_id} not found"),
                );
            };
            if item.status != BoardStatus::Open {
                return reject(
                    RejectReason::InvalidState,
                    format!("board contract {contract_id} is {}", item.status.as_str()),
                );
            }
            if let Some(fee) = new_fee {
                let escrow_delta = (*fee).max(item.client_deposit) - item.escrow_copper();
                let available = state.economy.available_copper();
                if escrow_delta > available {
                    return reject(
                        RejectReason::InvalidState,
                        format!(
                            "fee change needs {escrow_delta} more copper but only {available} available"
                        ),
                    );
                }
            }
            Validation::Accept
        }

        Command::CancelContract { contract_id } => {
            if state.find_draft(*contract_id).is_some() {
                return Validation::Accept;
            }
            let Some(item) = state.find_board(*contract_id) else {
                return reject(
                    RejectReason::NotFound,
                    format!("contract {contract_id} not found"),
                );
            };
            if item.status != BoardStatus::Open {
                return reject(
                    RejectReason::InvalidState,
                    format!("board contract {contract_id} is {}", item.status.as_str()),
                );
            }
            Validation::Accept
        }

        Command::CloseReturn {
            active_contract_id,
            decision,
        } => {
            let Some(packet) = state.find_return(*active_contract_id) else {
                return reject(
                    RejectReason::NotFound,
                    format!("return for active {active_contract_id} not found"),
                );
            };
            if !packet.requires_player_close {
                return reject(
                    RejectReason::InvalidState,
                    format!("return for active {active_contract_id} does not need a close"),
                );
            }
            let strict = state.guild.proof_policy == ProofPolicy::Strict;
            if strict && *decision == CloseDecision::Unspecified {
                return reject(
                    RejectReason::InvalidArg,
                    "strict proof policy requires an explicit decision",
                );
            }
            // Fee funds only matter when accepting an outcome that pays.
            if *decision != CloseDecision::Reject && packet.outcome.pays_fee() {
                let Some(item) = state.find_board(packet.board_contract_id) else {
                    return reject(
                        RejectReason::NotFound,
                        format!("board contract {} not found", packet.board_contract_id),
                    );
                };
                if state.economy.reserved_copper < item.fee
                    || state.economy.money_copper < item.fee
                {
                    return reject(
                        RejectReason::InvalidState,
                        format!("cannot cover fee of {} copper", item.fee),
                    );
                }
            }
            Validation::Accept
        }

        Command::SellTrophies { amount } => {
            let stock = state.economy.trophies_stock;
            if *amount > 0 {
                if *amount > stock {
                    return reject(
                        RejectReason::InvalidState,
                        format!("only {stock} trophies in stock"),
                    );
                }
            } else if stock == 0 {
                return reject(RejectReason::InvalidState, "no trophies in stock");
            }
            Validation::Accept
        }

        Command::PayTax { amount } => {
            if *amount <= 0 {
                return reject(
                    RejectReason::InvalidArg,
                    format!("payment {amount} must be positive"),
                );
            }
            let outstanding = state.meta.tax_amount_due + state.meta.tax_penalty;
            if outstanding <= 0 {
                return reject(RejectReason::InvalidState, "no tax outstanding");
            }
            // Escrowed copper is not spendable; paying out of it would
            // break the money >= reserved invariant.
            let available = state.economy.available_copper();
            if *amount > available {
                return reject(
                    RejectReason::InvalidState,
                    format!("payment {amount} exceeds available {available}"),
                );
            }
            Validation::Accept
        }

        Command::SetProofPolicy { .. } => Validation::Accept,
    }
}
