//! Economy settlement deltas. Policies return deltas; handlers apply them.
//!
//! Reserve accounting: a posted contract locks `max(fee, clientDeposit)`
//! in `reservedCopper`, the client's cash plus whatever of the guild's
//! own money covers the promised fee. The PostContract validation rule
//! (`max(0, fee - deposit) <= available`) is exactly the condition that
//! keeps `moneyCopper >= reservedCopper` under this accounting.

use crate::state::SalvagePolicy;

/// Signed change to the treasury.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EconomyDelta {
    pub money: i64,
    pub reserved: i64,
    pub trophies: i64,
}

fn escrow(fee: i64, client_deposit: i64) -> i64 {
    fee.max(client_deposit)
}

/// Posting: the client's deposit arrives, the full fee exposure locks.
pub fn compute_post_contract_delta(fee: i64, client_deposit: i64) -> EconomyDelta {
    EconomyDelta {
        money: client_deposit,
        reserved: escrow(fee, client_deposit),
        trophies: 0,
    }
}

/// Closing: escrow unwinds; the fee leaves only when the outcome earned it.
/// On failure the guild keeps the deposit as compensation.
pub fn compute_close_delta(
    fee_is_paid: bool,
    fee: i64,
    client_deposit: i64,
    trophies_to_guild: i64,
) -> EconomyDelta {
    EconomyDelta {
        money: if fee_is_paid { -fee } else { 0 },
        reserved: -escrow(fee, client_deposit),
        trophies: trophies_to_guild,
    }
}

/// Cancelling an open board item refunds the client's deposit.
pub fn compute_cancel_contract_delta(fee: i64, client_deposit: i64) -> EconomyDelta {
    EconomyDelta {
        money: -client_deposit,
        reserved: -escrow(fee, client_deposit),
        trophies: 0,
    }
}

/// Guild share of the reported trophies on close.
pub fn trophies_to_guild(salvage: SalvagePolicy, reported: i64) -> i64 {
    match salvage {
        SalvagePolicy::Guild => reported,
        SalvagePolicy::Hero => 0,
        SalvagePolicy::Split => reported / 2,
    }
}
