//! Payout and client-deposit sampling for generated drafts.

use crate::balance::{apply_bps, payout_band_gp, COPPER_PER_GP};
use crate::ids::Rank;
use crate::rng::Rng;

/// One draw: a whole-gp amount from the rank band, floored into copper.
pub fn sample_payout_copper(rank: Rank, rng: &mut Rng) -> i64 {
    let (low_gp, high_gp) = payout_band_gp(rank);
    let span = (high_gp - low_gp + 1) as i32;
    let gp = low_gp + rng.next_int(span) as i64;
    gp * COPPER_PER_GP
}

/// One draw, always consumed: a coin flip for deposit presence. Present
/// deposits are 50% of the payout, in basis points with floor rounding.
pub fn sample_client_deposit_copper(payout_copper: i64, rng: &mut Rng) -> i64 {
    if rng.next_int(2) == 1 {
        apply_bps(payout_copper, 5_000)
    } else {
        0
    }
}
