//! Balance constants and domain formulas. Every value here is part of the
//! replay contract: changing one changes hashes for existing seeds.

use crate::ids::Rank;
use crate::state::Hero;

// ============================================================================
// Core constants
// ============================================================================

pub const SAVE_VERSION: i64 = 1;

/// 1 gp = 100 copper. All stored money is copper.
pub const COPPER_PER_GP: i64 = 100;

pub const INITIAL_MONEY_COPPER: i64 = 100;
pub const INITIAL_REPUTATION: i64 = 50;
pub const INITIAL_STABILITY: i64 = 50;

/// Days a freshly taken contract stays in WIP.
pub const DAYS_INIT: i64 = 2;

/// Days before an unposted draft goes to auto-resolve.
pub const AUTO_RESOLVE_DELAY_DAYS: i64 = 3;
/// Reschedule distance for the NEUTRAL auto-resolve bucket.
pub const AUTO_RESOLVE_RETRY_DAYS: i64 = 2;
/// Stability penalty per BAD auto-resolved draft.
pub const AUTO_RESOLVE_BAD_STABILITY_PENALTY: i64 = 2;

// Outcome resolution bands. MAX_SUCCESS keeps room for the fixed partial
// band and the minimum failure band inside a d100 roll.
pub const OUTCOME_OFFSET: i64 = 50;
pub const OUTCOME_MULT: i64 = 1;
pub const PARTIAL_CHANCE: i64 = 20;
pub const FAIL_MIN: i64 = 10;
pub const MIN_SUCCESS: i64 = 5;
pub const MAX_SUCCESS: i64 = 100 - PARTIAL_CHANCE - FAIL_MIN;
/// Rolls at or above this are catastrophe candidates (death or missing).
pub const CATASTROPHE_ROLL: i64 = 95;
pub const MISSING_CHANCE: i64 = 10;

// Tax.
pub const TAX_PERIOD_DAYS: i64 = 7;
pub const TAX_PENALTY_BPS: i64 = 1_000;
pub const TAX_MAX_MISSED: i64 = 3;
pub const INITIAL_TAX_DUE_DAY: i64 = 7;
pub const INITIAL_TAX_AMOUNT_DUE: i64 = 50;

// Pickup scoring.
pub const PICKUP_RISK_BIAS: i64 = 20;
pub const PICKUP_FEE_DIVISOR: i64 = 2;
pub const PICKUP_SALVAGE_BONUS_HERO: i64 = 15;
pub const PICKUP_SALVAGE_BONUS_SPLIT: i64 = 8;
pub const UNPROFITABLE_FLOOR: i64 = -30;

pub const DECLINE_UNPROFITABLE: &str = "unprofitable";
pub const DECLINE_TOO_RISKY: &str = "too_risky";

// ============================================================================
// Rank tables
// ============================================================================

/// Total completed contracts required to leave each rank (index rank-1).
/// Rank S never advances.
const RANK_UP_TOTALS: [i64; 6] = [5, 12, 22, 36, 55, 80];

/// Inbox and hero generation multiplier per rank (index rank-1).
const RANK_FLOW_MULTIPLIER: [i64; 7] = [1, 1, 2, 2, 3, 3, 4];

/// Payout band per rank in whole gp, inclusive (index rank-1).
const PAYOUT_BANDS_GP: [(i64, i64); 7] = [
    (1, 3),
    (2, 5),
    (4, 8),
    (6, 12),
    (10, 18),
    (15, 28),
    (24, 40),
];

/// Tax principal scheduled per period, by rank (index rank-1).
const TAX_DUE_BY_RANK: [i64; 7] = [50, 80, 120, 180, 260, 360, 500];

fn rank_index(rank: Rank) -> usize {
    rank.value().clamp(Rank::MIN_VALUE, Rank::MAX_VALUE) as usize - 1
}

/// Completed-contracts total that advances out of `rank`, or `None` at S.
pub fn rank_up_total(rank: Rank) -> Option<i64> {
    if rank.is_max() {
        None
    } else {
        Some(RANK_UP_TOTALS[rank_index(rank)])
    }
}

/// Remaining successful closes before the next rank (0 at S).
pub fn contracts_for_next_rank(rank: Rank, completed_total: i64) -> i64 {
    match rank_up_total(rank) {
        Some(total) => (total - completed_total).max(1),
        None => 0,
    }
}

pub fn flow_multiplier(rank: Rank) -> i64 {
    RANK_FLOW_MULTIPLIER[rank_index(rank)]
}

pub fn payout_band_gp(rank: Rank) -> (i64, i64) {
    PAYOUT_BANDS_GP[rank_index(rank)]
}

pub fn tax_due_for_rank(rank: Rank) -> i64 {
    TAX_DUE_BY_RANK[rank_index(rank)]
}

/// Midpoint difficulty for drafts of a rank, before variance.
pub fn difficulty_base(rank: Rank) -> i64 {
    15 + 10 * (rank.value() - 1)
}

// ============================================================================
// Domain formulas
// ============================================================================

/// Stable hero strength on the same 0..100 scale as contract difficulty.
pub fn hero_power(hero: &Hero) -> i64 {
    let raw = 10 * hero.rank.value() + hero.traits.courage / 2 + 2 * hero.history_completed;
    raw.clamp(0, 100)
}

/// Basis-point multiply with truncation toward zero. Money math only.
pub fn apply_bps(value: i64, bps: i64) -> i64 {
    value * bps / 10_000
}

pub fn clamp_percent(value: i64) -> i64 {
    value.clamp(0, 100)
}

// ============================================================================
// Fixed pools
// ============================================================================

/// Hero name pool; arrivals draw an index with `next_int(20)`.
pub const NAME_POOL: [&str; 20] = [
    "Aldric", "Berin", "Caska", "Doran", "Eryn", "Fenwick", "Garrick", "Hale", "Isolde", "Joruk",
    "Kestrel", "Lunet", "Marrow", "Nessa", "Odo", "Petra", "Quill", "Rosalind", "Sable", "Tam",
];

/// Draft title pool, indexed by `contract_id % 12` without consuming RNG.
pub const TITLE_POOL: [&str; 12] = [
    "Rats in the granary",
    "Lost caravan",
    "Wolf cull",
    "Bandit toll",
    "Haunted mill",
    "Missing shepherd",
    "Spider nest",
    "Broken bridge toll",
    "Smugglers' cache",
    "Graveyard watch",
    "Poacher trouble",
    "Old fort survey",
];

pub fn draft_title(contract_id: i64) -> &'static str {
    let index = contract_id.rem_euclid(TITLE_POOL.len() as i64) as usize;
    TITLE_POOL[index]
}

pub fn hero_name(index: i64) -> &'static str {
    let index = index.rem_euclid(NAME_POOL.len() as i64) as usize;
    NAME_POOL[index]
}
