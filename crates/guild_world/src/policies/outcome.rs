//! Outcome resolution for a matured active contract.
//!
//! Draw order per resolution: the d100 outcome roll; a second d100 only
//! when the roll lands in the catastrophe band; `next_int(3)` for trophy
//! count only on SUCCESS; `next_int(3)` for quality only when the trophy
//! count is positive. Between one and three draws total.

use crate::balance::{
    CATASTROPHE_ROLL, MAX_SUCCESS, MIN_SUCCESS, MISSING_CHANCE, OUTCOME_MULT, OUTCOME_OFFSET,
    PARTIAL_CHANCE,
};
use crate::rng::Rng;
use crate::state::{Outcome, TrophyQuality};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeDecision {
    pub outcome: Outcome,
    pub trophies_count: i64,
    pub trophies_quality: TrophyQuality,
}

pub fn resolve_outcome(hero_power: i64, difficulty: i64, rng: &mut Rng) -> OutcomeDecision {
    let raw_success = (hero_power - difficulty + OUTCOME_OFFSET) * OUTCOME_MULT;
    let p_success = raw_success.clamp(MIN_SUCCESS, MAX_SUCCESS);

    let roll = rng.next_int(100) as i64;
    let outcome = if roll < p_success {
        Outcome::Success
    } else if roll < p_success + PARTIAL_CHANCE {
        Outcome::Partial
    } else if roll >= CATASTROPHE_ROLL {
        let sub_roll = rng.next_int(100) as i64;
        if sub_roll < MISSING_CHANCE {
            Outcome::Missing
        } else {
            Outcome::Death
        }
    } else {
        Outcome::Fail
    };

    let trophies_count = match outcome {
        Outcome::Success => 1 + rng.next_int(3) as i64,
        Outcome::Partial => 1,
        _ => 0,
    };

    let trophies_quality = if trophies_count > 0 {
        match rng.next_int(3) {
            0 => TrophyQuality::Fine,
            1 => TrophyQuality::Normal,
            _ => TrophyQuality::Damaged,
        }
    } else {
        TrophyQuality::Normal
    };

    OutcomeDecision {
        outcome,
        trophies_count,
        trophies_quality,
    }
}
