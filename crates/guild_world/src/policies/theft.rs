//! Trophy theft assessment after outcome resolution.
//!
//! One d100 draw whenever the hero came back with trophies; no draw for
//! DEATH/MISSING or an empty bag.

use crate::rng::Rng;
use crate::state::{Outcome, SalvagePolicy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TheftDecision {
    pub suspected: bool,
    pub stolen_count: i64,
    pub reported_count: i64,
}

impl TheftDecision {
    fn none(trophies: i64) -> Self {
        Self {
            suspected: false,
            stolen_count: 0,
            reported_count: trophies,
        }
    }
}

/// Theft chance in percent, by salvage rule. Fee is in copper.
fn theft_chance(salvage: SalvagePolicy, fee: i64, greed: i64, honesty: i64) -> i64 {
    match salvage {
        SalvagePolicy::Guild => {
            if fee == 0 {
                greed
            } else {
                (greed - fee / 2).max(0)
            }
        }
        SalvagePolicy::Hero => 0,
        SalvagePolicy::Split => ((greed - honesty) / 2).max(0),
    }
}

pub fn assess_theft(
    outcome: Outcome,
    trophies: i64,
    salvage: SalvagePolicy,
    fee: i64,
    greed: i64,
    honesty: i64,
    rng: &mut Rng,
) -> TheftDecision {
    if outcome.removes_hero() || trophies == 0 {
        return TheftDecision::none(trophies);
    }

    let chance = theft_chance(salvage, fee, greed, honesty);
    let roll = rng.next_int(100) as i64;
    if roll >= chance {
        return TheftDecision::none(trophies);
    }

    // Half up, rounded against the guild.
    let stolen = (trophies + 1) / 2;
    TheftDecision {
        suspected: true,
        stolen_count: stolen,
        reported_count: trophies - stolen,
    }
}
