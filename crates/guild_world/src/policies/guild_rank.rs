//! Guild progression after a successful close.

use crate::balance::{contracts_for_next_rank, rank_up_total};
use crate::ids::Rank;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankProgress {
    pub new_total: i64,
    pub new_rank: Rank,
    pub contracts_for_next_rank: i64,
    pub ranked_up: bool,
}

/// Count one successful close and advance the rank when the threshold is
/// crossed. Thresholds are cumulative totals, so several are never crossed
/// by a single close.
pub fn record_successful_close(rank: Rank, completed_total: i64) -> RankProgress {
    let new_total = completed_total + 1;
    let mut new_rank = rank;
    while let Some(threshold) = rank_up_total(new_rank) {
        if new_total >= threshold {
            new_rank = new_rank.next();
        } else {
            break;
        }
    }

    RankProgress {
        new_total,
        new_rank,
        contracts_for_next_rank: contracts_for_next_rank(new_rank, new_total),
        ranked_up: new_rank != rank,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_without_ranking_up() {
        let progress = record_successful_close(Rank::F, 2);
        assert_eq!(progress.new_total, 3);
        assert_eq!(progress.new_rank, Rank::F);
        assert_eq!(progress.contracts_for_next_rank, 2);
        assert!(!progress.ranked_up);
    }

    #[test]
    fn crosses_the_threshold() {
        let progress = record_successful_close(Rank::F, 4);
        assert_eq!(progress.new_total, 5);
        assert_eq!(progress.new_rank, Rank::E);
        assert_eq!(progress.contracts_for_next_rank, 7);
        assert!(progress.ranked_up);
    }

    #[test]
    fn max_rank_stops_progressing() {
        let progress = record_successful_close(Rank::S, 200);
        assert_eq!(progress.new_rank, Rank::S);
        assert_eq!(progress.contracts_for_next_rank, 0);
        assert!(!progress.ranked_up);
    }
}
