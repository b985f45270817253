//! Periodic guild tax: end-of-day evaluation and payment application.

use crate::balance::{
    apply_bps, tax_due_for_rank, TAX_MAX_MISSED, TAX_PENALTY_BPS, TAX_PERIOD_DAYS,
};
use crate::ids::{DayIndex, Rank};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxEvaluation {
    /// Not a due day; nothing happens.
    NotDue,
    /// Due day with outstanding debt: penalty compounds and the clock
    /// restarts. `shutdown` marks the crossing of the miss limit.
    Missed {
        penalty_added: i64,
        missed_count: i64,
        shutdown: bool,
        next_due_day: DayIndex,
    },
    /// Due day with a clean ledger: the next period's principal is set.
    Scheduled {
        amount_due: i64,
        next_due_day: DayIndex,
    },
}

pub fn evaluate_end_of_day(
    day: DayIndex,
    tax_due_day: DayIndex,
    amount_due: i64,
    penalty: i64,
    missed_count: i64,
    rank: Rank,
) -> TaxEvaluation {
    if day != tax_due_day {
        return TaxEvaluation::NotDue;
    }
    if amount_due + penalty > 0 {
        let penalty_added = apply_bps(amount_due, TAX_PENALTY_BPS);
        let new_missed = missed_count + 1;
        TaxEvaluation::Missed {
            penalty_added,
            missed_count: new_missed,
            shutdown: new_missed == TAX_MAX_MISSED,
            next_due_day: tax_due_day + TAX_PERIOD_DAYS,
        }
    } else {
        TaxEvaluation::Scheduled {
            amount_due: tax_due_for_rank(rank),
            next_due_day: tax_due_day + TAX_PERIOD_DAYS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxPayment {
    pub amount_paid: i64,
    pub penalty_remaining: i64,
    pub due_remaining: i64,
    pub cleared: bool,
}

/// Apply a payment: penalty first, then principal. Overpayment beyond the
/// outstanding total is not charged.
pub fn compute_payment(amount: i64, amount_due: i64, penalty: i64) -> TaxPayment {
    let outstanding = amount_due + penalty;
    let amount_paid = amount.min(outstanding);

    let to_penalty = amount_paid.min(penalty);
    let to_principal = amount_paid - to_penalty;

    let penalty_remaining = penalty - to_penalty;
    let due_remaining = amount_due - to_principal;

    TaxPayment {
        amount_paid,
        penalty_remaining,
        due_remaining,
        cleared: penalty_remaining == 0 && due_remaining == 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_due_off_schedule() {
        assert_eq!(
            evaluate_end_of_day(6, 7, 50, 0, 0, Rank::F),
            TaxEvaluation::NotDue
        );
    }

    #[test]
    fn missed_compounds_and_reschedules() {
        let eval = evaluate_end_of_day(7, 7, 50, 0, 0, Rank::F);
        assert_eq!(
            eval,
            TaxEvaluation::Missed {
                penalty_added: 5,
                missed_count: 1,
                shutdown: false,
                next_due_day: 14,
            }
        );
        let eval = evaluate_end_of_day(21, 21, 50, 10, 2, Rank::F);
        assert_eq!(
            eval,
            TaxEvaluation::Missed {
                penalty_added: 5,
                missed_count: 3,
                shutdown: true,
                next_due_day: 28,
            }
        );
    }

    #[test]
    fn clean_ledger_schedules_next_period() {
        let eval = evaluate_end_of_day(7, 7, 0, 0, 0, Rank::E);
        assert_eq!(
            eval,
            TaxEvaluation::Scheduled {
                amount_due: 80,
                next_due_day: 14,
            }
        );
    }

    #[test]
    fn payment_hits_penalty_before_principal() {
        let payment = compute_payment(8, 50, 5);
        assert_eq!(payment.amount_paid, 8);
        assert_eq!(payment.penalty_remaining, 0);
        assert_eq!(payment.due_remaining, 47);
        assert!(!payment.cleared);
    }

    #[test]
    fn overpayment_is_capped() {
        let payment = compute_payment(1_000, 50, 5);
        assert_eq!(payment.amount_paid, 55);
        assert!(payment.cleared);
    }
}
