//! Treasury commands: trophy sales, tax payment, proof policy.

use crate::event::{EventKind, SeqContext};
use crate::policies::compute_payment;
use crate::state::{GameState, ProofPolicy};

pub(crate) fn handle_sell_trophies(state: &mut GameState, amount: i64, ctx: &mut SeqContext) {
    let stock = state.economy.trophies_stock;
    // Non-positive amount means "sell everything"; 1 trophy = 1 copper.
    let sold = if amount > 0 { amount.min(stock) } else { stock };
    state.economy.trophies_stock -= sold;
    state.economy.money_copper += sold;
    ctx.emit(EventKind::TrophySold {
        amount: sold,
        money_gained: sold,
    });
}

pub(crate) fn handle_pay_tax(state: &mut GameState, amount: i64, ctx: &mut SeqContext) {
    let payment = compute_payment(amount, state.meta.tax_amount_due, state.meta.tax_penalty);
    state.meta.tax_amount_due = payment.due_remaining;
    state.meta.tax_penalty = payment.penalty_remaining;
    state.economy.money_copper -= payment.amount_paid;
    if payment.cleared {
        state.meta.tax_missed_count = 0;
    }
    ctx.emit(EventKind::TaxPaid {
        amount_paid: payment.amount_paid,
        amount_due_remaining: payment.due_remaining + payment.penalty_remaining,
        is_partial_payment: !payment.cleared,
    });
}

pub(crate) fn handle_set_proof_policy(
    state: &mut GameState,
    policy: ProofPolicy,
    ctx: &mut SeqContext,
) {
    if state.guild.proof_policy == policy {
        return;
    }
    let old_policy = state.guild.proof_policy;
    state.guild.proof_policy = policy;
    ctx.emit(EventKind::ProofPolicyChanged {
        old_policy,
        new_policy: policy,
    });
}
