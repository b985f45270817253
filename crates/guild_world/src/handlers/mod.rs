//! Command handlers. One per command; only the reducer calls them, and
//! only with a validated command. All events go through the step's
//! `SeqContext`.

mod advance_day;
mod authoring;
mod close_return;
mod treasury;

use crate::command::Command;
use crate::event::SeqContext;
use crate::ids::ActiveContractId;
use crate::policies::EconomyDelta;
use crate::rng::Rng;
use crate::state::{insert_by_key, ActiveStatus, BoardStatus, GameState};

pub(crate) fn dispatch(
    state: &mut GameState,
    command: &Command,
    rng: &mut Rng,
    ctx: &mut SeqContext,
) {
    match command {
        Command::AdvanceDay => advance_day::handle_advance_day(state, rng, ctx),
        Command::PostContract {
            inbox_id,
            fee,
            salvage,
        } => authoring::handle_post_contract(state, *inbox_id, *fee, *salvage, ctx),
        Command::CreateContract {
            title,
            rank,
            difficulty,
            reward,
            salvage,
        } => authoring::handle_create_contract(
            state,
            title,
            *rank,
            *difficulty,
            *reward,
            *salvage,
            ctx,
        ),
        Command::UpdateContractTerms {
            contract_id,
            new_fee,
            new_salvage,
        } => authoring::handle_update_contract_terms(state, *contract_id, *new_fee, *new_salvage, ctx),
        Command::CancelContract { contract_id } => {
            authoring::handle_cancel_contract(state, *contract_id, ctx)
        }
        Command::CloseReturn {
            active_contract_id,
            decision,
        } => close_return::handle_close_return(state, *active_contract_id, *decision, ctx),
        Command::SellTrophies { amount } => treasury::handle_sell_trophies(state, *amount, ctx),
        Command::PayTax { amount } => treasury::handle_pay_tax(state, *amount, ctx),
        Command::SetProofPolicy { policy } => {
            treasury::handle_set_proof_policy(state, *policy, ctx)
        }
    }
}

// ============================================================================
// Shared handler plumbing
// ============================================================================

pub(crate) fn apply_economy_delta(state: &mut GameState, delta: EconomyDelta) {
    state.economy.money_copper += delta.money;
    state.economy.reserved_copper += delta.reserved;
    state.economy.trophies_stock += delta.trophies;
}

/// Mark an active contract CLOSED and, when that was the last open active
/// on its board contract, complete and archive the board entry.
pub(crate) fn close_active(state: &mut GameState, active_id: ActiveContractId) {
    let Some(active) = state
        .contracts
        .active
        .iter_mut()
        .find(|a| a.id == active_id)
    else {
        return;
    };
    active.status = ActiveStatus::Closed;
    let board_id = active.board_contract_id;

    let all_closed = state
        .contracts
        .active
        .iter()
        .filter(|a| a.board_contract_id == board_id)
        .all(|a| a.status == ActiveStatus::Closed);
    if !all_closed {
        return;
    }

    if let Some(pos) = state.contracts.board.iter().position(|b| b.id == board_id) {
        let mut item = state.contracts.board.remove(pos);
        item.status = BoardStatus::Completed;
        insert_by_key(&mut state.contracts.archive, item, |b| b.id);
    }
}
