//! Contract authoring: create, post, retune, cancel.

use crate::balance::AUTO_RESOLVE_DELAY_DAYS;
use crate::event::{EventKind, SeqContext};
use crate::ids::{ContractId, Rank};
use crate::policies::{compute_cancel_contract_delta, compute_post_contract_delta};
use crate::state::{
    insert_by_key, BoardContract, BoardStatus, ContractDraft, GameState, ProofHint, SalvagePolicy,
};

use super::apply_economy_delta;

pub(crate) fn handle_post_contract(
    state: &mut GameState,
    inbox_id: ContractId,
    fee: i64,
    salvage: SalvagePolicy,
    ctx: &mut SeqContext,
) {
    let Some(pos) = state
        .contracts
        .inbox
        .iter()
        .position(|draft| draft.id == inbox_id)
    else {
        return;
    };
    let draft = state.contracts.inbox.remove(pos);

    let item = BoardContract {
        id: draft.id,
        posted_day: state.meta.day_index,
        title: draft.title,
        rank: draft.rank_suggested,
        fee,
        salvage,
        base_difficulty: draft.base_difficulty,
        status: BoardStatus::Open,
        client_deposit: draft.client_deposit,
    };
    let event = EventKind::ContractPosted {
        board_contract_id: item.id,
        from_inbox_id: inbox_id,
        rank: item.rank,
        fee: item.fee,
        salvage: item.salvage,
        client_deposit: item.client_deposit,
    };

    apply_economy_delta(state, compute_post_contract_delta(fee, item.client_deposit));
    insert_by_key(&mut state.contracts.board, item, |b| b.id);
    ctx.emit(event);
}

pub(crate) fn handle_create_contract(
    state: &mut GameState,
    title: &str,
    rank: i64,
    difficulty: i64,
    reward: i64,
    salvage: SalvagePolicy,
    ctx: &mut SeqContext,
) {
    let id = state.meta.ids.alloc_contract_id();
    let day = state.meta.day_index;
    let draft = ContractDraft {
        id,
        created_day: day,
        next_auto_resolve_day: day + AUTO_RESOLVE_DELAY_DAYS,
        title: title.to_string(),
        rank_suggested: Rank(rank),
        fee_offered: reward,
        salvage,
        base_difficulty: difficulty,
        proof_hint: ProofHint::None,
        client_deposit: 0,
    };
    let event = EventKind::ContractDraftCreated {
        draft_id: id,
        title: draft.title.clone(),
        rank: draft.rank_suggested,
        fee: reward,
        salvage,
        difficulty,
    };
    insert_by_key(&mut state.contracts.inbox, draft, |d| d.id);
    ctx.emit(event);
}

pub(crate) fn handle_update_contract_terms(
    state: &mut GameState,
    contract_id: ContractId,
    new_fee: Option<i64>,
    new_salvage: Option<SalvagePolicy>,
    ctx: &mut SeqContext,
) {
    if let Some(draft) = state
        .contracts
        .inbox
        .iter_mut()
        .find(|d| d.id == contract_id)
    {
        let old_fee = new_fee.map(|_| draft.fee_offered);
        let old_salvage = new_salvage.map(|_| draft.salvage);
        if let Some(fee) = new_fee {
            draft.fee_offered = fee;
        }
        if let Some(salvage) = new_salvage {
            draft.salvage = salvage;
        }
        ctx.emit(EventKind::ContractTermsUpdated {
            contract_id,
            location: "inbox",
            old_fee,
            new_fee,
            old_salvage,
            new_salvage,
        });
        return;
    }

    let Some(item) = state
        .contracts
        .board
        .iter_mut()
        .find(|b| b.id == contract_id)
    else {
        return;
    };
    let old_fee = new_fee.map(|_| item.fee);
    let old_salvage = new_salvage.map(|_| item.salvage);
    let mut escrow_delta = 0;
    if let Some(fee) = new_fee {
        escrow_delta = fee.max(item.client_deposit) - item.escrow_copper();
        item.fee = fee;
    }
    if let Some(salvage) = new_salvage {
        item.salvage = salvage;
    }
    state.economy.reserved_copper += escrow_delta;
    ctx.emit(EventKind::ContractTermsUpdated {
        contract_id,
        location: "board",
        old_fee,
        new_fee,
        old_salvage,
        new_salvage,
    });
}

pub(crate) fn handle_cancel_contract(
    state: &mut GameState,
    contract_id: ContractId,
    ctx: &mut SeqContext,
) {
    if let Some(pos) = state
        .contracts
        .inbox
        .iter()
        .position(|d| d.id == contract_id)
    {
        state.contracts.inbox.remove(pos);
        ctx.emit(EventKind::ContractCancelled {
            contract_id,
            location: "inbox",
            refunded_copper: 0,
        });
        return;
    }

    let Some(pos) = state
        .contracts
        .board
        .iter()
        .position(|b| b.id == contract_id)
    else {
        return;
    };
    let item = state.contracts.board.remove(pos);
    apply_economy_delta(
        state,
        compute_cancel_contract_delta(item.fee, item.client_deposit),
    );
    ctx.emit(EventKind::ContractCancelled {
        contract_id,
        location: "board",
        refunded_copper: item.client_deposit,
    });
}
