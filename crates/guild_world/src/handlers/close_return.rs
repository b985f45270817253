//! Manual close of a return packet.

use crate::command::CloseDecision;
use crate::event::{EventKind, SeqContext};
use crate::ids::ActiveContractId;
use crate::policies::{
    can_close, compute_close_delta, record_successful_close, trophies_to_guild, CloseGate,
};
use crate::state::{GameState, HeroStatus};

use super::{apply_economy_delta, close_active};

pub(crate) fn handle_close_return(
    state: &mut GameState,
    active_contract_id: ActiveContractId,
    decision: CloseDecision,
    ctx: &mut SeqContext,
) {
    let Some(packet) = state.find_return(active_contract_id).cloned() else {
        return;
    };
    // Under FAST/SOFT an unspecified decision means accept; STRICT never
    // gets here unspecified (the validator demands an explicit decision).
    let accept = decision != CloseDecision::Reject;

    let gate = can_close(
        state.guild.proof_policy,
        decision,
        packet.trophies_quality,
        packet.suspected_theft,
    );
    if let CloseGate::Block { reason } = gate {
        ctx.emit(EventKind::ReturnClosureBlocked {
            active_contract_id,
            policy: state.guild.proof_policy,
            reason: reason.to_string(),
        });
        return;
    }

    let Some(item) = state.find_board(packet.board_contract_id) else {
        return;
    };
    let fee = item.fee;
    let client_deposit = item.client_deposit;
    let salvage = item.salvage;
    let escrow = item.escrow_copper();

    let successful = accept && packet.outcome.pays_fee();
    let fee_paid = if successful { fee } else { 0 };
    let guild_trophies = if successful {
        trophies_to_guild(salvage, packet.trophies_count)
    } else {
        0
    };
    apply_economy_delta(
        state,
        compute_close_delta(successful, fee, client_deposit, guild_trophies),
    );

    for hero_id in &packet.hero_ids {
        if let Some(hero) = state.heroes.roster.iter_mut().find(|h| h.id == *hero_id) {
            hero.status = HeroStatus::Available;
            if successful {
                hero.history_completed += 1;
            }
        }
    }

    close_active(state, active_contract_id);
    state
        .contracts
        .returns
        .retain(|r| r.active_contract_id != active_contract_id);

    if successful {
        let progress = record_successful_close(
            state.guild.guild_rank,
            state.guild.completed_contracts_total,
        );
        state.guild.completed_contracts_total = progress.new_total;
        state.guild.guild_rank = progress.new_rank;
        state.guild.contracts_for_next_rank = progress.contracts_for_next_rank;
        if progress.ranked_up {
            ctx.emit(EventKind::GuildRankUp {
                new_rank: progress.new_rank,
                contracts_for_next_rank: progress.contracts_for_next_rank,
            });
        }
    }

    if accept {
        ctx.emit(EventKind::ReturnClosed {
            active_contract_id,
            board_contract_id: packet.board_contract_id,
            outcome: packet.outcome,
            fee_paid,
            trophies_to_guild: guild_trophies,
            manual_close: true,
        });
    } else {
        ctx.emit(EventKind::ReturnRejected {
            active_contract_id,
            board_contract_id: packet.board_contract_id,
            escrow_released: escrow,
        });
    }
}
