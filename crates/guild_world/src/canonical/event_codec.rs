//! Canonical event serialization.
//!
//! Events are write-only for the core: the canonical array feeds the event
//! hash and downstream consumers. The discriminator is always the first
//! key, followed by the common envelope, then variant fields in the fixed
//! catalog order.

use crate::event::{DaySnapshot, Event, EventKind};

use super::writer::JsonWriter;

pub fn events_to_canonical_json(events: &[Event]) -> String {
    let mut w = JsonWriter::new();
    w.begin_array();
    for event in events {
        write_event(&mut w, event);
    }
    w.end_array();
    w.finish()
}

pub fn event_to_canonical_json(event: &Event) -> String {
    let mut w = JsonWriter::new();
    write_event(&mut w, event);
    w.finish()
}

fn write_event(w: &mut JsonWriter, event: &Event) {
    w.begin_object();
    w.key("type");
    w.string(event.kind.type_name());
    w.key("day");
    w.int(event.day);
    w.key("revision");
    w.int(event.revision);
    w.key("cmdId");
    w.int(event.cmd_id);
    w.key("seq");
    w.int(event.seq);
    write_kind_fields(w, &event.kind);
    w.end_object();
}

fn write_snapshot(w: &mut JsonWriter, snapshot: &DaySnapshot) {
    w.begin_object();
    w.key("day");
    w.int(snapshot.day);
    w.key("revision");
    w.int(snapshot.revision);
    w.key("moneyCopper");
    w.int(snapshot.money_copper);
    w.key("trophiesStock");
    w.int(snapshot.trophies_stock);
    w.key("stability");
    w.int(snapshot.stability);
    w.key("reputation");
    w.int(snapshot.reputation);
    w.key("inboxCount");
    w.int(snapshot.inbox_count);
    w.key("boardCount");
    w.int(snapshot.board_count);
    w.key("activeWipCount");
    w.int(snapshot.active_wip_count);
    w.key("returnsAwaitingClose");
    w.int(snapshot.returns_awaiting_close);
    w.end_object();
}

fn write_kind_fields(w: &mut JsonWriter, kind: &EventKind) {
    match kind {
        EventKind::DayStarted { day_index } => {
            w.key("dayIndex");
            w.int(*day_index);
        }
        EventKind::InboxGenerated {
            count,
            contract_ids,
        } => {
            w.key("count");
            w.int(*count);
            w.key("contractIds");
            w.int_array(contract_ids.iter().map(|id| id.0));
        }
        EventKind::HeroesArrived { count, hero_ids } => {
            w.key("count");
            w.int(*count);
            w.key("heroIds");
            w.int_array(hero_ids.iter().map(|id| id.0));
        }
        EventKind::ContractAutoResolved { draft_id, bucket } => {
            w.key("draftId");
            w.int(draft_id.0);
            w.key("bucket");
            w.string(bucket.as_str());
        }
        EventKind::HeroDeclined { hero_id, reason } => {
            w.key("heroId");
            w.int(hero_id.0);
            w.key("reason");
            w.string(reason);
        }
        EventKind::ContractTaken {
            active_contract_id,
            board_contract_id,
            hero_id,
            days_remaining,
        } => {
            w.key("activeContractId");
            w.int(active_contract_id.0);
            w.key("boardContractId");
            w.int(board_contract_id.0);
            w.key("heroId");
            w.int(hero_id.0);
            w.key("daysRemaining");
            w.int(*days_remaining);
        }
        EventKind::WipAdvanced {
            active_contract_id,
            days_remaining,
        } => {
            w.key("activeContractId");
            w.int(active_contract_id.0);
            w.key("daysRemaining");
            w.int(*days_remaining);
        }
        EventKind::TrophyTheftSuspected {
            active_contract_id,
            hero_id,
            stolen_count,
            reported_count,
        } => {
            w.key("activeContractId");
            w.int(active_contract_id.0);
            w.key("heroId");
            w.int(hero_id.0);
            w.key("stolenCount");
            w.int(*stolen_count);
            w.key("reportedCount");
            w.int(*reported_count);
        }
        EventKind::ContractResolved {
            active_contract_id,
            board_contract_id,
            outcome,
            trophies_count,
            trophies_quality,
        } => {
            w.key("activeContractId");
            w.int(active_contract_id.0);
            w.key("boardContractId");
            w.int(board_contract_id.0);
            w.key("outcome");
            w.string(outcome.as_str());
            w.key("trophiesCount");
            w.int(*trophies_count);
            w.key("trophiesQuality");
            w.string(trophies_quality.as_str());
        }
        EventKind::HeroDied { hero_id, outcome } => {
            w.key("heroId");
            w.int(hero_id.0);
            w.key("outcome");
            w.string(outcome.as_str());
        }
        EventKind::ReturnClosed {
            active_contract_id,
            board_contract_id,
            outcome,
            fee_paid,
            trophies_to_guild,
            manual_close,
        } => {
            w.key("activeContractId");
            w.int(active_contract_id.0);
            w.key("boardContractId");
            w.int(board_contract_id.0);
            w.key("outcome");
            w.string(outcome.as_str());
            w.key("feePaid");
            w.int(*fee_paid);
            w.key("trophiesToGuild");
            w.int(*trophies_to_guild);
            w.key("manualClose");
            w.bool(*manual_close);
        }
        EventKind::ReturnRejected {
            active_contract_id,
            board_contract_id,
            escrow_released,
        } => {
            w.key("activeContractId");
            w.int(active_contract_id.0);
            w.key("boardContractId");
            w.int(board_contract_id.0);
            w.key("escrowReleased");
            w.int(*escrow_released);
        }
        EventKind::ReturnClosureBlocked {
            active_contract_id,
            policy,
            reason,
        } => {
            w.key("activeContractId");
            w.int(active_contract_id.0);
            w.key("policy");
            w.string(policy.as_str());
            w.key("reason");
            w.string(reason);
        }
        EventKind::StabilityUpdated { previous, current } => {
            w.key("previous");
            w.int(*previous);
            w.key("current");
            w.int(*current);
        }
        EventKind::TaxDue {
            due_day,
            amount_due,
        } => {
            w.key("dueDay");
            w.int(*due_day);
            w.key("amountDue");
            w.int(*amount_due);
        }
        EventKind::TaxPaid {
            amount_paid,
            amount_due_remaining,
            is_partial_payment,
        } => {
            w.key("amountPaid");
            w.int(*amount_paid);
            w.key("amountDueRemaining");
            w.int(*amount_due_remaining);
            w.key("isPartialPayment");
            w.bool(*is_partial_payment);
        }
        EventKind::TaxMissed {
            penalty_added,
            missed_count,
        } => {
            w.key("penaltyAdded");
            w.int(*penalty_added);
            w.key("missedCount");
            w.int(*missed_count);
        }
        EventKind::GuildShutdown { reason } => {
            w.key("reason");
            w.string(reason);
        }
        EventKind::GuildRankUp {
            new_rank,
            contracts_for_next_rank,
        } => {
            w.key("newRank");
            w.int(new_rank.value());
            w.key("contractsForNextRank");
            w.int(*contracts_for_next_rank);
        }
        EventKind::DayEnded { snapshot } => {
            w.key("snapshot");
            write_snapshot(w, snapshot);
        }
        EventKind::ContractDraftCreated {
            draft_id,
            title,
            rank,
            fee,
            salvage,
            difficulty,
        } => {
            w.key("draftId");
            w.int(draft_id.0);
            w.key("title");
            w.string(title);
            w.key("rank");
            w.int(rank.value());
            w.key("fee");
            w.int(*fee);
            w.key("salvage");
            w.string(salvage.as_str());
            w.key("difficulty");
            w.int(*difficulty);
        }
        EventKind::ContractPosted {
            board_contract_id,
            from_inbox_id,
            rank,
            fee,
            salvage,
            client_deposit,
        } => {
            w.key("boardContractId");
            w.int(board_contract_id.0);
            w.key("fromInboxId");
            w.int(from_inbox_id.0);
            w.key("rank");
            w.int(rank.value());
            w.key("fee");
            w.int(*fee);
            w.key("salvage");
            w.string(salvage.as_str());
            w.key("clientDeposit");
            w.int(*client_deposit);
        }
        EventKind::ContractTermsUpdated {
            contract_id,
            location,
            old_fee,
            new_fee,
            old_salvage,
            new_salvage,
        } => {
            w.key("contractId");
            w.int(contract_id.0);
            w.key("location");
            w.string(location);
            w.key("oldFee");
            w.opt_int(*old_fee);
            w.key("newFee");
            w.opt_int(*new_fee);
            w.key("oldSalvage");
            w.opt_string(old_salvage.map(|s| s.as_str()));
            w.key("newSalvage");
            w.opt_string(new_salvage.map(|s| s.as_str()));
        }
        EventKind::ContractCancelled {
            contract_id,
            location,
            refunded_copper,
        } => {
            w.key("contractId");
            w.int(contract_id.0);
            w.key("location");
            w.string(location);
            w.key("refundedCopper");
            w.int(*refunded_copper);
        }
        EventKind::TrophySold {
            amount,
            money_gained,
        } => {
            w.key("amount");
            w.int(*amount);
            w.key("moneyGained");
            w.int(*money_gained);
        }
        EventKind::ProofPolicyChanged {
            old_policy,
            new_policy,
        } => {
            w.key("oldPolicy");
            w.string(old_policy.as_str());
            w.key("newPolicy");
            w.string(new_policy.as_str());
        }
        EventKind::CommandRejected {
            cmd_type,
            reason,
            detail,
        } => {
            w.key("cmdType");
            w.string(cmd_type);
            w.key("reason");
            w.string(reason.as_str());
            w.key("detail");
            w.string(detail);
        }
        EventKind::InvariantViolated {
            invariant_id,
            details,
        } => {
            w.key("invariantId");
            w.string(invariant_id);
            w.key("details");
            w.string(details);
        }
    }
}
