//! Canonical state serialization and versioned load.
//!
//! The writer side is hand-rolled and is the single source of truth for
//! field order. Loading parses with serde (field order is irrelevant on
//! read) and then validates `saveVersion`. `arrivalsToday` is transient:
//! elided on save, restored empty on load.

use serde_json::Value;

use crate::balance::SAVE_VERSION;
use crate::state::{
    ActiveContract, BoardContract, ContractDraft, GameState, Hero, ReturnPacket,
};

use super::writer::JsonWriter;
use super::SaveError;

// ============================================================================
// Serialize
// ============================================================================

pub fn state_to_canonical_json(state: &GameState) -> String {
    let mut w = JsonWriter::new();
    w.begin_object();

    w.key("meta");
    write_meta(&mut w, state);

    w.key("guild");
    w.begin_object();
    w.key("guildRank");
    w.int(state.guild.guild_rank.value());
    w.key("reputation");
    w.int(state.guild.reputation);
    w.key("completedContractsTotal");
    w.int(state.guild.completed_contracts_total);
    w.key("contractsForNextRank");
    w.int(state.guild.contracts_for_next_rank);
    w.key("proofPolicy");
    w.string(state.guild.proof_policy.as_str());
    w.end_object();

    w.key("region");
    w.begin_object();
    w.key("stability");
    w.int(state.region.stability);
    w.end_object();

    w.key("economy");
    w.begin_object();
    w.key("moneyCopper");
    w.int(state.economy.money_copper);
    w.key("reservedCopper");
    w.int(state.economy.reserved_copper);
    w.key("trophiesStock");
    w.int(state.economy.trophies_stock);
    w.end_object();

    w.key("contracts");
    w.begin_object();
    w.key("inbox");
    w.begin_array();
    for draft in &state.contracts.inbox {
        write_draft(&mut w, draft);
    }
    w.end_array();
    w.key("board");
    w.begin_array();
    for item in &state.contracts.board {
        write_board_contract(&mut w, item);
    }
    w.end_array();
    w.key("active");
    w.begin_array();
    for active in &state.contracts.active {
        write_active(&mut w, active);
    }
    w.end_array();
    w.key("returns");
    w.begin_array();
    for packet in &state.contracts.returns {
        write_return(&mut w, packet);
    }
    w.end_array();
    w.key("archive");
    w.begin_array();
    for item in &state.contracts.archive {
        write_board_contract(&mut w, item);
    }
    w.end_array();
    w.end_object();

    w.key("heroes");
    w.begin_object();
    w.key("roster");
    w.begin_array();
    for hero in &state.heroes.roster {
        write_hero(&mut w, hero);
    }
    w.end_array();
    w.end_object();

    w.end_object();
    w.finish()
}

fn write_meta(w: &mut JsonWriter, state: &GameState) {
    let meta = &state.meta;
    w.begin_object();
    w.key("saveVersion");
    w.int(meta.save_version);
    w.key("seed");
    w.uint(meta.seed as u64);
    w.key("dayIndex");
    w.int(meta.day_index);
    w.key("revision");
    w.int(meta.revision);
    w.key("ids");
    w.begin_object();
    w.key("nextContractId");
    w.int(meta.ids.next_contract_id);
    w.key("nextHeroId");
    w.int(meta.ids.next_hero_id);
    w.key("nextActiveContractId");
    w.int(meta.ids.next_active_contract_id);
    w.end_object();
    w.key("taxDueDay");
    w.int(meta.tax_due_day);
    w.key("taxAmountDue");
    w.int(meta.tax_amount_due);
    w.key("taxPenalty");
    w.int(meta.tax_penalty);
    w.key("taxMissedCount");
    w.int(meta.tax_missed_count);
    w.end_object();
}

fn write_draft(w: &mut JsonWriter, draft: &ContractDraft) {
    w.begin_object();
    w.key("id");
    w.int(draft.id.0);
    w.key("createdDay");
    w.int(draft.created_day);
    w.key("nextAutoResolveDay");
    w.int(draft.next_auto_resolve_day);
    w.key("title");
    w.string(&draft.title);
    w.key("rankSuggested");
    w.int(draft.rank_suggested.value());
    w.key("feeOffered");
    w.int(draft.fee_offered);
    w.key("salvage");
    w.string(draft.salvage.as_str());
    w.key("baseDifficulty");
    w.int(draft.base_difficulty);
    w.key("proofHint");
    w.string(draft.proof_hint.as_str());
    w.key("clientDeposit");
    w.int(draft.client_deposit);
    w.end_object();
}

fn write_board_contract(w: &mut JsonWriter, item: &BoardContract) {
    w.begin_object();
    w.key("id");
    w.int(item.id.0);
    w.key("postedDay");
    w.int(item.posted_day);
    w.key("title");
    w.string(&item.title);
    w.key("rank");
    w.int(item.rank.value());
    w.key("fee");
    w.int(item.fee);
    w.key("salvage");
    w.string(item.salvage.as_str());
    w.key("baseDifficulty");
    w.int(item.base_difficulty);
    w.key("status");
    w.string(item.status.as_str());
    w.key("clientDeposit");
    w.int(item.client_deposit);
    w.end_object();
}

fn write_active(w: &mut JsonWriter, active: &ActiveContract) {
    w.begin_object();
    w.key("id");
    w.int(active.id.0);
    w.key("boardContractId");
    w.int(active.board_contract_id.0);
    w.key("takenDay");
    w.int(active.taken_day);
    w.key("daysRemaining");
    w.int(active.days_remaining);
    w.key("heroIds");
    w.int_array(active.hero_ids.iter().map(|h| h.0));
    w.key("status");
    w.string(active.status.as_str());
    w.end_object();
}

fn write_return(w: &mut JsonWriter, packet: &ReturnPacket) {
    w.begin_object();
    w.key("activeContractId");
    w.int(packet.active_contract_id.0);
    w.key("boardContractId");
    w.int(packet.board_contract_id.0);
    w.key("heroIds");
    w.int_array(packet.hero_ids.iter().map(|h| h.0));
    w.key("resolvedDay");
    w.int(packet.resolved_day);
    w.key("outcome");
    w.string(packet.outcome.as_str());
    w.key("trophiesCount");
    w.int(packet.trophies_count);
    w.key("trophiesQuality");
    w.string(packet.trophies_quality.as_str());
    w.key("reasonTags");
    w.string_array(packet.reason_tags.iter().map(|tag| tag.as_str()));
    w.key("requiresPlayerClose");
    w.bool(packet.requires_player_close);
    w.key("suspectedTheft");
    w.bool(packet.suspected_theft);
    w.end_object();
}

fn write_hero(w: &mut JsonWriter, hero: &Hero) {
    w.begin_object();
    w.key("id");
    w.int(hero.id.0);
    w.key("name");
    w.string(&hero.name);
    w.key("rank");
    w.int(hero.rank.value());
    w.key("class");
    w.string(hero.class.as_str());
    w.key("traits");
    w.begin_object();
    w.key("greed");
    w.int(hero.traits.greed);
    w.key("honesty");
    w.int(hero.traits.honesty);
    w.key("courage");
    w.int(hero.traits.courage);
    w.end_object();
    w.key("status");
    w.string(hero.status.as_str());
    w.key("historyCompleted");
    w.int(hero.history_completed);
    w.end_object();
}

// ============================================================================
// Deserialize
// ============================================================================

pub fn state_from_json(input: &str) -> Result<GameState, SaveError> {
    let value: Value = serde_json::from_str(input)?;

    // Version gate first: a save from another version must fail with the
    // version error even when its structure no longer parses.
    let found = value
        .get("meta")
        .and_then(|meta| meta.get("saveVersion"))
        .and_then(Value::as_i64)
        .ok_or_else(|| SaveError::Malformed("missing meta.saveVersion".to_string()))?;
    if found != SAVE_VERSION {
        return Err(SaveError::UnsupportedSaveVersion {
            found,
            expected: SAVE_VERSION,
        });
    }

    Ok(serde_json::from_value(value)?)
}
