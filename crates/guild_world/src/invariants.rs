//! Post-mutation invariant verification.
//!
//! A violation means the reducer is buggy, never that the caller misused
//! the API. The verifier is pure, never panics, and its detail strings are
//! deterministic so replays reproduce diagnostics exactly.

use crate::state::{ActiveStatus, BoardStatus, GameState, HeroStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub invariant_id: &'static str,
    pub detail: String,
}

fn violation(list: &mut Vec<Violation>, invariant_id: &'static str, detail: String) {
    list.push(Violation {
        invariant_id,
        detail,
    });
}

pub fn verify(state: &GameState) -> Vec<Violation> {
    let mut out = Vec::new();

    check_id_counters(state, &mut out);
    check_collection_order(state, &mut out);
    check_board_locks(state, &mut out);
    check_returns(state, &mut out);
    check_actives(state, &mut out);
    check_heroes(state, &mut out);
    check_economy(state, &mut out);
    check_region_and_guild(state, &mut out);

    out
}

fn check_id_counters(state: &GameState, out: &mut Vec<Violation>) {
    let ids = &state.meta.ids;
    let max_contract = state
        .contracts
        .inbox
        .iter()
        .map(|d| d.id.0)
        .chain(state.contracts.board.iter().map(|b| b.id.0))
        .chain(state.contracts.archive.iter().map(|b| b.id.0))
        .max()
        .unwrap_or(0);
    if ids.next_contract_id <= max_contract {
        violation(
            out,
            "contract_ids_monotone",
            format!(
                "nextContractId {} not above max contract id {max_contract}",
                ids.next_contract_id
            ),
        );
    }
    let max_hero = state.heroes.roster.iter().map(|h| h.id.0).max().unwrap_or(0);
    if ids.next_hero_id <= max_hero {
        violation(
            out,
            "hero_ids_monotone",
            format!(
                "nextHeroId {} not above max hero id {max_hero}",
                ids.next_hero_id
            ),
        );
    }
    let max_active = state
        .contracts
        .active
        .iter()
        .map(|a| a.id.0)
        .max()
        .unwrap_or(0);
    if ids.next_active_contract_id <= max_active {
        violation(
            out,
            "active_ids_monotone",
            format!(
                "nextActiveContractId {} not above max active id {max_active}",
                ids.next_active_contract_id
            ),
        );
    }
}

fn check_collection_order(state: &GameState, out: &mut Vec<Violation>) {
    fn sorted<I: Iterator<Item = i64>>(ids: I) -> bool {
        let mut previous: Option<i64> = None;
        for id in ids {
            if let Some(prev) = previous {
                if id <= prev {
                    return false;
                }
            }
            previous = Some(id);
        }
        true
    }

    let checks: [(&str, bool); 6] = [
        ("inbox", sorted(state.contracts.inbox.iter().map(|d| d.id.0))),
        ("board", sorted(state.contracts.board.iter().map(|b| b.id.0))),
        (
            "active",
            sorted(state.contracts.active.iter().map(|a| a.id.0)),
        ),
        (
            "returns",
            sorted(
                state
                    .contracts
                    .returns
                    .iter()
                    .map(|r| r.active_contract_id.0),
            ),
        ),
        (
            "archive",
            sorted(state.contracts.archive.iter().map(|b| b.id.0)),
        ),
        ("roster", sorted(state.heroes.roster.iter().map(|h| h.id.0))),
    ];
    for (name, ok) in checks {
        if !ok {
            violation(
                out,
                "collections_ascending",
                format!("{name} is not strictly ascending by id"),
            );
        }
    }
}

fn check_board_locks(state: &GameState, out: &mut Vec<Violation>) {
    for item in &state.contracts.board {
        if item.status != BoardStatus::Locked {
            continue;
        }
        let open_actives = state
            .contracts
            .active
            .iter()
            .filter(|a| a.board_contract_id == item.id && a.status != ActiveStatus::Closed)
            .count();
        if open_actives == 0 {
            violation(
                out,
                "locked_board_has_active",
                format!("locked board contract {} has no open active", item.id),
            );
        }
    }
}

fn check_returns(state: &GameState, out: &mut Vec<Violation>) {
    for packet in &state.contracts.returns {
        if state.find_active(packet.active_contract_id).is_none() {
            violation(
                out,
                "return_references_active",
                format!(
                    "return references missing active {}",
                    packet.active_contract_id
                ),
            );
        }
    }

    for active in &state.contracts.active {
        if active.status != ActiveStatus::ReturnReady {
            continue;
        }
        let packets = state
            .contracts
            .returns
            .iter()
            .filter(|r| r.active_contract_id == active.id)
            .count();
        if packets != 1 {
            violation(
                out,
                "return_ready_has_packet",
                format!(
                    "active {} is RETURN_READY with {packets} return packets",
                    active.id
                ),
            );
        }
        for hero_id in &active.hero_ids {
            match state.find_hero(*hero_id) {
                Some(hero) if hero.status == HeroStatus::OnMission => {}
                Some(hero) => violation(
                    out,
                    "return_ready_hero_on_mission",
                    format!(
                        "hero {} on RETURN_READY active {} is {}",
                        hero_id,
                        active.id,
                        hero.status.as_str()
                    ),
                ),
                None => violation(
                    out,
                    "return_ready_hero_on_mission",
                    format!("hero {} on RETURN_READY active {} is missing", hero_id, active.id),
                ),
            }
        }
    }
}

fn check_actives(state: &GameState, out: &mut Vec<Violation>) {
    for active in &state.contracts.active {
        if active.days_remaining < 0 {
            violation(
                out,
                "active_days_non_negative",
                format!(
                    "active {} has daysRemaining {}",
                    active.id, active.days_remaining
                ),
            );
        }
        if active.status == ActiveStatus::Wip && !(1..=2).contains(&active.days_remaining) {
            violation(
                out,
                "wip_days_in_range",
                format!(
                    "WIP active {} has daysRemaining {}",
                    active.id, active.days_remaining
                ),
            );
        }
    }
}

fn check_heroes(state: &GameState, out: &mut Vec<Violation>) {
    for hero in &state.heroes.roster {
        if hero.status != HeroStatus::OnMission {
            continue;
        }
        let assignments = state
            .contracts
            .active
            .iter()
            .filter(|a| a.status != ActiveStatus::Closed && a.hero_ids.contains(&hero.id))
            .count();
        if assignments != 1 {
            violation(
                out,
                "on_mission_hero_assignment",
                format!(
                    "hero {} is ON_MISSION with {assignments} open actives",
                    hero.id
                ),
            );
        }
    }
}

fn check_economy(state: &GameState, out: &mut Vec<Violation>) {
    let economy = &state.economy;
    if economy.money_copper < 0 || economy.reserved_copper < 0 || economy.trophies_stock < 0 {
        violation(
            out,
            "economy_non_negative",
            format!(
                "money {} reserved {} trophies {}",
                economy.money_copper, economy.reserved_copper, economy.trophies_stock
            ),
        );
    }
    if economy.money_copper < economy.reserved_copper {
        violation(
            out,
            "reserved_within_money",
            format!(
                "reserved {} exceeds money {}",
                economy.reserved_copper, economy.money_copper
            ),
        );
    }
}

fn check_region_and_guild(state: &GameState, out: &mut Vec<Violation>) {
    if !(0..=100).contains(&state.region.stability) {
        violation(
            out,
            "stability_range",
            format!("stability {} out of 0..100", state.region.stability),
        );
    }
    if !(0..=100).contains(&state.guild.reputation) {
        violation(
            out,
            "reputation_range",
            format!("reputation {} out of 0..100", state.guild.reputation),
        );
    }
}
