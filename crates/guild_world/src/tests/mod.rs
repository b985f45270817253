//! Engine test suite: reducer flows, canonical forms, replay laws.

mod canonical;
mod close_return;
mod reducer;
mod scenarios;

pub(crate) use crate::command::{Command, CommandEnvelope};
pub(crate) use crate::event::{Event, EventKind};
pub(crate) use crate::ids::{ActiveContractId, ContractId, HeroId, Rank};
pub(crate) use crate::rng::Rng;
pub(crate) use crate::state::{
    initial_state, ActiveContract, ActiveStatus, BoardContract, BoardStatus, GameState, Hero,
    HeroClass, HeroStatus, HeroTraits, Outcome, ProofPolicy, ReturnPacket, SalvagePolicy,
    TrophyQuality,
};

pub(crate) fn envelope(id: i64, command: Command) -> CommandEnvelope {
    CommandEnvelope::new(id, command)
}

pub(crate) fn step(
    state: GameState,
    id: i64,
    command: Command,
    rng: &mut Rng,
) -> (GameState, Vec<Event>) {
    crate::reducer::step(state, &envelope(id, command), rng)
}

pub(crate) fn advance_days(
    state: GameState,
    rng: &mut Rng,
    days: usize,
    first_cmd_id: i64,
) -> (GameState, Vec<Event>) {
    let mut state = state;
    let mut events = Vec::new();
    for i in 0..days {
        let (next, batch) = step(state, first_cmd_id + i as i64, Command::AdvanceDay, rng);
        state = next;
        events.extend(batch);
    }
    (state, events)
}

pub(crate) fn event_types(events: &[Event]) -> Vec<&'static str> {
    events.iter().map(|event| event.kind.type_name()).collect()
}

pub(crate) fn count_type(events: &[Event], name: &str) -> usize {
    events
        .iter()
        .filter(|event| event.kind.type_name() == name)
        .count()
}

pub(crate) fn assert_no_violations(events: &[Event]) {
    for event in events {
        if let EventKind::InvariantViolated {
            invariant_id,
            details,
        } = &event.kind
        {
            panic!("invariant violated: {invariant_id}: {details}");
        }
    }
}

pub(crate) fn assert_contiguous_seq(events: &[Event]) {
    for (index, event) in events.iter().enumerate() {
        assert_eq!(event.seq, index as i64 + 1, "seq gap at {index}");
    }
}

/// A world holding exactly one resolved return awaiting player close.
/// Board fee 10, no client deposit, escrow 10 reserved out of 100 copper.
pub(crate) fn return_fixture(
    outcome: Outcome,
    quality: TrophyQuality,
    suspected_theft: bool,
    policy: ProofPolicy,
) -> GameState {
    let mut state = initial_state(7);
    state.meta.ids.next_contract_id = 10;
    state.meta.ids.next_hero_id = 10;
    state.meta.ids.next_active_contract_id = 10;
    state.economy.money_copper = 100;
    state.economy.reserved_copper = 10;
    state.guild.proof_policy = policy;

    state.contracts.board.push(BoardContract {
        id: ContractId(1),
        posted_day: 0,
        title: "Wolf cull".to_string(),
        rank: Rank::F,
        fee: 10,
        salvage: SalvagePolicy::Guild,
        base_difficulty: 30,
        status: BoardStatus::Locked,
        client_deposit: 0,
    });
    state.heroes.roster.push(Hero {
        id: HeroId(1),
        name: "Kestrel".to_string(),
        rank: Rank::F,
        class: HeroClass::Ranger,
        traits: HeroTraits {
            greed: 40,
            honesty: 60,
            courage: 70,
        },
        status: HeroStatus::OnMission,
        history_completed: 0,
    });
    state.contracts.active.push(ActiveContract {
        id: ActiveContractId(1),
        board_contract_id: ContractId(1),
        taken_day: 0,
        days_remaining: 0,
        hero_ids: vec![HeroId(1)],
        status: ActiveStatus::ReturnReady,
    });
    state.contracts.returns.push(ReturnPacket {
        active_contract_id: ActiveContractId(1),
        board_contract_id: ContractId(1),
        hero_ids: vec![HeroId(1)],
        resolved_day: 0,
        outcome,
        trophies_count: if outcome == Outcome::Partial { 1 } else { 0 },
        trophies_quality: quality,
        reason_tags: vec!["partial_objectives".to_string()],
        requires_player_close: true,
        suspected_theft,
    });

    assert!(
        crate::invariants::verify(&state).is_empty(),
        "fixture must satisfy invariants"
    );
    state
}
