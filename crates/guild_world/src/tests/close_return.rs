//! Manual close flow, proof-policy gates, and escrow release.

use super::*;
use crate::command::CloseDecision;
use crate::validate::RejectReason;

#[test]
fn accepting_a_failed_return_releases_escrow_without_paying() {
    let state = return_fixture(
        Outcome::Fail,
        TrophyQuality::Normal,
        false,
        ProofPolicy::Fast,
    );
    let mut rng = Rng::new(3);
    let (state, events) = step(
        state,
        1,
        Command::CloseReturn {
            active_contract_id: ActiveContractId(1),
            decision: CloseDecision::Accept,
        },
        &mut rng,
    );
    assert_no_violations(&events);
    assert_eq!(event_types(&events), vec!["ReturnClosed"]);
    assert_eq!(state.economy.money_copper, 100);
    assert_eq!(state.economy.reserved_copper, 0);
    assert_eq!(state.economy.trophies_stock, 0);
    assert!(state.contracts.returns.is_empty());
    assert_eq!(
        state.find_active(ActiveContractId(1)).map(|a| a.status),
        Some(ActiveStatus::Closed)
    );
    // Board archived as COMPLETED once its only active closed.
    assert!(state.find_board(ContractId(1)).is_none());
    assert_eq!(state.contracts.archive.len(), 1);
    assert_eq!(state.contracts.archive[0].status, BoardStatus::Completed);
    let hero = state.find_hero(HeroId(1)).expect("hero stays");
    assert_eq!(hero.status, HeroStatus::Available);
    assert_eq!(hero.history_completed, 0);
    assert_eq!(state.guild.completed_contracts_total, 0);
    assert_eq!(rng.draws(), 0, "close never consumes RNG");
}

#[test]
fn accepting_a_partial_return_pays_and_counts() {
    let state = return_fixture(
        Outcome::Partial,
        TrophyQuality::Fine,
        false,
        ProofPolicy::Fast,
    );
    let mut rng = Rng::new(3);
    let (state, events) = step(
        state,
        1,
        Command::CloseReturn {
            active_contract_id: ActiveContractId(1),
            decision: CloseDecision::Accept,
        },
        &mut rng,
    );
    assert_no_violations(&events);
    match &events[0].kind {
        EventKind::ReturnClosed {
            fee_paid,
            trophies_to_guild,
            manual_close,
            ..
        } => {
            assert_eq!(*fee_paid, 10);
            assert_eq!(*trophies_to_guild, 1);
            assert!(*manual_close);
        }
        other => panic!("expected ReturnClosed, got {other:?}"),
    }
    assert_eq!(state.economy.money_copper, 90);
    assert_eq!(state.economy.reserved_copper, 0);
    assert_eq!(state.economy.trophies_stock, 1);
    assert_eq!(state.guild.completed_contracts_total, 1);
    let hero = state.find_hero(HeroId(1)).expect("hero stays");
    assert_eq!(hero.history_completed, 1);
}

#[test]
fn strict_policy_blocks_damaged_proof() {
    let state = return_fixture(
        Outcome::Fail,
        TrophyQuality::Damaged,
        false,
        ProofPolicy::Strict,
    );
    let before = state.clone();
    let mut rng = Rng::new(3);
    let (state, events) = step(
        state,
        1,
        Command::CloseReturn {
            active_contract_id: ActiveContractId(1),
            decision: CloseDecision::Accept,
        },
        &mut rng,
    );
    assert_eq!(event_types(&events), vec!["ReturnClosureBlocked"]);
    match &events[0].kind {
        EventKind::ReturnClosureBlocked { policy, reason, .. } => {
            assert_eq!(*policy, ProofPolicy::Strict);
            assert_eq!(reason, "strict_policy_damaged_proof");
        }
        other => panic!("expected ReturnClosureBlocked, got {other:?}"),
    }
    // Nothing but the revision moved.
    let mut expected = before;
    expected.meta.revision += 1;
    assert_eq!(state, expected);
}

#[test]
fn strict_policy_blocks_suspected_theft() {
    let state = return_fixture(
        Outcome::Partial,
        TrophyQuality::Fine,
        true,
        ProofPolicy::Strict,
    );
    let mut rng = Rng::new(3);
    let (_, events) = step(
        state,
        1,
        Command::CloseReturn {
            active_contract_id: ActiveContractId(1),
            decision: CloseDecision::Accept,
        },
        &mut rng,
    );
    match &events[0].kind {
        EventKind::ReturnClosureBlocked { reason, .. } => {
            assert_eq!(reason, "strict_policy_theft_suspected");
        }
        other => panic!("expected ReturnClosureBlocked, got {other:?}"),
    }
}

#[test]
fn strict_policy_requires_an_explicit_decision() {
    let state = return_fixture(
        Outcome::Partial,
        TrophyQuality::Fine,
        false,
        ProofPolicy::Strict,
    );
    let mut rng = Rng::new(3);
    let (_, events) = step(
        state,
        1,
        Command::CloseReturn {
            active_contract_id: ActiveContractId(1),
            decision: CloseDecision::Unspecified,
        },
        &mut rng,
    );
    match &events[0].kind {
        EventKind::CommandRejected { reason, .. } => assert_eq!(*reason, RejectReason::InvalidArg),
        other => panic!("expected CommandRejected, got {other:?}"),
    }
}

#[test]
fn reject_is_terminal_even_under_strict() {
    let state = return_fixture(
        Outcome::Partial,
        TrophyQuality::Damaged,
        true,
        ProofPolicy::Strict,
    );
    let mut rng = Rng::new(3);
    let (state, events) = step(
        state,
        1,
        Command::CloseReturn {
            active_contract_id: ActiveContractId(1),
            decision: CloseDecision::Reject,
        },
        &mut rng,
    );
    assert_no_violations(&events);
    match &events[0].kind {
        EventKind::ReturnRejected {
            escrow_released, ..
        } => assert_eq!(*escrow_released, 10),
        other => panic!("expected ReturnRejected, got {other:?}"),
    }
    assert_eq!(state.economy.money_copper, 100);
    assert_eq!(state.economy.reserved_copper, 0);
    assert_eq!(state.economy.trophies_stock, 0);
    assert!(state.contracts.returns.is_empty());
    let hero = state.find_hero(HeroId(1)).expect("hero stays");
    assert_eq!(hero.status, HeroStatus::Available);
    assert_eq!(hero.history_completed, 0);
    assert_eq!(state.guild.completed_contracts_total, 0);
}

#[test]
fn unspecified_under_fast_means_accept() {
    let state = return_fixture(
        Outcome::Partial,
        TrophyQuality::Fine,
        false,
        ProofPolicy::Fast,
    );
    let mut rng = Rng::new(3);
    let (state, events) = step(
        state,
        1,
        Command::CloseReturn {
            active_contract_id: ActiveContractId(1),
            decision: CloseDecision::Unspecified,
        },
        &mut rng,
    );
    assert_no_violations(&events);
    assert_eq!(event_types(&events), vec!["ReturnClosed"]);
    assert_eq!(state.economy.money_copper, 90);
}

#[test]
fn missing_return_is_not_found() {
    let state = initial_state(1);
    let mut rng = Rng::new(3);
    let (_, events) = step(
        state,
        1,
        Command::CloseReturn {
            active_contract_id: ActiveContractId(99),
            decision: CloseDecision::Accept,
        },
        &mut rng,
    );
    match &events[0].kind {
        EventKind::CommandRejected { reason, .. } => assert_eq!(*reason, RejectReason::NotFound),
        other => panic!("expected CommandRejected, got {other:?}"),
    }
}
