//! Step contract: rejection semantics, revisions, sequence numbers.

use super::*;
use crate::validate::{can_apply, RejectReason, Validation};

#[test]
fn rejected_command_changes_nothing() {
    let state = initial_state(42);
    let before = state.clone();
    let mut rng = Rng::new(100);

    let (after, events) = step(
        state,
        9,
        Command::PayTax { amount: 1_000 },
        &mut rng,
    );

    assert_eq!(after, before);
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.seq, 1);
    assert_eq!(event.revision, 0);
    assert_eq!(event.cmd_id, 9);
    match &event.kind {
        EventKind::CommandRejected {
            cmd_type, reason, ..
        } => {
            assert_eq!(*cmd_type, "PAY_TAX");
            assert_eq!(*reason, RejectReason::InvalidState);
        }
        other => panic!("expected CommandRejected, got {other:?}"),
    }
    assert_eq!(rng.draws(), 0, "rejection must not consume RNG");
}

#[test]
fn validation_is_idempotent_and_pure() {
    let state = initial_state(42);
    let before = state.clone();
    let command = Command::SellTrophies { amount: 5 };
    let first = can_apply(&state, &command);
    let second = can_apply(&state, &command);
    assert_eq!(first, second);
    assert!(matches!(first, Validation::Reject { .. }));
    assert_eq!(state, before);
}

#[test]
fn accepted_command_bumps_revision_once() {
    let mut rng = Rng::new(100);
    let (state, events) = step(initial_state(42), 1, Command::AdvanceDay, &mut rng);
    assert_eq!(state.meta.revision, 1);
    assert!(events.iter().all(|e| e.revision == 1));

    let (state, events) = step(state, 2, Command::AdvanceDay, &mut rng);
    assert_eq!(state.meta.revision, 2);
    assert!(events.iter().all(|e| e.revision == 2));
}

#[test]
fn sequence_numbers_restart_each_step() {
    let mut rng = Rng::new(100);
    let (state, events) = step(initial_state(42), 1, Command::AdvanceDay, &mut rng);
    assert_contiguous_seq(&events);
    let (_, events) = step(state, 2, Command::AdvanceDay, &mut rng);
    assert_contiguous_seq(&events);
    assert_eq!(events[0].seq, 1);
}

#[test]
fn noop_proof_policy_change_emits_nothing() {
    let mut rng = Rng::new(100);
    let (state, events) = step(
        initial_state(42),
        1,
        Command::SetProofPolicy {
            policy: ProofPolicy::Fast,
        },
        &mut rng,
    );
    assert!(events.is_empty());
    assert_eq!(state.meta.revision, 1);

    let (state, events) = step(
        state,
        2,
        Command::SetProofPolicy {
            policy: ProofPolicy::Strict,
        },
        &mut rng,
    );
    assert_eq!(event_types(&events), vec!["ProofPolicyChanged"]);
    assert_eq!(state.guild.proof_policy, ProofPolicy::Strict);
}

#[test]
fn events_echo_the_command_id() {
    let mut rng = Rng::new(100);
    let (_, events) = step(initial_state(42), 77, Command::AdvanceDay, &mut rng);
    assert!(events.iter().all(|event| event.cmd_id == 77));
}
