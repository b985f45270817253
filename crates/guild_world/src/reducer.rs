//! The step reducer: the only legal way to mutate world state.

use crate::command::CommandEnvelope;
use crate::event::{Event, EventKind, SeqContext};
use crate::handlers::dispatch;
use crate::invariants::verify;
use crate::rng::Rng;
use crate::state::GameState;
use crate::validate::{can_apply, Validation};

/// Apply one command. Rejections return the state untouched with exactly
/// one `CommandRejected` event; acceptance bumps the revision, runs the
/// handler, verifies invariants, and seals contiguous sequence numbers.
pub fn step(state: GameState, envelope: &CommandEnvelope, rng: &mut Rng) -> (GameState, Vec<Event>) {
    if let Validation::Reject { reason, detail } = can_apply(&state, &envelope.command) {
        let event = Event {
            seq: 1,
            day: state.meta.day_index,
            revision: state.meta.revision,
            cmd_id: envelope.id,
            kind: EventKind::CommandRejected {
                cmd_type: envelope.command.cmd_type(),
                reason,
                detail,
            },
        };
        return (state, vec![event]);
    }

    let mut next = state;
    next.meta.revision += 1;

    let mut ctx = SeqContext::new(next.meta.day_index, next.meta.revision, envelope.id);
    dispatch(&mut next, &envelope.command, rng, &mut ctx);

    let violations = verify(&next);
    let day = ctx.day;
    let revision = ctx.revision;
    let cmd_id = ctx.cmd_id;
    let mut events = ctx.into_events();

    if !violations.is_empty() {
        // Violations stay visible but never displace the terminal DayEnded.
        let insert_at = match events.last() {
            Some(event) if matches!(event.kind, EventKind::DayEnded { .. }) => events.len() - 1,
            _ => events.len(),
        };
        for (offset, violation) in violations.into_iter().enumerate() {
            events.insert(
                insert_at + offset,
                Event {
                    seq: 0,
                    day,
                    revision,
                    cmd_id,
                    kind: EventKind::InvariantViolated {
                        invariant_id: violation.invariant_id,
                        details: violation.detail,
                    },
                },
            );
        }
    }

    for (index, event) in events.iter_mut().enumerate() {
        event.seq = index as i64 + 1;
    }

    (next, events)
}
