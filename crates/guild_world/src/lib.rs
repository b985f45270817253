//! Deterministic command-sourced simulation core for a guild-management
//! world. One pure transition, `step(state, command, rng)`, drives all
//! mutation; canonical JSON and SHA-256 hashing of state and events make
//! replays byte-comparable.

pub mod balance;
pub mod canonical;
pub mod command;
pub mod event;
pub mod handlers;
pub mod hash;
pub mod ids;
pub mod invariants;
pub mod policies;
pub mod reducer;
pub mod rng;
pub mod state;
pub mod validate;

#[cfg(test)]
mod tests;

pub use canonical::{
    event_to_canonical_json, events_to_canonical_json, state_from_json, state_to_canonical_json,
    SaveError,
};
pub use command::{CloseDecision, Command, CommandEnvelope};
pub use event::{DaySnapshot, Event, EventKind};
pub use hash::{hash_events, hash_state};
pub use ids::{ActiveContractId, CommandId, ContractId, DayIndex, HeroId, Rank};
pub use invariants::{verify, Violation};
pub use reducer::step;
pub use rng::Rng;
pub use state::{initial_state, GameState};
pub use validate::{can_apply, RejectReason, Validation};
