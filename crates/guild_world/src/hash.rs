//! SHA-256 over canonical bytes.

use sha2::{Digest, Sha256};

use crate::canonical::{events_to_canonical_json, state_to_canonical_json};
use crate::event::Event;
use crate::state::GameState;

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// 64-char lowercase hex digest of the canonical state JSON.
pub fn hash_state(state: &GameState) -> String {
    sha256_hex(state_to_canonical_json(state).as_bytes())
}

/// 64-char lowercase hex digest of the canonical event array. Order
/// sensitive: swapping two events changes the digest.
pub fn hash_events(events: &[Event]) -> String {
    sha256_hex(events_to_canonical_json(events).as_bytes())
}
