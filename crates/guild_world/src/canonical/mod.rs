//! Canonical JSON: the byte-exact interchange form for state and events.
//!
//! Canonical means byte-identical for equivalent values across runs and
//! implementations. Both serializers are the hash inputs; the state form
//! is also the save format.

mod event_codec;
mod state_codec;
mod writer;

pub use event_codec::{event_to_canonical_json, events_to_canonical_json};
pub use state_codec::{state_from_json, state_to_canonical_json};
pub use writer::JsonWriter;

/// Load failures at the serialization boundary. The only errors the core
/// raises out-of-band; everything else is an in-band event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    UnsupportedSaveVersion { found: i64, expected: i64 },
    Malformed(String),
}

impl From<serde_json::Error> for SaveError {
    fn from(error: serde_json::Error) -> Self {
        SaveError::Malformed(error.to_string())
    }
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::UnsupportedSaveVersion { found, expected } => {
                write!(f, "unsupported save version {found}, expected {expected}")
            }
            SaveError::Malformed(message) => write!(f, "malformed save: {message}"),
        }
    }
}

impl std::error::Error for SaveError {}
