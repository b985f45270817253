//! Auto-resolve bucket for drafts the player left unposted.

use crate::rng::Rng;

/// What happened to a stale draft off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoResolveBucket {
    /// Someone else handled it; the draft disappears quietly.
    Good,
    /// Still waiting; rescheduled a couple of days out.
    Neutral,
    /// Went badly for the region; the draft disappears and stability drops.
    Bad,
}

impl AutoResolveBucket {
    pub fn as_str(self) -> &'static str {
        match self {
            AutoResolveBucket::Good => "GOOD",
            AutoResolveBucket::Neutral => "NEUTRAL",
            AutoResolveBucket::Bad => "BAD",
        }
    }
}

/// One draw per due draft.
pub fn draw_bucket(rng: &mut Rng) -> AutoResolveBucket {
    match rng.next_int(3) {
        0 => AutoResolveBucket::Good,
        1 => AutoResolveBucket::Neutral,
        _ => AutoResolveBucket::Bad,
    }
}
