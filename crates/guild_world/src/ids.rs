//! Value-typed identifiers and the guild rank scale.

use serde::Deserialize;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// Caller-assigned command identifier, echoed on every event of a step.
pub type CommandId = i64;

/// Day counter, starting at 0 for a fresh world.
pub type DayIndex = i64;

// ============================================================================
// Identifiers
// ============================================================================

/// Contract identifier, shared by drafts, board items, and archive entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub struct ContractId(pub i64);

/// Hero identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub struct HeroId(pub i64);

/// Active (taken) contract identifier, distinct from the board contract id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub struct ActiveContractId(pub i64);

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ActiveContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Rank
// ============================================================================

/// Guild and contract rank on the F..S scale, stored as 1..=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub struct Rank(pub i64);

impl Rank {
    pub const F: Rank = Rank(1);
    pub const E: Rank = Rank(2);
    pub const D: Rank = Rank(3);
    pub const C: Rank = Rank(4);
    pub const B: Rank = Rank(5);
    pub const A: Rank = Rank(6);
    pub const S: Rank = Rank(7);

    pub const MIN_VALUE: i64 = 1;
    pub const MAX_VALUE: i64 = 7;

    pub fn value(self) -> i64 {
        self.0
    }

    pub fn is_valid_value(value: i64) -> bool {
        (Rank::MIN_VALUE..=Rank::MAX_VALUE).contains(&value)
    }

    pub fn is_max(self) -> bool {
        self.0 >= Rank::MAX_VALUE
    }

    pub fn next(self) -> Rank {
        if self.is_max() {
            self
        } else {
            Rank(self.0 + 1)
        }
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "F",
            2 => "E",
            3 => "D",
            4 => "C",
            5 => "B",
            6 => "A",
            _ => "S",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
