//! Work-in-progress day countdown.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WipAdvance {
    pub days_remaining: i64,
    pub matured: bool,
}

/// Decrement a WIP contract by one day; at zero it is ready to resolve.
pub fn advance_wip(days_remaining: i64) -> WipAdvance {
    let next = (days_remaining - 1).max(0);
    WipAdvance {
        days_remaining: next,
        matured: next == 0,
    }
}
