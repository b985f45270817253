//! World state aggregate and its sub-states.
//!
//! `GameState` is a plain value: the reducer clones it, mutates the clone,
//! and returns it whole. Collections are ordered sequences by ascending id;
//! the canonical serializer never emits maps.

mod contracts;
mod economy;
mod game_state;
mod guild;
mod heroes;
mod meta;

pub use contracts::{
    ActiveContract, ActiveStatus, BoardContract, BoardStatus, ContractDraft, Contracts, Outcome,
    ProofHint, ReturnPacket, SalvagePolicy, TrophyQuality,
};
pub use economy::Economy;
pub use game_state::{initial_state, GameState};
pub use guild::{Guild, ProofPolicy, Region};
pub use heroes::{Hero, HeroClass, HeroStatus, HeroTraits, Heroes};
pub use meta::{IdCounters, Meta};

/// Insert into an id-ordered sequence, keeping ascending key order.
pub(crate) fn insert_by_key<T, K: Ord>(items: &mut Vec<T>, item: T, key: impl Fn(&T) -> K) {
    let item_key = key(&item);
    let pos = items.partition_point(|existing| key(existing) <= item_key);
    items.insert(pos, item);
}
