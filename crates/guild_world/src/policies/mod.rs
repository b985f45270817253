//! Pipeline policies: pure decision functions with explicit inputs.
//!
//! Policies never see the whole state, never emit events, and never
//! mutate anything. The ones that consume RNG document their exact draw
//! count; a grep over this directory enumerates every draw in the engine.

mod auto_resolve;
mod guild_rank;
mod outcome;
mod pickup;
mod pricing;
mod proof;
mod settlement;
mod stability;
mod tax;
mod theft;
mod wip;

pub use auto_resolve::{draw_bucket, AutoResolveBucket};
pub use guild_rank::{record_successful_close, RankProgress};
pub use outcome::{resolve_outcome, OutcomeDecision};
pub use pickup::{attractiveness, choose_contract, PickupChoice};
pub use pricing::{sample_client_deposit_copper, sample_payout_copper};
pub use proof::{can_close, CloseGate};
pub use settlement::{
    compute_cancel_contract_delta, compute_close_delta, compute_post_contract_delta,
    trophies_to_guild, EconomyDelta,
};
pub use stability::{clamp_stability, day_stability_delta};
pub use tax::{compute_payment, evaluate_end_of_day, TaxEvaluation, TaxPayment};
pub use theft::{assess_theft, TheftDecision};
pub use wip::{advance_wip, WipAdvance};
