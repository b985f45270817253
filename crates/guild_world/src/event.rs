//! Domain event catalog and the per-step sequencing context.
//!
//! Every state mutation is observable through exactly one of these events.
//! Handlers emit through `SeqContext` with `seq = 0`; the reducer assigns
//! final contiguous sequence numbers after the invariant pass.

use crate::ids::{ActiveContractId, CommandId, ContractId, DayIndex, HeroId, Rank};
use crate::policies::AutoResolveBucket;
use crate::state::{Outcome, ProofPolicy, SalvagePolicy, TrophyQuality};

/// One emitted event: step-scoped ordinal plus the common envelope fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub seq: i64,
    pub day: DayIndex,
    pub revision: i64,
    pub cmd_id: CommandId,
    pub kind: EventKind,
}

/// End-of-day digest carried by `DayEnded`.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySnapshot {
    pub day: DayIndex,
    pub revision: i64,
    pub money_copper: i64,
    pub trophies_stock: i64,
    pub stability: i64,
    pub reputation: i64,
    pub inbox_count: i64,
    pub board_count: i64,
    pub active_wip_count: i64,
    pub returns_awaiting_close: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    // Day lifecycle
    DayStarted {
        day_index: DayIndex,
    },
    InboxGenerated {
        count: i64,
        contract_ids: Vec<ContractId>,
    },
    HeroesArrived {
        count: i64,
        hero_ids: Vec<HeroId>,
    },
    ContractAutoResolved {
        draft_id: ContractId,
        bucket: AutoResolveBucket,
    },
    HeroDeclined {
        hero_id: HeroId,
        reason: String,
    },
    ContractTaken {
        active_contract_id: ActiveContractId,
        board_contract_id: ContractId,
        hero_id: HeroId,
        days_remaining: i64,
    },
    WipAdvanced {
        active_contract_id: ActiveContractId,
        days_remaining: i64,
    },
    TrophyTheftSuspected {
        active_contract_id: ActiveContractId,
        hero_id: HeroId,
        stolen_count: i64,
        reported_count: i64,
    },
    ContractResolved {
        active_contract_id: ActiveContractId,
        board_contract_id: ContractId,
        outcome: Outcome,
        trophies_count: i64,
        trophies_quality: TrophyQuality,
    },
    HeroDied {
        hero_id: HeroId,
        outcome: Outcome,
    },
    ReturnClosed {
        active_contract_id: ActiveContractId,
        board_contract_id: ContractId,
        outcome: Outcome,
        fee_paid: i64,
        trophies_to_guild: i64,
        manual_close: bool,
    },
    ReturnRejected {
        active_contract_id: ActiveContractId,
        board_contract_id: ContractId,
        escrow_released: i64,
    },
    ReturnClosureBlocked {
        active_contract_id: ActiveContractId,
        policy: ProofPolicy,
        reason: String,
    },
    StabilityUpdated {
        previous: i64,
        current: i64,
    },
    TaxDue {
        due_day: DayIndex,
        amount_due: i64,
    },
    TaxPaid {
        amount_paid: i64,
        amount_due_remaining: i64,
        is_partial_payment: bool,
    },
    TaxMissed {
        penalty_added: i64,
        missed_count: i64,
    },
    GuildShutdown {
        reason: String,
    },
    GuildRankUp {
        new_rank: Rank,
        contracts_for_next_rank: i64,
    },
    DayEnded {
        snapshot: DaySnapshot,
    },
    // Authoring
    ContractDraftCreated {
        draft_id: ContractId,
        title: String,
        rank: Rank,
        fee: i64,
        salvage: SalvagePolicy,
        difficulty: i64,
    },
    ContractPosted {
        board_contract_id: ContractId,
        from_inbox_id: ContractId,
        rank: Rank,
        fee: i64,
        salvage: SalvagePolicy,
        client_deposit: i64,
    },
    ContractTermsUpdated {
        contract_id: ContractId,
        location: &'static str,
        old_fee: Option<i64>,
        new_fee: Option<i64>,
        old_salvage: Option<SalvagePolicy>,
        new_salvage: Option<SalvagePolicy>,
    },
    ContractCancelled {
        contract_id: ContractId,
        location: &'static str,
        refunded_copper: i64,
    },
    TrophySold {
        amount: i64,
        money_gained: i64,
    },
    ProofPolicyChanged {
        old_policy: ProofPolicy,
        new_policy: ProofPolicy,
    },
    // Diagnostics
    CommandRejected {
        cmd_type: &'static str,
        reason: crate::validate::RejectReason,
        detail: String,
    },
    InvariantViolated {
        invariant_id: &'static str,
        details: String,
    },
}

impl EventKind {
    /// The canonical discriminator string.
    pub fn type_name(&self) -> &'static str {
        match self {
            EventKind::DayStarted { .. } => "DayStarted",
            EventKind::InboxGenerated { .. } => "InboxGenerated",
            EventKind::HeroesArrived { .. } => "HeroesArrived",
            EventKind::ContractAutoResolved { .. } => "ContractAutoResolved",
            EventKind::HeroDeclined { .. } => "HeroDeclined",
            EventKind::ContractTaken { .. } => "ContractTaken",
            EventKind::WipAdvanced { .. } => "WipAdvanced",
            EventKind::TrophyTheftSuspected { .. } => "TrophyTheftSuspected",
            EventKind::ContractResolved { .. } => "ContractResolved",
            EventKind::HeroDied { .. } => "HeroDied",
            EventKind::ReturnClosed { .. } => "ReturnClosed",
            EventKind::ReturnRejected { .. } => "ReturnRejected",
            EventKind::ReturnClosureBlocked { .. } => "ReturnClosureBlocked",
            EventKind::StabilityUpdated { .. } => "StabilityUpdated",
            EventKind::TaxDue { .. } => "TaxDue",
            EventKind::TaxPaid { .. } => "TaxPaid",
            EventKind::TaxMissed { .. } => "TaxMissed",
            EventKind::GuildShutdown { .. } => "GuildShutdown",
            EventKind::GuildRankUp { .. } => "GuildRankUp",
            EventKind::DayEnded { .. } => "DayEnded",
            EventKind::ContractDraftCreated { .. } => "ContractDraftCreated",
            EventKind::ContractPosted { .. } => "ContractPosted",
            EventKind::ContractTermsUpdated { .. } => "ContractTermsUpdated",
            EventKind::ContractCancelled { .. } => "ContractCancelled",
            EventKind::TrophySold { .. } => "TrophySold",
            EventKind::ProofPolicyChanged { .. } => "ProofPolicyChanged",
            EventKind::CommandRejected { .. } => "CommandRejected",
            EventKind::InvariantViolated { .. } => "InvariantViolated",
        }
    }
}

// ============================================================================
// Sequencing context
// ============================================================================

/// Collects a step's events. Handlers never touch `seq`; the reducer
/// finalizes ordinals once the batch is complete.
#[derive(Debug)]
pub(crate) struct SeqContext {
    pub day: DayIndex,
    pub revision: i64,
    pub cmd_id: CommandId,
    events: Vec<Event>,
}

impl SeqContext {
    pub fn new(day: DayIndex, revision: i64, cmd_id: CommandId) -> Self {
        Self {
            day,
            revision,
            cmd_id,
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, kind: EventKind) {
        self.events.push(Event {
            seq: 0,
            day: self.day,
            revision: self.revision,
            cmd_id: self.cmd_id,
            kind,
        });
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}
