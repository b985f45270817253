//! Contract lifecycle entities: drafts, board items, actives, returns.

use serde::Deserialize;

use crate::ids::{ActiveContractId, ContractId, DayIndex, HeroId, Rank};

// ============================================================================
// Enums
// ============================================================================

/// Trophy distribution rule applied when a contract closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalvagePolicy {
    Guild,
    Hero,
    Split,
}

impl SalvagePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            SalvagePolicy::Guild => "GUILD",
            SalvagePolicy::Hero => "HERO",
            SalvagePolicy::Split => "SPLIT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoardStatus {
    Open,
    Locked,
    Completed,
}

impl BoardStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BoardStatus::Open => "OPEN",
            BoardStatus::Locked => "LOCKED",
            BoardStatus::Completed => "COMPLETED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActiveStatus {
    Wip,
    ReturnReady,
    Closed,
}

impl ActiveStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ActiveStatus::Wip => "WIP",
            ActiveStatus::ReturnReady => "RETURN_READY",
            ActiveStatus::Closed => "CLOSED",
        }
    }
}

/// Final status of a resolved contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Success,
    Partial,
    Fail,
    Death,
    Missing,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Success => "SUCCESS",
            Outcome::Partial => "PARTIAL",
            Outcome::Fail => "FAIL",
            Outcome::Death => "DEATH",
            Outcome::Missing => "MISSING",
        }
    }

    /// DEATH and MISSING differ only in flavor; both end the hero.
    pub fn removes_hero(self) -> bool {
        matches!(self, Outcome::Death | Outcome::Missing)
    }

    /// Outcomes that earn the contract fee when closed.
    pub fn pays_fee(self) -> bool {
        matches!(self, Outcome::Success | Outcome::Partial)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrophyQuality {
    Fine,
    Normal,
    Damaged,
}

impl TrophyQuality {
    pub fn as_str(self) -> &'static str {
        match self {
            TrophyQuality::Fine => "FINE",
            TrophyQuality::Normal => "NORMAL",
            TrophyQuality::Damaged => "DAMAGED",
        }
    }
}

/// What kind of completion proof the client expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProofHint {
    Trophy,
    None,
}

impl ProofHint {
    pub fn as_str(self) -> &'static str {
        match self {
            ProofHint::Trophy => "TROPHY",
            ProofHint::None => "NONE",
        }
    }
}

// ============================================================================
// Entities
// ============================================================================

/// Authored but unpublished contract.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDraft {
    pub id: ContractId,
    pub created_day: DayIndex,
    pub next_auto_resolve_day: DayIndex,
    pub title: String,
    pub rank_suggested: Rank,
    pub fee_offered: i64,
    pub salvage: SalvagePolicy,
    pub base_difficulty: i64,
    pub proof_hint: ProofHint,
    pub client_deposit: i64,
}

/// Published contract. Keeps the draft's id through its whole lifecycle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardContract {
    pub id: ContractId,
    pub posted_day: DayIndex,
    pub title: String,
    pub rank: Rank,
    pub fee: i64,
    pub salvage: SalvagePolicy,
    pub base_difficulty: i64,
    pub status: BoardStatus,
    pub client_deposit: i64,
}

impl BoardContract {
    /// Copper locked in reserve while this contract is posted: the client
    /// deposit plus whatever of the guild's own money covers the fee.
    pub fn escrow_copper(&self) -> i64 {
        self.fee.max(self.client_deposit)
    }
}

/// A taken contract in progress.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveContract {
    pub id: ActiveContractId,
    pub board_contract_id: ContractId,
    pub taken_day: DayIndex,
    pub days_remaining: i64,
    pub hero_ids: Vec<HeroId>,
    pub status: ActiveStatus,
}

/// A resolved contract awaiting (or not requiring) player close.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnPacket {
    pub active_contract_id: ActiveContractId,
    pub board_contract_id: ContractId,
    pub hero_ids: Vec<HeroId>,
    pub resolved_day: DayIndex,
    pub outcome: Outcome,
    pub trophies_count: i64,
    pub trophies_quality: TrophyQuality,
    pub reason_tags: Vec<String>,
    pub requires_player_close: bool,
    pub suspected_theft: bool,
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contracts {
    pub inbox: Vec<ContractDraft>,
    pub board: Vec<BoardContract>,
    pub active: Vec<ActiveContract>,
    pub returns: Vec<ReturnPacket>,
    pub archive: Vec<BoardContract>,
}
