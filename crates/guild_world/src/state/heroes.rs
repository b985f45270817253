//! Hero roster.

use serde::Deserialize;

use crate::ids::{HeroId, Rank};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HeroStatus {
    Available,
    OnMission,
    Banned,
    Warned,
}

impl HeroStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            HeroStatus::Available => "AVAILABLE",
            HeroStatus::OnMission => "ON_MISSION",
            HeroStatus::Banned => "BANNED",
            HeroStatus::Warned => "WARNED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HeroClass {
    Fighter,
    Ranger,
    Mage,
    Rogue,
    Cleric,
}

impl HeroClass {
    pub const COUNT: i32 = 5;

    pub fn as_str(self) -> &'static str {
        match self {
            HeroClass::Fighter => "FIGHTER",
            HeroClass::Ranger => "RANGER",
            HeroClass::Mage => "MAGE",
            HeroClass::Rogue => "ROGUE",
            HeroClass::Cleric => "CLERIC",
        }
    }

    /// Class for a generation draw in `[0, COUNT)`, in declaration order.
    pub fn from_draw(draw: i32) -> HeroClass {
        match draw {
            0 => HeroClass::Fighter,
            1 => HeroClass::Ranger,
            2 => HeroClass::Mage,
            3 => HeroClass::Rogue,
            _ => HeroClass::Cleric,
        }
    }
}

/// Personality scores in [0, 100]; greed and honesty drive theft odds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroTraits {
    pub greed: i64,
    pub honesty: i64,
    pub courage: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
    pub rank: Rank,
    pub class: HeroClass,
    pub traits: HeroTraits,
    pub status: HeroStatus,
    pub history_completed: i64,
}

/// Roster plus today's arrivals. Arrivals are transient: they drive the
/// pickup phase and are elided from saves.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heroes {
    pub roster: Vec<Hero>,
    #[serde(skip)]
    pub arrivals_today: Vec<HeroId>,
}
