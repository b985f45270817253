//! The GameState aggregate and the initial-state constructor.

use serde::Deserialize;

use crate::balance::{
    contracts_for_next_rank, INITIAL_MONEY_COPPER, INITIAL_REPUTATION, INITIAL_STABILITY,
    INITIAL_TAX_AMOUNT_DUE, INITIAL_TAX_DUE_DAY, SAVE_VERSION,
};
use crate::ids::{ActiveContractId, ContractId, HeroId, Rank};

use super::contracts::{ActiveContract, BoardContract, ContractDraft, Contracts, ReturnPacket};
use super::economy::Economy;
use super::guild::{Guild, ProofPolicy, Region};
use super::heroes::{Hero, Heroes};
use super::meta::{IdCounters, Meta};

/// The whole world. The reducer replaces it wholesale; nothing outside the
/// reducer may mutate one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub meta: Meta,
    pub guild: Guild,
    pub region: Region,
    pub economy: Economy,
    pub contracts: Contracts,
    pub heroes: Heroes,
}

/// The only constructor for a fresh world.
pub fn initial_state(seed: u32) -> GameState {
    GameState {
        meta: Meta {
            save_version: SAVE_VERSION,
            seed,
            day_index: 0,
            revision: 0,
            ids: IdCounters {
                next_contract_id: 1,
                next_hero_id: 1,
                next_active_contract_id: 1,
            },
            tax_due_day: INITIAL_TAX_DUE_DAY,
            tax_amount_due: INITIAL_TAX_AMOUNT_DUE,
            tax_penalty: 0,
            tax_missed_count: 0,
        },
        guild: Guild {
            guild_rank: Rank::F,
            reputation: INITIAL_REPUTATION,
            completed_contracts_total: 0,
            contracts_for_next_rank: contracts_for_next_rank(Rank::F, 0),
            proof_policy: ProofPolicy::Fast,
        },
        region: Region {
            stability: INITIAL_STABILITY,
        },
        economy: Economy {
            money_copper: INITIAL_MONEY_COPPER,
            reserved_copper: 0,
            trophies_stock: 0,
        },
        contracts: Contracts {
            inbox: Vec::new(),
            board: Vec::new(),
            active: Vec::new(),
            returns: Vec::new(),
            archive: Vec::new(),
        },
        heroes: Heroes {
            roster: Vec::new(),
            arrivals_today: Vec::new(),
        },
    }
}

impl GameState {
    pub fn find_draft(&self, id: ContractId) -> Option<&ContractDraft> {
        self.contracts.inbox.iter().find(|draft| draft.id == id)
    }

    pub fn find_board(&self, id: ContractId) -> Option<&BoardContract> {
        self.contracts.board.iter().find(|item| item.id == id)
    }

    pub fn find_active(&self, id: ActiveContractId) -> Option<&ActiveContract> {
        self.contracts.active.iter().find(|active| active.id == id)
    }

    pub fn find_return(&self, active_id: ActiveContractId) -> Option<&ReturnPacket> {
        self.contracts
            .returns
            .iter()
            .find(|packet| packet.active_contract_id == active_id)
    }

    pub fn find_hero(&self, id: HeroId) -> Option<&Hero> {
        self.heroes.roster.iter().find(|hero| hero.id == id)
    }
}
