//! Save metadata: versioning, seed provenance, id counters, tax ledger.

use serde::Deserialize;

use crate::ids::{ActiveContractId, ContractId, DayIndex, HeroId};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub save_version: i64,
    pub seed: u32,
    pub day_index: DayIndex,
    pub revision: i64,
    pub ids: IdCounters,
    pub tax_due_day: DayIndex,
    pub tax_amount_due: i64,
    pub tax_penalty: i64,
    pub tax_missed_count: i64,
}

/// Monotone id allocators. Ids are never reused.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdCounters {
    pub next_contract_id: i64,
    pub next_hero_id: i64,
    pub next_active_contract_id: i64,
}

impl IdCounters {
    pub fn alloc_contract_id(&mut self) -> ContractId {
        let id = ContractId(self.next_contract_id);
        self.next_contract_id += 1;
        id
    }

    pub fn alloc_hero_id(&mut self) -> HeroId {
        let id = HeroId(self.next_hero_id);
        self.next_hero_id += 1;
        id
    }

    pub fn alloc_active_contract_id(&mut self) -> ActiveContractId {
        let id = ActiveContractId(self.next_active_contract_id);
        self.next_active_contract_id += 1;
        id
    }
}
