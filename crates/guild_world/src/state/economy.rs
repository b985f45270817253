//! Guild treasury. All amounts are integer copper.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Economy {
    pub money_copper: i64,
    pub reserved_copper: i64,
    pub trophies_stock: i64,
}

impl Economy {
    /// Copper not locked in escrow.
    pub fn available_copper(&self) -> i64 {
        self.money_copper - self.reserved_copper
    }
}
