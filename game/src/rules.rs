use serde::{Deserialize, Serialize};

use crate::economy::{Item, Upgrade};
use crate::weather::Climate;

/// Tunable constants of the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    pub initial_field_size: usize,
    pub max_field_size: usize,
    pub trowel_durability: u8,
    pub prices: Prices,
    pub climate: Climate,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            initial_field_size: 5,
            max_field_size: 12,
            trowel_durability: 20,
            prices: Prices::default(),
            climate: Climate::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prices {
    pub seeds: i64,
    pub fertilizer: i64,
    pub plot_extension: i64,
    pub trowel: i64,
    pub potato: i64,
    pub irrigation: i64,
    pub fertilizer_system: i64,
    pub tractor: i64,
    /// Money the player must have before the farm can be renamed.
    pub rename_funds: i64,
    pub rename_fee: i64,
}

impl Default for Prices {
    fn default() -> Self {
        Self {
            seeds: 8,
            fertilizer: 10,
            plot_extension: 200,
            trowel: 2500,
            potato: 15,
            irrigation: 1200,
            fertilizer_system: 1800,
            tractor: 3500,
            rename_funds: 5000,
            rename_fee: 1500,
        }
    }
}

impl Prices {
    pub fn item(&self, item: Item) -> i64 {
        match item {
            Item::Seeds => self.seeds,
            Item::Fertilizer => self.fertilizer,
            Item::PlotExtension => self.plot_extension,
            Item::Trowel => self.trowel,
        }
    }

    pub fn upgrade(&self, upgrade: Upgrade) -> i64 {
        match upgrade {
            Upgrade::Irrigation => self.irrigation,
            Upgrade::FertilizerSystem => self.fertilizer_system,
            Upgrade::Tractor => self.tractor,
        }
    }
}
