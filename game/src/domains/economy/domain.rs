use serde::{Deserialize, Serialize};

#[derive(Default)]
pub struct EconomyDomain {
    pub player: PlayerState,
    pub upgrades: UpgradeSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub money: i64,
    pub potatoes: u32,
    pub fertilizer: u32,
    pub seeds: u32,
    #[serde(default)]
    pub trowel: Option<Trowel>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            money: 25,
            potatoes: 0,
            fertilizer: 0,
            seeds: 3,
            trowel: None,
        }
    }
}

impl PlayerState {
    pub fn has_usable_trowel(&self) -> bool {
        matches!(self.trowel, Some(trowel) if trowel.durability > 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trowel {
    pub durability: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeSet {
    pub irrigation: bool,
    pub fertilizer_system: bool,
    pub tractor: bool,
}

impl UpgradeSet {
    pub fn owns(&self, upgrade: Upgrade) -> bool {
        match upgrade {
            Upgrade::Irrigation => self.irrigation,
            Upgrade::FertilizerSystem => self.fertilizer_system,
            Upgrade::Tractor => self.tractor,
        }
    }

    pub(crate) fn install(&mut self, upgrade: Upgrade) {
        match upgrade {
            Upgrade::Irrigation => self.irrigation = true,
            Upgrade::FertilizerSystem => self.fertilizer_system = true,
            Upgrade::Tractor => self.tractor = true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    Seeds,
    Fertilizer,
    PlotExtension,
    Trowel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Upgrade {
    Irrigation,
    FertilizerSystem,
    Tractor,
}

impl Upgrade {
    pub fn title(&self) -> &'static str {
        match self {
            Upgrade::Irrigation => "Irrigation",
            Upgrade::FertilizerSystem => "Fertilizer",
            Upgrade::Tractor => "Tractor",
        }
    }
}

/// What the player is paying for, only used to explain a shortage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Expense {
    Item(Item),
    Upgrade(Upgrade),
    Rename,
}

impl Expense {
    pub fn shortage(&self) -> &'static str {
        match self {
            Expense::Item(Item::Seeds) => "Not enough money for seeds.",
            Expense::Item(Item::Fertilizer) => "Not enough money for fertilizer.",
            Expense::Item(Item::PlotExtension) => "Not enough money for plot extension.",
            Expense::Item(Item::Trowel) => "Not enough money for trowel.",
            Expense::Upgrade(_) => "Not enough money for this upgrade.",
            Expense::Rename => "Not enough money to rename your farm!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Economy {
    MoneyChanged { money: i64 },
    SeedsChanged { seeds: u32 },
    FertilizerChanged { fertilizer: u32 },
    PotatoesChanged { potatoes: u32 },
    TrowelChanged { trowel: Option<Trowel> },
    ItemBought { item: Item },
    UpgradeInstalled { upgrade: Upgrade },
    PotatoesSold { amount: u32, revenue: i64 },
}

impl Economy {
    pub fn headline(&self) -> Option<String> {
        let message = match self {
            Economy::ItemBought { item } => match item {
                Item::Seeds => "Bought 1 seed!".to_string(),
                Item::Fertilizer => "Bought 1 fertilizer!".to_string(),
                Item::PlotExtension => "Bought a plot extension!".to_string(),
                Item::Trowel => "Bought a trowel! Use it to remove dead plants.".to_string(),
            },
            Economy::UpgradeInstalled { upgrade } => {
                format!("Bought {} upgrade!", upgrade.title())
            }
            Economy::PotatoesSold { revenue, .. } => format!("Sold potatoes for ${}!", revenue),
            _ => return None,
        };
        Some(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EconomyError {
    #[error("{}", .expense.shortage())]
    NotEnoughMoney { expense: Expense, price: i64 },
    #[error("No seeds left!")]
    NoSeeds,
    #[error("No fertilizer left!")]
    NoFertilizer,
    #[error("You need a trowel with durability to remove dead plants!")]
    NoTrowel,
    #[error("You already have a trowel!")]
    TrowelAlreadyOwned,
    #[error("Upgrade already owned!")]
    UpgradeAlreadyOwned { upgrade: Upgrade },
    #[error("No potatoes to sell!")]
    NoPotatoes,
}
