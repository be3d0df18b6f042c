use serde::{Deserialize, Serialize};

use crate::math::Tile;

/// Consecutive dry days a sown plant survives.
pub const DROUGHT_DAYS: u32 = 3;

pub struct PlantingDomain {
    pub grid: Vec<Vec<Plot>>,
    pub size: usize,
}

impl PlantingDomain {
    pub fn new(size: usize) -> Self {
        Self {
            grid: vec![vec![Plot::default(); size]; size],
            size,
        }
    }
}

impl Default for PlantingDomain {
    fn default() -> Self {
        Self::new(5)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    #[default]
    Empty,
    Sprout,
    Growing,
    Mature,
    Dead,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plot {
    #[serde(rename = "isDug")]
    pub dug: bool,
    #[serde(rename = "isSown")]
    pub sown: bool,
    pub water: u32,
    #[serde(rename = "fertilizer")]
    pub fertilizer_charge: u32,
    pub stage: Stage,
    #[serde(rename = "daysSinceWater")]
    pub days_since_water: u32,
    #[serde(rename = "days")]
    pub growth_days: u32,
}

impl Plot {
    /// Freshly dug soil left behind by a harvest or a cleared dead plant.
    pub fn dug() -> Self {
        Self {
            dug: true,
            ..Self::default()
        }
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.stage == Stage::Dead
    }

    /// Whether the plant grows on the shortened schedule.
    #[inline]
    pub fn has_fertilizer_bonus(&self, fertilizer_system: bool) -> bool {
        fertilizer_system || self.fertilizer_charge > 0
    }
}

/// Field-wide modifiers of a single day boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrowthConditions {
    pub raining: bool,
    pub irrigation: bool,
    pub fertilizer_system: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Planting {
    PlotDug { tile: Tile },
    PlotSown { tile: Tile },
    PlotWatered { tile: Tile, water: u32 },
    PlotFertilized { tile: Tile, fertilizer_charge: u32 },
    PlotHarvested { tile: Tile },
    PlotCleared { tile: Tile },
    PlotUpdated { tile: Tile, plot: Plot },
    PlantDied { tile: Tile },
    FieldExpanded { size: usize },
}

impl Planting {
    pub fn headline(&self) -> Option<String> {
        let message = match self {
            Planting::PlotDug { .. } => "You dug the plot!",
            Planting::PlotSown { .. } => "You sowed potato seeds!",
            Planting::PlotWatered { .. } => "You watered the plot!",
            Planting::PlotFertilized { .. } => "You fertilized the plot!",
            Planting::PlotHarvested { .. } => "You harvested potatoes!",
            Planting::PlotCleared { .. } => "Removed dead plant with the trowel!",
            _ => return None,
        };
        Some(message.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlantingError {
    #[error("No plot at {tile:?}.")]
    PlotNotFound { tile: Tile },
    #[error("Plot already dug.")]
    AlreadyDug { tile: Tile },
    #[error("Dig the plot first.")]
    NotDug { tile: Tile },
    #[error("Already sown.")]
    AlreadySown { tile: Tile },
    #[error("Sow seeds before watering.")]
    NothingToWater { tile: Tile },
    #[error("Sow seeds before fertilizing.")]
    NothingToFertilize { tile: Tile },
    #[error("This potato is dead.")]
    PlantDead { tile: Tile },
    #[error("Plot not ready for harvest.")]
    NotReadyToHarvest { tile: Tile },
    #[error("Can only use trowel on dead plants.")]
    PlantNotDead { tile: Tile },
    #[error("Maximum field size reached! ({max}x{max})")]
    FieldAtMaxSize { max: usize },
}
