use serde::{Deserialize, Serialize};

use crate::economy::{Economy, EconomyError, Item, Upgrade};
use crate::math::Tile;
use crate::model::{Universe, UniverseError};
use crate::planting::{Planting, PlantingError};
use crate::timing::Timing;
use crate::weather::Weather;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    Dig,
    Sow,
    Water,
    Fertilize,
    Harvest,
    Trowel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    UseTool { tool: Tool, tile: Tile },
    BuyItem { item: Item },
    BuyUpgrade { upgrade: Upgrade },
    SellPotatoes,
    RenameFarm { name: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Event {
    Planting(Vec<Planting>),
    Economy(Vec<Economy>),
    Weather(Vec<Weather>),
    Timing(Vec<Timing>),
    Universe(Vec<Universe>),
}

impl From<Vec<Planting>> for Event {
    fn from(events: Vec<Planting>) -> Self {
        Self::Planting(events)
    }
}

impl From<Vec<Economy>> for Event {
    fn from(events: Vec<Economy>) -> Self {
        Self::Economy(events)
    }
}

impl From<Vec<Weather>> for Event {
    fn from(events: Vec<Weather>) -> Self {
        Self::Weather(events)
    }
}

impl From<Vec<Timing>> for Event {
    fn from(events: Vec<Timing>) -> Self {
        Self::Timing(events)
    }
}

impl From<Vec<Universe>> for Event {
    fn from(events: Vec<Universe>) -> Self {
        Self::Universe(events)
    }
}

impl Event {
    pub fn headline(&self) -> Option<String> {
        match self {
            Event::Planting(events) => events.iter().find_map(Planting::headline),
            Event::Economy(events) => events.iter().find_map(Economy::headline),
            Event::Universe(events) => events.iter().find_map(Universe::headline),
            Event::Weather(_) | Event::Timing(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Planting(#[from] PlantingError),
    #[error(transparent)]
    Economy(#[from] EconomyError),
    #[error(transparent)]
    Universe(#[from] UniverseError),
}

/// Player facing outcome of an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub message: String,
    pub good: bool,
}

impl Report {
    pub fn good(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            good: true,
        }
    }

    pub fn bad(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            good: false,
        }
    }

    pub fn of(result: &Result<Vec<Event>, ActionError>) -> Self {
        match result {
            Ok(events) => Self::good(
                events
                    .iter()
                    .find_map(Event::headline)
                    .unwrap_or_default(),
            ),
            Err(error) => Self::bad(error.to_string()),
        }
    }
}
