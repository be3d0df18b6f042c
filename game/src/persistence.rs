use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::economy::PlayerState;
use crate::math::RandomSource;
use crate::planting::Plot;
use crate::rules::Rules;
use crate::Game;

/// Persisted state of a play session. Upgrades and weather are not saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub field: FieldSnapshot,
    pub player: PlayerState,
    pub day: u32,
    pub field_size: usize,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub grid: Vec<Vec<Plot>>,
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot is not valid JSON of a farm: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("snapshot has no {key}")]
    Missing { key: &'static str },
    #[error("snapshot grid does not match field size {size}")]
    Inconsistent { size: usize },
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(data: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(data)?;
        snapshot.validate()
    }

    fn validate(self) -> Result<Self, SnapshotError> {
        if self.day == 0 {
            return Err(SnapshotError::Missing { key: "day" });
        }
        if self.field_size == 0 {
            return Err(SnapshotError::Missing { key: "fieldSize" });
        }
        if self.title.is_empty() {
            return Err(SnapshotError::Missing { key: "title" });
        }
        let size = self.field_size;
        if self.field.grid.len() != size || self.field.grid.iter().any(|row| row.len() != size) {
            return Err(SnapshotError::Inconsistent { size });
        }
        Ok(self)
    }
}

impl Game {
    pub fn save(&self) -> Snapshot {
        Snapshot {
            field: FieldSnapshot {
                grid: self.planting.grid.clone(),
            },
            player: self.economy.player.clone(),
            day: self.timing.day,
            field_size: self.planting.size,
            title: self.universe.title.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: Snapshot) {
        self.planting
            .load_field(snapshot.field.grid, snapshot.field_size);
        self.economy.player = snapshot.player;
        if let Some(trowel) = self.economy.player.trowel.as_mut() {
            trowel.durability = trowel.durability.min(self.rules.trowel_durability);
        }
        self.timing.load_day(snapshot.day);
        self.universe.title = snapshot.title;
        info!(
            "Farm {:?} restored at day {}",
            self.universe.title, self.timing.day
        );
    }

    /// Restores a saved game, anything unreadable silently becomes a new game.
    pub fn load_or_new(data: Option<&str>, rules: Rules, random: Box<dyn RandomSource>) -> Self {
        let mut game = Game::new(rules, random);
        if let Some(data) = data {
            match Snapshot::from_json(data) {
                Ok(snapshot) => game.restore(snapshot),
                Err(error) => warn!("Start new game, saved one rejected: {}", error),
            }
        }
        game
    }
}
