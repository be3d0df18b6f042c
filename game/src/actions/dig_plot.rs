use crate::api::{ActionError, Event};
use crate::math::Tile;
use crate::{occur, Game};

impl Game {
    pub(crate) fn dig_plot(&mut self, tile: Tile) -> Result<Vec<Event>, ActionError> {
        let dig = self.planting.dig_plot(tile)?;
        let events = occur![dig(),];
        Ok(events)
    }
}
