use crate::api::{ActionError, Event};
use crate::math::Tile;
use crate::{occur, Game};

impl Game {
    pub(crate) fn fertilize_plot(&mut self, tile: Tile) -> Result<Vec<Event>, ActionError> {
        let fertilize = self.planting.fertilize_plot(tile)?;
        let spend_fertilizer = self.economy.spend_fertilizer()?;
        let events = occur![fertilize(), spend_fertilizer(),];
        Ok(events)
    }
}
