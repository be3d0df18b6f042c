use crate::api::{ActionError, Event};
use crate::math::Tile;
use crate::{occur, Game};

impl Game {
    pub(crate) fn harvest_plot(&mut self, tile: Tile) -> Result<Vec<Event>, ActionError> {
        let harvest = self.planting.harvest_plot(tile)?;
        let events = occur![harvest(), self.economy.store_potatoes(1),];
        Ok(events)
    }
}
