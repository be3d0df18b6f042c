use crate::api::{ActionError, Event};
use crate::math::Tile;
use crate::{occur, Game};

impl Game {
    pub(crate) fn sow_plot(&mut self, tile: Tile) -> Result<Vec<Event>, ActionError> {
        let sow = self.planting.sow_plot(tile)?;
        let spend_seed = self.economy.spend_seed()?;
        let events = occur![sow(), spend_seed(),];
        Ok(events)
    }
}
