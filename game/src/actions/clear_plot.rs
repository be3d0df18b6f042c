use crate::api::{ActionError, Event};
use crate::math::Tile;
use crate::{occur, Game};

impl Game {
    pub(crate) fn clear_plot(&mut self, tile: Tile) -> Result<Vec<Event>, ActionError> {
        let wear_trowel = self.economy.wear_trowel()?;
        let clear = self.planting.clear_plot(tile)?;
        let events = occur![clear(), wear_trowel(),];
        Ok(events)
    }
}
