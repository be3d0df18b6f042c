use crate::api::{ActionError, Event};
use crate::math::Tile;
use crate::{occur, Game};

impl Game {
    pub(crate) fn water_plot(&mut self, tile: Tile) -> Result<Vec<Event>, ActionError> {
        let water = self.planting.water_plot(tile)?;
        let events = occur![water(),];
        Ok(events)
    }
}
