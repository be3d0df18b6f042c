use log::debug;

use crate::api::{ActionError, Event, Tool};
use crate::math::Tile;
use crate::Game;

impl Game {
    pub(crate) fn use_tool(&mut self, tool: Tool, tile: Tile) -> Result<Vec<Event>, ActionError> {
        self.planting.get_plot(tile)?;
        debug!("Use {:?} at {:?}", tool, tile);
        match tool {
            Tool::Dig => self.dig_plot(tile),
            Tool::Sow => self.sow_plot(tile),
            Tool::Water => self.water_plot(tile),
            Tool::Fertilize => self.fertilize_plot(tile),
            Tool::Harvest => self.harvest_plot(tile),
            Tool::Trowel => self.clear_plot(tile),
        }
    }
}
