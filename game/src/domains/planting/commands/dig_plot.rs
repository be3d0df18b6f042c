use crate::math::Tile;
use crate::planting::Planting::PlotDug;
use crate::planting::PlantingError::AlreadyDug;
use crate::planting::{Planting, PlantingDomain, PlantingError};

impl PlantingDomain {
    pub fn dig_plot(
        &mut self,
        tile: Tile,
    ) -> Result<impl FnOnce() -> Vec<Planting> + '_, PlantingError> {
        let plot = self.get_plot_mut(tile)?;
        if plot.dug {
            return Err(AlreadyDug { tile });
        }
        let command = move || {
            plot.dug = true;
            vec![PlotDug { tile }]
        };
        Ok(command)
    }
}
