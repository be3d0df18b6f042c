use crate::math::Tile;
use crate::planting::Planting::PlotCleared;
use crate::planting::PlantingError::PlantNotDead;
use crate::planting::{Planting, PlantingDomain, PlantingError, Plot};

impl PlantingDomain {
    pub fn clear_plot(
        &mut self,
        tile: Tile,
    ) -> Result<impl FnOnce() -> Vec<Planting> + '_, PlantingError> {
        let plot = self.get_plot_mut(tile)?;
        if !plot.is_dead() {
            return Err(PlantNotDead { tile });
        }
        let command = move || {
            *plot = Plot::dug();
            vec![PlotCleared { tile }]
        };
        Ok(command)
    }
}
