use crate::math::Tile;
use crate::planting::Planting::PlotHarvested;
use crate::planting::PlantingError::{NotReadyToHarvest, PlantDead};
use crate::planting::{Planting, PlantingDomain, PlantingError, Plot, Stage};

impl PlantingDomain {
    pub fn harvest_plot(
        &mut self,
        tile: Tile,
    ) -> Result<impl FnOnce() -> Vec<Planting> + '_, PlantingError> {
        let plot = self.get_plot_mut(tile)?;
        match plot.stage {
            Stage::Mature if plot.sown => {}
            Stage::Dead => return Err(PlantDead { tile }),
            _ => return Err(NotReadyToHarvest { tile }),
        }
        let command = move || {
            *plot = Plot::dug();
            vec![PlotHarvested { tile }]
        };
        Ok(command)
    }

    /// Harvests every mature plot at once, returns number of potatoes collected.
    pub fn harvest_mature(&mut self) -> (u32, Vec<Planting>) {
        let mut harvested = 0;
        let mut events = vec![];
        for (y, row) in self.grid.iter_mut().enumerate() {
            for (x, plot) in row.iter_mut().enumerate() {
                if plot.sown && plot.stage == Stage::Mature {
                    *plot = Plot::dug();
                    harvested += 1;
                    events.push(PlotHarvested { tile: [x, y] });
                }
            }
        }
        (harvested, events)
    }
}
