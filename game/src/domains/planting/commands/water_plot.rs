use crate::math::Tile;
use crate::planting::Planting::PlotWatered;
use crate::planting::PlantingError::{NothingToWater, PlantDead};
use crate::planting::{Planting, PlantingDomain, PlantingError};

impl PlantingDomain {
    pub fn water_plot(
        &mut self,
        tile: Tile,
    ) -> Result<impl FnOnce() -> Vec<Planting> + '_, PlantingError> {
        let plot = self.get_plot_mut(tile)?;
        if plot.is_dead() {
            return Err(PlantDead { tile });
        }
        if !plot.sown {
            return Err(NothingToWater { tile });
        }
        let command = move || {
            plot.water += 1;
            plot.days_since_water = 0;
            vec![PlotWatered {
                tile,
                water: plot.water,
            }]
        };
        Ok(command)
    }
}
