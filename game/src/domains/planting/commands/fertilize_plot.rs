use crate::math::Tile;
use crate::planting::Planting::PlotFertilized;
use crate::planting::PlantingError::{NothingToFertilize, PlantDead};
use crate::planting::{Planting, PlantingDomain, PlantingError};

impl PlantingDomain {
    pub fn fertilize_plot(
        &mut self,
        tile: Tile,
    ) -> Result<impl FnOnce() -> Vec<Planting> + '_, PlantingError> {
        let plot = self.get_plot_mut(tile)?;
        if !plot.sown {
            return Err(NothingToFertilize { tile });
        }
        if plot.is_dead() {
            return Err(PlantDead { tile });
        }
        let command = move || {
            plot.fertilizer_charge += 1;
            vec![PlotFertilized {
                tile,
                fertilizer_charge: plot.fertilizer_charge,
            }]
        };
        Ok(command)
    }
}
