use crate::math::Tile;
use crate::planting::Planting::PlotSown;
use crate::planting::PlantingError::{AlreadySown, NotDug};
use crate::planting::{Planting, PlantingDomain, PlantingError, Stage};

impl PlantingDomain {
    pub fn sow_plot(
        &mut self,
        tile: Tile,
    ) -> Result<impl FnOnce() -> Vec<Planting> + '_, PlantingError> {
        let plot = self.get_plot_mut(tile)?;
        if !plot.dug {
            return Err(NotDug { tile });
        }
        if plot.sown {
            return Err(AlreadySown { tile });
        }
        let command = move || {
            plot.sown = true;
            plot.stage = Stage::Sprout;
            plot.growth_days = 0;
            plot.days_since_water = 0;
            vec![PlotSown { tile }]
        };
        Ok(command)
    }
}
