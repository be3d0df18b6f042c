use log::debug;

use crate::planting::Planting::{PlantDied, PlotUpdated};
use crate::planting::{GrowthConditions, Planting, PlantingDomain, Plot, Stage, DROUGHT_DAYS};

impl Plot {
    /// Applies one day boundary to the plot.
    pub fn advance_one_day(&mut self, conditions: GrowthConditions) {
        if conditions.raining && self.dug && !self.is_dead() {
            self.water += 1;
            self.days_since_water = 0;
        }
        if conditions.irrigation && self.sown && !self.is_dead() {
            self.water += 1;
            self.days_since_water = 0;
        }

        if !self.sown || matches!(self.stage, Stage::Dead | Stage::Empty) {
            return;
        }
        self.growth_days += 1;
        if self.water > 0 {
            self.water -= 1;
            self.days_since_water = 0;
        } else {
            self.days_since_water += 1;
        }
        if self.days_since_water >= DROUGHT_DAYS {
            self.stage = Stage::Dead;
            return;
        }
        // fertilizer charge is never spent by growth
        let threshold = if self.has_fertilizer_bonus(conditions.fertilizer_system) {
            1
        } else {
            2
        };
        match self.stage {
            Stage::Sprout if self.growth_days >= threshold => {
                self.stage = Stage::Growing;
                self.growth_days = 0;
            }
            Stage::Growing if self.growth_days >= threshold => {
                self.stage = Stage::Mature;
            }
            _ => {}
        }
    }
}

impl PlantingDomain {
    pub fn update(&mut self, conditions: GrowthConditions) -> Vec<Planting> {
        let mut events = vec![];
        for (y, row) in self.grid.iter_mut().enumerate() {
            for (x, plot) in row.iter_mut().enumerate() {
                let before = plot.clone();
                plot.advance_one_day(conditions);
                if *plot == before {
                    continue;
                }
                let tile = [x, y];
                if plot.is_dead() && !before.is_dead() {
                    debug!("Plant at {:?} died of drought", tile);
                    events.push(PlantDied { tile });
                }
                events.push(PlotUpdated {
                    tile,
                    plot: plot.clone(),
                });
            }
        }
        events
    }
}
