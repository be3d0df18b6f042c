use log::info;

use crate::api::Event;
use crate::planting::GrowthConditions;
use crate::{occur, Game};

impl Game {
    /// Moves the whole farm across one day boundary.
    pub fn advance_day(&mut self) -> Vec<Event> {
        let raining = self.weather.pass_day();
        let upgrades = self.economy.upgrades;
        let conditions = GrowthConditions {
            raining,
            irrigation: upgrades.irrigation,
            fertilizer_system: upgrades.fertilizer_system,
        };
        let mut events = occur![self.planting.update(conditions),];

        if upgrades.tractor {
            let (harvested, harvest_events) = self.planting.harvest_mature();
            if harvested > 0 {
                info!("Tractor harvested {} potato(es)", harvested);
                events.extend(occur![
                    harvest_events,
                    self.economy.store_potatoes(harvested),
                ]);
            }
        }

        let timing_events = self.timing.start_new_day();
        let weather_events = self
            .weather
            .begin_day(self.random.as_mut(), &self.rules.climate);
        events.extend(occur![timing_events, weather_events,]);
        info!(
            "Day {} started, raining: {}, forecast: {:?}",
            self.timing.day, self.weather.raining, self.weather.forecast
        );
        events
    }
}
