use log::debug;

use crate::math::RandomSource;
use crate::weather::Weather::WeatherChanged;
use crate::weather::{Climate, Weather, WeatherDomain};

impl WeatherDomain {
    /// Counts one rainy day down. Returns whether the passing day was rainy,
    /// the value plots get their rain watering from.
    pub fn pass_day(&mut self) -> bool {
        let rained = self.rain_days_remaining > 0;
        self.rain_days_remaining = self.rain_days_remaining.saturating_sub(1);
        self.raining = self.rain_days_remaining > 0;
        rained
    }

    /// Lets yesterday's forecast arrive and rolls the next one.
    pub fn begin_day(&mut self, random: &mut dyn RandomSource, climate: &Climate) -> Vec<Weather> {
        if self.forecast.duration > 0 {
            self.raining = true;
            self.rain_days_remaining = self.forecast.duration;
            let [min, max] = climate.stop_chance;
            self.stop_chance = Some(random.range(min, max));
            debug!("Rain arrives for {} day(s)", self.rain_days_remaining);
        } else if self.rain_days_remaining == 0 {
            self.stop_chance = None;
        }
        let mut events = vec![self.describe()];
        events.extend(self.roll_forecast(random, climate)());
        events
    }

    pub fn describe(&self) -> Weather {
        WeatherChanged {
            raining: self.raining,
            rain_days_remaining: self.rain_days_remaining,
            stop_chance: self.stop_chance,
        }
    }
}
