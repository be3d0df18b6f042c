use crate::math::RandomSource;
use crate::weather::Weather::ForecastRolled;
use crate::weather::{Climate, Forecast, Weather, WeatherDomain};

impl WeatherDomain {
    pub fn roll_forecast(
        &mut self,
        random: &mut dyn RandomSource,
        climate: &Climate,
    ) -> impl FnOnce() -> Vec<Weather> + '_ {
        let [min, max] = climate.rain_chance;
        let chance = random.range(min, max);
        let duration = if random.chance(chance) {
            let [min, max] = climate.rain_duration;
            random.range(min, max)
        } else {
            0
        };
        let forecast = Forecast { chance, duration };
        move || {
            self.forecast = forecast;
            vec![ForecastRolled { forecast }]
        }
    }
}
