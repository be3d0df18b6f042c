use crate::weather::Weather::ForecastRolled;
use crate::weather::{Forecast, Weather, WeatherDomain};

impl WeatherDomain {
    /// Starts rain right away and keeps it forecast for the given number of days.
    pub fn force_rain(&mut self, days: u32) -> Vec<Weather> {
        self.forecast = Forecast {
            chance: 100,
            duration: days,
        };
        self.rain_days_remaining = days;
        self.raining = days > 0;
        vec![
            self.describe(),
            ForecastRolled {
                forecast: self.forecast,
            },
        ]
    }

    pub fn force_clear(&mut self) -> Vec<Weather> {
        self.forecast = Forecast::default();
        self.rain_days_remaining = 0;
        self.raining = false;
        self.stop_chance = None;
        vec![
            self.describe(),
            ForecastRolled {
                forecast: self.forecast,
            },
        ]
    }

    pub fn set_forecast(&mut self, forecast: Forecast) -> Vec<Weather> {
        self.forecast = forecast;
        vec![ForecastRolled { forecast }]
    }
}
