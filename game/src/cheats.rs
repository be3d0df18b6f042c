use crate::api::Event;
use crate::planting::FieldCensus;
use crate::weather::Forecast;
use crate::{occur, Game};

impl Game {
    pub fn cheat_rain(&mut self, days: u32) -> Vec<Event> {
        occur![self.weather.force_rain(days),]
    }

    pub fn cheat_clear_weather(&mut self) -> Vec<Event> {
        occur![self.weather.force_clear(),]
    }

    pub fn cheat_forecast(&mut self, forecast: Forecast) -> Vec<Event> {
        occur![self.weather.set_forecast(forecast),]
    }

    pub fn census(&self) -> FieldCensus {
        self.planting.count_plots()
    }
}
