use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeatherDomain {
    pub raining: bool,
    pub rain_days_remaining: u32,
    pub forecast: Forecast,
    /// Displayed chance that the rain stops early, has no effect on simulation.
    pub stop_chance: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forecast {
    pub chance: u32,
    pub duration: u32,
}

/// Ranges the daily forecast is rolled from, all bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Climate {
    pub rain_chance: [u32; 2],
    pub rain_duration: [u32; 2],
    pub stop_chance: [u32; 2],
}

impl Default for Climate {
    fn default() -> Self {
        Self {
            rain_chance: [10, 60],
            rain_duration: [1, 3],
            stop_chance: [30, 70],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Weather {
    WeatherChanged {
        raining: bool,
        rain_days_remaining: u32,
        stop_chance: Option<u32>,
    },
    ForecastRolled {
        forecast: Forecast,
    },
}
