pub use force_weather::*;
pub use roll_forecast::*;

mod force_weather;
mod roll_forecast;
