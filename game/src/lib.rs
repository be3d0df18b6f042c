use log::info;

pub use domains::*;

use crate::api::{Action, ActionError, Event};
use crate::economy::EconomyDomain;
use crate::math::{Random, RandomSource};
use crate::model::UniverseDomain;
use crate::planting::PlantingDomain;
use crate::rules::Rules;
use crate::timing::TimingDomain;
use crate::weather::WeatherDomain;

mod actions;
pub mod api;
mod cheats;
mod domains;
pub mod math;
pub mod model;
pub mod persistence;
pub mod rules;
mod update;

/// Collects domain events of one engine operation into `Vec<Event>`.
#[macro_export]
macro_rules! occur {
    () => (
        std::vec::Vec::<$crate::api::Event>::new()
    );
    ($($x:expr,)*) => ({
        let events: std::vec::Vec<$crate::api::Event> = vec![$($x.into()),*];
        events
    });
}

pub struct Game {
    pub rules: Rules,
    pub universe: UniverseDomain,
    pub planting: PlantingDomain,
    pub economy: EconomyDomain,
    pub weather: WeatherDomain,
    pub timing: TimingDomain,
    random: Box<dyn RandomSource>,
}

impl Game {
    pub fn new(rules: Rules, random: Box<dyn RandomSource>) -> Self {
        let mut game = Self {
            planting: PlantingDomain::new(rules.initial_field_size),
            rules,
            universe: UniverseDomain::default(),
            economy: EconomyDomain::default(),
            weather: WeatherDomain::default(),
            timing: TimingDomain::default(),
            random,
        };
        game.weather
            .roll_forecast(game.random.as_mut(), &game.rules.climate)();
        info!(
            "New farm {:?} with {}x{} field",
            game.universe.title, game.planting.size, game.planting.size
        );
        game
    }

    pub fn perform_action(&mut self, action: Action) -> Result<Vec<Event>, ActionError> {
        match action {
            Action::UseTool { tool, tile } => self.use_tool(tool, tile),
            Action::BuyItem { item } => self.buy_item(item),
            Action::BuyUpgrade { upgrade } => self.buy_upgrade(upgrade),
            Action::SellPotatoes => self.sell_potatoes(),
            Action::RenameFarm { name } => self.rename_farm(&name),
        }
    }

    #[inline]
    pub fn day(&self) -> u32 {
        self.timing.day
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Rules::default(), Box::new(Random::new()))
    }
}
