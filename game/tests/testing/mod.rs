#![allow(dead_code)]

use std::collections::VecDeque;

use game::api::{Action, ActionError, Event, Report, Tool};
use game::economy::{PlayerState, Trowel, Upgrade};
use game::math::{RandomSource, Tile};
use game::planting::{Plot, Stage};
use game::rules::Rules;
use game::Game;

pub const CORNER: Tile = [0, 0];

pub fn at(x: usize, y: usize) -> Tile {
    [x, y]
}

/// Replays prepared rolls, then always answers the upper bound which never
/// forecasts rain.
pub struct Dice {
    rolls: VecDeque<u32>,
}

impl Dice {
    pub fn new(rolls: &[u32]) -> Self {
        Self {
            rolls: rolls.iter().cloned().collect(),
        }
    }
}

impl RandomSource for Dice {
    fn range(&mut self, min: u32, max: u32) -> u32 {
        match self.rolls.pop_front() {
            Some(roll) => roll.clamp(min, max),
            None => max,
        }
    }
}

pub fn sown(stage: Stage) -> Plot {
    Plot {
        dug: true,
        sown: true,
        stage,
        ..Plot::default()
    }
}

pub struct GameTestScenario {
    pub game: Game,
    current_action_result: Result<Vec<Event>, ActionError>,
    current_day_events: Vec<Event>,
}

impl GameTestScenario {
    pub fn new() -> Self {
        Self::with_dice(&[])
    }

    pub fn with_dice(rolls: &[u32]) -> Self {
        Self::with_rules(Rules::default(), rolls)
    }

    pub fn with_rules(rules: Rules, rolls: &[u32]) -> Self {
        GameTestScenario {
            game: Game::new(rules, Box::new(Dice::new(rolls))),
            current_action_result: Ok(vec![]),
            current_day_events: vec![],
        }
    }

    pub fn plot(&self, tile: Tile) -> &Plot {
        self.game.planting.get_plot(tile).unwrap()
    }

    pub fn player(&self) -> &PlayerState {
        &self.game.economy.player
    }

    pub fn given_money(mut self, money: i64) -> Self {
        self.game.economy.player.money = money;
        self
    }

    pub fn given_seeds(mut self, seeds: u32) -> Self {
        self.game.economy.player.seeds = seeds;
        self
    }

    pub fn given_fertilizer(mut self, fertilizer: u32) -> Self {
        self.game.economy.player.fertilizer = fertilizer;
        self
    }

    pub fn given_potatoes(mut self, potatoes: u32) -> Self {
        self.game.economy.player.potatoes = potatoes;
        self
    }

    pub fn given_trowel(mut self, durability: u8) -> Self {
        self.game.economy.player.trowel = Some(Trowel { durability });
        self
    }

    pub fn given_upgrade(mut self, upgrade: Upgrade) -> Self {
        let upgrades = &mut self.game.economy.upgrades;
        match upgrade {
            Upgrade::Irrigation => upgrades.irrigation = true,
            Upgrade::FertilizerSystem => upgrades.fertilizer_system = true,
            Upgrade::Tractor => upgrades.tractor = true,
        }
        self
    }

    pub fn given_plot(mut self, tile: Tile, plot: Plot) -> Self {
        *self.game.planting.get_plot_mut(tile).unwrap() = plot;
        self
    }

    pub fn given_rain(mut self, days: u32) -> Self {
        self.game.weather.rain_days_remaining = days;
        self.game.weather.raining = days > 0;
        self
    }

    pub fn when_player_perform(mut self, action: Action) -> Self {
        self.current_action_result = self.game.perform_action(action);
        self
    }

    pub fn when_player_use(self, tool: Tool, tile: Tile) -> Self {
        self.when_player_perform(Action::UseTool { tool, tile })
    }

    pub fn when_days_pass(mut self, days: usize) -> Self {
        self.current_day_events.clear();
        for _ in 0..days {
            let events = self.game.advance_day();
            self.current_day_events.extend(events);
        }
        self
    }

    pub fn then_action_should_succeed(self) -> Self {
        if let Err(error) = &self.current_action_result {
            panic!("Action failed with {:?}", error);
        }
        self
    }

    pub fn then_action_should_fail<F>(self, expected: F) -> Self
    where
        F: FnOnce(&Self) -> ActionError,
    {
        let expected = expected(&self);
        match &self.current_action_result {
            Ok(events) => panic!("Action succeeded with {:?}, expected {:?}", events, expected),
            Err(error) => assert_eq!(error, &expected),
        }
        self
    }

    pub fn then_report_should_be(self, message: &str) -> Self {
        let report = Report::of(&self.current_action_result);
        assert_eq!(report.message, message);
        self
    }

    pub fn then_action_events_should_contain(self, expected: Event) -> Self {
        let events = self.current_action_result.as_ref().unwrap();
        assert!(
            events.contains(&expected),
            "{:?} not found in {:?}",
            expected,
            events
        );
        self
    }

    pub fn then_day_events_should_contain(self, expected: Event) -> Self {
        assert!(
            self.current_day_events.contains(&expected),
            "{:?} not found in {:?}",
            expected,
            self.current_day_events
        );
        self
    }

    pub fn then_plot_should_be<F>(self, tile: Tile, check: F) -> Self
    where
        F: FnOnce(&Plot),
    {
        check(self.plot(tile));
        self
    }

    pub fn then_player_should_be<F>(self, check: F) -> Self
    where
        F: FnOnce(&PlayerState),
    {
        check(self.player());
        self
    }
}
