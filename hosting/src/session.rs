use datamap::Storage;
use game::api::{Action, Event, Report};
use game::math::{Random, RandomSource};
use game::rules::Rules;
use game::Game;
use log::{error, info, warn};

use crate::{Configuration, DayClock, HostError};

/// Single player session: owns the game, schedules day ticks and keeps
/// the save slot up to date.
pub struct LocalSession {
    game: Game,
    storage: Storage,
    config: Configuration,
    clock: DayClock,
    autosave_elapsed: f32,
}

impl LocalSession {
    pub fn start(config: Configuration, storage: Storage) -> Self {
        let data = match storage.read_slot(&config.save_slot) {
            Ok(data) => data,
            Err(error) => {
                warn!("Unable to read slot {}: {}", config.save_slot, error);
                None
            }
        };
        let game = Game::load_or_new(data.as_deref(), Rules::default(), create_random(&config));
        info!(
            "Start session of {:?} at day {}, {}s per day",
            game.universe.title,
            game.day(),
            config.seconds_per_day
        );
        Self {
            game,
            storage,
            clock: DayClock::new(config.seconds_per_day),
            config,
            autosave_elapsed: 0.0,
        }
    }

    #[inline]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[inline]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    #[inline]
    pub fn clock(&self) -> &DayClock {
        &self.clock
    }

    pub fn update(&mut self, real_seconds: f32) -> Vec<Event> {
        let mut events = vec![];
        let days = self.clock.update(real_seconds);
        for _ in 0..days {
            events.extend(self.game.advance_day());
        }
        self.autosave_elapsed += real_seconds;
        let autosave = self.config.autosave_interval > 0.0
            && self.autosave_elapsed >= self.config.autosave_interval;
        if days > 0 || autosave {
            if autosave {
                self.autosave_elapsed = 0.0;
            }
            if let Err(error) = self.save() {
                error!("Unable to save farm after {} day(s): {}", days, error);
            }
        }
        events
    }

    pub fn perform(&mut self, action: Action) -> Report {
        let result = self.game.perform_action(action);
        let report = Report::of(&result);
        if result.is_ok() {
            if let Err(error) = self.save() {
                error!("Unable to save farm after action: {}", error);
            }
        }
        report
    }

    pub fn save(&mut self) -> Result<(), HostError> {
        let data = self.game.save().to_json()?;
        self.storage.write_slot(&self.config.save_slot, &data)?;
        Ok(())
    }

    pub fn manual_save(&mut self) -> Report {
        match self.save() {
            Ok(()) => Report::good("Game progress saved!"),
            Err(error) => {
                error!("Unable to save farm: {}", error);
                Report::bad("Unable to save game progress.")
            }
        }
    }

    /// Erases the save slot and starts over from a fresh farm.
    pub fn reset_progress(&mut self) -> Result<(), HostError> {
        self.storage.erase_slot(&self.config.save_slot)?;
        self.game = Game::new(Rules::default(), create_random(&self.config));
        self.clock.reset();
        self.autosave_elapsed = 0.0;
        info!("Farm progress reset");
        Ok(())
    }
}

fn create_random(config: &Configuration) -> Box<dyn RandomSource> {
    match config.seed {
        Some(seed) => Box::new(Random::with_seed(seed)),
        None => Box::new(Random::new()),
    }
}
