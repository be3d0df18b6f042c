use log::{error, info, warn};
use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use datamap::Storage;

pub use clock::*;
pub use session::*;

mod clock;
mod session;

#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub database: String,
    pub save_slot: String,
    pub seconds_per_day: f32,
    pub autosave_interval: f32,
    pub seed: Option<u64>,
    /// Hosting stops after this many days, runs forever if not set.
    pub days_limit: Option<u32>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            database: "./farm.sqlite".to_string(),
            save_slot: "potato-farm-save".to_string(),
            seconds_per_day: 20.0,
            autosave_interval: 60.0,
            seed: None,
            days_limit: None,
        }
    }
}

impl Configuration {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Applies `FARM_*` overrides found by `lookup` on top of defaults,
    /// unparsable or invalid values are ignored with a warning.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(database) = lookup("FARM_DATABASE") {
            config.database = database;
        }
        if let Some(seconds) = parse_var::<f32, _>(&lookup, "FARM_SECONDS_PER_DAY") {
            if seconds > 0.0 {
                config.seconds_per_day = seconds;
            } else {
                warn!("Ignore FARM_SECONDS_PER_DAY={}, must be positive", seconds);
            }
        }
        if let Some(seed) = parse_var(&lookup, "FARM_SEED") {
            config.seed = Some(seed);
        }
        if let Some(days) = parse_var(&lookup, "FARM_DAYS") {
            config.days_limit = Some(days);
        }
        config
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key)?;
    match value.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignore {}={:?}, unable to parse", key, value);
            None
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("save storage failure: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error("unable to serialize farm: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Runs a local session on a dedicated thread until terminated or until
/// the configured days limit is reached.
pub struct FarmHostingThread {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl FarmHostingThread {
    pub fn spawn(config: Configuration) -> Result<Self, HostError> {
        let storage = Storage::open(&config.database)?;
        let running = Arc::new(AtomicBool::new(true));
        let running_thread = running.clone();
        let days_limit = config.days_limit;
        let handle = thread::spawn(move || {
            info!("Start farm hosting thread");
            let mut session = LocalSession::start(config, storage);
            let start_day = session.game().day();
            let mut tick = Instant::now();
            while running_thread.load(Ordering::Relaxed) {
                let time = tick.elapsed().as_secs_f32();
                tick = Instant::now();
                for event in session.update(time) {
                    if let Some(headline) = event.headline() {
                        info!("{}", headline);
                    }
                }
                if let Some(limit) = days_limit {
                    if session.game().day() - start_day >= limit {
                        running_thread.store(false, Ordering::Relaxed);
                    }
                }
                thread::sleep(Duration::from_millis(20));
            }
            if let Err(error) = session.save() {
                error!("Unable to save farm on shutdown: {}", error);
            }
            info!("Stop farm hosting thread");
        });
        Ok(Self {
            running,
            handle: Some(handle),
        })
    }

    pub fn terminate(&mut self) {
        self.running.store(false, Ordering::Relaxed)
    }

    pub fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("Farm hosting thread panicked");
            }
        }
    }
}
