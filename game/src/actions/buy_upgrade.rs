use log::info;

use crate::api::{ActionError, Event};
use crate::economy::Upgrade;
use crate::{occur, Game};

impl Game {
    pub(crate) fn buy_upgrade(&mut self, upgrade: Upgrade) -> Result<Vec<Event>, ActionError> {
        let cost = self.rules.prices.upgrade(upgrade);
        let install = self.economy.install_upgrade(upgrade, cost)?;
        let events = occur![install(),];
        info!("Installed {:?} upgrade", upgrade);
        Ok(events)
    }
}
