use log::info;

use crate::api::{ActionError, Event};
use crate::economy::Expense;
use crate::{occur, Game};

impl Game {
    pub(crate) fn rename_farm(&mut self, name: &str) -> Result<Vec<Event>, ActionError> {
        let prices = &self.rules.prices;
        self.economy
            .ensure_funds(Expense::Rename, prices.rename_funds)?;
        let pay = self.economy.charge(Expense::Rename, prices.rename_fee)?;
        let rename = self.universe.rename_farm(name)?;
        let events = occur![rename(), pay(),];
        info!("Farm renamed to {:?}", self.universe.title);
        Ok(events)
    }
}
