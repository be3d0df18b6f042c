use crate::api::{ActionError, Event};
use crate::{occur, Game};

impl Game {
    pub(crate) fn sell_potatoes(&mut self) -> Result<Vec<Event>, ActionError> {
        let sell = self.economy.sell_potatoes(self.rules.prices.potato)?;
        let events = occur![sell(),];
        Ok(events)
    }
}
