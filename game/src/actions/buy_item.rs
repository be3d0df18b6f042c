use log::info;

use crate::api::{ActionError, Event};
use crate::economy::Item;
use crate::{occur, Game};

impl Game {
    pub(crate) fn buy_item(&mut self, item: Item) -> Result<Vec<Event>, ActionError> {
        let price = self.rules.prices.item(item);
        let events = if item == Item::PlotExtension {
            let expand_field = self.planting.expand_field(self.rules.max_field_size)?;
            let pay = self
                .economy
                .buy_item(item, price, self.rules.trowel_durability)?;
            occur![pay(), expand_field(),]
        } else {
            let pay = self
                .economy
                .buy_item(item, price, self.rules.trowel_durability)?;
            occur![pay(),]
        };
        info!("Bought {:?} for {}", item, price);
        Ok(events)
    }
}
