use crate::economy::Economy::{
    FertilizerChanged, ItemBought, MoneyChanged, SeedsChanged, TrowelChanged,
};
use crate::economy::EconomyError::TrowelAlreadyOwned;
use crate::economy::{Economy, EconomyDomain, EconomyError, Expense, Item, Trowel};

impl EconomyDomain {
    /// Pays for an item and puts it into the inventory. A plot extension is only
    /// paid here, the field itself grows in the planting domain.
    pub fn buy_item(
        &mut self,
        item: Item,
        price: i64,
        trowel_durability: u8,
    ) -> Result<impl FnOnce() -> Vec<Economy> + '_, EconomyError> {
        self.ensure_funds(Expense::Item(item), price)?;
        if item == Item::Trowel && self.player.has_usable_trowel() {
            return Err(TrowelAlreadyOwned);
        }
        let command = move || {
            let player = &mut self.player;
            player.money -= price;
            let mut events = vec![ItemBought { item }, MoneyChanged { money: player.money }];
            match item {
                Item::Seeds => {
                    player.seeds += 1;
                    events.push(SeedsChanged {
                        seeds: player.seeds,
                    });
                }
                Item::Fertilizer => {
                    player.fertilizer += 1;
                    events.push(FertilizerChanged {
                        fertilizer: player.fertilizer,
                    });
                }
                Item::Trowel => {
                    player.trowel = Some(Trowel {
                        durability: trowel_durability,
                    });
                    events.push(TrowelChanged {
                        trowel: player.trowel,
                    });
                }
                Item::PlotExtension => {}
            }
            events
        };
        Ok(command)
    }
}
