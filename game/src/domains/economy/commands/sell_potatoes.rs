use crate::economy::Economy::{MoneyChanged, PotatoesChanged, PotatoesSold};
use crate::economy::EconomyError::NoPotatoes;
use crate::economy::{Economy, EconomyDomain, EconomyError};

impl EconomyDomain {
    pub fn sell_potatoes(
        &mut self,
        unit_price: i64,
    ) -> Result<impl FnOnce() -> Vec<Economy> + '_, EconomyError> {
        let amount = self.player.potatoes;
        if amount == 0 {
            return Err(NoPotatoes);
        }
        let revenue = amount as i64 * unit_price;
        let command = move || {
            self.player.money += revenue;
            self.player.potatoes = 0;
            vec![
                PotatoesSold { amount, revenue },
                MoneyChanged {
                    money: self.player.money,
                },
                PotatoesChanged { potatoes: 0 },
            ]
        };
        Ok(command)
    }
}
