use crate::economy::Economy::MoneyChanged;
use crate::economy::EconomyError::NotEnoughMoney;
use crate::economy::{Economy, EconomyDomain, EconomyError, Expense};

impl EconomyDomain {
    pub fn ensure_funds(&self, expense: Expense, amount: i64) -> Result<(), EconomyError> {
        if self.player.money < amount {
            return Err(NotEnoughMoney {
                expense,
                price: amount,
            });
        }
        Ok(())
    }

    pub fn charge(
        &mut self,
        expense: Expense,
        price: i64,
    ) -> Result<impl FnOnce() -> Vec<Economy> + '_, EconomyError> {
        self.ensure_funds(expense, price)?;
        let command = move || {
            self.player.money -= price;
            vec![MoneyChanged {
                money: self.player.money,
            }]
        };
        Ok(command)
    }
}
