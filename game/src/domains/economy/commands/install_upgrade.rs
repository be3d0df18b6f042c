use crate::economy::Economy::{MoneyChanged, UpgradeInstalled};
use crate::economy::EconomyError::UpgradeAlreadyOwned;
use crate::economy::{Economy, EconomyDomain, EconomyError, Expense, Upgrade};

impl EconomyDomain {
    pub fn install_upgrade(
        &mut self,
        upgrade: Upgrade,
        cost: i64,
    ) -> Result<impl FnOnce() -> Vec<Economy> + '_, EconomyError> {
        if self.upgrades.owns(upgrade) {
            return Err(UpgradeAlreadyOwned { upgrade });
        }
        self.ensure_funds(Expense::Upgrade(upgrade), cost)?;
        let command = move || {
            self.player.money -= cost;
            self.upgrades.install(upgrade);
            vec![
                UpgradeInstalled { upgrade },
                MoneyChanged {
                    money: self.player.money,
                },
            ]
        };
        Ok(command)
    }
}
