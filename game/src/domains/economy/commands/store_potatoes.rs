use crate::economy::Economy::PotatoesChanged;
use crate::economy::{Economy, EconomyDomain};

impl EconomyDomain {
    pub fn store_potatoes(&mut self, amount: u32) -> Vec<Economy> {
        self.player.potatoes += amount;
        vec![PotatoesChanged {
            potatoes: self.player.potatoes,
        }]
    }
}
