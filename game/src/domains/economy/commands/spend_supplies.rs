use crate::economy::Economy::{FertilizerChanged, SeedsChanged, TrowelChanged};
use crate::economy::EconomyError::{NoFertilizer, NoSeeds, NoTrowel};
use crate::economy::{Economy, EconomyDomain, EconomyError};

impl EconomyDomain {
    pub fn spend_seed(&mut self) -> Result<impl FnOnce() -> Vec<Economy> + '_, EconomyError> {
        if self.player.seeds == 0 {
            return Err(NoSeeds);
        }
        let command = move || {
            self.player.seeds -= 1;
            vec![SeedsChanged {
                seeds: self.player.seeds,
            }]
        };
        Ok(command)
    }

    pub fn spend_fertilizer(
        &mut self,
    ) -> Result<impl FnOnce() -> Vec<Economy> + '_, EconomyError> {
        if self.player.fertilizer == 0 {
            return Err(NoFertilizer);
        }
        let command = move || {
            self.player.fertilizer -= 1;
            vec![FertilizerChanged {
                fertilizer: self.player.fertilizer,
            }]
        };
        Ok(command)
    }

    pub fn wear_trowel(&mut self) -> Result<impl FnOnce() -> Vec<Economy> + '_, EconomyError> {
        let trowel = match self.player.trowel.as_mut() {
            Some(trowel) if trowel.durability > 0 => trowel,
            _ => return Err(NoTrowel),
        };
        let command = move || {
            trowel.durability -= 1;
            vec![TrowelChanged {
                trowel: Some(*trowel),
            }]
        };
        Ok(command)
    }
}
