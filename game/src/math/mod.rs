pub use random::*;

mod random;

/// Plot coordinates on the field as `[x, y]`, row `y` and column `x`.
pub type Tile = [usize; 2];

pub trait TileMath {
    fn inside(&self, size: usize) -> bool;
}

impl TileMath for Tile {
    #[inline]
    fn inside(&self, size: usize) -> bool {
        self[0] < size && self[1] < size
    }
}
