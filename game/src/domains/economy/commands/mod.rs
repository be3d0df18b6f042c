pub use buy_item::*;
pub use charge::*;
pub use install_upgrade::*;
pub use sell_potatoes::*;
pub use spend_supplies::*;
pub use store_potatoes::*;

mod buy_item;
mod charge;
mod install_upgrade;
mod sell_potatoes;
mod spend_supplies;
mod store_potatoes;
