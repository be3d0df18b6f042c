pub use clear_plot::*;
pub use dig_plot::*;
pub use expand_field::*;
pub use fertilize_plot::*;
pub use harvest_plot::*;
pub use sow_plot::*;
pub use water_plot::*;

mod clear_plot;
mod dig_plot;
mod expand_field;
mod fertilize_plot;
mod harvest_plot;
mod sow_plot;
mod water_plot;
