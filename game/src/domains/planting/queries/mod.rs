pub use count_plots::*;
pub use get_plot::*;

mod count_plots;
mod get_plot;
