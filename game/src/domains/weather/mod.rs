pub use commands::*;
pub use domain::*;
pub use update::*;

mod commands;
mod domain;
mod update;
