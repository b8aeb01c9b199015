pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::{Cli, Commands, DirectionArg, StudentAction};
