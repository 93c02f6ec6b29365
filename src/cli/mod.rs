pub mod commands;
pub mod display;
pub mod resource;

pub use commands::{CliArgs, Commands};
