//! Command line front end. Everything that touches the terminal lives here.

mod commands;
mod print;
mod render;
mod setup;

pub use commands::{error_message, exit_code, run};
