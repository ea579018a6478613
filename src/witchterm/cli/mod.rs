mod commands;
mod logging;
mod panel;
mod setup;
mod terminal;

pub use commands::run;
