#![warn(clippy::all, clippy::correctness)]
#![warn(rust_2018_idioms)]
// #![warn(clippy::pedantic)]

pub mod cli;
pub mod config;
pub mod player;
pub mod playlist;
pub mod remote;
pub mod ui;
pub mod utils;

#[macro_use]
extern crate log;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
