#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod bot;
mod common;
mod config;
#[cfg(feature = "std")]
pub mod console;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod ship;

pub use board::*;
pub use bot::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use ship::*;
