#![no_std]

mod config;
mod error;
mod phase;

pub use config::*;
pub use error::*;
pub use phase::*;

/// Seconds in one day, used by schedules and tests
pub const DAY: u64 = 86_400;
