#![no_std]

mod eligibility;
mod schedule;

pub use eligibility::*;
pub use schedule::*;
