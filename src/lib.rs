#![doc = include_str!("../README.md")]

pub mod diff;
pub mod gaps;
pub mod introns;
pub mod models;
pub mod rescale;
pub mod table;
pub mod tests;
pub mod utils;

pub use crate::rescale::{shorten_gaps, ShortenGaps};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
