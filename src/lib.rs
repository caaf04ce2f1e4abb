//! Random dungeon generator library crate.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod map;
pub mod rng;
pub mod svg;
