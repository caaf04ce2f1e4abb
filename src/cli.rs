//! Command line interface.
//!
//! Flags that are not given stay out of the serialized form, so they never shadow values from
//! the environment when merged into the configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use strum_macros::Display;

#[derive(Debug, Parser, Serialize)]
#[command(name = "rdg", version, about = "Grow a random dungeon and render it to SVG")]
pub struct Cli {
    /// Number of tiles in the dungeon
    #[arg(short, long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiles: Option<usize>,

    /// Number of cells in the maze
    #[arg(long = "cells")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maze_cells: Option<usize>,

    /// Seed for the random number generator; a fresh one is picked and logged when omitted
    #[arg(short, long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Where to write the SVG document
    #[arg(short, long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    #[serde(skip)]
    pub command: Option<Command>,
}

/// What to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Subcommand, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Command {
    /// A tree of tiles grown on an open plane
    #[default]
    Dungeon,
    /// A perfect maze carved through a square grid
    Maze,
}
