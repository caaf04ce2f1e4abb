//! This module defines the dungeon map and the graph it is built on.

pub mod builder;
pub mod direction;
pub mod graph;
pub mod layout;
pub mod maze;
pub mod render;
pub mod tile;
