//! This module contains all the constants used by the generator and renderers.

/// The side length of each square tile, in SVG units.
pub const TILE_SIZE: i32 = 50;
/// The width of a passage, wall to wall.
pub const PASSAGE_SIZE: i32 = 10;
/// Possible side lengths of a room.
pub const ROOM_SIZES: [i32; 4] = [10, 30, 40, 50];
/// Room offsets inside a tile are snapped down to a multiple of this.
pub const ROOM_SNAP: i32 = 5;

/// The side length of each maze cell, in SVG units.
pub const MAZE_CELL_SIZE: i32 = 10;

/// Stroke applied to every wall segment.
pub const WALL_STYLE: &str = "stroke:white;stroke-width:2";

/// The number of tiles generated when none is configured.
pub const DEFAULT_TILE_COUNT: usize = 500;
/// The number of maze cells generated when none is configured.
pub const DEFAULT_MAZE_CELLS: usize = 400;

pub const DEFAULT_DUNGEON_OUTPUT: &str = "Dungeon_Map.svg";
pub const DEFAULT_MAZE_OUTPUT: &str = "Dungeon_Maze.svg";

/// Prefix of the environment variables read by the configuration loader.
pub const ENV_PREFIX: &str = "RDG_";
