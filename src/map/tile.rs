//! Tiles and the rooms drawn inside them.

use glam::IVec2;
use rand::RngCore;

use crate::constants::{PASSAGE_SIZE, ROOM_SIZES, ROOM_SNAP, TILE_SIZE};
use crate::map::direction::Exits;
use crate::rng::draw_index;

/// A unit of dungeon space with a grid position and a set of passage directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tile {
    /// Grid position relative to the first tile, which sits at the origin. Can be negative.
    pub position: IVec2,
    /// The passages leaving this tile. Only set once the layout is complete.
    pub exits: Exits,
    /// The room drawn inside the tile, if one has been furnished. Only used for rendering.
    pub room: Option<Room>,
}

/// A rectangular room inside a tile, in tile-local SVG units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub width: i32,
    pub height: i32,
    /// The corner of the room closest to the tile's origin.
    pub offset: IVec2,
}

impl Room {
    /// A passage-sized room centred in the tile.
    pub const fn centered_passage() -> Room {
        let centre = TILE_SIZE / 2 - PASSAGE_SIZE / 2;
        Room {
            width: PASSAGE_SIZE,
            height: PASSAGE_SIZE,
            offset: IVec2::new(centre, centre),
        }
    }

    /// Rolls a room size and position.
    ///
    /// The room always covers the passage-sized square at the centre of the tile, so passages
    /// leaving through any side meet its walls. Draws four values: width, height, x, y.
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Room {
        let width = ROOM_SIZES[draw_index(rng, ROOM_SIZES.len())];
        let height = ROOM_SIZES[draw_index(rng, ROOM_SIZES.len())];
        let x = Self::random_offset(rng, width);
        let y = Self::random_offset(rng, height);

        Room {
            width,
            height,
            offset: IVec2::new(x, y),
        }
    }

    /// A room as narrow as a passage in either dimension is drawn as a corridor.
    pub fn is_passage(&self) -> bool {
        self.width == PASSAGE_SIZE || self.height == PASSAGE_SIZE
    }

    /// The inclusive range of offsets along one axis for a room of the given extent.
    pub fn offset_range(extent: i32) -> (i32, i32) {
        let passage_edge = TILE_SIZE / 2 - PASSAGE_SIZE / 2;
        let min = (passage_edge - (extent - PASSAGE_SIZE)).max(0);
        let max = (TILE_SIZE - extent).min(passage_edge);
        (min, max)
    }

    fn random_offset<R: RngCore + ?Sized>(rng: &mut R, extent: i32) -> i32 {
        let (min, max) = Self::offset_range(extent);
        let offset = min + draw_index(rng, (max - min + 1) as usize) as i32;
        offset - offset % ROOM_SNAP
    }
}
