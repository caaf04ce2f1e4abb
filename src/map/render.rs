//! SVG rendering of dungeon maps and mazes.

use glam::IVec2;

use crate::constants::{MAZE_CELL_SIZE, PASSAGE_SIZE, TILE_SIZE};
use crate::error::RenderError;
use crate::map::builder::DungeonMap;
use crate::map::direction::{Direction, Exits};
use crate::map::maze::Maze;
use crate::map::tile::{Room, Tile};
use crate::svg::SvgWriter;

/// Near edge of the centre passage, measured from a tile's origin.
const PASSAGE_LOW: i32 = TILE_SIZE / 2 - PASSAGE_SIZE / 2;
/// Far edge of the centre passage.
const PASSAGE_HIGH: i32 = TILE_SIZE / 2 + PASSAGE_SIZE / 2;

/// Handles rendering operations for dungeon maps.
pub struct DungeonRenderer;

impl DungeonRenderer {
    /// Renders every tile of the map to an SVG document.
    ///
    /// Tiles are shifted so the lowest coordinates land on the canvas origin. Each side of a
    /// tile's room is either a plain wall or, when the tile has an exit that way, a passage
    /// leading to the tile edge.
    pub fn render(map: &DungeonMap) -> Result<String, RenderError> {
        if !map.exits_placed() {
            return Err(RenderError::ExitsNotPlaced);
        }

        let mut svg = SvgWriter::new();
        let Some((min, max)) = map.bounds() else {
            svg.head(0, 0)?;
            svg.end()?;
            return Ok(svg.finish());
        };

        let size = (max - min + IVec2::ONE) * TILE_SIZE;
        svg.head(size.x, size.y)?;
        for tile in map.tiles() {
            Self::render_tile(&mut svg, tile, (tile.position - min) * TILE_SIZE)?;
        }
        svg.end()?;

        Ok(svg.finish())
    }

    /// Draws one tile whose origin sits at `origin` on the canvas.
    fn render_tile(svg: &mut SvgWriter, tile: &Tile, origin: IVec2) -> Result<(), RenderError> {
        let room = tile.room.unwrap_or(Room::centered_passage());
        let (w, h) = (room.width, room.height);
        let corner = origin + room.offset;
        let (x, y) = (corner.x, corner.y);
        let (tx, ty) = (origin.x, origin.y);

        if tile.exits.has(Direction::North) {
            svg.corner(
                IVec2::new(x, y + h),
                IVec2::new(tx + PASSAGE_LOW, y + h),
                IVec2::new(tx + PASSAGE_LOW, ty + TILE_SIZE),
            )?;
            svg.corner(
                IVec2::new(tx + PASSAGE_HIGH, ty + TILE_SIZE),
                IVec2::new(tx + PASSAGE_HIGH, y + h),
                IVec2::new(x + w, y + h),
            )?;
        } else {
            svg.line(IVec2::new(x, y + h), IVec2::new(x + w, y + h))?;
        }

        if tile.exits.has(Direction::East) {
            svg.corner(
                IVec2::new(x + w, y + h),
                IVec2::new(x + w, ty + PASSAGE_HIGH),
                IVec2::new(tx + TILE_SIZE, ty + PASSAGE_HIGH),
            )?;
            svg.corner(
                IVec2::new(tx + TILE_SIZE, ty + PASSAGE_LOW),
                IVec2::new(x + w, ty + PASSAGE_LOW),
                IVec2::new(x + w, y),
            )?;
        } else {
            svg.line(IVec2::new(x + w, y), IVec2::new(x + w, y + h))?;
        }

        if tile.exits.has(Direction::South) {
            svg.corner(
                IVec2::new(x, y),
                IVec2::new(tx + PASSAGE_LOW, y),
                IVec2::new(tx + PASSAGE_LOW, ty),
            )?;
            svg.corner(
                IVec2::new(tx + PASSAGE_HIGH, ty),
                IVec2::new(tx + PASSAGE_HIGH, y),
                IVec2::new(x + w, y),
            )?;
        } else {
            svg.line(IVec2::new(x, y), IVec2::new(x + w, y))?;
        }

        if tile.exits.has(Direction::West) {
            svg.corner(
                IVec2::new(x, y + h),
                IVec2::new(x, ty + PASSAGE_HIGH),
                IVec2::new(tx, ty + PASSAGE_HIGH),
            )?;
            svg.corner(
                IVec2::new(tx, ty + PASSAGE_LOW),
                IVec2::new(x, ty + PASSAGE_LOW),
                IVec2::new(x, y),
            )?;
        } else {
            svg.line(IVec2::new(x, y), IVec2::new(x, y + h))?;
        }

        Ok(())
    }
}

/// Handles rendering operations for grid mazes.
pub struct MazeRenderer;

impl MazeRenderer {
    /// Renders the maze as one wall segment per closed cell side.
    ///
    /// Row 0 is drawn along the top of the canvas and each following row one cell further down.
    /// The canvas keeps one spare row below the maze.
    pub fn render(maze: &Maze) -> Result<String, RenderError> {
        let count = maze.len();
        let root = count.isqrt();
        let side = if root * root < count { root + 1 } else { root };
        let rows = side + 1;

        let mut svg = SvgWriter::new();
        svg.head(maze.width() as i32 * MAZE_CELL_SIZE, rows as i32 * MAZE_CELL_SIZE)?;

        for cell in 0..count {
            let column = (cell % maze.width()) as i32;
            let row = (cell / maze.width()) as i32;
            let (x, y) = (column * MAZE_CELL_SIZE, row * MAZE_CELL_SIZE);
            let open = maze.openings(cell).unwrap_or(Exits::empty());
            Self::render_cell(&mut svg, open, x, y)?;
        }

        svg.end()?;
        Ok(svg.finish())
    }

    fn render_cell(svg: &mut SvgWriter, open: Exits, x: i32, y: i32) -> Result<(), RenderError> {
        let s = MAZE_CELL_SIZE;
        if !open.has(Direction::North) {
            svg.line(IVec2::new(x, y + s), IVec2::new(x + s, y + s))?;
        }
        if !open.has(Direction::East) {
            svg.line(IVec2::new(x + s, y), IVec2::new(x + s, y + s))?;
        }
        if !open.has(Direction::South) {
            svg.line(IVec2::new(x, y), IVec2::new(x + s, y))?;
        }
        if !open.has(Direction::West) {
            svg.line(IVec2::new(x, y), IVec2::new(x, y + s))?;
        }
        Ok(())
    }
}
