//! Grid mazes carved by randomized depth-first search.

use rand::RngCore;

use crate::error::GraphResult;
use crate::map::direction::Exits;
use crate::map::graph::{Graph, VertexId};

/// A maze over a grid of cells, `width` cells per row.
///
/// Cell `i` sits in row `i / width`, column `i % width`. Moving north steps to the next row
/// (`i + width`) and moving east to the next column (`i + 1`). The last row may be partial.
#[derive(Debug, Clone)]
pub struct Maze {
    cells: Graph<VertexId>,
    width: usize,
}

impl Maze {
    /// Creates `count` cells and carves a perfect maze through them.
    pub fn generate<R: RngCore + ?Sized>(count: usize, rng: &mut R) -> Self {
        let mut cells = Graph::with_capacity(count);
        for index in 0..count {
            cells.add_vertex(index);
        }
        cells.randomized_depth_first_search(rng);

        Maze {
            cells,
            width: count.isqrt(),
        }
    }

    /// Cells per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows, counting a partial last row.
    pub fn height(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.len().div_ceil(self.width)
        }
    }

    pub fn len(&self) -> usize {
        self.cells.get_size()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn graph(&self) -> &Graph<VertexId> {
        &self.cells
    }

    /// The sides of `cell` that have been carved open.
    pub fn openings(&self, cell: VertexId) -> GraphResult<Exits> {
        let mut exits = Exits::empty();
        for &neighbor in self.cells.get_edges(cell)? {
            if neighbor == cell + self.width {
                exits |= Exits::NORTH;
            } else if neighbor + self.width == cell {
                exits |= Exits::SOUTH;
            } else if neighbor == cell + 1 {
                exits |= Exits::EAST;
            } else if neighbor + 1 == cell {
                exits |= Exits::WEST;
            }
        }
        Ok(exits)
    }
}
