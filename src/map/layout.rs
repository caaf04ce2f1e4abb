//! Frontier growth of a dungeon layout on the unbounded integer plane.
//!
//! The layout starts from a single cell at the origin and repeatedly connects a random
//! unplaced cardinal neighbour of some placed cell. Each placement adds exactly one vertex and
//! one edge, so the result is always a tree. The grown paths cluster into a roughly circular
//! blob around the origin.

use std::collections::HashMap;

use glam::IVec2;
use rand::RngCore;
use tracing::{debug, trace};

use crate::error::{LayoutError, LayoutResult};
use crate::map::direction::Direction;
use crate::map::graph::{Graph, VertexId};
use crate::map::tile::Tile;
use crate::rng::draw_index;

/// A candidate connection from a placed cell to an unplaced cardinal neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEdge {
    pub origin: IVec2,
    pub target: IVec2,
}

/// The unexplored edges of a growing layout, in insertion order.
#[derive(Debug, Default)]
struct Frontier {
    edges: Vec<FrontierEdge>,
}

impl Frontier {
    /// Offers every unoccupied neighbour of `origin`.
    fn extend_from(&mut self, origin: IVec2, occupied: &HashMap<IVec2, VertexId>) {
        for dir in Direction::GROWTH_ORDER {
            let target = origin + dir.as_ivec2();
            if !occupied.contains_key(&target) {
                self.edges.push(FrontierEdge { origin, target });
            }
        }
    }

    /// Picks an edge uniformly at random with a single draw.
    fn select<R: RngCore + ?Sized>(&self, rng: &mut R) -> Option<FrontierEdge> {
        if self.edges.is_empty() {
            return None;
        }
        Some(self.edges[draw_index(rng, self.edges.len())])
    }

    /// Drops every edge leading to `target`, which has just been placed.
    fn purge(&mut self, target: IVec2) {
        self.edges.retain(|edge| edge.target != target);
    }

    fn len(&self) -> usize {
        self.edges.len()
    }
}

/// Grows a spanning tree over every tile in `tiles` and writes the positions and edges onto it.
///
/// Existing edges are discarded. Tile 0 is placed at the origin; every following tile is placed
/// next to an already placed one, in index order. Exactly one value is drawn per placed tile
/// after the first, so the same seed always yields the same layout. An empty graph is left
/// untouched.
///
/// # Errors
///
/// Returns [`LayoutError::LayoutExhausted`] if the frontier empties before every tile is
/// placed. That cannot happen on an unbounded plane and indicates a bookkeeping bug.
pub fn generate_dungeon_layout<R: RngCore + ?Sized>(tiles: &mut Graph<Tile>, rng: &mut R) -> LayoutResult<()> {
    let requested = tiles.get_size();
    tiles.clear_edges();
    if requested == 0 {
        debug!("No tiles to place");
        return Ok(());
    }

    let cells = grow(requested, rng)?;

    for (index, &position) in cells.iter() {
        tiles.get_vertex_mut(index)?.position = position;
        for &neighbor in cells.get_edges(index)? {
            // Each undirected edge is copied once, from its lower endpoint
            if neighbor > index {
                tiles.add_edge(index, neighbor)?;
            }
        }
    }

    Ok(())
}

/// Places `requested` cells and returns the coordinate graph, indexed in placement order.
fn grow<R: RngCore + ?Sized>(requested: usize, rng: &mut R) -> LayoutResult<Graph<IVec2>> {
    let mut growth = Growth::rooted(requested);
    growth.place_until(requested, rng)?;

    debug!(
        tiles = requested,
        edges = growth.cells.edge_count(),
        frontier = growth.frontier.len(),
        "Grew dungeon layout"
    );

    Ok(growth.cells)
}

/// A layout in progress: the placed cells, their occupancy index and the open frontier.
#[derive(Debug)]
struct Growth {
    cells: Graph<IVec2>,
    occupied: HashMap<IVec2, VertexId>,
    frontier: Frontier,
}

impl Growth {
    /// A single cell at the origin with its four neighbours on the frontier.
    fn rooted(capacity: usize) -> Self {
        let mut growth = Growth {
            cells: Graph::with_capacity(capacity),
            occupied: HashMap::with_capacity(capacity),
            frontier: Frontier::default(),
        };

        let root = growth.cells.add_vertex(IVec2::ZERO);
        growth.occupied.insert(IVec2::ZERO, root);
        growth.frontier.extend_from(IVec2::ZERO, &growth.occupied);
        growth
    }

    /// Places cells from the frontier, one draw each, until `requested` cells exist.
    fn place_until<R: RngCore + ?Sized>(&mut self, requested: usize, rng: &mut R) -> LayoutResult<()> {
        while self.cells.get_size() < requested {
            let placed = self.cells.get_size();
            let FrontierEdge { origin, target } = self
                .frontier
                .select(rng)
                .ok_or(LayoutError::LayoutExhausted { placed, requested })?;

            let target_id = self.cells.add_vertex(target);
            self.occupied.insert(target, target_id);
            self.cells.add_edge(self.occupied[&origin], target_id)?;

            self.frontier.purge(target);
            self.frontier.extend_from(target, &self.occupied);

            trace!(%origin, %target, frontier = self.frontier.len(), "Placed tile {target_id}");
        }
        Ok(())
    }
}
