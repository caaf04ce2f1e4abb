//! Dungeon map construction: layout growth, exit placement and room furnishing.

use std::collections::HashMap;

use glam::IVec2;
use pathfinding::prelude::bfs_reach;
use rand::RngCore;
use tracing::{debug, error, info};

use crate::error::{GraphResult, LayoutError, LayoutResult};
use crate::map::direction::{Direction, Exits};
use crate::map::graph::{Graph, VertexId};
use crate::map::layout;
use crate::map::tile::{Room, Tile};

/// A dungeon of N tiles connected into a tree.
///
/// The map owns an adjacency list of [`Tile`]s holding each tile's position and passages.
/// Positions and edges are written by [`DungeonMap::generate_dungeon_layout`]; passage
/// directions are then inferred from neighbouring positions by [`DungeonMap::place_exits`].
#[derive(Debug, Clone)]
pub struct DungeonMap {
    rooms: Graph<Tile>,
    exits_placed: bool,
}

impl DungeonMap {
    /// Creates a map of `size` placeholder tiles with no position, exits or edges.
    pub fn new(size: usize) -> Self {
        let mut rooms = Graph::with_capacity(size);
        for _ in 0..size {
            rooms.add_vertex(Tile::default());
        }

        DungeonMap {
            rooms,
            exits_placed: false,
        }
    }

    /// Wraps an existing tile graph, such as a hand-built one. Exits are considered unplaced.
    pub fn from_graph(rooms: Graph<Tile>) -> Self {
        DungeonMap {
            rooms,
            exits_placed: false,
        }
    }

    /// Builds a complete map in one go: layout, exits and rooms, validated along the way.
    pub fn generate<R: RngCore + ?Sized>(size: usize, rng: &mut R) -> LayoutResult<Self> {
        let mut map = DungeonMap::new(size);
        map.generate_dungeon_layout(rng)?;
        map.validate_layout()?;
        map.place_exits()?;
        map.furnish_rooms(rng);

        info!(tiles = size, "Generated dungeon map");
        Ok(map)
    }

    /// Grows the tile layout, discarding any previous layout, exits and rooms.
    ///
    /// See [`layout::generate_dungeon_layout`] for the growth rules.
    pub fn generate_dungeon_layout<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> LayoutResult<()> {
        for (_, tile) in self.rooms.iter_mut() {
            *tile = Tile::default();
        }
        self.exits_placed = false;

        layout::generate_dungeon_layout(&mut self.rooms, rng)
    }

    /// Sets the exit flags of every tile from the positions of its neighbours.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidAdjacency`] for an edge whose endpoints are not exactly
    /// one cardinal step apart. The pass stops at the first such edge and no tile is modified.
    pub fn place_exits(&mut self) -> LayoutResult<()> {
        let mut resolved = Vec::with_capacity(self.rooms.get_size());
        for (index, tile) in self.rooms.iter() {
            let mut exits = Exits::empty();
            for &neighbor in self.rooms.get_edges(index)? {
                let offset = self.rooms.get_vertex(neighbor)?.position - tile.position;
                let Some(direction) = Direction::from_offset(offset) else {
                    error!(from = index, to = neighbor, %offset, "Connected tiles are not adjacent");
                    return Err(LayoutError::InvalidAdjacency { from: index, to: neighbor });
                };
                exits |= direction.as_exit();
            }
            resolved.push(exits);
        }

        for ((_, tile), exits) in self.rooms.iter_mut().zip(resolved) {
            tile.exits = exits;
        }

        self.exits_placed = true;
        debug!(tiles = self.rooms.get_size(), "Placed exits");
        Ok(())
    }

    /// Rolls a room for every tile, in index order.
    pub fn furnish_rooms<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        let mut passages = 0usize;
        for (_, tile) in self.rooms.iter_mut() {
            let room = Room::random(rng);
            passages += usize::from(room.is_passage());
            tile.room = Some(room);
        }

        debug!(rooms = self.rooms.get_size(), passages, "Furnished rooms");
    }

    /// Checks that the tiles form a collision-free spanning tree rooted at tile 0.
    pub fn validate_layout(&self) -> LayoutResult<()> {
        let vertices = self.rooms.get_size();
        if vertices == 0 {
            return Ok(());
        }

        let mut seen: HashMap<IVec2, VertexId> = HashMap::with_capacity(vertices);
        for (index, tile) in self.rooms.iter() {
            if let Some(&first) = seen.get(&tile.position) {
                return Err(LayoutError::Overlap { first, second: index });
            }
            seen.insert(tile.position, index);
        }

        let edges = self.rooms.edge_count();
        let reachable = bfs_reach(0, |&index: &VertexId| {
            self.rooms.get_edges(index).unwrap_or(&[]).iter().copied()
        })
        .count();

        if edges + 1 != vertices || reachable != vertices {
            return Err(LayoutError::NotATree {
                vertices,
                edges,
                reachable,
            });
        }

        Ok(())
    }

    /// The underlying tile graph.
    pub fn graph(&self) -> &Graph<Tile> {
        &self.rooms
    }

    pub fn get_size(&self) -> usize {
        self.rooms.get_size()
    }

    pub fn get_vertex(&self, index: VertexId) -> GraphResult<&Tile> {
        self.rooms.get_vertex(index)
    }

    pub fn get_edges(&self, index: VertexId) -> GraphResult<&[VertexId]> {
        self.rooms.get_edges(index)
    }

    /// Iterates over the tiles in index order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.rooms.iter().map(|(_, tile)| tile)
    }

    /// Whether [`DungeonMap::place_exits`] has run since the layout last changed.
    pub fn exits_placed(&self) -> bool {
        self.exits_placed
    }

    /// The smallest and largest tile coordinates on each axis, or `None` for an empty map.
    pub fn bounds(&self) -> Option<(IVec2, IVec2)> {
        self.tiles().map(|tile| tile.position).fold(None, |bounds, position| match bounds {
            None => Some((position, position)),
            Some((min, max)) => Some((min.min(position), max.max(position))),
        })
    }
}
