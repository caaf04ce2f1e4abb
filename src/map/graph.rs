use rand::RngCore;
use smallvec::SmallVec;
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::rng::draw_index;

/// An identifier for a vertex, represented by its index in the graph's storage.
///
/// Removing a vertex shifts every greater index down by one, so an id is only valid until the
/// next call to [`Graph::remove_vertex`].
pub type VertexId = usize;

/// The neighbours of a single vertex. Grid layouts never exceed four.
pub type Neighbors = SmallVec<[VertexId; 4]>;

/// An undirected graph using an adjacency list representation.
///
/// Vertices are stored in a vector and their indices serve as their [`VertexId`]. Every edge is
/// recorded in both endpoints' neighbour lists. Parallel edges are allowed by [`Graph::add_edge`];
/// callers that need a simple graph check [`Graph::has_edge`] first.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    vertices: Vec<T>,
    edges: Vec<Neighbors>,
    /// Per-vertex markers used by [`Graph::randomized_depth_first_search`].
    visited: Vec<bool>,
}

impl<T> Graph<T> {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Graph {
            vertices: Vec::new(),
            edges: Vec::new(),
            visited: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            vertices: Vec::with_capacity(capacity),
            edges: Vec::with_capacity(capacity),
            visited: Vec::with_capacity(capacity),
        }
    }

    fn validate_index(&self, index: VertexId) -> GraphResult<()> {
        if index < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange {
                index,
                size: self.vertices.len(),
            })
        }
    }

    /// Adds a vertex with no edges and returns its id.
    pub fn add_vertex(&mut self, value: T) -> VertexId {
        let id = self.vertices.len();
        self.vertices.push(value);
        self.edges.push(Neighbors::new());
        self.visited.push(false);
        id
    }

    /// Connects the vertices at `a` and `b` in both directions.
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of range or if `a == b`.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> GraphResult<()> {
        self.validate_index(a)?;
        self.validate_index(b)?;
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }

        self.edges[a].push(b);
        self.edges[b].push(a);
        Ok(())
    }

    /// Removes one edge between `a` and `b`, returning whether one existed.
    pub fn remove_edge(&mut self, a: VertexId, b: VertexId) -> GraphResult<bool> {
        self.validate_index(a)?;
        self.validate_index(b)?;
        if a == b {
            return Ok(false);
        }

        let removed = remove_first(&mut self.edges[a], b);
        if removed {
            remove_first(&mut self.edges[b], a);
        }
        Ok(removed)
    }

    /// Removes the vertex at `index` along with all of its edges and returns its value.
    ///
    /// Every vertex after `index` moves down by one, and surviving edge lists are renumbered to
    /// match. Ids held by callers from before the removal must not be reused.
    pub fn remove_vertex(&mut self, index: VertexId) -> GraphResult<T> {
        self.validate_index(index)?;

        let neighbors = std::mem::take(&mut self.edges[index]);
        for neighbor in neighbors {
            remove_first(&mut self.edges[neighbor], index);
        }

        self.edges.remove(index);
        self.visited.remove(index);
        let value = self.vertices.remove(index);

        for neighbor in self.edges.iter_mut().flat_map(|list| list.iter_mut()) {
            if *neighbor > index {
                *neighbor -= 1;
            }
        }

        Ok(value)
    }

    /// Retrieves an immutable reference to a vertex's value.
    pub fn get_vertex(&self, index: VertexId) -> GraphResult<&T> {
        self.validate_index(index)?;
        Ok(&self.vertices[index])
    }

    /// Retrieves a mutable reference to a vertex's value.
    pub fn get_vertex_mut(&mut self, index: VertexId) -> GraphResult<&mut T> {
        self.validate_index(index)?;
        Ok(&mut self.vertices[index])
    }

    /// Returns the ids of every vertex connected to `index`.
    pub fn get_edges(&self, index: VertexId) -> GraphResult<&[VertexId]> {
        self.validate_index(index)?;
        Ok(&self.edges[index])
    }

    /// Returns the number of vertices in the graph.
    pub fn get_size(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if at least one edge joins `a` and `b`.
    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.edges.get(a).is_some_and(|list| list.contains(&b))
    }

    /// The number of undirected edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|list| list.len()).sum::<usize>() / 2
    }

    /// Iterates over every vertex together with its id.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &T)> {
        self.vertices.iter().enumerate()
    }

    /// Iterates mutably over every vertex together with its id.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (VertexId, &mut T)> {
        self.vertices.iter_mut().enumerate()
    }

    /// Drops every edge while keeping the vertices.
    pub fn clear_edges(&mut self) {
        self.edges.iter_mut().for_each(Neighbors::clear);
    }

    /// Carves a maze into the graph with a randomized depth-first search.
    ///
    /// The vertices are treated as cells of an implicit grid whose rows are
    /// `floor(sqrt(size))` cells wide. Starting from a random cell, the search repeatedly links
    /// the cell on top of its stack to a random unvisited grid neighbour, so the carved edges
    /// always form a spanning tree of the grid. The stack lives on the heap, so large grids do
    /// not grow the call stack.
    ///
    /// One value is drawn for the starting cell and one more for every link made.
    pub fn randomized_depth_first_search<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        let size = self.get_size();
        if size == 0 {
            return;
        }
        let width = size.isqrt();

        self.visited.fill(false);
        let mut unvisited: Vec<VertexId> = Vec::with_capacity(size);

        let start = draw_index(rng, size);
        self.visited[start] = true;
        unvisited.push(start);

        let mut carved = 0usize;
        while let Some(current) = unvisited.pop() {
            let candidates = self.unvisited_grid_neighbors(current, width);
            if candidates.is_empty() {
                continue;
            }

            unvisited.push(current);
            let next = candidates[draw_index(rng, candidates.len())];

            self.edges[current].push(next);
            self.edges[next].push(current);
            carved += 1;

            self.visited[next] = true;
            unvisited.push(next);
        }

        debug!(cells = size, width, start, carved, "Carved maze");
    }

    /// Grid neighbours of `current` that the search has not reached yet, in up, down, left,
    /// right order.
    fn unvisited_grid_neighbors(&self, current: VertexId, width: usize) -> Neighbors {
        let size = self.get_size();
        let mut neighbors = Neighbors::new();

        if current >= width && !self.visited[current - width] {
            neighbors.push(current - width);
        }
        if current + width < size && !self.visited[current + width] {
            neighbors.push(current + width);
        }
        if current % width > 0 && !self.visited[current - 1] {
            neighbors.push(current - 1);
        }
        if current % width < width - 1 && current != size - 1 && !self.visited[current + 1] {
            neighbors.push(current + 1);
        }

        neighbors
    }
}

impl<T: PartialEq> Graph<T> {
    /// Returns the id of the first vertex equal to `value`, or `None` if there is none.
    ///
    /// This is a linear scan.
    pub fn get_index_of(&self, value: &T) -> Option<VertexId> {
        self.vertices.iter().position(|vertex| vertex == value)
    }
}

// Default implementation for creating an empty graph.
impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn remove_first(list: &mut Neighbors, value: VertexId) -> bool {
    match list.iter().position(|&neighbor| neighbor == value) {
        Some(position) => {
            list.remove(position);
            true
        }
        None => false,
    }
}
