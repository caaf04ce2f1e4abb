#![allow(dead_code)]

use glam::IVec2;
use rand::RngCore;
use rand_chacha::ChaCha8Rng;
use rdg::map::graph::Graph;
use rdg::map::tile::Tile;

/// A generator that replays a fixed list of draws, wrapping around at the end.
pub struct ScriptedRng {
    draws: Vec<u32>,
    next: usize,
}

impl ScriptedRng {
    pub fn new(draws: impl Into<Vec<u32>>) -> Self {
        let draws = draws.into();
        assert!(!draws.is_empty(), "a scripted generator needs at least one draw");
        ScriptedRng { draws, next: 0 }
    }

    /// The number of values drawn so far.
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.draws[self.next % self.draws.len()];
        self.next += 1;
        value
    }

    fn next_u64(&mut self) -> u64 {
        u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

pub fn rng(seed: u64) -> ChaCha8Rng {
    rdg::rng::seeded(seed)
}

/// A tile graph with the given positions and edges and no exits.
pub fn tile_graph(positions: &[(i32, i32)], edges: &[(usize, usize)]) -> Graph<Tile> {
    let mut graph = Graph::new();
    for &(x, y) in positions {
        graph.add_vertex(Tile {
            position: IVec2::new(x, y),
            ..Tile::default()
        });
    }
    for &(a, b) in edges {
        graph.add_edge(a, b).unwrap();
    }
    graph
}
