//! Centralized error types for the dungeon generator.
//!
//! Every error in this crate is an invariant breach or a rejected input. Nothing here is
//! transient, so callers should surface these immediately instead of retrying.

use std::io;

use crate::map::graph::VertexId;

/// Main error type for the dungeon generator.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum DungeonError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised by the indexed graph container.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Index {index} out of range for graph of size {size}")]
    IndexOutOfRange { index: VertexId, size: usize },

    #[error("Refusing to connect vertex {0} to itself")]
    SelfLoop(VertexId),
}

/// Errors raised while growing a layout or resolving its exits.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The frontier ran dry before every tile was placed.
    #[error("Frontier exhausted after placing {placed} of {requested} tiles")]
    LayoutExhausted { placed: usize, requested: usize },

    /// A tree edge joins two tiles that are not one cardinal step apart.
    #[error("Tiles {from} and {to} are connected but not cardinally adjacent")]
    InvalidAdjacency { from: VertexId, to: VertexId },

    #[error("Tiles {first} and {second} occupy the same position")]
    Overlap { first: VertexId, second: VertexId },

    #[error("Layout is not a spanning tree: {vertices} vertices, {edges} edges, {reachable} reachable from the root")]
    NotATree {
        vertices: usize,
        edges: usize,
        reachable: usize,
    },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

/// Errors raised while producing SVG markup.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("Exits have not been placed on this map")]
    ExitsNotPlaced,

    #[error("Formatting failed: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// Errors raised while loading or validating configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to extract configuration: {0}")]
    Extract(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Extract(Box::new(err))
    }
}

pub type GraphResult<T> = Result<T, GraphError>;

pub type LayoutResult<T> = Result<T, LayoutError>;

/// Result type for top-level operations.
pub type DungeonResult<T> = Result<T, DungeonError>;
