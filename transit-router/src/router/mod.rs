//! Shortest-time routing over the bus network.
//!
//! Every declared stop becomes two vertices: one for arriving at the stop
//! and one for departing from it. A wait edge joins them, charging the
//! configured wait time. Travel edges run from the departure vertex of a
//! stop to the arrival vertex of every later stop on the same bus run,
//! so a single edge is one ride without alighting.
//!
//! The graph is built once per [`RouteContext`] and searched with
//! Dijkstra's algorithm for every query.

mod builder;
mod context;
mod error;
mod graph;
mod reconstruct;
mod search;

pub use builder::GraphBuilder;
pub use context::RouteContext;
pub use error::RouteError;
pub use graph::{Edge, EdgeId, EdgeKind, Graph, StopVertices, VertexId};
pub use reconstruct::reconstruct;
pub use search::{Path, shortest_path};
