//! The built, immutable routing state for one topology version.

use std::collections::HashMap;

use tracing::debug;

use super::builder::GraphBuilder;
use super::error::RouteError;
use super::graph::{Graph, StopVertices};
use super::reconstruct::reconstruct;
use super::search::shortest_path;
use crate::domain::{Route, RoutingSettings};
use crate::registry::Registry;

/// Graph and lookup tables built from one registry snapshot.
///
/// A context never changes after it is built. It records the topology
/// version it was built from so its owner can tell when it is stale.
#[derive(Debug)]
pub struct RouteContext {
    graph: Graph,
    stops: HashMap<String, StopVertices>,
    version: u64,
}

impl RouteContext {
    /// Build a context for `registry` under `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidTopology`] if a bus runs through an
    /// undeclared stop.
    pub fn build(
        registry: &Registry,
        settings: &RoutingSettings,
        version: u64,
    ) -> Result<Self, RouteError> {
        let (graph, stops) = GraphBuilder::new(registry, settings).build()?;
        debug!(version, "Route context ready");

        Ok(Self {
            graph,
            stops,
            version,
        })
    }

    /// Topology version this context was built from.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Vertices of a stop, if the stop is part of the graph.
    pub fn vertices(&self, stop: &str) -> Option<StopVertices> {
        self.stops.get(stop).copied()
    }

    /// Fastest itinerary from `from` to `to`.
    ///
    /// The search starts at the origin's departure vertex and ends at the
    /// destination's arrival vertex. Returns `Ok(None)` when the
    /// destination cannot be reached. A query from a stop to itself is
    /// an empty route.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownStop`] if either stop is not part of
    /// the graph.
    pub fn find_route(&self, from: &str, to: &str) -> Result<Option<Route>, RouteError> {
        let origin = self.lookup(from)?;
        let destination = self.lookup(to)?;

        if from == to {
            return Ok(Some(Route::empty()));
        }

        let route = shortest_path(&self.graph, origin.departure, destination.arrival)
            .map(|path| reconstruct(&self.graph, &path));
        Ok(route)
    }

    fn lookup(&self, stop: &str) -> Result<StopVertices, RouteError> {
        self.vertices(stop)
            .ok_or_else(|| RouteError::UnknownStop(stop.to_string()))
    }
}
