//! Routing façade over the registry and the route context cache.
//!
//! Mutations take the topology write lock and bump a version counter.
//! Route queries reuse the cached [`RouteContext`] while its version is
//! current and rebuild it otherwise, so a stale graph is never searched.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::domain::{Bus, BusStats, Coordinates, DomainError, Route, RoutingSettings};
use crate::registry::Registry;
use crate::router::{RouteContext, RouteError};

/// Everything a route context is derived from.
#[derive(Debug, Default)]
struct Topology {
    registry: Registry,
    settings: Option<RoutingSettings>,
}

/// Thread-safe transit catalog.
///
/// Any number of readers may query concurrently; mutations are
/// serialized. A route query after a mutation sees the mutation.
#[derive(Debug, Default)]
pub struct TransitCatalog {
    topology: RwLock<Topology>,
    /// Bumped inside the topology write lock on every mutation
    version: AtomicU64,
    context: RwLock<Option<Arc<RouteContext>>>,
}

impl TransitCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare or update a stop. See [`Registry::add_stop`].
    pub fn add_stop<I>(&self, name: &str, coordinates: Coordinates, road_distances: I)
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        self.mutate(|topology| {
            topology
                .registry
                .add_stop(name, coordinates, road_distances)
        });
    }

    /// Record a bus. See [`Registry::add_bus`].
    pub fn add_bus(&self, bus: Bus) {
        self.mutate(|topology| topology.registry.add_bus(bus));
    }

    /// Replace the routing settings.
    pub fn set_settings(&self, settings: RoutingSettings) {
        self.mutate(|topology| topology.settings = Some(settings));
    }

    /// Statistics for a bus, or `None` if the bus is unknown.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the bus passes an undeclared stop.
    pub fn bus_stats(&self, name: &str) -> Result<Option<BusStats>, DomainError> {
        self.read_topology().registry.bus_stats(name)
    }

    /// Buses serving a declared stop, or `None` if it was never declared.
    pub fn stop_buses(&self, name: &str) -> Option<BTreeSet<String>> {
        self.read_topology().registry.stop_buses(name).cloned()
    }

    /// Fastest route between two stops, or `None` if unreachable.
    ///
    /// Builds the route context first if the topology changed since the
    /// last build.
    ///
    /// # Errors
    ///
    /// - [`RouteError::UnknownStop`] if either stop is not declared
    /// - [`RouteError::InvalidTopology`] if a bus uses an undeclared stop
    /// - [`RouteError::MissingSettings`] if no settings were given
    pub fn route(&self, from: &str, to: &str) -> Result<Option<Route>, RouteError> {
        let context = self.context()?;
        context.find_route(from, to)
    }

    /// Current topology version.
    pub fn topology_version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    /// Number of declared stops.
    pub fn stop_count(&self) -> usize {
        self.read_topology().registry.stop_count()
    }

    pub fn bus_count(&self) -> usize {
        self.read_topology().registry.bus_count()
    }

    /// Returns true if a route context for the current version is cached.
    pub fn has_current_context(&self) -> bool {
        let version = self.topology_version();
        self.read_context()
            .as_ref()
            .is_some_and(|ctx| ctx.version() == version)
    }

    /// The route context for the current topology, built if needed.
    fn context(&self) -> Result<Arc<RouteContext>, RouteError> {
        let version = self.topology_version();
        if let Some(ctx) = self.read_context().as_ref()
            && ctx.version() == version
        {
            debug!(version, "Route context cache hit");
            return Ok(Arc::clone(ctx));
        }

        // Holding the topology read lock keeps the version stable
        let topology = self.read_topology();
        let version = self.topology_version();

        let mut cached = self.write_context();
        if let Some(ctx) = cached.as_ref()
            && ctx.version() == version
        {
            return Ok(Arc::clone(ctx));
        }

        let settings = topology.settings.as_ref().ok_or(RouteError::MissingSettings)?;
        info!(version, "Building route context");
        let ctx = Arc::new(RouteContext::build(&topology.registry, settings, version)?);
        *cached = Some(Arc::clone(&ctx));

        Ok(ctx)
    }

    fn mutate<F>(&self, apply: F)
    where
        F: FnOnce(&mut Topology),
    {
        let mut topology = self
            .topology
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        apply(&mut topology);
        let version = self.version.fetch_add(1, Ordering::AcqRel) + 1;

        // Lock order is topology, then context, matching the rebuild path
        let dropped = self.write_context().take().is_some();
        debug!(version, dropped, "Topology changed");
    }

    fn read_topology(&self) -> RwLockReadGuard<'_, Topology> {
        self.topology.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_context(&self) -> RwLockReadGuard<'_, Option<Arc<RouteContext>>> {
        self.context.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_context(&self) -> RwLockWriteGuard<'_, Option<Arc<RouteContext>>> {
        self.context.write().unwrap_or_else(PoisonError::into_inner)
    }
}
