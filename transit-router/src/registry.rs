//! Stop and bus registry.
//!
//! Holds the network topology as declared by the caller: stops with their
//! coordinates and road distances, and bus routes. Answers the plain
//! statistics queries that need no graph search.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{trace, warn};

use crate::domain::{Bus, BusStats, Coordinates, DomainError, RouteLength, Stop, distance};

/// The declared network topology.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    stops: BTreeMap<String, Stop>,
    buses: BTreeMap<String, Bus>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a stop, or update an existing one.
    ///
    /// Coordinates are overwritten. Road distances are merged per
    /// neighbour, the last write winning. For every neighbour the reverse
    /// distance is filled in unless the neighbour already declares one.
    pub fn add_stop<I>(&mut self, name: &str, coordinates: Coordinates, road_distances: I)
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        self.stop_entry(name).set_coordinates(coordinates);

        for (neighbour, meters) in road_distances {
            self.stop_entry(name).set_road_distance(neighbour.as_str(), meters);
            if self.stop_entry(&neighbour).mirror_road_distance(name, meters) {
                trace!(from = %neighbour, to = %name, meters, "Mirrored road distance");
            }
        }
    }

    /// Record a bus and register it with every stop it serves.
    ///
    /// The first bus declared under a name is kept. A later declaration
    /// with the same name still registers the name with its stops, but
    /// its route is dropped.
    pub fn add_bus(&mut self, bus: Bus) {
        for stop in bus.unique_stops() {
            self.stop_entry(stop).add_bus(bus.name());
        }

        if self.buses.contains_key(bus.name()) {
            warn!(bus = bus.name(), "Dropping route of duplicate bus declaration");
            return;
        }
        self.buses.insert(bus.name().to_string(), bus);
    }

    /// Statistics for a bus, or `None` if no such bus exists.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the bus route passes an undeclared stop.
    pub fn bus_stats(&self, name: &str) -> Result<Option<BusStats>, DomainError> {
        let Some(bus) = self.buses.get(name) else {
            return Ok(None);
        };

        bus.stats(|from, to| self.hop_length(from, to)).map(Some)
    }

    /// Buses serving a declared stop, or `None` if the stop was never
    /// declared.
    pub fn stop_buses(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.stops
            .get(name)
            .filter(|stop| stop.is_declared())
            .map(Stop::buses)
    }

    /// Declared road distance between two stops in meters, 0 if none.
    pub fn road_distance(&self, from: &str, to: &str) -> u32 {
        self.stops
            .get(from)
            .and_then(|stop| stop.road_distance_to(to))
            .unwrap_or(0)
    }

    /// Coordinates of a declared stop.
    pub fn coordinates(&self, name: &str) -> Result<&Coordinates, DomainError> {
        self.stops
            .get(name)
            .and_then(Stop::coordinates)
            .ok_or_else(|| DomainError::UndeclaredStop(name.to_string()))
    }

    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stops.get(name)
    }

    pub fn bus(&self, name: &str) -> Option<&Bus> {
        self.buses.get(name)
    }

    /// All known stops, declared or not, ordered by name.
    pub fn stops(&self) -> impl Iterator<Item = &Stop> {
        self.stops.values()
    }

    /// All buses, ordered by name.
    pub fn buses(&self) -> impl Iterator<Item = &Bus> {
        self.buses.values()
    }

    /// Number of declared stops.
    pub fn stop_count(&self) -> usize {
        self.stops.values().filter(|stop| stop.is_declared()).count()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    fn hop_length(&self, from: &str, to: &str) -> Result<RouteLength, DomainError> {
        let geo = distance(self.coordinates(from)?, self.coordinates(to)?);
        let road = f64::from(self.road_distance(from, to));
        Ok(RouteLength::new(geo, road))
    }

    fn stop_entry(&mut self, name: &str) -> &mut Stop {
        self.stops
            .entry(name.to_string())
            .or_insert_with(|| Stop::new(name))
    }
}
