//! Stop types.

use std::collections::{BTreeSet, HashMap};

use super::Coordinates;

/// A bus stop known to the network.
///
/// A stop entry can exist before it is declared: a neighbour's road
/// distance or a bus route may mention it first. Such a stop has no
/// coordinates until it is declared.
#[derive(Debug, Clone, Default)]
pub struct Stop {
    name: String,
    coordinates: Option<Coordinates>,
    buses: BTreeSet<String>,
    road_distances: HashMap<String, u32>,
}

impl Stop {
    /// Create an undeclared stop with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the stop name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the coordinates if the stop has been declared.
    pub fn coordinates(&self) -> Option<&Coordinates> {
        self.coordinates.as_ref()
    }

    /// Returns true once the stop has been declared with coordinates.
    pub fn is_declared(&self) -> bool {
        self.coordinates.is_some()
    }

    /// Names of the buses serving this stop, sorted.
    pub fn buses(&self) -> &BTreeSet<String> {
        &self.buses
    }

    /// Declared road distance to a neighbouring stop in meters.
    pub fn road_distance_to(&self, neighbour: &str) -> Option<u32> {
        self.road_distances.get(neighbour).copied()
    }

    /// Sets (or overwrites) the coordinates.
    pub(crate) fn set_coordinates(&mut self, coordinates: Coordinates) {
        self.coordinates = Some(coordinates);
    }

    /// Records a bus serving this stop.
    pub(crate) fn add_bus(&mut self, bus: impl Into<String>) {
        self.buses.insert(bus.into());
    }

    /// Sets the road distance to a neighbour, overwriting any previous value.
    pub(crate) fn set_road_distance(&mut self, neighbour: impl Into<String>, meters: u32) {
        self.road_distances.insert(neighbour.into(), meters);
    }

    /// Sets the road distance to a neighbour only if none is recorded yet.
    ///
    /// Returns true if the distance was inserted.
    pub(crate) fn mirror_road_distance(&mut self, neighbour: &str, meters: u32) -> bool {
        if self.road_distances.contains_key(neighbour) {
            return false;
        }
        self.road_distances.insert(neighbour.to_string(), meters);
        true
    }
}
