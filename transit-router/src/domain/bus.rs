//! Bus route types.

use std::collections::BTreeSet;
use std::ops::AddAssign;
use std::sync::OnceLock;

use super::DomainError;

/// How a bus runs along its declared stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteType {
    /// The declared stops are driven once, in order (first stop usually
    /// repeated at the end).
    Circular,
    /// The declared stops are driven forward, then back to the start.
    Linear,
}

impl RouteType {
    /// Map the wire-level `is_roundtrip` flag to a route type.
    pub fn from_roundtrip(is_roundtrip: bool) -> Self {
        if is_roundtrip {
            RouteType::Circular
        } else {
            RouteType::Linear
        }
    }
}

/// Accumulated geographic and road length of a route, in meters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RouteLength {
    /// Great-circle length
    pub geo: f64,
    /// Declared road length
    pub road: f64,
}

impl RouteLength {
    pub fn new(geo: f64, road: f64) -> Self {
        Self { geo, road }
    }

    /// Ratio of road length to geographic length.
    ///
    /// Returns 0 when the geographic length is zero.
    pub fn curvature(&self) -> f64 {
        if self.geo == 0.0 {
            0.0
        } else {
            self.road / self.geo
        }
    }
}

impl AddAssign for RouteLength {
    fn add_assign(&mut self, other: Self) {
        self.geo += other.geo;
        self.road += other.road;
    }
}

/// Aggregate statistics for one bus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusStats {
    /// Stops visited on a full run, counting repeats
    pub stop_count: usize,
    /// Distinct stops on the route
    pub unique_stop_count: usize,
    /// Length of a full run
    pub length: RouteLength,
}

/// A bus route.
///
/// The route length is computed on the first stats query and memoized for
/// the lifetime of the bus. Later changes to road distances or stop
/// coordinates do not refresh it.
#[derive(Debug, Clone)]
pub struct Bus {
    name: String,
    route_type: RouteType,
    stops: Vec<String>,
    unique_stops: BTreeSet<String>,
    length: OnceLock<RouteLength>,
}

impl Bus {
    /// Create a bus running over `stops` in the given manner.
    pub fn new(name: impl Into<String>, route_type: RouteType, stops: Vec<String>) -> Self {
        let unique_stops = stops.iter().cloned().collect();
        Self {
            name: name.into(),
            route_type,
            stops,
            unique_stops,
            length: OnceLock::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn route_type(&self) -> RouteType {
        self.route_type
    }

    /// The stops as declared.
    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    /// The distinct stops, sorted.
    pub fn unique_stops(&self) -> &BTreeSet<String> {
        &self.unique_stops
    }

    /// Number of stops visited on a full run.
    ///
    /// A linear bus visits every stop twice except the turnaround stop.
    pub fn stop_count(&self) -> usize {
        match self.route_type {
            RouteType::Circular => self.stops.len(),
            RouteType::Linear => (self.stops.len() * 2).saturating_sub(1),
        }
    }

    /// The stop sequence a vehicle actually drives.
    ///
    /// Circular buses use the declared stops; linear buses append the
    /// declared stops in reverse, without repeating the turnaround stop
    /// (A-B-C becomes A, B, C, B, A).
    pub fn traversal(&self) -> Vec<&str> {
        let forward = self.stops.iter().map(String::as_str);
        match self.route_type {
            RouteType::Circular => forward.collect(),
            RouteType::Linear => forward
                .chain(self.stops.iter().rev().skip(1).map(String::as_str))
                .collect(),
        }
    }

    /// Length of a full run, computed once with `measure`.
    ///
    /// `measure(a, b)` returns the length of the hop from stop `a` to stop
    /// `b`. Linear buses add every hop in both directions. Once a length
    /// has been computed it is returned as-is on every later call.
    pub fn length<F>(&self, mut measure: F) -> Result<RouteLength, DomainError>
    where
        F: FnMut(&str, &str) -> Result<RouteLength, DomainError>,
    {
        if let Some(length) = self.length.get() {
            return Ok(*length);
        }

        let mut total = RouteLength::default();
        for hop in self.stops.windows(2) {
            total += measure(&hop[0], &hop[1])?;
            if self.route_type == RouteType::Linear {
                total += measure(&hop[1], &hop[0])?;
            }
        }

        Ok(*self.length.get_or_init(|| total))
    }

    /// Aggregate statistics; see [`Bus::length`] for how `measure` is used.
    pub fn stats<F>(&self, measure: F) -> Result<BusStats, DomainError>
    where
        F: FnMut(&str, &str) -> Result<RouteLength, DomainError>,
    {
        Ok(BusStats {
            stop_count: self.stop_count(),
            unique_stop_count: self.unique_stops.len(),
            length: self.length(measure)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(stops: &[&str]) -> Vec<String> {
        stops.iter().map(|s| (*s).to_string()).collect()
    }

    fn unit(_: &str, _: &str) -> Result<RouteLength, DomainError> {
        Ok(RouteLength::new(1.0, 2.0))
    }

    #[test]
    fn circular_stats() {
        let bus = Bus::new(
            "256",
            RouteType::Circular,
            names(&[
                "Biryulyovo Zapadnoye",
                "Biryusinka",
                "Universam",
                "Biryulyovo Tovarnaya",
                "Biryulyovo Passazhirskaya",
                "Biryulyovo Zapadnoye",
            ]),
        );

        let stats = bus.stats(unit).unwrap();
        assert_eq!(stats.stop_count, 6);
        assert_eq!(stats.unique_stop_count, 5);
        assert_eq!(stats.length, RouteLength::new(5.0, 10.0));
    }

    #[test]
    fn linear_stats() {
        let bus = Bus::new(
            "750",
            RouteType::Linear,
            names(&["Tolstopaltsevo", "Marushkino", "Rasskazovka"]),
        );

        let stats = bus.stats(unit).unwrap();
        assert_eq!(stats.stop_count, 5);
        assert_eq!(stats.unique_stop_count, 3);
        assert_eq!(stats.length, RouteLength::new(4.0, 8.0));
    }

    #[test]
    fn linear_uses_reverse_hops() {
        let bus = Bus::new("1", RouteType::Linear, names(&["A", "B"]));
        let length = bus
            .length(|from, to| {
                Ok(match (from, to) {
                    ("A", "B") => RouteLength::new(10.0, 100.0),
                    _ => RouteLength::new(10.0, 70.0),
                })
            })
            .unwrap();
        assert_eq!(length, RouteLength::new(20.0, 170.0));
    }

    #[test]
    fn length_is_memoized() {
        let bus = Bus::new("1", RouteType::Circular, names(&["A", "B", "A"]));
        let first = bus.length(unit).unwrap();
        let second = bus
            .length(|_, _| Ok(RouteLength::new(100.0, 100.0)))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn failed_length_is_not_memoized() {
        let bus = Bus::new("1", RouteType::Circular, names(&["A", "B"]));
        let err = bus.length(|_, to| Err(DomainError::UndeclaredStop(to.to_string())));
        assert!(err.is_err());
        assert_eq!(bus.length(unit).unwrap(), RouteLength::new(1.0, 2.0));
    }

    #[test]
    fn empty_and_single_stop_routes() {
        let empty = Bus::new("0", RouteType::Linear, vec![]);
        assert_eq!(empty.stop_count(), 0);
        assert!(empty.traversal().is_empty());
        assert_eq!(empty.length(unit).unwrap(), RouteLength::default());

        let single = Bus::new("1", RouteType::Linear, names(&["A"]));
        assert_eq!(single.stop_count(), 1);
        assert_eq!(single.traversal(), vec!["A"]);
    }

    #[test]
    fn traversal_sequences() {
        let linear = Bus::new("L", RouteType::Linear, names(&["A", "B", "C"]));
        assert_eq!(linear.traversal(), vec!["A", "B", "C", "B", "A"]);

        let circular = Bus::new("C", RouteType::Circular, names(&["A", "B", "C", "A"]));
        assert_eq!(circular.traversal(), vec!["A", "B", "C", "A"]);
    }

    #[test]
    fn curvature_of_zero_length() {
        assert_eq!(RouteLength::default().curvature(), 0.0);
        assert_eq!(RouteLength::new(2.0, 3.0).curvature(), 1.5);
    }

    #[test]
    fn route_type_from_roundtrip() {
        assert_eq!(RouteType::from_roundtrip(true), RouteType::Circular);
        assert_eq!(RouteType::from_roundtrip(false), RouteType::Linear);
    }
}
