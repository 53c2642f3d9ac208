//! Itinerary types.
//!
//! A `Route` is the answer to a route query: an ordered list of waits and
//! bus rides with their times in minutes.

/// One step of an itinerary.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteItem {
    /// Waiting at a stop before boarding
    Wait { stop_name: String, time: f64 },
    /// Riding one bus without alighting
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl RouteItem {
    /// Duration of this step in minutes.
    pub fn time(&self) -> f64 {
        match self {
            RouteItem::Wait { time, .. } | RouteItem::Bus { time, .. } => *time,
        }
    }

    /// Returns true if this is a wait step.
    pub fn is_wait(&self) -> bool {
        matches!(self, RouteItem::Wait { .. })
    }

    /// Returns true if this is a bus ride.
    pub fn is_bus(&self) -> bool {
        matches!(self, RouteItem::Bus { .. })
    }
}

/// A complete itinerary between two stops.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Route {
    total_time: f64,
    items: Vec<RouteItem>,
}

impl Route {
    /// Constructs a route from its items and their total time.
    ///
    /// The total is taken as given; it is expected to be the path weight
    /// the items were derived from.
    pub fn new(total_time: f64, items: Vec<RouteItem>) -> Self {
        Self { total_time, items }
    }

    /// A route from a stop to itself.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Total travel time in minutes.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    pub fn items(&self) -> &[RouteItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<RouteItem> {
        self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of bus rides in the itinerary.
    pub fn ride_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_bus()).count()
    }
}
