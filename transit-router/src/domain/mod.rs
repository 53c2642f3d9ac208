//! Domain types for the transit router.
//!
//! This module contains the value types of the transit network: stop
//! coordinates, stops, bus routes, routing settings and the itinerary
//! returned by a route query. Constructors validate their inputs, so code
//! that receives these types can trust their invariants.

mod bus;
mod error;
mod geo;
mod route;
mod settings;
mod stop;

pub use bus::{Bus, BusStats, RouteLength, RouteType};
pub use error::DomainError;
pub use geo::{Coordinates, EARTH_RADIUS_M, distance};
pub use route::{Route, RouteItem};
pub use settings::RoutingSettings;
pub use stop::Stop;
