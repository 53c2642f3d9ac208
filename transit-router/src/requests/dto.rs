//! Data transfer objects for requests and responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{BusStats, Route, RouteItem};

/// Error message for a missing bus, stop or route.
pub const NOT_FOUND: &str = "not found";

/// Declare a stop.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StopRequest {
    pub name: String,

    /// Degrees
    pub latitude: f64,

    /// Degrees
    pub longitude: f64,

    /// Road distance in meters to each neighbouring stop
    #[serde(default)]
    pub road_distances: BTreeMap<String, u32>,
}

/// Declare a bus.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusRequest {
    pub name: String,

    /// Stops in driving order
    pub stops: Vec<String>,

    /// True for a circular route, false for there-and-back
    pub is_roundtrip: bool,
}

/// Routing settings block.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SettingsRequest {
    /// Minutes
    pub bus_wait_time: f64,

    /// km/h
    pub bus_velocity: f64,
}

/// A mutating request from the `base_requests` list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRequest),
    Bus(BusRequest),
}

/// A query from the `stat_requests` list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    /// Statistics of one bus
    Bus { name: String, id: i64 },
    /// Buses serving one stop
    Stop { name: String, id: i64 },
    /// Fastest route between two stops
    Route { from: String, to: String, id: i64 },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Route { id, .. } => *id,
        }
    }
}

/// Every request the catalog understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    AddStop(StopRequest),
    AddBus(BusRequest),
    SetSettings(SettingsRequest),
    Query(StatRequest),
}

impl From<BaseRequest> for Request {
    fn from(request: BaseRequest) -> Self {
        match request {
            BaseRequest::Stop(stop) => Request::AddStop(stop),
            BaseRequest::Bus(bus) => Request::AddBus(bus),
        }
    }
}

impl From<SettingsRequest> for Request {
    fn from(settings: SettingsRequest) -> Self {
        Request::SetSettings(settings)
    }
}

impl From<StatRequest> for Request {
    fn from(query: StatRequest) -> Self {
        Request::Query(query)
    }
}

/// A complete request document.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RequestDocument {
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,

    #[serde(default)]
    pub routing_settings: Option<SettingsRequest>,

    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// Answer to one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub request_id: i64,

    #[serde(flatten)]
    pub body: ResponseBody,
}

impl Response {
    pub fn new(request_id: i64, body: ResponseBody) -> Self {
        Self { request_id, body }
    }

    pub fn not_found(request_id: i64) -> Self {
        Self::new(request_id, ResponseBody::not_found())
    }
}

/// Query-specific response fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    BusStats {
        stop_count: usize,
        unique_stop_count: usize,
        /// Road length in whole meters
        route_length: i64,
        curvature: f64,
    },
    StopBuses {
        buses: Vec<String>,
    },
    Route {
        /// Minutes
        total_time: f64,
        items: Vec<RouteItemResult>,
    },
    Error {
        error_message: String,
    },
}

impl ResponseBody {
    pub fn not_found() -> Self {
        ResponseBody::Error {
            error_message: NOT_FOUND.to_string(),
        }
    }
}

impl From<BusStats> for ResponseBody {
    fn from(stats: BusStats) -> Self {
        ResponseBody::BusStats {
            stop_count: stats.stop_count,
            unique_stop_count: stats.unique_stop_count,
            // Truncated towards zero
            route_length: stats.length.road as i64,
            curvature: stats.length.curvature(),
        }
    }
}

impl From<Route> for ResponseBody {
    fn from(route: Route) -> Self {
        ResponseBody::Route {
            total_time: route.total_time(),
            items: route
                .into_items()
                .into_iter()
                .map(RouteItemResult::from)
                .collect(),
        }
    }
}

/// One itinerary step in a route response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItemResult {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl From<RouteItem> for RouteItemResult {
    fn from(item: RouteItem) -> Self {
        match item {
            RouteItem::Wait { stop_name, time } => RouteItemResult::Wait { stop_name, time },
            RouteItem::Bus {
                bus,
                span_count,
                time,
            } => RouteItemResult::Bus {
                bus,
                span_count,
                time,
            },
        }
    }
}
