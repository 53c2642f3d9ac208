//! Request dispatch and batch processing.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use tracing::{debug, info};

use super::dto::{
    BusRequest, Request, RequestDocument, Response, ResponseBody, SettingsRequest, StatRequest,
    StopRequest,
};
use super::error::RequestError;
use crate::catalog::TransitCatalog;
use crate::domain::{Bus, Coordinates, RouteType, RoutingSettings};
use crate::router::RouteError;

/// Apply one request to the catalog.
///
/// Mutations return `Ok(None)`; queries return their response. A missing
/// bus, stop or route (including a route query naming an unknown stop)
/// is answered with a "not found" response.
///
/// # Errors
///
/// Returns `Err` for invalid coordinates or settings, for a bus through an
/// undeclared stop, and for a route query before any settings.
pub fn handle(catalog: &TransitCatalog, request: Request) -> Result<Option<Response>, RequestError> {
    match request {
        Request::AddStop(stop) => add_stop(catalog, stop).map(|()| None),
        Request::AddBus(bus) => {
            add_bus(catalog, bus);
            Ok(None)
        }
        Request::SetSettings(settings) => set_settings(catalog, settings).map(|()| None),
        Request::Query(query) => answer(catalog, query).map(Some),
    }
}

/// Run a request document against the catalog.
///
/// All base requests are applied first, then the routing settings, then
/// the stat requests are answered in document order.
pub fn process_batch(
    catalog: &TransitCatalog,
    document: RequestDocument,
) -> Result<Vec<Response>, RequestError> {
    let RequestDocument {
        base_requests,
        routing_settings,
        stat_requests,
    } = document;

    info!(
        base = base_requests.len(),
        stat = stat_requests.len(),
        "Processing request batch"
    );

    let mutations = base_requests
        .into_iter()
        .map(Request::from)
        .chain(routing_settings.map(Request::from));
    for request in mutations {
        handle(catalog, request)?;
    }

    let mut responses = Vec::with_capacity(stat_requests.len());
    for query in stat_requests {
        if let Some(response) = handle(catalog, Request::Query(query))? {
            responses.push(response);
        }
    }

    Ok(responses)
}

/// Parse a request document from JSON.
pub fn read_document<R: Read>(reader: R) -> Result<RequestDocument, RequestError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse a request document from a JSON file.
pub fn load_document(path: impl AsRef<Path>) -> Result<RequestDocument, RequestError> {
    let file = File::open(path.as_ref())?;
    read_document(BufReader::new(file))
}

/// Write responses as a JSON array.
pub fn write_responses<W: Write>(writer: W, responses: &[Response]) -> Result<(), RequestError> {
    serde_json::to_writer(writer, responses)?;
    Ok(())
}

fn add_stop(catalog: &TransitCatalog, stop: StopRequest) -> Result<(), RequestError> {
    let coordinates = Coordinates::from_degrees(stop.latitude, stop.longitude)?;
    catalog.add_stop(&stop.name, coordinates, stop.road_distances);
    Ok(())
}

fn add_bus(catalog: &TransitCatalog, bus: BusRequest) {
    let route_type = RouteType::from_roundtrip(bus.is_roundtrip);
    catalog.add_bus(Bus::new(bus.name, route_type, bus.stops));
}

fn set_settings(catalog: &TransitCatalog, settings: SettingsRequest) -> Result<(), RequestError> {
    let settings = RoutingSettings::new(settings.bus_wait_time, settings.bus_velocity)?;
    catalog.set_settings(settings);
    Ok(())
}

fn answer(catalog: &TransitCatalog, query: StatRequest) -> Result<Response, RequestError> {
    let id = query.id();
    let body = match query {
        StatRequest::Bus { name, .. } => match catalog.bus_stats(&name)? {
            Some(stats) => stats.into(),
            None => ResponseBody::not_found(),
        },
        StatRequest::Stop { name, .. } => match catalog.stop_buses(&name) {
            Some(buses) => ResponseBody::StopBuses {
                buses: buses.into_iter().collect(),
            },
            None => ResponseBody::not_found(),
        },
        StatRequest::Route { from, to, .. } => match catalog.route(&from, &to) {
            Ok(Some(route)) => route.into(),
            Ok(None) => ResponseBody::not_found(),
            Err(RouteError::UnknownStop(stop)) => {
                debug!(%stop, "Route query names an unknown stop");
                ResponseBody::not_found()
            }
            Err(err) => return Err(err.into()),
        },
    };

    Ok(Response::new(id, body))
}
