//! Turns a graph path into an itinerary.

use super::graph::{EdgeKind, Graph};
use super::search::Path;
use crate::domain::{Route, RouteItem};

/// Map every edge of `path` to a route item, in path order.
///
/// Wait edges become [`RouteItem::Wait`], travel edges
/// [`RouteItem::Bus`]. The route total is the path weight.
pub fn reconstruct(graph: &Graph, path: &Path) -> Route {
    let items = path
        .edges
        .iter()
        .map(|&id| {
            let edge = graph.edge(id);
            match &edge.kind {
                EdgeKind::Wait { stop } => RouteItem::Wait {
                    stop_name: stop.clone(),
                    time: edge.weight,
                },
                EdgeKind::Travel { bus, span_count } => RouteItem::Bus {
                    bus: bus.clone(),
                    span_count: *span_count,
                    time: edge.weight,
                },
            }
        })
        .collect();

    Route::new(path.total_weight, items)
}
