//! Expands the registry into a routing graph.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::error::RouteError;
use super::graph::{Edge, EdgeKind, Graph, StopVertices, VertexId};
use crate::domain::{Bus, RoutingSettings};
use crate::registry::Registry;

/// Builds the wait/travel graph for one registry snapshot.
///
/// Travel edges are generated for every ordered pair of positions on a
/// bus run, so a run of `n` stops yields `n * (n - 1) / 2` edges.
// TODO: prefix-sum distances with adjacent-hop edges
pub struct GraphBuilder<'a> {
    registry: &'a Registry,
    settings: &'a RoutingSettings,
    graph: Graph,
    vertices: HashMap<String, StopVertices>,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(registry: &'a Registry, settings: &'a RoutingSettings) -> Self {
        Self {
            registry,
            settings,
            graph: Graph::default(),
            vertices: HashMap::new(),
        }
    }

    /// Build the graph and the stop-name to vertex lookup.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidTopology`] if any bus runs through a
    /// stop that has not been declared. Nothing is built in that case.
    pub fn build(mut self) -> Result<(Graph, HashMap<String, StopVertices>), RouteError> {
        self.check_topology()?;
        self.add_stops();

        for bus in self.registry.buses() {
            self.add_bus(bus);
        }

        debug!(
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            stops = self.vertices.len(),
            "Built routing graph"
        );

        Ok((self.graph, self.vertices))
    }

    fn check_topology(&self) -> Result<(), RouteError> {
        for bus in self.registry.buses() {
            for stop in bus.unique_stops() {
                let declared = self.registry.stop(stop).is_some_and(|s| s.is_declared());
                if !declared {
                    return Err(RouteError::InvalidTopology {
                        bus: bus.name().to_string(),
                        stop: stop.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// One arrival and one departure vertex per declared stop, joined by a
    /// wait edge.
    fn add_stops(&mut self) {
        let declared: Vec<&str> = self
            .registry
            .stops()
            .filter(|stop| stop.is_declared())
            .map(|stop| stop.name())
            .collect();

        self.graph = Graph::with_vertices(declared.len() * 2);

        for (idx, name) in declared.into_iter().enumerate() {
            let vertices = StopVertices {
                arrival: VertexId(idx * 2),
                departure: VertexId(idx * 2 + 1),
            };

            self.graph.add_edge(Edge {
                from: vertices.arrival,
                to: vertices.departure,
                weight: self.settings.bus_wait_time,
                kind: EdgeKind::Wait {
                    stop: name.to_string(),
                },
            });
            self.vertices.insert(name.to_string(), vertices);
        }
    }

    /// Travel edges from every position on the run to every later one.
    fn add_bus(&mut self, bus: &Bus) {
        let traversal = bus.traversal();
        if traversal.len() < 2 {
            return;
        }

        let before = self.graph.edge_count();

        for board in 0..traversal.len() {
            let from = self.vertices[traversal[board]].departure;
            let mut minutes = 0.0;

            for alight in (board + 1)..traversal.len() {
                let meters = self
                    .registry
                    .road_distance(traversal[alight - 1], traversal[alight]);
                minutes += self.settings.travel_time(f64::from(meters));

                self.graph.add_edge(Edge {
                    from,
                    to: self.vertices[traversal[alight]].arrival,
                    weight: minutes,
                    kind: EdgeKind::Travel {
                        bus: bus.name().to_string(),
                        span_count: alight - board,
                    },
                });
            }
        }

        trace!(
            bus = bus.name(),
            stops = traversal.len(),
            edges = self.graph.edge_count() - before,
            "Added travel edges"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinates, RouteType};

    fn coords(lat: f64, lon: f64) -> Coordinates {
        Coordinates::from_degrees(lat, lon).unwrap()
    }

    fn bus(name: &str, route_type: RouteType, stops: &[&str]) -> Bus {
        Bus::new(name, route_type, stops.iter().map(|s| s.to_string()).collect())
    }

    /// A - B - C with 1000 m hops each way, and settings of 30 km/h (500 m/min).
    fn abc(route_type: RouteType) -> Registry {
        let mut registry = Registry::new();
        registry.add_stop("A", coords(0.0, 0.0), vec![("B".to_string(), 1000)]);
        registry.add_stop("B", coords(0.0, 0.01), vec![("C".to_string(), 1000)]);
        registry.add_stop("C", coords(0.0, 0.02), vec![]);
        registry.add_bus(bus("1", route_type, &["A", "B", "C"]));
        registry
    }

    fn settings() -> RoutingSettings {
        RoutingSettings::new(4.0, 30.0).unwrap()
    }

    fn travel_edges(graph: &Graph) -> Vec<&Edge> {
        graph
            .edges()
            .filter(|e| matches!(e.kind, EdgeKind::Travel { .. }))
            .collect()
    }

    #[test]
    fn two_vertices_and_a_wait_edge_per_stop() {
        let registry = abc(RouteType::Circular);
        let settings = settings();
        let (graph, vertices) = GraphBuilder::new(&registry, &settings).build().unwrap();

        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(vertices.len(), 3);

        let waits: Vec<&Edge> = graph
            .edges()
            .filter(|e| matches!(e.kind, EdgeKind::Wait { .. }))
            .collect();
        assert_eq!(waits.len(), 3);
        for edge in waits {
            let EdgeKind::Wait { stop } = &edge.kind else {
                unreachable!()
            };
            assert_eq!(edge.from, vertices[stop].arrival);
            assert_eq!(edge.to, vertices[stop].departure);
            assert_eq!(edge.weight, 4.0);
        }
    }

    #[test]
    fn circular_travel_edges_cover_every_forward_pair() {
        let registry = abc(RouteType::Circular);
        let settings = settings();
        let (graph, vertices) = GraphBuilder::new(&registry, &settings).build().unwrap();

        let travel = travel_edges(&graph);
        assert_eq!(travel.len(), 3);

        let a_to_c = travel
            .iter()
            .find(|e| e.from == vertices["A"].departure && e.to == vertices["C"].arrival)
            .unwrap();
        assert_eq!(
            a_to_c.kind,
            EdgeKind::Travel {
                bus: "1".into(),
                span_count: 2
            }
        );
        assert!((a_to_c.weight - 4.0).abs() < 1e-9);
    }

    #[test]
    fn linear_travel_edges_include_return_run() {
        let registry = abc(RouteType::Linear);
        let settings = settings();
        let (graph, vertices) = GraphBuilder::new(&registry, &settings).build().unwrap();

        // Traversal A, B, C, B, A: 5 * 4 / 2 pairs
        let travel = travel_edges(&graph);
        assert_eq!(travel.len(), 10);

        // C back to A uses the mirrored distances
        let c_to_a = travel
            .iter()
            .find(|e| e.from == vertices["C"].departure && e.to == vertices["A"].arrival)
            .unwrap();
        assert!((c_to_a.weight - 4.0).abs() < 1e-9);

        // A out to C and back to A spans the whole run
        let round_trip = travel
            .iter()
            .find(|e| {
                e.from == vertices["A"].departure
                    && e.to == vertices["A"].arrival
                    && e.kind
                        == EdgeKind::Travel {
                            bus: "1".into(),
                            span_count: 4,
                        }
            })
            .unwrap();
        assert!((round_trip.weight - 8.0).abs() < 1e-9);
    }

    #[test]
    fn short_buses_add_no_travel_edges() {
        let mut registry = abc(RouteType::Circular);
        registry.add_bus(bus("solo", RouteType::Linear, &["A"]));
        registry.add_bus(bus("none", RouteType::Circular, &[]));
        let settings = settings();
        let (graph, _) = GraphBuilder::new(&registry, &settings).build().unwrap();

        assert_eq!(travel_edges(&graph).len(), 3);
    }

    #[test]
    fn undeclared_stop_fails_the_build() {
        let mut registry = abc(RouteType::Circular);
        registry.add_bus(bus("2", RouteType::Linear, &["A", "Z"]));
        let settings = settings();

        let err = GraphBuilder::new(&registry, &settings).build().unwrap_err();
        assert_eq!(
            err,
            RouteError::InvalidTopology {
                bus: "2".into(),
                stop: "Z".into()
            }
        );
    }

    #[test]
    fn mentioned_only_stops_get_no_vertices() {
        let mut registry = abc(RouteType::Circular);
        registry.add_stop("C", coords(0.0, 0.02), vec![("D".to_string(), 300)]);
        let settings = settings();
        let (graph, vertices) = GraphBuilder::new(&registry, &settings).build().unwrap();

        assert!(!vertices.contains_key("D"));
        assert_eq!(graph.vertex_count(), 6);
    }
}
