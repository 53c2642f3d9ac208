//! Single-pair shortest path search.
//!
//! Dijkstra's algorithm with a binary heap. The graph is only read, so
//! one built graph serves any number of searches.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::trace;

use super::graph::{EdgeId, Graph, VertexId};

/// The cheapest path between two vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Sum of the edge weights
    pub total_weight: f64,
    /// Edges in travel order
    pub edges: Vec<EdgeId>,
}

impl Path {
    /// The path from a vertex to itself.
    pub fn empty() -> Self {
        Self {
            total_weight: 0.0,
            edges: Vec::new(),
        }
    }
}

/// Heap key ordering non-negative weights totally.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Find the cheapest path from `from` to `to`.
///
/// Returns `None` if `to` is unreachable. Edge weights must be
/// non-negative. Among equally cheap paths any one may be returned.
pub fn shortest_path(graph: &Graph, from: VertexId, to: VertexId) -> Option<Path> {
    if from == to {
        return Some(Path::empty());
    }

    let n = graph.vertex_count();
    let mut dist = vec![f64::INFINITY; n];
    // prev_edge[v] = edge that reached v on the best known path
    let mut prev_edge: Vec<Option<EdgeId>> = vec![None; n];
    let mut settled = 0usize;

    dist[from.0] = 0.0;
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((Cost(0.0), from)));

    while let Some(Reverse((Cost(cost), vertex))) = heap.pop() {
        if vertex == to {
            trace!(settled, cost, "Search reached target");
            return Some(unwind(graph, &prev_edge, from, to, cost));
        }

        // Stale heap entry
        if cost > dist[vertex.0] {
            continue;
        }
        settled += 1;

        for (id, edge) in graph.out_edges(vertex) {
            let next = cost + edge.weight;
            if next < dist[edge.to.0] {
                dist[edge.to.0] = next;
                prev_edge[edge.to.0] = Some(id);
                heap.push(Reverse((Cost(next), edge.to)));
            }
        }
    }

    trace!(settled, "Search exhausted without reaching target");
    None
}

fn unwind(
    graph: &Graph,
    prev_edge: &[Option<EdgeId>],
    from: VertexId,
    to: VertexId,
    total_weight: f64,
) -> Path {
    let mut edges = Vec::new();
    let mut current = to;
    while current != from {
        let Some(id) = prev_edge[current.0] else {
            break;
        };
        edges.push(id);
        current = graph.edge(id).from;
    }
    edges.reverse();

    Path {
        total_weight,
        edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::graph::{Edge, EdgeKind};

    fn edge(from: usize, to: usize, weight: f64) -> Edge {
        Edge {
            from: VertexId(from),
            to: VertexId(to),
            weight,
            kind: EdgeKind::Wait { stop: String::new() },
        }
    }

    fn graph(n: usize, edges: &[(usize, usize, f64)]) -> Graph {
        let mut graph = Graph::with_vertices(n);
        for &(from, to, weight) in edges {
            graph.add_edge(edge(from, to, weight));
        }
        graph
    }

    #[test]
    fn same_vertex_is_empty_path() {
        let g = graph(1, &[]);
        assert_eq!(shortest_path(&g, VertexId(0), VertexId(0)), Some(Path::empty()));
    }

    #[test]
    fn prefers_cheaper_detour() {
        let g = graph(3, &[(0, 2, 10.0), (0, 1, 3.0), (1, 2, 4.0)]);
        let path = shortest_path(&g, VertexId(0), VertexId(2)).unwrap();

        assert_eq!(path.total_weight, 7.0);
        assert_eq!(path.edges, vec![EdgeId(1), EdgeId(2)]);
    }

    #[test]
    fn picks_cheapest_parallel_edge() {
        let g = graph(2, &[(0, 1, 5.0), (0, 1, 2.0), (0, 1, 9.0)]);
        let path = shortest_path(&g, VertexId(0), VertexId(1)).unwrap();

        assert_eq!(path.total_weight, 2.0);
        assert_eq!(path.edges, vec![EdgeId(1)]);
    }

    #[test]
    fn unreachable_is_none() {
        let g = graph(3, &[(0, 1, 1.0), (2, 0, 1.0)]);
        assert_eq!(shortest_path(&g, VertexId(0), VertexId(2)), None);
    }

    #[test]
    fn zero_weight_edges() {
        let g = graph(3, &[(0, 1, 0.0), (1, 2, 0.0)]);
        let path = shortest_path(&g, VertexId(0), VertexId(2)).unwrap();
        assert_eq!(path.total_weight, 0.0);
        assert_eq!(path.edges.len(), 2);
    }

    #[test]
    fn repeated_searches_agree() {
        let g = graph(4, &[(0, 1, 1.0), (1, 3, 1.0), (0, 2, 0.5), (2, 3, 2.0)]);
        let first = shortest_path(&g, VertexId(0), VertexId(3));
        let second = shortest_path(&g, VertexId(0), VertexId(3));
        assert_eq!(first, second);
    }
}
