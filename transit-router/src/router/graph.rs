//! Directed weighted graph of wait and travel edges.

/// Index of a vertex in a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

/// Index of an edge in a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

/// The two vertices of one stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopVertices {
    /// Reached by riding a bus to the stop
    pub arrival: VertexId,
    /// Left by boarding a bus at the stop
    pub departure: VertexId,
}

/// What an edge stands for in an itinerary.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeKind {
    /// Waiting at `stop`, from its arrival vertex to its departure vertex
    Wait { stop: String },
    /// Riding `bus` across `span_count` hops without alighting
    Travel { bus: String, span_count: usize },
}

/// A directed edge weighted in minutes.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
    pub kind: EdgeKind,
}

/// Adjacency-list graph. Vertices are dense indices; parallel edges are
/// allowed.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    edges: Vec<Edge>,
    outgoing: Vec<Vec<EdgeId>>,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            outgoing: vec![Vec::new(); vertex_count],
        }
    }

    /// Add an edge and return its id.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a vertex of this graph.
    pub(crate) fn add_edge(&mut self, edge: Edge) -> EdgeId {
        assert!(
            edge.from.0 < self.outgoing.len() && edge.to.0 < self.outgoing.len(),
            "edge endpoint out of range"
        );
        let id = EdgeId(self.edges.len());
        self.outgoing[edge.from.0].push(id);
        self.edges.push(edge);
        id
    }

    pub fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edge with the given id.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    /// Edges leaving `vertex`.
    pub fn out_edges(&self, vertex: VertexId) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.outgoing[vertex.0]
            .iter()
            .map(move |&id| (id, &self.edges[id.0]))
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }
}
