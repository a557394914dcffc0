use crate::VertexId;
use serde::{Deserialize, Serialize};

/// Undirected edge between two distinct vertices.
///
/// Endpoints are stored normalized (smaller id first) so that `Edge::new(a, b)`
/// and `Edge::new(b, a)` compare equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    a: VertexId,
    b: VertexId,
}

impl Edge {
    /// Create an edge, or `None` for a self-loop
    pub fn new(u: VertexId, v: VertexId) -> Option<Self> {
        match u.cmp(&v) {
            std::cmp::Ordering::Less => Some(Self { a: u, b: v }),
            std::cmp::Ordering::Greater => Some(Self { a: v, b: u }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Both endpoints, smaller id first
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }

    /// Check if this edge touches a given vertex
    pub fn involves(&self, id: VertexId) -> bool {
        self.a == id || self.b == id
    }

    /// The endpoint opposite `id`, if `id` is an endpoint
    pub fn other(&self, id: VertexId) -> Option<VertexId> {
        if self.a == id {
            Some(self.b)
        } else if self.b == id {
            Some(self.a)
        } else {
            None
        }
    }
}
