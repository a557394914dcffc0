use crate::{Point, VertexId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A graph mutation with timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEvent {
    pub timestamp: DateTime<Utc>,
    pub event: EventType,
}

impl GraphEvent {
    /// Create a new event with the current timestamp
    pub fn new(event: EventType) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
        }
    }
}

/// Mutations recorded in the graph's log. Moves are not recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventType {
    VertexAdded {
        id: VertexId,
        position: Point,
    },

    VertexRemoved {
        id: VertexId,
        /// Neighbors whose edges went away with the vertex
        detached: Vec<VertexId>,
    },

    VertexRenamed {
        old_id: VertexId,
        new_id: VertexId,
    },

    EdgeAdded {
        u: VertexId,
        v: VertexId,
    },
}

impl EventType {
    /// One-line human readable summary, used for the status bar
    pub fn describe(&self) -> String {
        match self {
            EventType::VertexAdded { id, position } => {
                format!("Added vertex {} at ({:.0}, {:.0})", id, position.x, position.y)
            }
            EventType::VertexRemoved { id, detached } if detached.is_empty() => {
                format!("Removed vertex {}", id)
            }
            EventType::VertexRemoved { id, detached } => {
                format!("Removed vertex {} and {} edge(s)", id, detached.len())
            }
            EventType::VertexRenamed { old_id, new_id } => {
                format!("Renamed vertex {} to {}", old_id, new_id)
            }
            EventType::EdgeAdded { u, v } => format!("Connected {} and {}", u, v),
        }
    }
}
