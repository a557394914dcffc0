use crate::{Edge, EventType, GraphEvent, Point, Vertex, VertexId};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Errors from vertex allocation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("no vertex ids left to allocate")]
    IdSpaceExhausted,
}

/// Why a rename was rejected. The graph is left untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenameError {
    #[error("vertex {0} does not exist")]
    UnknownVertex(VertexId),
    #[error("vertex ids must be positive, got {0}")]
    NotPositive(u32),
    #[error("vertex id {0} is already in use")]
    AlreadyInUse(VertexId),
}

/// Undirected graph with per-vertex screen positions
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    /// Vertices in insertion order; hit-testing walks this order
    vertices: Vec<Vertex>,

    /// Neighbor sets, one entry per vertex
    adjacency: BTreeMap<VertexId, BTreeSet<VertexId>>,

    /// Lower bound for the next allocated id
    next_id: u64,

    /// Mutation log
    events: Vec<GraphEvent>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            adjacency: BTreeMap::new(),
            next_id: 1,
            events: Vec::new(),
        }
    }

    /// Create a graph holding a single vertex (id 1) at `position`
    pub fn with_initial_vertex(position: Point) -> Self {
        let mut graph = Self::new();
        // A fresh graph always has id 1 available.
        let _ = graph.add_vertex(position);
        graph
    }

    // ========== Vertex Operations ==========

    /// Add a vertex at `position` under the next unused id.
    ///
    /// Ids handed out by successive calls are strictly increasing; ids claimed
    /// through [`Graph::rename_vertex`] are skipped.
    pub fn add_vertex(&mut self, position: Point) -> Result<VertexId, GraphError> {
        let id = loop {
            let candidate = u32::try_from(self.next_id)
                .ok()
                .and_then(VertexId::new)
                .ok_or(GraphError::IdSpaceExhausted)?;
            self.next_id += 1;
            if !self.contains(candidate) {
                break candidate;
            }
        };

        self.vertices.push(Vertex::new(id, position));
        self.adjacency.insert(id, BTreeSet::new());
        log::debug!("added vertex {} at ({}, {})", id, position.x, position.y);
        self.log_event(EventType::VertexAdded { id, position });

        Ok(id)
    }

    /// Remove a vertex and every edge touching it. Returns the removed vertex,
    /// or `None` if `id` was not present.
    pub fn remove_vertex(&mut self, id: VertexId) -> Option<Vertex> {
        let index = self.vertices.iter().position(|v| v.id == id)?;
        let vertex = self.vertices.remove(index);

        let neighbors = self.adjacency.remove(&id).unwrap_or_default();
        for neighbor in &neighbors {
            if let Some(set) = self.adjacency.get_mut(neighbor) {
                set.remove(&id);
            }
        }

        log::debug!("removed vertex {} with {} edge(s)", id, neighbors.len());
        self.log_event(EventType::VertexRemoved {
            id,
            detached: neighbors.into_iter().collect(),
        });

        Some(vertex)
    }

    /// Give a vertex a new id, keeping its position and re-keying its edges.
    pub fn rename_vertex(
        &mut self,
        old_id: VertexId,
        new_id: u32,
    ) -> Result<VertexId, RenameError> {
        let new_id = VertexId::new(new_id).ok_or(RenameError::NotPositive(new_id))?;
        if !self.contains(old_id) {
            return Err(RenameError::UnknownVertex(old_id));
        }
        if self.contains(new_id) {
            return Err(RenameError::AlreadyInUse(new_id));
        }

        if let Some(vertex) = self.vertices.iter_mut().find(|v| v.id == old_id) {
            vertex.id = new_id;
        }

        let neighbors = self.adjacency.remove(&old_id).unwrap_or_default();
        for neighbor in &neighbors {
            if let Some(set) = self.adjacency.get_mut(neighbor) {
                set.remove(&old_id);
                set.insert(new_id);
            }
        }
        self.adjacency.insert(new_id, neighbors);

        log::debug!("renamed vertex {} to {}", old_id, new_id);
        self.log_event(EventType::VertexRenamed { old_id, new_id });

        Ok(new_id)
    }

    /// Move a vertex. Returns `false` if `id` was not present.
    pub fn move_vertex(&mut self, id: VertexId, position: Point) -> bool {
        match self.vertices.iter_mut().find(|v| v.id == id) {
            Some(vertex) => {
                vertex.position = position;
                true
            }
            None => false,
        }
    }

    /// Get a vertex by id
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id == id)
    }

    /// Get a vertex position by id
    pub fn position(&self, id: VertexId) -> Option<Point> {
        self.vertex(id).map(|v| v.position)
    }

    /// All vertices in iteration (insertion) order
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// The vertex under `point`: the first one, in iteration order, whose
    /// center lies within `radius`. Overlaps are not resolved by distance.
    pub fn vertex_at(&self, point: Point, radius: f32) -> Option<VertexId> {
        self.vertices
            .iter()
            .find(|v| v.contains(point, radius))
            .map(|v| v.id)
    }

    // ========== Edge Operations ==========

    /// Connect two vertices. Self-loops, unknown ids and existing edges are
    /// ignored; returns whether an edge was inserted.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        if u == v || !self.contains(u) || !self.contains(v) || self.has_edge(u, v) {
            return false;
        }

        if let Some(set) = self.adjacency.get_mut(&u) {
            set.insert(v);
        }
        if let Some(set) = self.adjacency.get_mut(&v) {
            set.insert(u);
        }

        log::debug!("added edge {} - {}", u, v);
        self.log_event(EventType::EdgeAdded { u, v });
        true
    }

    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.adjacency
            .get(&u)
            .is_some_and(|neighbors| neighbors.contains(&v))
    }

    /// Every edge once, sorted by endpoints
    pub fn edges(&self) -> Vec<Edge> {
        self.adjacency
            .iter()
            .flat_map(|(&u, neighbors)| {
                neighbors
                    .iter()
                    .filter(move |&&v| u < v)
                    .filter_map(move |&v| Edge::new(u, v))
            })
            .collect()
    }

    /// Edges touching `id`
    pub fn incident_edges(&self, id: VertexId) -> Vec<Edge> {
        self.neighbors(id)
            .filter_map(|n| Edge::new(id, n))
            .collect()
    }

    /// Neighbors of `id` in ascending order; empty if `id` is absent
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.get(&id).into_iter().flatten().copied()
    }

    pub fn degree(&self, id: VertexId) -> usize {
        self.adjacency.get(&id).map_or(0, BTreeSet::len)
    }

    // ========== Event Logging ==========

    fn log_event(&mut self, event: EventType) {
        self.events.push(GraphEvent::new(event));
    }

    /// Get all events
    pub fn events(&self) -> &[GraphEvent] {
        &self.events
    }

    /// Clear event log
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Drop all but the newest `keep` events
    pub fn trim_events(&mut self, keep: usize) {
        let excess = self.events.len().saturating_sub(keep);
        self.events.drain(..excess);
    }

    // ========== Utility Methods ==========

    pub(crate) fn adjacency(&self) -> &BTreeMap<VertexId, BTreeSet<VertexId>> {
        &self.adjacency
    }

    #[cfg(test)]
    pub(crate) fn adjacency_mut(&mut self) -> &mut BTreeMap<VertexId, BTreeSet<VertexId>> {
        &mut self.adjacency
    }

    /// Count vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Count edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
