use crate::{Graph, VertexId};
use std::collections::BTreeSet;

/// Validation issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub message: String,
    pub affected_vertices: Vec<VertexId>,
    pub issue_type: ValidationIssueType,
}

/// Types of structural problems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssueType {
    /// An edge references a vertex that is not in the vertex list
    DanglingEdge,
    SelfLoop,
    /// `u` lists `v` as a neighbor but not the other way round
    AsymmetricAdjacency,
    DuplicateVertex,
    /// A vertex without a neighbor-set entry
    MissingAdjacency,
}

/// Complete validation result
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a new empty validation result
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Add an issue
    pub fn add_issue(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Issues of one kind
    pub fn of_type(&self, issue_type: ValidationIssueType) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.issue_type == issue_type)
            .collect()
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Structural self-check for graphs
pub struct Validator;

impl Validator {
    /// Run all checks on a graph
    pub fn validate(graph: &Graph) -> ValidationResult {
        let mut result = ValidationResult::new();
        let adjacency = graph.adjacency();

        let mut seen = BTreeSet::new();
        for vertex in graph.vertices() {
            if !seen.insert(vertex.id) {
                result.add_issue(ValidationIssue {
                    message: format!("Vertex id {} appears more than once", vertex.id),
                    affected_vertices: vec![vertex.id],
                    issue_type: ValidationIssueType::DuplicateVertex,
                });
            }
            if !adjacency.contains_key(&vertex.id) {
                result.add_issue(ValidationIssue {
                    message: format!("Vertex {} has no neighbor set", vertex.id),
                    affected_vertices: vec![vertex.id],
                    issue_type: ValidationIssueType::MissingAdjacency,
                });
            }
        }

        for (&u, neighbors) in adjacency {
            if !seen.contains(&u) {
                result.add_issue(ValidationIssue {
                    message: format!("Neighbor set for missing vertex {}", u),
                    affected_vertices: vec![u],
                    issue_type: ValidationIssueType::DanglingEdge,
                });
            }

            for &v in neighbors {
                if u == v {
                    result.add_issue(ValidationIssue {
                        message: format!("Vertex {} is connected to itself", u),
                        affected_vertices: vec![u],
                        issue_type: ValidationIssueType::SelfLoop,
                    });
                } else if !seen.contains(&v) {
                    result.add_issue(ValidationIssue {
                        message: format!("Edge {} - {} points at a missing vertex", u, v),
                        affected_vertices: vec![u, v],
                        issue_type: ValidationIssueType::DanglingEdge,
                    });
                } else if !adjacency.get(&v).is_some_and(|back| back.contains(&u)) {
                    result.add_issue(ValidationIssue {
                        message: format!("Edge {} - {} is only recorded on one side", u, v),
                        affected_vertices: vec![u, v],
                        issue_type: ValidationIssueType::AsymmetricAdjacency,
                    });
                }
            }
        }

        result
    }
}

impl Graph {
    /// Run structural validation
    pub fn validate(&self) -> ValidationResult {
        Validator::validate(self)
    }
}
