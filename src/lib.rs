// Graph Sketch - Core Library

pub mod config;
pub mod controller;
pub mod edge;
pub mod event;
pub mod graph;
pub mod input;
pub mod ui;
pub mod validation;
pub mod vertex;

// Re-export main types for convenience
pub use config::EditorConfig;
pub use controller::{Controller, Flow, Mode};
pub use edge::Edge;
pub use event::{EventType, GraphEvent};
pub use graph::{Graph, GraphError, RenameError};
pub use input::{InputEvent, KeyCode, MouseButton};
pub use ui::GraphSketchApp;
pub use validation::{ValidationIssue, ValidationIssueType, ValidationResult, Validator};
pub use vertex::{ParseIdError, Point, Vertex, VertexId};
