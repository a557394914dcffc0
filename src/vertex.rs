use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Identifier of a vertex: always a positive integer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u32", into = "u32")]
pub struct VertexId(u32);

impl VertexId {
    /// Create an id, rejecting zero
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    /// The raw integer value
    pub fn get(self) -> u32 {
        self.0
    }

    /// Parse a user-typed id: ASCII digits only, positive, fits in `u32`
    pub fn parse(text: &str) -> Result<Self, ParseIdError> {
        if text.is_empty() {
            return Err(ParseIdError::Empty);
        }
        if !text.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseIdError::NotDigits(text.to_string()));
        }
        let value: u32 = text
            .parse()
            .map_err(|_| ParseIdError::OutOfRange(text.to_string()))?;
        Self::new(value).ok_or(ParseIdError::Zero)
    }
}

impl TryFrom<u32> for VertexId {
    type Error = ParseIdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ParseIdError::Zero)
    }
}

impl From<VertexId> for u32 {
    fn from(id: VertexId) -> Self {
        id.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a typed id was not accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIdError {
    #[error("no id entered")]
    Empty,
    #[error("id must contain only digits: {0:?}")]
    NotDigits(String),
    #[error("id is too large: {0}")]
    OutOfRange(String),
    #[error("id must be positive")]
    Zero,
}

/// A position on the canvas (pixels, origin at the top-left corner)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A vertex placed on the canvas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Vertex {
    pub id: VertexId,

    /// Center of the drawn circle
    pub position: Point,
}

impl Vertex {
    pub fn new(id: VertexId, position: Point) -> Self {
        Self { id, position }
    }

    /// Check whether `point` lies within `radius` of the center (boundary included)
    pub fn contains(&self, point: Point, radius: f32) -> bool {
        self.position.distance(point) <= radius
    }
}
