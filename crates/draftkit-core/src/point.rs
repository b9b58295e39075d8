//! A small 2D point used for cursor and handle distance queries.

use serde::{Deserialize, Serialize};

/// An immutable point in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// True when both coordinates match exactly.
    pub fn equals(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Euclidean distance to `other`.
    pub fn calc_distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn calc_horizontal_distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).abs()
    }

    pub fn calc_vertical_distance(&self, other: &Point) -> f64 {
        (self.y - other.y).abs()
    }
}

impl From<kurbo::Point> for Point {
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for kurbo::Point {
    fn from(p: Point) -> Self {
        kurbo::Point::new(p.x, p.y)
    }
}
