//! Planar map coordinates and polyline utilities.
//!
//! Simulation maps are projected onto a local plane before loading, so
//! positions are plain `(x, y)` pairs in **metres** and distances are
//! Euclidean.  `f64` keeps timetable arithmetic (`distance / seconds`) exact
//! enough that derived speeds never drift from the planned times.

/// A position on the projected simulation plane, in metres.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`, in metres.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Total length of a polyline, in metres: the sum of consecutive segment
/// lengths from the first waypoint to the last.
///
/// Polylines with fewer than two waypoints have length 0.
pub fn polyline_length(waypoints: &[Point]) -> f64 {
    waypoints
        .windows(2)
        .map(|pair| pair[0].distance(pair[1]))
        .sum()
}
