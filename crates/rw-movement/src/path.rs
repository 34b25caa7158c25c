//! The `Path` value type: an ordered waypoint sequence plus one travel speed.

use rw_core::{polyline_length, Point};

/// One leg of movement, handed to the host loop and consumed once.
///
/// Waypoints are the oracle's node sequence verbatim — first to last,
/// intermediate nodes included, not deduplicated.  The speed applies to the
/// whole leg.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub waypoints: Vec<Point>,
    /// Travel speed along the leg, metres per second.
    pub speed: f64,
}

impl Path {
    /// An empty path travelled at `speed`.
    pub fn new(speed: f64) -> Self {
        Self { waypoints: Vec::new(), speed }
    }

    /// A complete path over `waypoints` at `speed`.
    pub fn with_waypoints(speed: f64, waypoints: Vec<Point>) -> Self {
        Self { waypoints, speed }
    }

    /// Append the next waypoint.
    pub fn add_waypoint(&mut self, waypoint: Point) {
        self.waypoints.push(waypoint);
    }

    /// Total length of the leg in metres (0 for fewer than two waypoints).
    pub fn distance(&self) -> f64 {
        polyline_length(&self.waypoints)
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}
