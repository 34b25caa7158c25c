//! The `PathOracle` trait — the shortest-path seam.
//!
//! # Pluggability
//!
//! Walkers query routing through this trait, so applications can plug in
//! whatever search their map supports (Dijkstra, contraction hierarchies,
//! A*) without the movement core knowing anything about the graph.  The
//! graph itself, its loading, and the search all live on the host's side of
//! this seam.

use rw_core::Point;

use crate::MovementResult;

/// External shortest-path search, consumed as a black box.
///
/// # Contract
///
/// `shortest_path` returns the ordered waypoint sequence from `from` to
/// `to`, both endpoints included, intermediate map nodes in between.  The
/// sequence may be empty when `from == to`.  A genuinely unreachable pair is
/// an `Err` — on a validated simulation map that means broken input data,
/// and callers propagate it as fatal.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: one oracle instance is typically
/// shared by every entity in the simulation.
pub trait PathOracle: Send + Sync {
    fn shortest_path(&self, from: Point, to: Point) -> MovementResult<Vec<Point>>;
}
