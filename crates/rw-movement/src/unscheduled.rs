//! `UnscheduledWalker` — cyclic walking of a fixed stop list, forever.

use std::sync::Arc;

use rw_core::{EntityRng, Point, RouteId};
use rw_transit::{Route, RouteCatalog};

use crate::{MotionSampler, MovementError, MovementResult, Path, PathOracle};

// ── Initial placement ─────────────────────────────────────────────────────────

/// Where on its route a freshly cloned entity starts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FirstStop {
    /// A uniformly random stop index in `[0, stop_count - 1)`.
    Random,
    /// A configured fixed index, validated against every route in the
    /// catalog at prototype construction.
    Fixed(usize),
}

// ── Route cursor ──────────────────────────────────────────────────────────────

/// Per-entity position within one shared route.
struct RouteCursor {
    route:    Arc<Route>,
    route_id: RouteId,
    /// Index of the next stop to visit; always in `[0, route.len())`.
    next: usize,
}

impl RouteCursor {
    /// Return the next stop and move the cursor forward, wrapping at the end.
    fn advance(&mut self) -> Point {
        let stop = self.route.stop(self.next);
        self.next = (self.next + 1) % self.route.len();
        stop
    }
}

// ── UnscheduledWalker ─────────────────────────────────────────────────────────

/// Cycles through a fixed ordered list of stops indefinitely, pacing itself
/// with a [`MotionSampler`] rather than a timetable.
///
/// Constructed as a prototype on the catalog's first route;
/// [`replicate`](Self::replicate) hands consecutive routes to consecutive
/// clones via the catalog's round-robin counter.
pub struct UnscheduledWalker {
    catalog:    Arc<RouteCatalog>,
    first_stop: FirstStop,
    sampler:    Arc<dyn MotionSampler>,
    cursor:     RouteCursor,
}

impl UnscheduledWalker {
    /// Build the prototype walker.
    ///
    /// The prototype views the catalog's first route without consuming the
    /// assignment counter, so the first clone also starts from route 0.
    ///
    /// # Errors
    ///
    /// A fixed first-stop index must be valid for every route in the catalog
    /// (clones receive different routes); an out-of-range index is
    /// [`MovementError::InvalidFirstStop`].
    pub fn prototype(
        catalog:    Arc<RouteCatalog>,
        first_stop: FirstStop,
        sampler:    Arc<dyn MotionSampler>,
    ) -> MovementResult<Self> {
        if let FirstStop::Fixed(index) = first_stop {
            let stops = catalog.min_stop_count();
            if index >= stops {
                return Err(MovementError::InvalidFirstStop { index, stops });
            }
        }
        let route = catalog.first();
        let next = match first_stop {
            FirstStop::Fixed(index) => index,
            FirstStop::Random => 0, // prototypes are never simulated
        };
        Ok(Self {
            catalog,
            first_stop,
            sampler,
            cursor: RouteCursor { route, route_id: RouteId(0), next },
        })
    }

    /// Clone a walker for a new entity: the next route in round-robin order,
    /// with a fresh cursor at the configured or a random starting stop.
    pub fn replicate(&self, rng: &mut EntityRng) -> Self {
        let (route_id, route) = self.catalog.assign_next();
        let next = match self.first_stop {
            FirstStop::Fixed(index) => index,
            // Uniform in [0, len - 1); single-stop routes can only start at 0.
            FirstStop::Random if route.len() > 1 => rng.gen_range(0..route.len() - 1),
            FirstStop::Random => 0,
        };
        Self {
            catalog:    Arc::clone(&self.catalog),
            first_stop: self.first_stop,
            sampler:    Arc::clone(&self.sampler),
            cursor:     RouteCursor { route, route_id, next },
        }
    }

    /// The full stop list of this walker's route, in route order.
    pub fn stops(&self) -> &[Point] {
        self.cursor.route.stops()
    }

    /// Which catalog route this walker is assigned to.
    pub fn route_id(&self) -> RouteId {
        self.cursor.route_id
    }

    /// Return the next stop in cyclic order and advance the cursor.
    pub fn next_stop(&mut self) -> Point {
        self.cursor.advance()
    }

    /// Sample the post-arrival pause.
    pub fn wait_time(&self, rng: &mut EntityRng) -> f64 {
        self.sampler.wait_time(rng)
    }

    /// Build the leg from `from` to the next stop on the route.
    ///
    /// Returns the path and the destination stop (the entity's new last
    /// position).  An empty oracle result between two stops means the
    /// simulation map is not fully connected — a configuration error, not a
    /// runtime condition to recover from.
    pub fn next_path(
        &mut self,
        from:   Point,
        oracle: &dyn PathOracle,
        rng:    &mut EntityRng,
    ) -> MovementResult<(Path, Point)> {
        let to = self.cursor.advance();

        let waypoints = oracle.shortest_path(from, to)?;
        if waypoints.is_empty() {
            return Err(MovementError::Disconnected { from, to });
        }

        let mut path = Path::new(self.sampler.speed(rng));
        for waypoint in waypoints {
            path.add_waypoint(waypoint);
        }
        Ok((path, to))
    }
}
