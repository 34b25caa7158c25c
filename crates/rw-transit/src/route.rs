//! `Route` and `RouteCatalog` — cyclic stop lists for unscheduled movement.
//!
//! A catalog owns every route read for one entity group and hands them out
//! in round-robin order as prototypes are cloned.  The assignment counter is
//! an atomic owned by the catalog (never module-level state), so a catalog
//! shared behind `Arc` can be cloned from concurrently without races and two
//! catalogs never interfere with each other.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rw_core::{Point, RouteId};

use crate::{TransitError, TransitResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// An ordered, cyclic sequence of stop positions.
///
/// The per-entity cursor that walks a route lives in the movement core; the
/// route itself is immutable and shared.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    stops: Vec<Point>,
}

impl Route {
    /// Construct a route from its ordered stops.
    ///
    /// # Errors
    /// A route with no stops is unusable and rejected at load time.
    pub fn new(stops: Vec<Point>) -> TransitResult<Self> {
        if stops.is_empty() {
            return Err(TransitError::EmptyRoute);
        }
        Ok(Self { stops })
    }

    /// Read-only view of the stops, in route order.
    pub fn stops(&self) -> &[Point] {
        &self.stops
    }

    /// The stop at `index` (must be `< len()`).
    #[inline]
    pub fn stop(&self, index: usize) -> Point {
        self.stops[index]
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

// ── RouteCatalog ──────────────────────────────────────────────────────────────

/// All routes available to one entity group, plus the round-robin counter
/// used to assign them to clones in construction order.
pub struct RouteCatalog {
    routes: Vec<Arc<Route>>,
    /// Next route index handed out by [`assign_next`](Self::assign_next).
    next_route: AtomicUsize,
}

impl RouteCatalog {
    /// Build a catalog from loaded routes.
    ///
    /// # Errors
    /// An empty catalog cannot assign anything and is rejected.
    pub fn new(routes: Vec<Route>) -> TransitResult<Self> {
        if routes.is_empty() {
            return Err(TransitError::EmptyCatalog);
        }
        Ok(Self {
            routes: routes.into_iter().map(Arc::new).collect(),
            next_route: AtomicUsize::new(0),
        })
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The route at `id`, or `None` when out of range.
    pub fn route(&self, id: RouteId) -> Option<Arc<Route>> {
        self.routes.get(id.index()).cloned()
    }

    /// The route a prototype views before any clone is made — always the
    /// first, without consuming the assignment counter.
    pub fn first(&self) -> Arc<Route> {
        Arc::clone(&self.routes[0])
    }

    /// Hand out the next route in round-robin order, wrapping at the end.
    ///
    /// Each call advances the shared counter, so consecutive clones receive
    /// consecutive routes and the `len() + 1`-th clone sees the first route
    /// again.
    pub fn assign_next(&self) -> (RouteId, Arc<Route>) {
        let idx = self.next_route.fetch_add(1, Ordering::Relaxed) % self.routes.len();
        (RouteId(idx as u32), Arc::clone(&self.routes[idx]))
    }

    /// The stop count of the shortest route — the upper bound a configured
    /// fixed starting index must respect to be valid for every route.
    pub fn min_stop_count(&self) -> usize {
        self.routes.iter().map(|r| r.len()).min().unwrap_or(0)
    }
}
