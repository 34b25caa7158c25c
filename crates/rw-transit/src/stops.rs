//! `StopRegistry` — the shared stop-identifier → map-position lookup table.
//!
//! Built once at load time (typically by the CSV loader) and shared
//! read-only across all entities.  Lookups sit on the path-construction hot
//! path, so the table uses `FxHashMap` rather than the SipHash default.

use rustc_hash::FxHashMap;

use rw_core::Point;

use crate::{TransitError, TransitResult};

/// Immutable stop-identifier → position table.
#[derive(Clone, Debug, Default)]
pub struct StopRegistry {
    positions: FxHashMap<String, Point>,
}

impl StopRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `stop_id` at `position`.  Re-registering an id replaces the
    /// earlier position.
    pub fn insert(&mut self, stop_id: impl Into<String>, position: Point) {
        self.positions.insert(stop_id.into(), position);
    }

    /// The position of `stop_id`, or `None` for an unknown identifier.
    pub fn position(&self, stop_id: &str) -> Option<Point> {
        self.positions.get(stop_id).copied()
    }

    /// Like [`position`](Self::position) but an unknown identifier is the
    /// fatal [`TransitError::UnknownStop`] — used wherever the spec treats a
    /// missing stop as a configuration error.
    pub fn resolve(&self, stop_id: &str) -> TransitResult<Point> {
        self.position(stop_id)
            .ok_or_else(|| TransitError::UnknownStop(stop_id.to_owned()))
    }

    /// Translate an ordered list of stop identifiers into positions.
    pub fn resolve_route(&self, stop_ids: &[String]) -> TransitResult<Vec<Point>> {
        stop_ids.iter().map(|id| self.resolve(id)).collect()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl FromIterator<(String, Point)> for StopRegistry {
    fn from_iter<I: IntoIterator<Item = (String, Point)>>(iter: I) -> Self {
        Self { positions: iter.into_iter().collect() }
    }
}
