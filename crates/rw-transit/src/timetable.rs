//! Vehicle timetable types: `TripVisit`, `Trip`, and `Schedule`.
//!
//! A `Schedule` is the planned day of one vehicle: an ordered list of trips,
//! each an ordered list of timestamped stop visits.  The movement core walks
//! a schedule with a `(trip, visit)` cursor; the position predicates on
//! `Schedule` classify that cursor without the caller touching the nested
//! vectors.
//!
//! Arrival/departure times are expected to be non-decreasing within a trip.
//! This is a property of the input data, not something the type system
//! enforces — a feed that violates it produces odd waits, not panics.

use rw_core::SimTime;

// ── TripVisit ─────────────────────────────────────────────────────────────────

/// One planned stop visit: where, and when the vehicle arrives and departs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripVisit {
    /// Stop identifier, resolved to a position via [`StopRegistry`](crate::StopRegistry).
    pub stop_id: String,
    /// Planned arrival time at the stop.
    pub arrival: SimTime,
    /// Planned departure time from the stop.
    pub departure: SimTime,
}

// ── Trip ──────────────────────────────────────────────────────────────────────

/// One vehicle run: an ordered, non-empty sequence of stop visits.
///
/// Emptiness is an input-data defect the movement core degrades on rather
/// than a state this type prevents, so the visits are plain public data.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trip {
    pub visits: Vec<TripVisit>,
}

impl Trip {
    pub fn new(visits: Vec<TripVisit>) -> Self {
        Self { visits }
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// The full planned timetable of one vehicle.
///
/// Shared read-only across every entity representing that vehicle; per-entity
/// cursors live in the movement core, never here.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    pub vehicle_id: String,
    pub trips: Vec<Trip>,
}

impl Schedule {
    pub fn new(vehicle_id: impl Into<String>, trips: Vec<Trip>) -> Self {
        Self { vehicle_id: vehicle_id.into(), trips }
    }

    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }

    /// The visit at `(trip, visit)`, or `None` when either index is out of
    /// range (exhausted cursor or malformed schedule).
    pub fn visit(&self, trip: usize, visit: usize) -> Option<&TripVisit> {
        self.trips.get(trip)?.visits.get(visit)
    }

    /// The first visit of the first trip — the vehicle's starting stop.
    pub fn first_visit(&self) -> Option<&TripVisit> {
        self.visit(0, 0)
    }

    // ── Cursor position predicates ────────────────────────────────────────

    /// `true` once the cursor's trip index has passed the last trip.
    pub fn is_exhausted(&self, trip: usize) -> bool {
        trip >= self.trips.len()
    }

    /// `true` if `(trip, visit)` is the final visit of the final trip.
    pub fn is_final_visit(&self, trip: usize, visit: usize) -> bool {
        trip + 1 == self.trips.len()
            && self
                .trips
                .get(trip)
                .is_some_and(|t| visit + 1 == t.visits.len())
    }

    /// `true` if `(trip, visit)` is the final visit of a trip that is not the
    /// last — the cursor must roll over to the next trip.
    pub fn ends_trip(&self, trip: usize, visit: usize) -> bool {
        trip + 1 < self.trips.len()
            && self
                .trips
                .get(trip)
                .is_some_and(|t| visit + 1 == t.visits.len())
    }
}
