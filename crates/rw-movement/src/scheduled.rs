//! `ScheduledWalker` — the timetable-driven movement state machine.
//!
//! # Three clocks
//!
//! Every leg reconciles three independent time sources: the simulation
//! clock, the timetable's planned times, and the travel time physically
//! implied by the shortest path between two stops.  The walker keeps them
//! consistent by deriving each leg's speed from the gap between the planned
//! arrival and the current simulation time — and degrading to a fixed
//! average road speed when that gap has already closed (the simulation is
//! running behind its timetable).
//!
//! # Cursor model
//!
//! `(next_trip, next_visit)` is the visit the entity travels to next;
//! `origin` is the visit it is physically at.  `wait_time` advances the
//! target cursor, `next_path` advances the origin — one committed step per
//! wait/path pair, exactly the host loop's call order.

use std::sync::Arc;

use rw_core::{polyline_length, Point, SimTime};
use rw_transit::{Schedule, StopRegistry};

use crate::instance::WaitOutcome;
use crate::{MovementConfig, MovementError, MovementResult, Path, PathOracle};

/// Walks one vehicle's [`Schedule`] visit by visit.
pub struct ScheduledWalker {
    schedule: Arc<Schedule>,
    /// Ordered ids of every stop this vehicle's route serves (for
    /// visualization and bookkeeping, not for walking).
    stop_ids: Arc<Vec<String>>,
    registry: Arc<StopRegistry>,
    config:   MovementConfig,

    /// Target cursor: the visit the entity travels to next.
    next_trip:  usize,
    next_visit: usize,
    /// The visit the entity is physically at.
    origin: (usize, usize),
}

impl ScheduledWalker {
    /// Build a walker at the schedule's first visit, pre-departure.
    ///
    /// # Errors
    ///
    /// A schedule with no trips can never produce a leg and is rejected.
    pub fn new(
        schedule: Arc<Schedule>,
        stop_ids: Arc<Vec<String>>,
        registry: Arc<StopRegistry>,
        config:   MovementConfig,
    ) -> MovementResult<Self> {
        if schedule.trips.is_empty() {
            return Err(MovementError::EmptySchedule { vehicle: schedule.vehicle_id.clone() });
        }
        Ok(Self {
            schedule,
            stop_ids,
            registry,
            config,
            next_trip:  0,
            next_visit: 0,
            origin:     (0, 0),
        })
    }

    /// Clone for a new entity: same schedule, stop ids, and registry by
    /// reference; a fresh pre-departure cursor.
    ///
    /// Clones are not rotated across timetables — each represents one fixed
    /// vehicle's schedule until the host re-targets it with
    /// [`set_schedule`](Self::set_schedule).
    pub fn replicate(&self) -> Self {
        Self {
            schedule: Arc::clone(&self.schedule),
            stop_ids: Arc::clone(&self.stop_ids),
            registry: Arc::clone(&self.registry),
            config:   self.config,
            next_trip:  0,
            next_visit: 0,
            origin:     (0, 0),
        }
    }

    /// Replace the timetable and reset the cursor to pre-departure.
    ///
    /// Intended for assigning a cloned entity its own vehicle's schedule
    /// before movement starts.
    pub fn set_schedule(&mut self, schedule: Arc<Schedule>) -> MovementResult<()> {
        if schedule.trips.is_empty() {
            return Err(MovementError::EmptySchedule { vehicle: schedule.vehicle_id.clone() });
        }
        self.schedule = schedule;
        self.next_trip = 0;
        self.next_visit = 0;
        self.origin = (0, 0);
        Ok(())
    }

    /// The vehicle's starting position: the first visit's stop.
    pub fn initial_position(&self) -> MovementResult<Point> {
        let Some(first) = self.schedule.first_visit() else {
            return Err(MovementError::EmptySchedule {
                vehicle: self.schedule.vehicle_id.clone(),
            });
        };
        Ok(self.registry.resolve(&first.stop_id)?)
    }

    /// The positions of every stop this vehicle serves, in route order.
    pub fn stops(&self) -> MovementResult<Vec<Point>> {
        Ok(self.registry.resolve_route(&self.stop_ids)?)
    }

    // ── Wait-time state machine ───────────────────────────────────────────

    /// Seconds until the next departure, advancing the target cursor.
    ///
    /// Transition table, in priority order:
    ///
    /// | State                          | Result                                        |
    /// |--------------------------------|-----------------------------------------------|
    /// | schedule exhausted             | `Never`                                       |
    /// | final visit of final trip      | `Delay(0)`, cursor past the end               |
    /// | pre-departure `(0, 0)`         | raw `departure - now` (may be negative)       |
    /// | final visit of a non-final trip| raw `departure - now`, roll to next trip      |
    /// | mid-trip                       | `departure - now` clamped to ≥ 0              |
    ///
    /// The pre-departure and trip-rollover delays are returned raw: a
    /// negative value means the simulation started after the planned
    /// departure, and the caller treats it as "go now".  Mid-trip lateness
    /// is routine (legs take as long as they take) and is floored to 0.
    pub fn wait_time(&mut self, now: SimTime) -> WaitOutcome {
        if self.schedule.is_exhausted(self.next_trip) {
            return WaitOutcome::Never;
        }

        if self.schedule.is_final_visit(self.next_trip, self.next_visit) {
            // Forces the exhausted branch on the next call.
            self.next_trip += 1;
            return WaitOutcome::Delay(0.0);
        }

        if self.next_trip == 0 && self.next_visit == 0 {
            self.origin = (0, 0);
            self.next_visit = 1;
            let Some(first) = self.schedule.visit(0, 0) else {
                return WaitOutcome::Delay(0.0); // empty first trip; next_path degrades
            };
            return WaitOutcome::Delay(first.departure - now);
        }

        if self.schedule.ends_trip(self.next_trip, self.next_visit) {
            let delay = self
                .schedule
                .visit(self.next_trip, self.next_visit)
                .map_or(0.0, |v| v.departure - now);
            self.next_trip += 1;
            self.next_visit = 0;
            return WaitOutcome::Delay(delay);
        }

        let delay = self
            .schedule
            .visit(self.next_trip, self.next_visit)
            .map_or(0.0, |v| v.departure - now);
        self.next_visit += 1;
        WaitOutcome::Delay(delay.max(0.0))
    }

    // ── Path construction ─────────────────────────────────────────────────

    /// Build the leg from the origin stop to the next scheduled visit.
    ///
    /// Returns `None` once the schedule is exhausted, and also — with a
    /// warning — when the target visit index is out of range for its trip:
    /// that is malformed input data, and degrading to "no path" keeps the
    /// rest of the simulation running.  In both cases the cursor is left
    /// untouched so callers can detect end-of-schedule.
    ///
    /// An unresolvable stop identifier or a timetable deficit beyond the
    /// configured drift bound is fatal.
    pub fn next_path(
        &mut self,
        now:    SimTime,
        oracle: &dyn PathOracle,
    ) -> MovementResult<Option<(Path, Point)>> {
        let schedule = Arc::clone(&self.schedule);

        if schedule.is_exhausted(self.next_trip) {
            return Ok(None);
        }
        let Some(target) = schedule.visit(self.next_trip, self.next_visit) else {
            log::warn!(
                "vehicle {:?}: visit index {} out of range on trip {} — no further paths",
                schedule.vehicle_id,
                self.next_visit,
                self.next_trip,
            );
            return Ok(None);
        };
        let Some(origin) = schedule.visit(self.origin.0, self.origin.1) else {
            log::warn!(
                "vehicle {:?}: origin visit ({}, {}) missing from schedule — no further paths",
                schedule.vehicle_id,
                self.origin.0,
                self.origin.1,
            );
            return Ok(None);
        };

        let from = self.registry.resolve(&origin.stop_id)?;
        let to = self.registry.resolve(&target.stop_id)?;

        let waypoints = oracle.shortest_path(from, to)?;
        let distance = polyline_length(&waypoints);

        let mut time_budget = target.arrival - now;
        if time_budget <= 0.0 {
            if time_budget <= -self.config.max_schedule_drift {
                return Err(MovementError::ExcessiveDrift {
                    vehicle: schedule.vehicle_id.clone(),
                    stop:    target.stop_id.clone(),
                    deficit: -time_budget,
                });
            }
            // Stale timetable entry: derive the budget from a typical road
            // speed instead of producing a negative or unbounded one.
            time_budget = distance / self.config.fallback_speed;
        }

        let speed = if distance == 0.0 && time_budget == 0.0 {
            0.0
        } else {
            distance / time_budget
        };
        if speed > self.config.speed_ceiling {
            log::warn!(
                "vehicle {:?} needs {:.1} km/h between stop {:?} and stop {:?} — \
                 the map is likely missing a road segment",
                schedule.vehicle_id,
                speed * 3.6,
                origin.stop_id,
                target.stop_id,
            );
        }

        self.origin = (self.next_trip, self.next_visit);
        Ok(Some((Path::with_waypoints(speed, waypoints), to)))
    }
}
