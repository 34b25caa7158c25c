//! `RouteMovement` — the entity-facing façade over the two walker kinds.

use std::sync::Arc;

use rw_core::{EntityRng, Point, SimTime};
use rw_transit::{RouteCatalog, Schedule, StopRegistry};

use crate::{
    FirstStop, MotionSampler, MovementConfig, MovementError, MovementResult, Path, PathOracle,
    ScheduledWalker, UnscheduledWalker,
};

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// Result of [`RouteMovement::generate_wait_time`].
///
/// "Never call me again" is a distinct variant rather than a sentinel
/// magnitude, so hosts cannot mistake it for an ordinary delay.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WaitOutcome {
    /// Seconds to wait before requesting the next path.  May be zero or
    /// negative when the simulation is behind the timetable; treat either as
    /// "go now".
    Delay(f64),
    /// The schedule is exhausted; the entity will never request a path again.
    Never,
}

impl WaitOutcome {
    pub fn is_never(&self) -> bool {
        matches!(self, WaitOutcome::Never)
    }

    /// The delay in seconds, or `None` for [`Never`](WaitOutcome::Never).
    pub fn delay(&self) -> Option<f64> {
        match self {
            WaitOutcome::Delay(secs) => Some(*secs),
            WaitOutcome::Never => None,
        }
    }
}

/// Result of [`RouteMovement::next_path`].
#[derive(Clone, Debug, PartialEq)]
pub enum PathOutcome {
    /// The next leg to travel.
    Leg(Path),
    /// No more paths: the schedule is exhausted (or malformed past this
    /// point).  Returned idempotently from then on.
    Exhausted,
}

impl PathOutcome {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, PathOutcome::Exhausted)
    }

    /// The leg, or `None` for [`Exhausted`](PathOutcome::Exhausted).
    pub fn into_leg(self) -> Option<Path> {
        match self {
            PathOutcome::Leg(path) => Some(path),
            PathOutcome::Exhausted => None,
        }
    }
}

// ── RouteMovement ─────────────────────────────────────────────────────────────

/// The two movement disciplines, fixed at construction.
enum WalkerKind {
    Unscheduled(UnscheduledWalker),
    Scheduled(ScheduledWalker),
}

/// One entity's movement model: exactly one walker, the shared oracle, and
/// the entity's last known position.
///
/// Instances are built once as prototypes and stamped out per entity with
/// [`replicate`](Self::replicate); all heavy data (catalog, schedule, stop
/// registry, oracle) is shared by reference, only the cursor state is per
/// entity.
pub struct RouteMovement {
    kind:          WalkerKind,
    oracle:        Arc<dyn PathOracle>,
    last_position: Option<Point>,
}

impl RouteMovement {
    /// Prototype in unscheduled mode: clones cycle the catalog's routes in
    /// round-robin order, placed per [`FirstStop`].
    pub fn unscheduled(
        catalog:    Arc<RouteCatalog>,
        first_stop: FirstStop,
        sampler:    Arc<dyn MotionSampler>,
        oracle:     Arc<dyn PathOracle>,
    ) -> MovementResult<Self> {
        Ok(Self {
            kind: WalkerKind::Unscheduled(UnscheduledWalker::prototype(
                catalog, first_stop, sampler,
            )?),
            oracle,
            last_position: None,
        })
    }

    /// Prototype in scheduled mode: one fixed vehicle's timetable, walked
    /// against the shared stop registry.
    pub fn scheduled(
        schedule: Arc<Schedule>,
        stop_ids: Arc<Vec<String>>,
        registry: Arc<StopRegistry>,
        config:   MovementConfig,
        oracle:   Arc<dyn PathOracle>,
    ) -> MovementResult<Self> {
        Ok(Self {
            kind: WalkerKind::Scheduled(ScheduledWalker::new(
                schedule, stop_ids, registry, config,
            )?),
            oracle,
            last_position: None,
        })
    }

    /// Resolve and cache the entity's starting position.
    ///
    /// Does not consume a wait/path cycle.  In unscheduled mode the route
    /// cursor moves past the starting stop so the first leg heads to the
    /// following one; in scheduled mode the start is the first visit's stop.
    pub fn initial_location(&mut self) -> MovementResult<Point> {
        if let Some(position) = self.last_position {
            return Ok(position);
        }
        let start = match &mut self.kind {
            WalkerKind::Unscheduled(walker) => walker.next_stop(),
            WalkerKind::Scheduled(walker) => walker.initial_position()?,
        };
        self.last_position = Some(start);
        Ok(start)
    }

    /// The entity's last known position, or `None` before movement starts.
    pub fn last_location(&self) -> Option<Point> {
        self.last_position
    }

    /// How long the entity waits before its next path request.
    pub fn generate_wait_time(&mut self, now: SimTime, rng: &mut EntityRng) -> WaitOutcome {
        match &mut self.kind {
            WalkerKind::Unscheduled(walker) => WaitOutcome::Delay(walker.wait_time(rng)),
            WalkerKind::Scheduled(walker) => walker.wait_time(now),
        }
    }

    /// The entity's next leg.
    ///
    /// Unscheduled mode always produces a leg; scheduled mode returns
    /// [`PathOutcome::Exhausted`] once the timetable ends.
    pub fn next_path(&mut self, now: SimTime, rng: &mut EntityRng) -> MovementResult<PathOutcome> {
        match &mut self.kind {
            WalkerKind::Unscheduled(walker) => {
                let from = match self.last_position {
                    Some(position) => position,
                    // Host skipped initial_location(); place the entity now.
                    None => walker.next_stop(),
                };
                let (path, destination) = walker.next_path(from, self.oracle.as_ref(), rng)?;
                self.last_position = Some(destination);
                Ok(PathOutcome::Leg(path))
            }
            WalkerKind::Scheduled(walker) => match walker.next_path(now, self.oracle.as_ref())? {
                Some((path, destination)) => {
                    self.last_position = Some(destination);
                    Ok(PathOutcome::Leg(path))
                }
                None => Ok(PathOutcome::Exhausted),
            },
        }
    }

    /// The ordered stop positions of the active route — the assigned cyclic
    /// route, or the scheduled vehicle's served stops translated through the
    /// registry.
    pub fn stops(&self) -> MovementResult<Vec<Point>> {
        match &self.kind {
            WalkerKind::Unscheduled(walker) => Ok(walker.stops().to_vec()),
            WalkerKind::Scheduled(walker) => walker.stops(),
        }
    }

    /// Prototype cloning: shared data by reference, a fresh per-entity
    /// cursor.  Unscheduled clones take the next catalog route in round-robin
    /// order; scheduled clones keep the prototype's vehicle schedule.
    pub fn replicate(&self, rng: &mut EntityRng) -> Self {
        let kind = match &self.kind {
            WalkerKind::Unscheduled(walker) => WalkerKind::Unscheduled(walker.replicate(rng)),
            WalkerKind::Scheduled(walker) => WalkerKind::Scheduled(walker.replicate()),
        };
        Self {
            kind,
            oracle: Arc::clone(&self.oracle),
            last_position: None,
        }
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self.kind, WalkerKind::Scheduled(_))
    }

    /// Replace a scheduled instance's timetable (cursor resets to
    /// pre-departure).
    ///
    /// # Errors
    ///
    /// [`MovementError::NotScheduled`] in unscheduled mode.
    pub fn set_schedule(&mut self, schedule: Arc<Schedule>) -> MovementResult<()> {
        match &mut self.kind {
            WalkerKind::Scheduled(walker) => walker.set_schedule(schedule),
            WalkerKind::Unscheduled(_) => Err(MovementError::NotScheduled),
        }
    }
}
