use rw_core::Point;
use rw_transit::TransitError;
use thiserror::Error;

/// Movement-core errors.
///
/// Every variant here is the fatal tier: bad input data or a broken map that
/// must abort the run rather than produce a silently wrong simulation.  The
/// degrading tier (malformed visit indices, stale timetable entries,
/// implausible speeds) never surfaces as an `Err` — see the walker docs.
#[derive(Debug, Error)]
pub enum MovementError {
    #[error("no path from {from} to {to}: the simulation map is not fully connected")]
    Disconnected { from: Point, to: Point },

    #[error("first stop index {index} is out of range for a route with only {stops} stops")]
    InvalidFirstStop { index: usize, stops: usize },

    #[error("schedule for vehicle {vehicle:?} has no visits")]
    EmptySchedule { vehicle: String },

    #[error(
        "vehicle {vehicle:?} is {deficit:.1}s past its planned arrival at stop {stop:?}, \
         beyond the configured drift bound"
    )]
    ExcessiveDrift {
        vehicle: String,
        stop:    String,
        deficit: f64,
    },

    #[error("set_schedule called on an unscheduled movement instance")]
    NotScheduled,

    #[error(transparent)]
    Transit(#[from] TransitError),
}

pub type MovementResult<T> = Result<T, MovementError>;
