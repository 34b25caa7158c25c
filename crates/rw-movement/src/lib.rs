//! `rw-movement` — route-following movement for discrete-event simulation.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`oracle`]      | `PathOracle` — the shortest-path seam                       |
//! | [`path`]        | `Path` — waypoints + speed, consumed once                   |
//! | [`policy`]      | `MotionSampler` trait, `UniformMotionSampler`               |
//! | [`unscheduled`] | `UnscheduledWalker` — cyclic route walking                  |
//! | [`scheduled`]   | `ScheduledWalker` — timetable-driven state machine          |
//! | [`instance`]    | `RouteMovement` façade, `WaitOutcome`, `PathOutcome`        |
//! | [`config`]      | `MovementConfig` — speed fallback/ceiling, drift bound      |
//! | [`error`]       | `MovementError`, `MovementResult<T>`                        |
//!
//! # Call protocol
//!
//! The host event loop drives each entity strictly alternately:
//!
//! 1. `RouteMovement::initial_location()` once, to place the entity.
//! 2. Repeatedly: `generate_wait_time(now)` → sleep the returned delay →
//!    `next_path(now)` → move the entity along the returned `Path`.
//! 3. Stop once `generate_wait_time` returns [`WaitOutcome::Never`] or
//!    `next_path` returns [`PathOutcome::Exhausted`].
//!
//! A wait/path pair commits exactly one cursor advance; there is no
//! rollback.  Nothing here blocks — waits are simulation-time values the
//! host sleeps through, never wall-clock.
//!
//! # Concurrency
//!
//! A `RouteMovement` is single-entity mutable state and must not be shared
//! across threads mid-call.  Everything it references — oracle, route
//! catalog, schedule, stop registry — is read-only after construction, so
//! any number of entities may share those from their own threads.

pub mod config;
pub mod error;
pub mod instance;
pub mod oracle;
pub mod path;
pub mod policy;
pub mod scheduled;
pub mod unscheduled;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::MovementConfig;
pub use error::{MovementError, MovementResult};
pub use instance::{PathOutcome, RouteMovement, WaitOutcome};
pub use oracle::PathOracle;
pub use path::Path;
pub use policy::{MotionSampler, UniformMotionSampler};
pub use scheduled::ScheduledWalker;
pub use unscheduled::{FirstStop, UnscheduledWalker};
