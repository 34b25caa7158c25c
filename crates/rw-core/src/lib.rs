//! `rw-core` — foundational types for the `routewalk` movement framework.
//!
//! This crate is a dependency of every other `rw-*` crate.  It intentionally
//! has no `rw-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                         |
//! |----------|--------------------------------------------------|
//! | [`ids`]  | `EntityId`, `RouteId`                            |
//! | [`geo`]  | `Point`, Euclidean distance, polyline length     |
//! | [`time`] | `SimTime`, `SimClock`                            |
//! | [`rng`]  | `EntityRng` (per-entity), `SimRng` (global)      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::{polyline_length, Point};
pub use ids::{EntityId, RouteId};
pub use rng::{EntityRng, SimRng};
pub use time::{SimClock, SimTime};
