//! `rw-transit` — the read-only transit data consumed by the movement core.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`timetable`] | `TripVisit`, `Trip`, `Schedule` — planned vehicle runs       |
//! | [`stops`]     | `StopRegistry` — stop identifier → map position              |
//! | [`route`]     | `Route`, `RouteCatalog` — cyclic stop lists + assignment     |
//! | [`loader`]    | CSV loaders for schedules, stops, and routes                 |
//! | [`error`]     | `TransitError`, `TransitResult<T>`                           |
//!
//! # Ownership model
//!
//! Everything in this crate is immutable once loaded.  Entities share
//! schedules, the stop registry, and route catalogs behind `Arc`; the only
//! mutation anywhere is the catalog's route-assignment counter, which is an
//! atomic owned by the catalog itself so concurrent prototype cloning stays
//! race-free.

pub mod error;
pub mod loader;
pub mod route;
pub mod stops;
pub mod timetable;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TransitError, TransitResult};
pub use loader::{
    load_routes_csv, load_routes_reader, load_schedules_csv, load_schedules_reader,
    load_stops_csv, load_stops_reader,
};
pub use route::{Route, RouteCatalog};
pub use stops::StopRegistry;
pub use timetable::{Schedule, Trip, TripVisit};
