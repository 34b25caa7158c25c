//! CSV loaders for schedules, stop locations, and routes.
//!
//! All loaders come in a `_csv(path)` and a `_reader(impl Read)` flavour;
//! the reader variants exist so tests can feed `std::io::Cursor` fixtures
//! and hosts can stream from non-file sources.
//!
//! # Schedule CSV format
//!
//! One row per planned stop visit, grouped by vehicle and trip:
//!
//! ```csv
//! vehicle_id,trip,stop_id,arrival_secs,departure_secs
//! bus-7,0,S1,0,10
//! bus-7,0,S2,100,110
//! bus-7,1,S2,200,210
//! tram-2,0,S5,50,60
//! ```
//!
//! Visits keep their file order within a trip; trips are ordered by the
//! `trip` column and vehicles by id, so the result is deterministic
//! regardless of row interleaving.
//!
//! # Stop CSV format
//!
//! ```csv
//! stop_id,x,y
//! S1,0.0,0.0
//! S2,1500.0,200.0
//! ```
//!
//! # Route CSV format
//!
//! One row per stop, grouped by the `route` column, positions in visit order:
//!
//! ```csv
//! route,x,y
//! 0,0.0,0.0
//! 0,900.0,0.0
//! 1,0.0,450.0
//! ```

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rw_core::{Point, SimTime};

use crate::timetable::{Schedule, Trip, TripVisit};
use crate::{Route, StopRegistry, TransitError, TransitResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScheduleRecord {
    vehicle_id:     String,
    trip:           u32,
    stop_id:        String,
    arrival_secs:   f64,
    departure_secs: f64,
}

#[derive(Deserialize)]
struct StopRecord {
    stop_id: String,
    x:       f64,
    y:       f64,
}

#[derive(Deserialize)]
struct RouteRecord {
    route: u32,
    x:     f64,
    y:     f64,
}

// ── Schedules ─────────────────────────────────────────────────────────────────

/// Load one `Schedule` per vehicle from a CSV file.
pub fn load_schedules_csv(path: &Path) -> TransitResult<Vec<Schedule>> {
    let file = std::fs::File::open(path).map_err(TransitError::Io)?;
    load_schedules_reader(file)
}

/// Like [`load_schedules_csv`] but accepts any `Read` source.
pub fn load_schedules_reader<R: Read>(reader: R) -> TransitResult<Vec<Schedule>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    // vehicle id → trip number → visits in file order
    let mut by_vehicle: BTreeMap<String, BTreeMap<u32, Vec<TripVisit>>> = BTreeMap::new();

    for result in csv_reader.deserialize::<ScheduleRecord>() {
        let row = result.map_err(|e| TransitError::Parse(e.to_string()))?;
        by_vehicle
            .entry(row.vehicle_id)
            .or_default()
            .entry(row.trip)
            .or_default()
            .push(TripVisit {
                stop_id:   row.stop_id,
                arrival:   SimTime(row.arrival_secs),
                departure: SimTime(row.departure_secs),
            });
    }

    Ok(by_vehicle
        .into_iter()
        .map(|(vehicle_id, trips)| Schedule {
            vehicle_id,
            trips: trips.into_values().map(Trip::new).collect(),
        })
        .collect())
}

// ── Stops ─────────────────────────────────────────────────────────────────────

/// Load the stop-identifier → position table from a CSV file.
pub fn load_stops_csv(path: &Path) -> TransitResult<StopRegistry> {
    let file = std::fs::File::open(path).map_err(TransitError::Io)?;
    load_stops_reader(file)
}

/// Like [`load_stops_csv`] but accepts any `Read` source.
pub fn load_stops_reader<R: Read>(reader: R) -> TransitResult<StopRegistry> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut registry = StopRegistry::new();

    for result in csv_reader.deserialize::<StopRecord>() {
        let row = result.map_err(|e| TransitError::Parse(e.to_string()))?;
        registry.insert(row.stop_id, Point::new(row.x, row.y));
    }

    Ok(registry)
}

// ── Routes ────────────────────────────────────────────────────────────────────

/// Load all routes of one entity group from a CSV file.
pub fn load_routes_csv(path: &Path) -> TransitResult<Vec<Route>> {
    let file = std::fs::File::open(path).map_err(TransitError::Io)?;
    load_routes_reader(file)
}

/// Like [`load_routes_csv`] but accepts any `Read` source.
pub fn load_routes_reader<R: Read>(reader: R) -> TransitResult<Vec<Route>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_route: BTreeMap<u32, Vec<Point>> = BTreeMap::new();

    for result in csv_reader.deserialize::<RouteRecord>() {
        let row = result.map_err(|e| TransitError::Parse(e.to_string()))?;
        by_route
            .entry(row.route)
            .or_default()
            .push(Point::new(row.x, row.y));
    }

    by_route.into_values().map(Route::new).collect()
}
