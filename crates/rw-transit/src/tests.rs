//! Unit tests for rw-transit.

use rw_core::{Point, SimTime};

use crate::{Route, RouteCatalog, Schedule, StopRegistry, Trip, TripVisit};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn visit(stop: &str, arr: f64, dep: f64) -> TripVisit {
    TripVisit {
        stop_id:   stop.to_owned(),
        arrival:   SimTime(arr),
        departure: SimTime(dep),
    }
}

/// Two-trip schedule: trip 0 visits A→B, trip 1 visits B→C.
fn two_trip_schedule() -> Schedule {
    Schedule::new(
        "bus-7",
        vec![
            Trip::new(vec![visit("A", 0.0, 10.0), visit("B", 100.0, 110.0)]),
            Trip::new(vec![visit("B", 110.0, 120.0), visit("C", 200.0, 210.0)]),
        ],
    )
}

// ── Schedule predicates ───────────────────────────────────────────────────────

#[cfg(test)]
mod timetable {
    use super::*;

    #[test]
    fn visit_lookup() {
        let s = two_trip_schedule();
        assert_eq!(s.visit(0, 1).unwrap().stop_id, "B");
        assert_eq!(s.visit(1, 1).unwrap().stop_id, "C");
        assert!(s.visit(0, 2).is_none());
        assert!(s.visit(2, 0).is_none());
    }

    #[test]
    fn first_visit_is_starting_stop() {
        let s = two_trip_schedule();
        assert_eq!(s.first_visit().unwrap().stop_id, "A");
    }

    #[test]
    fn exhaustion() {
        let s = two_trip_schedule();
        assert!(!s.is_exhausted(0));
        assert!(!s.is_exhausted(1));
        assert!(s.is_exhausted(2));
        assert!(s.is_exhausted(99));
    }

    #[test]
    fn final_visit_only_at_end_of_last_trip() {
        let s = two_trip_schedule();
        assert!(s.is_final_visit(1, 1));
        assert!(!s.is_final_visit(1, 0));
        assert!(!s.is_final_visit(0, 1)); // end of a non-final trip
        assert!(!s.is_final_visit(2, 0)); // past the schedule
    }

    #[test]
    fn ends_trip_only_on_non_final_trips() {
        let s = two_trip_schedule();
        assert!(s.ends_trip(0, 1));
        assert!(!s.ends_trip(0, 0));
        assert!(!s.ends_trip(1, 1)); // final trip never rolls over
    }

    #[test]
    fn empty_trip_never_matches_positions() {
        let s = Schedule::new("x", vec![Trip::default(), Trip::new(vec![visit("A", 0.0, 0.0)])]);
        assert!(!s.is_final_visit(0, 0));
        assert!(!s.ends_trip(0, 0));
        assert!(s.visit(0, 0).is_none());
    }
}

// ── StopRegistry ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod stops {
    use super::*;

    fn registry() -> StopRegistry {
        [
            ("A".to_owned(), Point::new(0.0, 0.0)),
            ("B".to_owned(), Point::new(300.0, 400.0)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn position_lookup() {
        let reg = registry();
        assert_eq!(reg.position("B"), Some(Point::new(300.0, 400.0)));
        assert!(reg.position("Z").is_none());
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn resolve_unknown_stop_errors() {
        let reg = registry();
        assert!(reg.resolve("A").is_ok());
        let err = reg.resolve("Z").unwrap_err();
        assert!(matches!(err, crate::TransitError::UnknownStop(ref id) if id == "Z"));
    }

    #[test]
    fn resolve_route_translates_in_order() {
        let reg = registry();
        let ids = vec!["B".to_owned(), "A".to_owned()];
        let positions = reg.resolve_route(&ids).unwrap();
        assert_eq!(positions, vec![Point::new(300.0, 400.0), Point::new(0.0, 0.0)]);
    }

    #[test]
    fn resolve_route_fails_on_any_unknown() {
        let reg = registry();
        let ids = vec!["A".to_owned(), "Z".to_owned()];
        assert!(reg.resolve_route(&ids).is_err());
    }
}

// ── RouteCatalog ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use rw_core::RouteId;

    use super::*;

    fn route_at(x: f64) -> Route {
        Route::new(vec![Point::new(x, 0.0), Point::new(x, 100.0)]).unwrap()
    }

    fn catalog() -> RouteCatalog {
        RouteCatalog::new(vec![route_at(0.0), route_at(1.0), route_at(2.0)]).unwrap()
    }

    #[test]
    fn empty_route_rejected() {
        assert!(Route::new(vec![]).is_err());
    }

    #[test]
    fn empty_catalog_rejected() {
        assert!(RouteCatalog::new(vec![]).is_err());
    }

    #[test]
    fn first_does_not_consume_the_counter() {
        let cat = catalog();
        let proto_route = cat.first();
        assert_eq!(proto_route.stop(0), Point::new(0.0, 0.0));
        // The first assignment still hands out route 0.
        let (id, _) = cat.assign_next();
        assert_eq!(id, RouteId(0));
    }

    #[test]
    fn assignment_is_round_robin_with_wrap() {
        let cat = catalog();
        let ids: Vec<_> = (0..4).map(|_| cat.assign_next().0).collect();
        assert_eq!(ids, vec![RouteId(0), RouteId(1), RouteId(2), RouteId(0)]);
    }

    #[test]
    fn min_stop_count() {
        let cat = RouteCatalog::new(vec![
            route_at(0.0),
            Route::new(vec![Point::new(9.0, 9.0)]).unwrap(),
        ])
        .unwrap();
        assert_eq!(cat.min_stop_count(), 1);
    }
}

// ── CSV loaders ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{load_routes_reader, load_schedules_reader, load_stops_reader};

    use super::*;

    const SCHEDULE_CSV: &[u8] = b"\
vehicle_id,trip,stop_id,arrival_secs,departure_secs\n\
bus-7,0,S1,0,10\n\
bus-7,0,S2,100,110\n\
bus-7,1,S2,200,210\n\
tram-2,0,S5,50,60\n\
";

    const STOP_CSV: &[u8] = b"\
stop_id,x,y\n\
S1,0.0,0.0\n\
S2,1500.0,200.0\n\
";

    const ROUTE_CSV: &[u8] = b"\
route,x,y\n\
0,0.0,0.0\n\
0,900.0,0.0\n\
1,0.0,450.0\n\
1,0.0,900.0\n\
";

    #[test]
    fn schedules_grouped_by_vehicle_and_trip() {
        let schedules = load_schedules_reader(Cursor::new(SCHEDULE_CSV)).unwrap();
        assert_eq!(schedules.len(), 2);
        // Vehicles come out sorted by id.
        assert_eq!(schedules[0].vehicle_id, "bus-7");
        assert_eq!(schedules[1].vehicle_id, "tram-2");
        assert_eq!(schedules[0].trip_count(), 2);
        assert_eq!(schedules[0].trips[0].len(), 2);
        assert_eq!(schedules[0].trips[1].len(), 1);
    }

    #[test]
    fn schedule_times_parsed() {
        let schedules = load_schedules_reader(Cursor::new(SCHEDULE_CSV)).unwrap();
        let v = schedules[0].visit(0, 1).unwrap();
        assert_eq!(v.stop_id, "S2");
        assert_eq!(v.arrival, SimTime(100.0));
        assert_eq!(v.departure, SimTime(110.0));
    }

    #[test]
    fn stops_build_a_registry() {
        let reg = load_stops_reader(Cursor::new(STOP_CSV)).unwrap();
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.position("S2"), Some(Point::new(1500.0, 200.0)));
    }

    #[test]
    fn routes_grouped_in_visit_order() {
        let routes = load_routes_reader(Cursor::new(ROUTE_CSV)).unwrap();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].stops(), &[Point::new(0.0, 0.0), Point::new(900.0, 0.0)]);
        assert_eq!(routes[1].stop(1), Point::new(0.0, 900.0));
    }

    #[test]
    fn malformed_row_is_a_parse_error() {
        let bad = b"\
stop_id,x,y\n\
S1,not-a-number,0.0\n\
";
        let result = load_stops_reader(Cursor::new(bad.as_slice()));
        assert!(matches!(result, Err(crate::TransitError::Parse(_))));
    }
}
