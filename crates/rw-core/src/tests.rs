//! Unit tests for rw-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EntityId, RouteId};

    #[test]
    fn index_roundtrip() {
        let id = EntityId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(EntityId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(EntityId(0) < EntityId(1));
        assert!(RouteId(100) > RouteId(99));
    }

    #[test]
    fn display() {
        assert_eq!(RouteId(7).to_string(), "RouteId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{polyline_length, Point};

    #[test]
    fn zero_distance() {
        let p = Point::new(350.0, -125.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pythagorean_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn polyline_sums_segments() {
        let line = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(3.0, 14.0),
        ];
        assert_eq!(polyline_length(&line), 15.0);
    }

    #[test]
    fn degenerate_polylines_have_zero_length() {
        assert_eq!(polyline_length(&[]), 0.0);
        assert_eq!(polyline_length(&[Point::new(1.0, 2.0)]), 0.0);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimTime};

    #[test]
    fn time_arithmetic() {
        let t = SimTime(10.0);
        assert_eq!(t + 5.0, SimTime(15.0));
        assert_eq!(t.offset(3.0), SimTime(13.0));
        assert_eq!(SimTime(15.0) - SimTime(10.0), 5.0);
    }

    #[test]
    fn subtraction_may_be_negative() {
        // The sim started after this timetable entry's planned time.
        assert_eq!(SimTime(100.0) - SimTime(150.0), -50.0);
    }

    #[test]
    fn clock_advances() {
        let mut clock = SimClock::new();
        assert_eq!(clock.now(), SimTime::ZERO);
        clock.advance(30.0);
        assert_eq!(clock.now(), SimTime(30.0));
        clock.advance_to(SimTime(45.5));
        assert_eq!(clock.now(), SimTime(45.5));
    }
}

#[cfg(test)]
mod rng {
    use crate::{EntityId, EntityRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = EntityRng::new(12345, EntityId(0));
        let mut r2 = EntityRng::new(12345, EntityId(0));
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_entities_differ() {
        let mut r0 = EntityRng::new(1, EntityId(0));
        let mut r1 = EntityRng::new(1, EntityId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent entities should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = EntityRng::new(0, EntityId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f64..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }
}
