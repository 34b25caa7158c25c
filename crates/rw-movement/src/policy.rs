//! Wait-time and speed sampling for unscheduled movement.
//!
//! Unscheduled walkers have no timetable to derive pacing from; how long an
//! entity pauses at a stop and how fast it travels are behavioural knobs the
//! host chooses.  The `MotionSampler` trait keeps them a black box to the
//! movement core.

use rw_core::EntityRng;

/// Black-box producer of pauses and travel speeds.
///
/// Implementations must be `Send + Sync` so one sampler can serve a whole
/// entity group; all per-call randomness comes through the `&mut EntityRng`
/// argument, keeping runs deterministic per entity.
pub trait MotionSampler: Send + Sync {
    /// Post-arrival pause before the next path request, seconds.
    fn wait_time(&self, rng: &mut EntityRng) -> f64;

    /// Travel speed for one path, metres per second.
    fn speed(&self, rng: &mut EntityRng) -> f64;
}

/// Uniform sampling between configured bounds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformMotionSampler {
    pub min_wait:  f64,
    pub max_wait:  f64,
    pub min_speed: f64,
    pub max_speed: f64,
}

impl UniformMotionSampler {
    /// Sampler drawing waits from `wait` and speeds from `speed`, both
    /// inclusive `(min, max)` bounds.
    ///
    /// # Panics
    /// Panics in debug mode if either range is inverted.
    pub fn new(wait: (f64, f64), speed: (f64, f64)) -> Self {
        debug_assert!(wait.0 <= wait.1, "inverted wait range");
        debug_assert!(speed.0 <= speed.1, "inverted speed range");
        Self {
            min_wait:  wait.0,
            max_wait:  wait.1,
            min_speed: speed.0,
            max_speed: speed.1,
        }
    }
}

impl Default for UniformMotionSampler {
    /// Pedestrian-scale defaults: 0–120 s pauses, 0.5–1.5 m/s.
    fn default() -> Self {
        Self::new((0.0, 120.0), (0.5, 1.5))
    }
}

impl MotionSampler for UniformMotionSampler {
    fn wait_time(&self, rng: &mut EntityRng) -> f64 {
        if self.min_wait == self.max_wait {
            return self.min_wait;
        }
        rng.gen_range(self.min_wait..=self.max_wait)
    }

    fn speed(&self, rng: &mut EntityRng) -> f64 {
        if self.min_speed == self.max_speed {
            return self.min_speed;
        }
        rng.gen_range(self.min_speed..=self.max_speed)
    }
}
