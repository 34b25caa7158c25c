//! Movement configuration.

/// Tuning constants for timetable-derived speeds.
///
/// These are tied to the map's unit scale — positions in metres, times in
/// seconds — and to what "plausible" means for the vehicles being simulated,
/// so they are configuration rather than hard-coded constants.  The defaults
/// suit urban road vehicles.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MovementConfig {
    /// Speed substituted when a timetable entry is stale (the planned arrival
    /// is at or before the current time), m/s.  Default 16.7 (~60 km/h).
    pub fallback_speed: f64,

    /// Speeds above this are reported as a likely missing road segment
    /// between two stops, m/s.  Default 33.3 (~120 km/h).
    pub speed_ceiling: f64,

    /// How far behind its timetable a vehicle may fall before the run is
    /// aborted as broken input data, seconds.  Default 60.
    pub max_schedule_drift: f64,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            fallback_speed:     16.7,
            speed_ceiling:      33.3,
            max_schedule_drift: 60.0,
        }
    }
}
