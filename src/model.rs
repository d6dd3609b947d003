//! Visit requirements and search results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::GoalError;
use crate::traits::Location;

/// Interval in which a visit may take place, dwell included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: f64,
    pub end: f64,
}

impl TimeWindow {
    pub fn new(start: f64, end: f64) -> Result<Self, GoalError> {
        let window = Self { start, end };
        window.validate()?;
        Ok(window)
    }

    pub(crate) fn validate(&self) -> Result<(), GoalError> {
        if !self.start.is_finite() || !self.end.is_finite() || self.start > self.end {
            return Err(GoalError::InvalidWindow {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Time at which a visit arriving at `arrival` would finish, if it fits.
    ///
    /// A visit fits when `arrival + dwell <= end`; it starts once the window
    /// opens. Windows shorter than the dwell are rejected by goal validation.
    pub fn completion(&self, arrival: f64, dwell: f64) -> Option<f64> {
        (arrival + dwell <= self.end).then(|| arrival.max(self.start) + dwell)
    }
}

/// A required visit: one of the windows must hold the whole dwell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub windows: Vec<TimeWindow>,
    pub dwell: f64,
}

impl Goal {
    pub fn new(windows: Vec<TimeWindow>, dwell: f64) -> Self {
        Self { windows, dwell }
    }

    /// Single-window goal.
    pub fn window(start: f64, end: f64, dwell: f64) -> Self {
        Self::new(vec![TimeWindow { start, end }], dwell)
    }

    pub(crate) fn validate(&self, location: Location) -> Result<(), GoalError> {
        if location.is_home() {
            return Err(GoalError::HomeGoal);
        }
        if self.windows.is_empty() {
            return Err(GoalError::NoWindows(location));
        }
        if !self.dwell.is_finite() || self.dwell < 0.0 {
            return Err(GoalError::InvalidDwell {
                location,
                dwell: self.dwell,
            });
        }
        for window in &self.windows {
            window.validate()?;
            if window.end - window.start < self.dwell {
                return Err(GoalError::WindowShorterThanDwell {
                    location,
                    start: window.start,
                    end: window.end,
                    dwell: self.dwell,
                });
            }
        }
        Ok(())
    }
}

/// Goals keyed by location, one per location.
pub type Goals = BTreeMap<Location, Goal>;

/// A feasible next move: incremental cost and the time at which the move completes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub cost: f64,
    pub time: f64,
}

impl Edge {
    pub fn new(cost: f64, time: f64) -> Self {
        Self { cost, time }
    }
}

/// Feasible moves from one state, keyed by destination.
pub type EdgeSet = BTreeMap<Location, Edge>;

/// Minimum-cost itinerary found by the solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    /// Total accumulated travel cost.
    pub cost: f64,
    /// Time at which the last visit completes.
    pub end_time: f64,
    /// Visited locations in order, starting at home.
    pub path: Vec<Location>,
}

impl Itinerary {
    /// Visited goal locations in order, without home stops.
    pub fn visits(&self) -> impl Iterator<Item = Location> + '_ {
        self.path.iter().copied().filter(|loc| !loc.is_home())
    }
}
