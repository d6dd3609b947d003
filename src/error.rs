//! Error types for the planner.
//!
//! Infeasibility is not an error: `Solver::solve` reports it as `Ok(None)`.

use crate::traits::Location;

/// Failure to answer a distance query.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DistanceError {
    /// No travel time is defined for this pair
    #[error("no distance defined from {from} to {to}")]
    Undefined { from: Location, to: Location },

    /// The oracle has no coordinates or data for this location
    #[error("unknown location {0}")]
    UnknownLocation(Location),

    /// The oracle produced a negative or non-finite travel time
    #[error("invalid travel time {value} from {from} to {to}")]
    InvalidTravelTime { from: Location, to: Location, value: f64 },
}

/// Rejected goal definition at solver construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GoalError {
    /// Home cannot be a required visit
    #[error("home cannot be a visit goal")]
    HomeGoal,

    /// Window bounds are reversed or not finite
    #[error("invalid time window ({start}, {end})")]
    InvalidWindow { start: f64, end: f64 },

    /// Goal has no time windows at all
    #[error("goal at {0} has no time windows")]
    NoWindows(Location),

    /// Window is too short to hold the dwell duration
    #[error("window ({start}, {end}) at {location} is shorter than dwell {dwell}")]
    WindowShorterThanDwell {
        location: Location,
        start: f64,
        end: f64,
        dwell: f64,
    },

    /// Dwell duration is negative or not finite
    #[error("invalid dwell duration {dwell} at {location}")]
    InvalidDwell { location: Location, dwell: f64 },
}

/// Failure of a solve. A missing itinerary is reported separately as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolveError {
    /// Distance oracle failed; aborts the solve
    #[error("distance lookup failed: {0}")]
    Distance(#[from] DistanceError),

    /// Expansion budget ran out before an itinerary was found
    #[error("expansion budget exhausted after {expanded} states")]
    BudgetExhausted { expanded: usize },
}
