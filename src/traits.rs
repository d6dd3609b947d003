//! Core domain traits for the itinerary planner.
//!
//! The distance oracle is the only pluggable seam: callers supply a concrete
//! strategy (static matrix, time-of-day table, live routing service).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DistanceError;

/// Identifier of a location. `Location::HOME` is the start and end point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(pub u32);

impl Location {
    /// The distinguished home location (id 0).
    pub const HOME: Location = Location(0);

    pub fn is_home(self) -> bool {
        self == Self::HOME
    }
}

impl From<u32> for Location {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_home() {
            write!(f, "home")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

/// Answers "how long does it take to travel from `from` to `to` when leaving at `at`".
///
/// Implementations must be pure within one solve: the same `(at, from, to)`
/// triple must always yield the same value. Returned travel times must be
/// finite and non-negative.
pub trait DistanceOracle {
    fn distance(&self, at: i64, from: Location, to: Location) -> Result<f64, DistanceError>;
}

impl<T: DistanceOracle + ?Sized> DistanceOracle for &T {
    fn distance(&self, at: i64, from: Location, to: Location) -> Result<f64, DistanceError> {
        (**self).distance(at, from, to)
    }
}

impl<T: DistanceOracle + ?Sized> DistanceOracle for Box<T> {
    fn distance(&self, at: i64, from: Location, to: Location) -> Result<f64, DistanceError> {
        (**self).distance(at, from, to)
    }
}
