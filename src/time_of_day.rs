//! Time-dependent travel costs: scale a base oracle by time-of-day bands.

use serde::{Deserialize, Serialize};

use crate::error::DistanceError;
use crate::traits::{DistanceOracle, Location};

/// Departures in `[start, end)` (modulo the period) take `factor` times as long.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeBand {
    pub start: i64,
    pub end: i64,
    pub factor: f64,
}

#[derive(Debug, Clone)]
pub struct TimeOfDayOracle<O> {
    inner: O,
    period: i64,
    bands: Vec<TimeBand>,
}

impl<O: DistanceOracle> TimeOfDayOracle<O> {
    /// `period` is the length of one cycle (e.g. 86400 for seconds in a day);
    /// non-positive periods disable wrapping.
    pub fn new(inner: O, period: i64) -> Self {
        Self {
            inner,
            period,
            bands: Vec::new(),
        }
    }

    /// Add a band. The first matching band wins.
    pub fn with_band(mut self, start: i64, end: i64, factor: f64) -> Self {
        self.bands.push(TimeBand { start, end, factor });
        self
    }

    /// Multiplier applied to a departure at `at`.
    pub fn factor_at(&self, at: i64) -> f64 {
        let t = if self.period > 0 {
            at.rem_euclid(self.period)
        } else {
            at
        };
        self.bands
            .iter()
            .find(|band| band.start <= t && t < band.end)
            .map_or(1.0, |band| band.factor)
    }
}

impl<O: DistanceOracle> DistanceOracle for TimeOfDayOracle<O> {
    fn distance(&self, at: i64, from: Location, to: Location) -> Result<f64, DistanceError> {
        Ok(self.inner.distance(at, from, to)? * self.factor_at(at))
    }
}
