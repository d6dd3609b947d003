//! Test fixtures for visit-planner.
//!
//! Provides:
//! - A constant-distance oracle that records every query
//! - Goal builders
//! - A few real Las Vegas coordinates for coordinate-based oracles

#![allow(dead_code)]

use std::cell::RefCell;

use visit_planner::{DistanceError, DistanceOracle, Goal, Goals, Location, TimeWindow};

/// Returns the same travel time for every query and remembers what was asked.
#[derive(Debug)]
pub struct ConstantOracle {
    value: f64,
    calls: RefCell<Vec<(i64, Location, Location)>>,
}

impl ConstantOracle {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(i64, Location, Location)> {
        self.calls.borrow().clone()
    }
}

impl DistanceOracle for ConstantOracle {
    fn distance(&self, at: i64, from: Location, to: Location) -> Result<f64, DistanceError> {
        self.calls.borrow_mut().push((at, from, to));
        Ok(self.value)
    }
}

/// Goals from `(location, start, end, dwell)` single-window tuples.
pub fn goals(visits: &[(u32, f64, f64, f64)]) -> Goals {
    visits
        .iter()
        .map(|&(loc, start, end, dwell)| (Location(loc), Goal::window(start, end, dwell)))
        .collect()
}

/// Goal with several windows.
pub fn multi_window(windows: &[(f64, f64)], dwell: f64) -> Goal {
    Goal::new(
        windows
            .iter()
            .map(|&(start, end)| TimeWindow { start, end })
            .collect(),
        dwell,
    )
}

pub fn path(ids: &[u32]) -> Vec<Location> {
    ids.iter().copied().map(Location).collect()
}

/// A named place with coordinates (sourced from OpenStreetMap).
#[derive(Debug, Clone)]
pub struct Place {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Place {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// Index 0 is used as home.
pub const LAS_VEGAS: &[Place] = &[
    Place::new("MGM Grand", 36.1023654, -115.1688720),
    Place::new("Hard Rock Cafe", 36.1041592, -115.1722166),
    Place::new("Brooklyn Bowl", 36.1175388, -115.1695094),
    Place::new("Wynn Las Vegas", 36.1263781, -115.1658180),
    Place::new("Longhorn Casino", 36.1070664, -115.0591256),
];
