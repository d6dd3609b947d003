//! Feasible next moves from a search state.
//!
//! This is the only place where window feasibility and edge cost are decided.
//! Waiting for a window to open is free when leaving from home and charged as
//! idle time when leaving from any other location.

use std::collections::BTreeSet;

use tracing::trace;

use crate::error::DistanceError;
use crate::model::{Edge, EdgeSet, Goal, Goals};
use crate::traits::{DistanceOracle, Location};

/// Compute the feasible moves from `at` at time `now` with `remaining` goals unvisited.
///
/// `goals` must have passed validation (see [`crate::Solver::new`]).
///
/// Away from home a return-home edge is always offered. Each remaining goal
/// appears at most once, using its cheapest feasible window; goals with no
/// feasible window are omitted.
pub fn edges<O>(
    oracle: &O,
    goals: &Goals,
    remaining: &BTreeSet<Location>,
    at: Location,
    now: f64,
) -> Result<EdgeSet, DistanceError>
where
    O: DistanceOracle + ?Sized,
{
    let depart = departure_key(now);
    let mut possible = EdgeSet::new();

    if !at.is_home() {
        let travel = travel_time(oracle, depart, at, Location::HOME)?;
        possible.insert(Location::HOME, Edge::new(travel, now + travel));
    }

    for &loc in remaining {
        let Some(goal) = goals.get(&loc) else {
            trace!(location = %loc, "remaining location has no goal, skipping");
            continue;
        };

        let travel = travel_time(oracle, depart, at, loc)?;
        if let Some(edge) = best_window(goal, at, now, travel) {
            possible.insert(loc, edge);
        }
    }

    Ok(possible)
}

/// Cheapest feasible window for `goal`, ties broken by earlier completion.
fn best_window(goal: &Goal, from: Location, now: f64, travel: f64) -> Option<Edge> {
    let arrival = now + travel;
    let mut best: Option<Edge> = None;

    for window in &goal.windows {
        let Some(completion) = window.completion(arrival, goal.dwell) else {
            continue;
        };
        // Holds for validated goals: start + dwell <= end.
        debug_assert!(completion <= window.end, "visit overruns its window");

        let cost = if from.is_home() {
            travel
        } else {
            travel + (window.start - arrival).max(0.0)
        };

        let better = match best {
            None => true,
            Some(current) => {
                cost < current.cost || (cost == current.cost && completion < current.time)
            }
        };
        if better {
            best = Some(Edge::new(cost, completion));
        }
    }

    best
}

/// Oracles are keyed on whole time units.
fn departure_key(now: f64) -> i64 {
    now.round_ties_even() as i64
}

fn travel_time<O>(oracle: &O, at: i64, from: Location, to: Location) -> Result<f64, DistanceError>
where
    O: DistanceOracle + ?Sized,
{
    let value = oracle.distance(at, from, to)?;
    if !value.is_finite() || value < 0.0 {
        return Err(DistanceError::InvalidTravelTime { from, to, value });
    }
    Ok(value)
}
