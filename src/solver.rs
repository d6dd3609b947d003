//! Uniform-cost search over itinerary states.
//!
//! The frontier is expanded lazily in order of accumulated cost. Edge costs are
//! never negative, so the first popped state with no remaining goals is optimal.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeSet, BinaryHeap, HashSet};

use tracing::{debug, trace, warn};

use crate::edges::edges;
use crate::error::{DistanceError, GoalError, SolveError};
use crate::model::{EdgeSet, Goals, Itinerary};
use crate::traits::{DistanceOracle, Location};

#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    /// Maximum number of states to expand before giving up.
    /// `None` searches until the frontier is exhausted.
    pub max_expansions: Option<usize>,
    /// Skip states whose (location, remaining goals, time) was already expanded.
    /// The earlier expansion was no more expensive and has the same future.
    pub prune_revisits: bool,
}

/// Counters describing one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States taken off the frontier and expanded.
    pub expanded: usize,
    /// States pushed onto the frontier, including the initial state.
    pub pushed: usize,
    /// States skipped as revisits.
    pub pruned: usize,
}

/// Snapshot of a partial itinerary on the frontier.
#[derive(Debug, Clone)]
struct SearchState {
    cost: f64,
    time: f64,
    remaining: BTreeSet<Location>,
    path: Vec<Location>,
}

impl SearchState {
    fn location(&self) -> Location {
        self.path.last().copied().unwrap_or(Location::HOME)
    }

    fn successor(&self, to: Location, cost: f64, time: f64) -> Self {
        let mut remaining = self.remaining.clone();
        if !to.is_home() {
            remaining.remove(&to);
        }
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(to);

        Self {
            cost: self.cost + cost,
            time,
            remaining,
            path,
        }
    }

    fn into_itinerary(self) -> Itinerary {
        Itinerary {
            cost: self.cost,
            end_time: self.time,
            path: self.path,
        }
    }
}

// Cost, then earlier time, then shorter path, then lexicographic path. The
// remaining set is a function of the path, so it needs no comparison.
impl Ord for SearchState {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.time.total_cmp(&other.time))
            .then_with(|| self.path.len().cmp(&other.path.len()))
            .then_with(|| self.path.cmp(&other.path))
    }
}

impl PartialOrd for SearchState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchState {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchState {}

/// Single-traveller itinerary solver.
#[derive(Debug, Clone)]
pub struct Solver<O> {
    oracle: O,
    goals: Goals,
    options: SolveOptions,
}

impl<O: DistanceOracle> Solver<O> {
    /// Build a solver, rejecting malformed goals.
    pub fn new(oracle: O, goals: Goals) -> Result<Self, GoalError> {
        for (&location, goal) in &goals {
            goal.validate(location)?;
        }
        Ok(Self {
            oracle,
            goals,
            options: SolveOptions::default(),
        })
    }

    pub fn with_options(mut self, options: SolveOptions) -> Self {
        self.options = options;
        self
    }

    pub fn goals(&self) -> &Goals {
        &self.goals
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Feasible moves from `at` at time `now`. See [`crate::edges::edges`].
    pub fn edges(
        &self,
        remaining: &BTreeSet<Location>,
        at: Location,
        now: f64,
    ) -> Result<EdgeSet, DistanceError> {
        edges(&self.oracle, &self.goals, remaining, at, now)
    }

    /// Find the minimum-cost itinerary visiting every goal.
    ///
    /// Returns `Ok(None)` when no feasible itinerary exists.
    pub fn solve(&self) -> Result<Option<Itinerary>, SolveError> {
        self.solve_with_stats().map(|(itinerary, _)| itinerary)
    }

    pub fn solve_with_stats(&self) -> Result<(Option<Itinerary>, SearchStats), SolveError> {
        let mut stats = SearchStats::default();
        let mut closed: HashSet<(Location, BTreeSet<Location>, u64)> = HashSet::new();
        let mut frontier = BinaryHeap::new();

        debug!(goals = self.goals.len(), "starting itinerary search");

        frontier.push(Reverse(SearchState {
            cost: 0.0,
            time: 0.0,
            remaining: self.goals.keys().copied().collect(),
            path: vec![Location::HOME],
        }));
        stats.pushed += 1;

        while let Some(Reverse(state)) = frontier.pop() {
            if state.remaining.is_empty() {
                debug!(
                    cost = state.cost,
                    end_time = state.time,
                    expanded = stats.expanded,
                    "itinerary found"
                );
                return Ok((Some(state.into_itinerary()), stats));
            }

            let at = state.location();
            if self.options.prune_revisits
                && !closed.insert((at, state.remaining.clone(), state.time.to_bits()))
            {
                stats.pruned += 1;
                continue;
            }

            if let Some(limit) = self.options.max_expansions {
                if stats.expanded >= limit {
                    warn!(limit, frontier = frontier.len(), "expansion budget exhausted");
                    return Err(SolveError::BudgetExhausted {
                        expanded: stats.expanded,
                    });
                }
            }
            stats.expanded += 1;

            let next = self.edges(&state.remaining, at, state.time)?;
            trace!(
                location = %at,
                cost = state.cost,
                time = state.time,
                remaining = state.remaining.len(),
                successors = next.len(),
                "expanding state"
            );

            for (to, edge) in next {
                frontier.push(Reverse(state.successor(to, edge.cost, edge.time)));
                stats.pushed += 1;
            }
        }

        debug!(expanded = stats.expanded, "no feasible itinerary");
        Ok((None, stats))
    }
}
