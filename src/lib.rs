//! visit-planner
//!
//! Single-traveller itinerary search: leave home, visit every goal location
//! inside one of its time windows, minimise total travel cost.

pub mod cache;
pub mod edges;
pub mod error;
pub mod haversine;
pub mod matrix;
pub mod model;
pub mod osrm;
pub mod solver;
pub mod time_of_day;
pub mod traits;

pub use error::{DistanceError, GoalError, SolveError};
pub use model::{Edge, EdgeSet, Goal, Goals, Itinerary, TimeWindow};
pub use solver::{SearchStats, SolveOptions, Solver};
pub use traits::{DistanceOracle, Location};
