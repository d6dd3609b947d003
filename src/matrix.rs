//! Static distance matrix oracle.
//!
//! Ignores the departure time. Missing pairs are an error, never a default.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DistanceError;
use crate::traits::{DistanceOracle, Location};

/// Travel costs keyed by `from`, then `to`. Need not be symmetric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatrixOracle {
    rows: BTreeMap<Location, BTreeMap<Location, f64>>,
}

impl MatrixOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dense matrix where row/column `i` is `Location(i)`.
    ///
    /// Diagonal entries are skipped; ragged rows keep only the entries they have.
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let mut matrix = Self::new();
        for (i, row) in rows.iter().enumerate() {
            for (j, &cost) in row.iter().enumerate() {
                if i != j {
                    matrix.insert(Location(i as u32), Location(j as u32), cost);
                }
            }
        }
        matrix
    }

    pub fn insert(&mut self, from: Location, to: Location, cost: f64) {
        self.rows.entry(from).or_default().insert(to, cost);
    }

    /// Builder-style insert.
    pub fn with(mut self, from: u32, to: u32, cost: f64) -> Self {
        self.insert(Location(from), Location(to), cost);
        self
    }

    pub fn get(&self, from: Location, to: Location) -> Option<f64> {
        self.rows.get(&from).and_then(|row| row.get(&to)).copied()
    }

    /// Number of defined pairs.
    pub fn len(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<((Location, Location), f64)> for MatrixOracle {
    fn from_iter<I: IntoIterator<Item = ((Location, Location), f64)>>(iter: I) -> Self {
        let mut matrix = Self::new();
        for ((from, to), cost) in iter {
            matrix.insert(from, to, cost);
        }
        matrix
    }
}

impl DistanceOracle for MatrixOracle {
    fn distance(&self, _at: i64, from: Location, to: Location) -> Result<f64, DistanceError> {
        self.get(from, to)
            .ok_or(DistanceError::Undefined { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_directional() {
        let matrix = MatrixOracle::new().with(0, 1, 100.0).with(1, 0, 1.0);

        assert_eq!(matrix.distance(0, Location(0), Location(1)), Ok(100.0));
        assert_eq!(matrix.distance(0, Location(1), Location(0)), Ok(1.0));
        assert_eq!(matrix.len(), 2);
    }

    #[test]
    fn missing_pair_is_an_error() {
        let matrix = MatrixOracle::new().with(0, 1, 5.0);

        assert_eq!(
            matrix.distance(0, Location(1), Location(2)),
            Err(DistanceError::Undefined {
                from: Location(1),
                to: Location(2)
            })
        );
    }

    #[test]
    fn time_is_ignored() {
        let matrix = MatrixOracle::new().with(0, 1, 5.0);

        assert_eq!(matrix.distance(0, Location(0), Location(1)), Ok(5.0));
        assert_eq!(matrix.distance(9_999, Location(0), Location(1)), Ok(5.0));
    }

    #[test]
    fn from_rows_skips_diagonal() {
        let matrix = MatrixOracle::from_rows(&[vec![0.0, 2.0], vec![3.0, 0.0]]);

        assert_eq!(matrix.get(Location(0), Location(1)), Some(2.0));
        assert_eq!(matrix.get(Location(1), Location(0)), Some(3.0));
        assert_eq!(matrix.get(Location(0), Location(0)), None);
        assert_eq!(matrix.len(), 2);
    }

    #[test]
    fn collects_from_pairs() {
        let matrix: MatrixOracle = [((Location(0), Location(2)), 7.0)].into_iter().collect();
        assert_eq!(matrix.get(Location(0), Location(2)), Some(7.0));
        assert!(!matrix.is_empty());
    }
}
