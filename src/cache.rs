//! Memoizing wrapper for expensive distance oracles.
//!
//! The search issues the same (time, from, to) query from many frontier
//! states. Wrapping a slow oracle answers repeats from memory. Errors are
//! not cached.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::DistanceError;
use crate::traits::{DistanceOracle, Location};

type QueryKey = (i64, Location, Location);

/// Caches every successful answer of the inner oracle.
#[derive(Debug)]
pub struct CachedOracle<O> {
    inner: O,
    answers: RefCell<HashMap<QueryKey, f64>>,
    hits: Cell<usize>,
    misses: Cell<usize>,
}

impl<O: DistanceOracle> CachedOracle<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            answers: RefCell::new(HashMap::new()),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.get()
    }

    pub fn misses(&self) -> usize {
        self.misses.get()
    }

    /// Number of distinct queries held.
    pub fn len(&self) -> usize {
        self.answers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.borrow().is_empty()
    }

    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: DistanceOracle> DistanceOracle for CachedOracle<O> {
    fn distance(&self, at: i64, from: Location, to: Location) -> Result<f64, DistanceError> {
        let key = (at, from, to);
        if let Some(&value) = self.answers.borrow().get(&key) {
            self.hits.set(self.hits.get() + 1);
            return Ok(value);
        }

        self.misses.set(self.misses.get() + 1);
        let value = self.inner.distance(at, from, to)?;
        self.answers.borrow_mut().insert(key, value);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::MatrixOracle;

    /// Counts how often the wrapped oracle is actually asked.
    struct Counting {
        inner: MatrixOracle,
        calls: Cell<usize>,
    }

    impl DistanceOracle for Counting {
        fn distance(&self, at: i64, from: Location, to: Location) -> Result<f64, DistanceError> {
            self.calls.set(self.calls.get() + 1);
            self.inner.distance(at, from, to)
        }
    }

    fn counting() -> CachedOracle<Counting> {
        CachedOracle::new(Counting {
            inner: MatrixOracle::new().with(0, 1, 3.0),
            calls: Cell::new(0),
        })
    }

    #[test]
    fn repeats_are_served_from_cache() {
        let oracle = counting();

        for _ in 0..3 {
            assert_eq!(oracle.distance(5, Location(0), Location(1)), Ok(3.0));
        }

        assert_eq!(oracle.hits(), 2);
        assert_eq!(oracle.misses(), 1);
        assert_eq!(oracle.len(), 1);
        assert_eq!(oracle.into_inner().calls.get(), 1);
    }

    #[test]
    fn time_is_part_of_the_key() {
        let oracle = counting();

        oracle.distance(5, Location(0), Location(1)).unwrap();
        oracle.distance(6, Location(0), Location(1)).unwrap();

        assert_eq!(oracle.misses(), 2);
        assert_eq!(oracle.len(), 2);
    }

    #[test]
    fn errors_are_not_cached() {
        let oracle = counting();

        assert!(oracle.distance(0, Location(1), Location(0)).is_err());
        assert!(oracle.distance(0, Location(1), Location(0)).is_err());

        assert!(oracle.is_empty());
        assert_eq!(oracle.misses(), 2);
    }
}
