//! Tour and solve result types.

use crate::CityIndex;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed tour: the start city, every other city once, then the start again.
///
/// For an n-city problem a complete tour holds n + 1 indices.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tour {
    path: Vec<CityIndex>,
}

impl Tour {
    /// Builds the cycle `[start] ++ order ++ [start]`.
    pub fn closed(start: CityIndex, order: &[CityIndex]) -> Self {
        let mut path = Vec::with_capacity(order.len() + 2);
        path.push(start);
        path.extend_from_slice(order);
        path.push(start);
        Self { path }
    }

    /// Wraps a path that already repeats its start city at the end.
    pub fn from_path(path: Vec<CityIndex>) -> Self {
        Self { path }
    }

    /// First (and last) city.
    pub fn start(&self) -> Option<CityIndex> {
        self.path.first().copied()
    }

    /// Cities visited between the two occurrences of the start city.
    pub fn cities(&self) -> &[CityIndex] {
        if self.path.len() < 2 {
            return &[];
        }
        &self.path[1..self.path.len() - 1]
    }

    /// Full path including the closing city.
    pub fn as_slice(&self) -> &[CityIndex] {
        &self.path
    }

    /// Number of entries in the path (n + 1 for a complete tour).
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns `true` if the path holds no cities.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Consumes the tour and returns the raw path.
    pub fn into_path(self) -> Vec<CityIndex> {
        self.path
    }

    /// Returns `true` if this is a Hamiltonian cycle over `n` cities:
    /// length n + 1, first equals last, and every city of `[0, n)` appears
    /// exactly once in between.
    pub fn is_hamiltonian_cycle(&self, n: usize) -> bool {
        if n == 0 || self.path.len() != n + 1 || self.path.first() != self.path.last() {
            return false;
        }
        let mut seen = vec![false; n];
        for &city in &self.path[..n] {
            if city >= n || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, city) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, " → ")?;
            }
            write!(f, "{city}")?;
        }
        Ok(())
    }
}

/// A tour together with its total cost, closing edge included.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveResult {
    /// The closed tour.
    pub tour: Tour,

    /// Sum of the directed edge costs along `tour`.
    pub total_cost: f64,
}

impl SolveResult {
    /// Pairs a tour with its precomputed cost.
    pub fn new(tour: Tour, total_cost: f64) -> Self {
        Self { tour, total_cost }
    }
}
