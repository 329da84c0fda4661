// src/graph/distance.rs

use std::cmp::Ordering;
use std::fmt;

use crate::errors::{GraphError, Result};
use crate::graph::Vertex;

/// Tentative or final path length.
///
/// `Unreachable` replaces a sentinel "infinity" integer: it compares greater
/// than every finite value and never takes part in arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distance {
    Finite(i64),
    Unreachable,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn finite(self) -> Option<i64> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Unreachable => None,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Length of this path extended by an edge of `weight`.
    ///
    /// `Unreachable` stays unreachable; a finite sum that does not fit in
    /// `i64` is an error.
    pub fn extend(self, weight: i64) -> Result<Distance> {
        match self {
            Distance::Unreachable => Ok(Distance::Unreachable),
            Distance::Finite(d) => d
                .checked_add(weight)
                .map(Distance::Finite)
                .ok_or_else(|| GraphError::Overflow {
                    context: format!("adding weight {weight} to distance {d}"),
                }),
        }
    }

    /// Flip the sign of a finite distance. Used to map shortest paths over
    /// negated weights back to longest paths.
    pub fn negate(self) -> Result<Distance> {
        match self {
            Distance::Unreachable => Ok(Distance::Unreachable),
            Distance::Finite(d) => d
                .checked_neg()
                .map(Distance::Finite)
                .ok_or_else(|| GraphError::Overflow {
                    context: format!("negating distance {d}"),
                }),
        }
    }

    /// Render with a caller-chosen label for `Unreachable`.
    pub fn display_with<'a>(&self, infinity: &'a str) -> DisplayDistance<'a> {
        DisplayDistance {
            distance: *self,
            infinity,
        }
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.cmp(b),
            (Distance::Finite(_), Distance::Unreachable) => Ordering::Less,
            (Distance::Unreachable, Distance::Finite(_)) => Ordering::Greater,
            (Distance::Unreachable, Distance::Unreachable) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display_with("INF").fmt(f)
    }
}

pub struct DisplayDistance<'a> {
    distance: Distance,
    infinity: &'a str,
}

impl fmt::Display for DisplayDistance<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.distance {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Unreachable => f.write_str(self.infinity),
        }
    }
}

/// Dense `n x n` distance table, row-major, indexed by 0-based vertex ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<Distance>,
}

impl DistanceMatrix {
    /// All cells `Unreachable` except a zero diagonal.
    ///
    /// Fails when `size * size` cells cannot be represented or allocated.
    pub fn new(size: usize) -> Result<Self> {
        let too_large = || {
            GraphError::InvalidInput(format!(
                "vertex count {size} is too large for a distance matrix"
            ))
        };
        let len = size.checked_mul(size).ok_or_else(too_large)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large())?;
        cells.resize(len, Distance::Unreachable);
        for i in 0..size {
            cells[i * size + i] = Distance::ZERO;
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, from: Vertex, to: Vertex) -> Distance {
        self.cells[from * self.size + to]
    }

    pub fn set(&mut self, from: Vertex, to: Vertex, distance: Distance) {
        self.cells[from * self.size + to] = distance;
    }

    pub fn row(&self, from: Vertex) -> &[Distance] {
        &self.cells[from * self.size..(from + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Distance]> {
        // `chunks(0)` panics, so an empty matrix yields no rows explicitly.
        self.cells.chunks(self.size.max(1)).take(self.size)
    }

    /// Vertices whose distance to themselves became negative.
    pub fn negative_cycle_vertices(&self) -> Vec<Vertex> {
        (0..self.size)
            .filter(|&i| self.get(i, i) < Distance::ZERO)
            .collect()
    }

    pub fn has_negative_cycle(&self) -> bool {
        !self.negative_cycle_vertices().is_empty()
    }
}
