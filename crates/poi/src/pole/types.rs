//! Data types of the subdivision search: cells, configuration, result.
//!
//! Kept small and explicit to make `frontier` and `search` easy to read.

use std::time::Instant;

use nalgebra::Vector2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geom2::Region;

/// Square candidate region of the subdivision search.
///
/// `max` is the largest boundary distance achievable anywhere inside the
/// square: the center distance plus the half-diagonal `h·√2` (triangle
/// inequality). It is never an underestimate, so pruning on it never
/// discards a region that could still win.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    pub x: f64,
    pub y: f64,
    /// Half of the cell side length.
    pub h: f64,
    /// Signed distance from the cell center to the region boundary.
    pub d: f64,
    /// Upper bound on the distance achievable inside the cell.
    pub max: f64,
}

impl Cell {
    /// Evaluate the distance oracle at `(x, y)` and derive the potential.
    ///
    /// A standalone constructor taking the region explicitly: cells are
    /// plain values, tied to no particular search invocation.
    pub fn sample<R: Region + ?Sized>(x: f64, y: f64, h: f64, region: &R) -> Cell {
        let d = region.signed_distance(Vector2::new(x, y));
        Cell {
            x,
            y,
            h,
            d,
            max: d + h * std::f64::consts::SQRT_2,
        }
    }

    /// True if some point of this cell could still beat `best_d` by more
    /// than `tolerance`. Equality does not qualify: a cell exactly at the
    /// tolerance boundary is pruned, not expanded.
    #[inline]
    pub fn can_improve(&self, best_d: f64, tolerance: f64) -> bool {
        self.max - best_d > tolerance
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

/// Search configuration.
#[derive(Clone, Copy, Debug)]
pub struct SearchCfg {
    /// Result precision: refinement of a region stops once it cannot improve
    /// the incumbent by more than this amount. Must be positive.
    pub tolerance: f64,
    /// Optional cap on loop iterations (popped cells). When exhausted the
    /// search returns the best candidate so far instead of failing.
    pub max_iterations: Option<u64>,
    /// Optional wall-clock deadline, checked once per loop iteration.
    pub deadline: Option<Instant>,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            // Host-facing default, in the polygon's coordinate units.
            tolerance: 1e-3,
            max_iterations: None,
            deadline: None,
        }
    }
}

impl SearchCfg {
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }
}

/// Result of a pole search.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pole {
    pub x: f64,
    pub y: f64,
    /// Distance from `(x, y)` to the region boundary. The true optimum lies
    /// within the search tolerance above this value.
    pub distance: f64,
    /// Opaque spatial-reference tag round-tripped from the input polygon.
    pub srs: Option<String>,
    /// False when the search stopped on an iteration cap or deadline rather
    /// than exhausting the frontier.
    pub converged: bool,
}

impl Pole {
    #[inline]
    pub fn point(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}
