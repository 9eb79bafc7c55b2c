//! Pole-of-inaccessibility search for planar ring polygons.
//!
//! The pole of inaccessibility of a polygon is the interior point that
//! maximizes the minimum distance to the polygon boundary (hole boundaries
//! included). There is no closed form for arbitrary polygons, so the crate
//! runs a branch-and-bound search over square cells: each cell carries the
//! signed boundary distance at its center and a provable upper bound on the
//! distance anywhere inside it, a priority frontier expands the most
//! promising cell first, and regions that cannot beat the incumbent by more
//! than the caller's tolerance are pruned. The returned distance is a
//! guaranteed lower bound within that tolerance of the true optimum.
//!
//! Layout
//! - `geom2`: the ring-polygon model, the signed distance oracle, and a
//!   deterministic random-polygon sampler for tests and benches.
//! - `pole`: cells, the priority frontier, and the search loop.
//!
//! Hosts own everything outside this boundary: feature storage, parameter
//! surfaces, and fan-out over multi-feature inputs (call once per polygon).

use std::fmt;

pub mod geom2;
pub mod pole;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Align caller code with the geometry notation used throughout the crate.
pub use nalgebra::Vector2 as Vec2;

/// Errors surfaced before the search loop starts, plus the defensive
/// numeric-failure case. All are input-contract violations or fatal to the
/// single call; none are transient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Error {
    /// A ring cannot define a region (fewer than 3 distinct points).
    InvalidGeometry(&'static str),
    /// Non-positive (or NaN) tolerance; pruning would be vacuous and the
    /// search loop could not terminate.
    InvalidTolerance(f64),
    /// The distance oracle produced a non-finite value at this point.
    NonFiniteDistance { x: f64, y: f64 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidGeometry(what) => write!(f, "invalid geometry: {what}"),
            Error::InvalidTolerance(t) => write!(f, "invalid tolerance {t}; must be positive"),
            Error::NonFiniteDistance { x, y } => {
                write!(f, "non-finite boundary distance at ({x}, {y})")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_polygon, draw_polygon_with_hole, ReplayToken, RingCfg, VertexCount,
    };
    pub use crate::geom2::{signed_distance, Aabb, Polygon, Region};
    pub use crate::pole::{find_pole, pole_of_inaccessibility, Cell, Frontier, Pole, SearchCfg};
    pub use crate::{Error, Result, Vec2};
}
