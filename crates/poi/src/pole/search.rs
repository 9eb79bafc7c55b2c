//! Branch-and-bound search for the pole of inaccessibility.
//!
//! Algorithm
//! - Tile the bounding box with square cells, seed the incumbent from the
//!   centroid and the box center (free, high-quality candidates), then pop
//!   the frontier by descending potential: update the incumbent, prune any
//!   cell whose potential is within the tolerance of it, subdivide the rest
//!   into four quadrant children.
//! - Potentials shrink strictly with each subdivision level while the
//!   incumbent only grows, so the frontier drains and the loop terminates.
//!   On exit the true optimum exceeds the incumbent by at most the
//!   tolerance.
//!
//! Degenerate inputs
//! - A collapsed bounding box, or an area too small for the requested
//!   precision to resolve, short-circuits to the centroid: subdivision
//!   cannot refine below the tolerance there, and the collapsed box would
//!   yield a zero initial cell size.
//!
//! Code cross-refs: `Cell`, `Frontier`, `SearchCfg`, `Region`

use nalgebra::Vector2;

use super::frontier::Frontier;
use super::types::{Cell, Pole, SearchCfg};
use crate::geom2::{Polygon, Region};
use crate::{Error, Result};

/// Compute the pole of inaccessibility of `polygon` to within `tolerance`.
///
/// Thin wrapper over [`find_pole`] that applies the default budget and
/// round-trips the polygon's spatial-reference tag into the result.
pub fn pole_of_inaccessibility(polygon: &Polygon, tolerance: f64) -> Result<Pole> {
    let cfg = SearchCfg::with_tolerance(tolerance);
    let mut pole = find_pole(polygon, &cfg)?;
    pole.srs = polygon.srs().map(str::to_owned);
    Ok(pole)
}

/// Branch-and-bound pole search over any [`Region`].
///
/// Returns the best point found and the guaranteed bound on its boundary
/// distance; `converged` is false only when `cfg` set an iteration cap or
/// deadline and the budget ran out first.
pub fn find_pole<R: Region + ?Sized>(region: &R, cfg: &SearchCfg) -> Result<Pole> {
    if !(cfg.tolerance > 0.0) {
        // Written so NaN fails too.
        return Err(Error::InvalidTolerance(cfg.tolerance));
    }

    let bb = region.bounding_box();
    let width = bb.width();
    let height = bb.height();
    let cell_size = width.min(height);

    if cell_size == 0.0 || region.area() < width.max(height) * cfg.tolerance {
        let c = region.centroid();
        let d = region.signed_distance(c);
        ensure_finite(d, c)?;
        tracing::debug!(x = c.x, y = c.y, distance = d, "degenerate input, returning centroid");
        return Ok(Pole {
            x: c.x,
            y: c.y,
            distance: d,
            srs: None,
            converged: true,
        });
    }

    // Tile the bounding box with squares of side `cell_size`.
    let h = cell_size / 2.0;
    let mut frontier = Frontier::new();
    let mut x = bb.min.x;
    while x < bb.max.x {
        let mut y = bb.min.y;
        while y < bb.max.y {
            frontier.push(Cell::sample(x + h, y + h, h, region));
            y += cell_size;
        }
        x += cell_size;
    }

    // Seed the incumbent from the centroid and the box center, as zero-size
    // cells; keep whichever sits deeper.
    let centroid = region.centroid();
    let mut best = Cell::sample(centroid.x, centroid.y, 0.0, region);
    let center = bb.center();
    let center_cell = Cell::sample(center.x, center.y, 0.0, region);
    if center_cell.d > best.d {
        best = center_cell;
    }
    ensure_finite(best.d, best.center())?;

    let mut iterations: u64 = 0;
    let mut converged = true;
    while let Some(cell) = frontier.pop() {
        iterations += 1;
        if !cell.max.is_finite() {
            return Err(Error::NonFiniteDistance {
                x: cell.x,
                y: cell.y,
            });
        }
        if cell.d > best.d {
            tracing::trace!(x = cell.x, y = cell.y, d = cell.d, "incumbent improved");
            best = cell;
        }
        if !cell.can_improve(best.d, cfg.tolerance) {
            continue;
        }
        // Cooperative cancellation, once per iteration: keep the incumbent
        // instead of failing.
        if out_of_budget(cfg, iterations) {
            converged = false;
            break;
        }
        let child_h = cell.h / 2.0;
        for (dx, dy) in [
            (-child_h, -child_h),
            (child_h, -child_h),
            (-child_h, child_h),
            (child_h, child_h),
        ] {
            frontier.push(Cell::sample(cell.x + dx, cell.y + dy, child_h, region));
        }
    }

    tracing::debug!(iterations, distance = best.d, converged, "pole search finished");
    Ok(Pole {
        x: best.x,
        y: best.y,
        distance: best.d,
        srs: None,
        converged,
    })
}

#[inline]
fn out_of_budget(cfg: &SearchCfg, iterations: u64) -> bool {
    if cfg.max_iterations.is_some_and(|cap| iterations >= cap) {
        return true;
    }
    cfg.deadline
        .is_some_and(|t| std::time::Instant::now() >= t)
}

#[inline]
fn ensure_finite(d: f64, p: Vector2<f64>) -> Result<()> {
    if d.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteDistance { x: p.x, y: p.y })
    }
}
