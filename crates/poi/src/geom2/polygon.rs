//! Immutable ring polygon: outer boundary plus zero or more holes.
//!
//! Purpose
//! - Owned, validated input of one pole search. Ring 0 is the outer
//!   boundary; rings 1.. are holes. Rings are stored open and closed
//!   implicitly by every query.
//!
//! Validation policy
//! - Construction rejects any ring with fewer than 3 distinct vertices;
//!   such a ring is degenerate to a point or a segment and cannot define a
//!   region. An explicitly closed ring (last vertex repeating the first) is
//!   normalized by dropping the duplicate.
//! - Everything else is the host's contract: rings are assumed simple, holes
//!   are assumed to lie inside the outer ring without crossings. Collinear
//!   rings with a collapsed bounding box are accepted; the search resolves
//!   them through its degenerate-case path.
//!
//! Code cross-refs: `Region`, `signed_distance`, `find_pole`

use nalgebra::Vector2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::distance::signed_distance;
use super::types::{Aabb, Region};
use crate::pole::{pole_of_inaccessibility, Pole};
use crate::{Error, Result};

/// A simple polygon with optional holes, immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    rings: Vec<Vec<Vector2<f64>>>,
    /// Opaque spatial-reference tag supplied by the host; round-tripped
    /// unchanged into results, never inspected.
    srs: Option<String>,
}

impl Polygon {
    /// Build from rings (ring 0 outer, rings 1.. holes).
    pub fn new(rings: Vec<Vec<Vector2<f64>>>) -> Result<Polygon> {
        if rings.is_empty() {
            return Err(Error::InvalidGeometry("polygon has no rings"));
        }
        let rings = rings
            .into_iter()
            .map(normalize_ring)
            .collect::<Result<Vec<_>>>()?;
        Ok(Polygon { rings, srs: None })
    }

    /// Build from the outer ring alone; add holes with [`Polygon::with_hole`].
    pub fn from_exterior(ring: Vec<Vector2<f64>>) -> Result<Polygon> {
        Polygon::new(vec![ring])
    }

    /// Add a hole ring.
    pub fn with_hole(mut self, ring: Vec<Vector2<f64>>) -> Result<Polygon> {
        self.rings.push(normalize_ring(ring)?);
        Ok(self)
    }

    /// Attach an opaque spatial-reference tag.
    pub fn with_srs(mut self, srs: impl Into<String>) -> Polygon {
        self.srs = Some(srs.into());
        self
    }

    /// All rings, outer first. Rings are open (first vertex not repeated).
    #[inline]
    pub fn rings(&self) -> &[Vec<Vector2<f64>>] {
        &self.rings
    }

    #[inline]
    pub fn srs(&self) -> Option<&str> {
        self.srs.as_deref()
    }

    /// Pole of inaccessibility at the given precision; see
    /// [`pole_of_inaccessibility`].
    pub fn pole(&self, tolerance: f64) -> Result<Pole> {
        pole_of_inaccessibility(self, tolerance)
    }
}

impl Region for Polygon {
    fn signed_distance(&self, p: Vector2<f64>) -> f64 {
        signed_distance(&self.rings, p)
    }

    fn bounding_box(&self) -> Aabb {
        // Holes lie inside the outer ring by contract, so the outer ring
        // determines the box. Non-empty by construction.
        Aabb::from_points(self.rings[0].iter()).unwrap_or(Aabb {
            min: Vector2::zeros(),
            max: Vector2::zeros(),
        })
    }

    fn area(&self) -> f64 {
        let mut area = ring_signed_area(&self.rings[0]).abs();
        for hole in &self.rings[1..] {
            area -= ring_signed_area(hole).abs();
        }
        area
    }

    fn centroid(&self) -> Vector2<f64> {
        let mut weight = 0.0;
        let mut acc = Vector2::zeros();
        for (k, ring) in self.rings.iter().enumerate() {
            let signed = ring_signed_area(ring);
            if signed == 0.0 {
                continue;
            }
            // Outer ring adds weight, holes subtract; winding is irrelevant.
            let w = if k == 0 { signed.abs() } else { -signed.abs() };
            acc += ring_centroid(ring, signed) * w;
            weight += w;
        }
        if weight.abs() > 1e-18 {
            acc / weight
        } else {
            // Zero-area polygon (e.g. all vertices collinear): fall back to
            // the outer-ring vertex mean so a centroid always exists.
            let outer = &self.rings[0];
            let sum = outer
                .iter()
                .fold(Vector2::zeros(), |s: Vector2<f64>, p| s + p);
            sum / outer.len() as f64
        }
    }
}

/// Drop an explicit closing vertex, then require 3 distinct vertices.
fn normalize_ring(mut ring: Vec<Vector2<f64>>) -> Result<Vec<Vector2<f64>>> {
    if ring.len() >= 2 && ring.first() == ring.last() {
        ring.pop();
    }
    let mut distinct = 0usize;
    for (i, p) in ring.iter().enumerate() {
        if ring[..i].iter().all(|q| q != p) {
            distinct += 1;
        }
    }
    if distinct < 3 {
        return Err(Error::InvalidGeometry(
            "ring needs at least 3 distinct vertices",
        ));
    }
    Ok(ring)
}

/// Shoelace signed area of one implicitly closed ring.
fn ring_signed_area(ring: &[Vector2<f64>]) -> f64 {
    let mut twice = 0.0;
    for i in 0..ring.len() {
        let p = ring[i];
        let q = ring[(i + 1) % ring.len()];
        twice += p.x * q.y - q.x * p.y;
    }
    twice / 2.0
}

/// Shoelace centroid of one ring with known nonzero signed area. Dividing by
/// the signed area cancels the ring winding.
fn ring_centroid(ring: &[Vector2<f64>], signed_area: f64) -> Vector2<f64> {
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..ring.len() {
        let p = ring[i];
        let q = ring[(i + 1) % ring.len()];
        let cross = p.x * q.y - q.x * p.y;
        cx += (p.x + q.x) * cross;
        cy += (p.y + q.y) * cross;
    }
    Vector2::new(cx / (6.0 * signed_area), cy / (6.0 * signed_area))
}
