//! Basic 2D types: axis-aligned boxes and the region capability trait.

use nalgebra::Vector2;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Aabb {
    /// Smallest box covering `points`; `None` for an empty iterator.
    pub fn from_points<'a, I>(points: I) -> Option<Aabb>
    where
        I: IntoIterator<Item = &'a Vector2<f64>>,
    {
        let mut it = points.into_iter();
        let first = *it.next()?;
        let mut bb = Aabb { min: first, max: first };
        for p in it {
            bb.min.x = bb.min.x.min(p.x);
            bb.min.y = bb.min.y.min(p.y);
            bb.max.x = bb.max.x.max(p.x);
            bb.max.y = bb.max.y.max(p.y);
        }
        Some(bb)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(
            self.min.x + self.width() / 2.0,
            self.min.y + self.height() / 2.0,
        )
    }
}

/// Planar region queryable by the pole search.
///
/// The search depends on exactly these four capabilities, so any geometry
/// backend can drive it: the built-in `Polygon`, or a host-side adapter over
/// an external geometry engine.
pub trait Region {
    /// Signed minimum distance from `p` to the region boundary: positive
    /// inside the region, negative outside. A point inside a hole counts as
    /// outside.
    fn signed_distance(&self, p: Vector2<f64>) -> f64;

    /// Axis-aligned bounding box of the region.
    fn bounding_box(&self) -> Aabb;

    /// Enclosed area, holes subtracted.
    fn area(&self) -> f64;

    /// Area-weighted centroid, holes subtracted.
    fn centroid(&self) -> Vector2<f64>;
}
