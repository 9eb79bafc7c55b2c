//! Random simple polygons in 2D (radial jitter + replay tokens).
//!
//! Purpose
//! - A small deterministic sampler for simple (generally non-convex) ring
//!   polygons, used by tests and benches and exported for callers. Sampled
//!   rings are star-shaped around the origin, so they are simple by
//!   construction and the origin is always interior.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular
//!   and radial jitter, and connect the points in angle order.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `Polygon`, `RingCfg`, `ReplayToken`

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::polygon::Polygon;
use crate::Result;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RingCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n.
    /// Clamped to [0, 0.49] so the angle order (and thus simplicity) holds.
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`,
    /// with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Base radius of the ring.
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for RingCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one star-shaped ring around the origin, vertices in CCW angle order.
fn draw_ring(cfg: RingCfg, rng: &mut StdRng) -> Vec<Vector2<f64>> {
    let n = cfg.vertex_count.sample(rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 2.0 * std::f64::consts::PI
    } else {
        0.0
    };
    (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * r0;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

/// Draw a random simple polygon around the origin.
pub fn draw_polygon(cfg: RingCfg, tok: ReplayToken) -> Result<Polygon> {
    let mut rng = tok.to_std_rng();
    Polygon::new(vec![draw_ring(cfg, &mut rng)])
}

/// Draw a random simple polygon with one hole: the outer ring scaled toward
/// the origin by `hole_scale` (in (0, 1)), reversed. Star-shapedness
/// guarantees the hole stays strictly inside the outer ring.
pub fn draw_polygon_with_hole(cfg: RingCfg, hole_scale: f64, tok: ReplayToken) -> Result<Polygon> {
    let mut rng = tok.to_std_rng();
    let outer = draw_ring(cfg, &mut rng);
    let s = hole_scale.clamp(1e-3, 0.99);
    let hole: Vec<Vector2<f64>> = outer.iter().rev().map(|p| p * s).collect();
    Polygon::new(vec![outer, hole])
}
