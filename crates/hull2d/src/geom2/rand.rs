//! Reproducible point streams (star-shaped polylines, lattice clouds).
//!
//! Purpose
//! - Feed `MelkmanHull` in tests and benches with inputs it accepts: a star
//!   polyline (angle-sorted around the origin) is simple by construction; a
//!   lattice cloud is unordered and goes through `hull_of_unordered`.
//!
//! Model
//! - Star: `n` equally spaced angles on [0, 2π) with bounded angular and radial
//!   jitter, emitted in angle order. The result is star-shaped, usually not
//!   convex, so `add` exercises both the skip and the pop paths.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

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

/// Star polyline sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Center of the star.
    pub center: (f64, f64),
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(32),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.4,
            base_radius: 1.0,
            center: (0.0, 0.0),
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

/// Star-shaped simple polyline, in angle order.
pub fn draw_star_polyline(cfg: StarCfg, tok: ReplayToken) -> Vec<Point<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            Point2::new(cfg.center.0 + th.cos() * r, cfg.center.1 + th.sin() * r)
        })
        .collect()
}

/// `n` lattice points uniform in `[-half_extent, half_extent]²`, unordered, may repeat.
pub fn draw_lattice_cloud(n: usize, half_extent: i32, tok: ReplayToken) -> Vec<Point<i32>> {
    let mut rng = tok.to_std_rng();
    let h = half_extent.max(1);
    (0..n)
        .map(|_| Point2::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = draw_star_polyline(StarCfg::default(), tok);
        let b = draw_star_polyline(StarCfg::default(), tok);
        assert_eq!(a, b);
        let c = draw_star_polyline(StarCfg::default(), ReplayToken { seed: 42, index: 8 });
        assert_ne!(a, c);
    }

    #[test]
    fn star_points_stay_in_annulus() {
        let cfg = StarCfg {
            vertex_count: VertexCount::Uniform { min: 5, max: 40 },
            center: (100.0, -50.0),
            ..StarCfg::default()
        };
        let pts = draw_star_polyline(cfg, ReplayToken { seed: 1, index: 0 });
        assert!((5..=40).contains(&pts.len()));
        for p in pts {
            let r = ((p.x - 100.0).powi(2) + (p.y + 50.0).powi(2)).sqrt();
            assert!(r >= 0.6 - 1e-12 && r <= 1.4 + 1e-12);
        }
    }

    #[test]
    fn lattice_cloud_within_bounds() {
        let pts = draw_lattice_cloud(200, 10, ReplayToken { seed: 3, index: 3 });
        assert_eq!(pts.len(), 200);
        assert!(pts.iter().all(|p| p.x.abs() <= 10 && p.y.abs() <= 10));
    }
}
