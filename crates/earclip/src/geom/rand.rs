//! Random simple outlines (star shapes + replay tokens).
//!
//! Purpose
//! - Deterministic sampler for simple polygons used by property tests, the
//!   benches, and the cli `gen` subcommand.
//!
//! Model
//! - Place `n` angles around the origin with bounded jitter (strictly less
//!   than half the base spacing, so the sorted order is strict), then jitter
//!   the radii. Every vertex is angularly monotone around the centroid, so
//!   the outline is star-shaped and therefore simple, and all `n` vertices
//!   survive into the output (no hull pass).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Star sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    /// Number of outline vertices; clamped to >= 3.
    pub vertices: usize,
    /// Angular jitter as a fraction of the base spacing 2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`,
    /// with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Base radius of the star.
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertices: 12,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.4,
            base_radius: 100.0,
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

/// Draw a random star-shaped simple outline around the origin.
///
/// The returned points are in angular order; the winding under the screen
/// convention is whatever `geom::winding_of` says it is, which is all the
/// clipper needs.
pub fn draw_outline_star(cfg: StarCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertices.max(3);
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
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * r0;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = StarCfg::default();
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_outline_star(cfg, tok);
        let p2 = draw_outline_star(cfg, tok);
        assert_eq!(p1.len(), p2.len());
        for (a, b) in p1.iter().zip(p2.iter()) {
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
        }
    }

    #[test]
    fn keeps_every_requested_vertex() {
        let cfg = StarCfg {
            vertices: 17,
            ..StarCfg::default()
        };
        let tok = ReplayToken { seed: 1, index: 0 };
        assert_eq!(draw_outline_star(cfg, tok).len(), 17);
    }

    #[test]
    fn angularly_monotone_hence_simple() {
        // Jitter below half the spacing must keep the angle sequence strictly
        // increasing, which is what makes the outline star-shaped.
        let cfg = StarCfg {
            vertices: 24,
            angle_jitter_frac: 0.49,
            ..StarCfg::default()
        };
        let delta = 2.0 * std::f64::consts::PI / 24.0;
        for index in 0..16 {
            let pts = draw_outline_star(cfg, ReplayToken { seed: 9, index });
            let angles: Vec<f64> = pts.iter().map(|p| p.y.atan2(p.x)).collect();
            // Unwrap the circular sequence; every step must advance by less
            // than twice the base spacing (a reversal would unwrap to ~2π).
            let mut prev = angles[0];
            for &raw in &angles[1..] {
                let mut a = raw;
                while a <= prev {
                    a += 2.0 * std::f64::consts::PI;
                }
                assert!(a - prev < 2.0 * delta);
                prev = a;
            }
        }
    }
}
