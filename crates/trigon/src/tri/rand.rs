//! Random triangles in a display box (rejection sampling + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for display-worthy triangles:
//!   vertices inside a margin-inset box, no short sides, not collinear.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so draw `k` of a run is reproducible in isolation.
//!
//! Model
//! - Draw three uniform points in `[margin, w−margin] × [margin, h−margin]`,
//!   accept the first draw whose pairwise distances all exceed `min_side` and
//!   whose area clears the collinearity gate. After `max_tries` rejections
//!   the documented fallback `Triangle::default()` is returned — a
//!   deterministic result, not a silent failure.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::measure::is_non_collinear;
use super::types::{TriCfg, Triangle};

/// Sampling box and acceptance thresholds.
#[derive(Clone, Copy, Debug)]
pub struct BoxCfg {
    pub width: f64,
    pub height: f64,
    /// Inset from every box edge; vertices land in the inner rectangle.
    pub margin: f64,
    /// Minimum pairwise vertex distance for an accepted draw.
    pub min_side: f64,
    /// Hard cap on rejection-sampling attempts.
    pub max_tries: u32,
}

impl Default for BoxCfg {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
            margin: 60.0,
            min_side: 80.0,
            max_tries: 200,
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

/// Draw a random non-degenerate triangle inside the box, or the fixed
/// fallback after `max_tries` rejected draws.
///
/// Accepted draws satisfy `is_non_collinear` (area > `TriCfg::default`'s
/// `eps_area`) and all pairwise distances > `cfg.min_side`.
pub fn random_triangle_in_box(cfg: BoxCfg, tok: ReplayToken) -> Triangle {
    let mut rng = tok.to_std_rng();
    let eps_area = TriCfg::default().eps_area;
    // Spans clamp to 0 so an oversized margin degrades to a point, not a panic.
    let span_x = (cfg.width - 2.0 * cfg.margin).max(0.0);
    let span_y = (cfg.height - 2.0 * cfg.margin).max(0.0);
    let draw_point = |rng: &mut StdRng| {
        Vector2::new(
            cfg.margin + rng.gen::<f64>() * span_x,
            cfg.margin + rng.gen::<f64>() * span_y,
        )
    };
    for _ in 0..cfg.max_tries {
        let t = Triangle::new(
            draw_point(&mut rng),
            draw_point(&mut rng),
            draw_point(&mut rng),
        );
        let [bc, ca, ab] = t.side_lengths();
        if bc > cfg.min_side
            && ca > cfg.min_side
            && ab > cfg.min_side
            && is_non_collinear(t.a, t.b, t.c, eps_area)
        {
            return t;
        }
    }
    Triangle::default()
}
