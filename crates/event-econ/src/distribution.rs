//! Fixed-shape Beta weightings used by the arrival and ticket models.

use event_core::{BetaShape, ARRIVAL_SHAPE, TIER_SHAPE};
use statrs::distribution::{Beta, Continuous, ContinuousCDF};
use tracing::warn;

fn beta(shape: BetaShape) -> Option<Beta> {
    match Beta::new(shape.alpha, shape.beta) {
        Ok(dist) => Some(dist),
        Err(e) => {
            warn!(alpha = shape.alpha, beta = shape.beta, error = %e, "invalid beta shape");
            None
        }
    }
}

/// Share of attendees arrived at normalized time `t` (0 = opening,
/// 1 = closing). Values outside [0, 1] saturate.
pub fn arrival_fraction(t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    match beta(ARRIVAL_SHAPE) {
        Some(dist) => dist.cdf(t),
        None => t.clamp(0.0, 1.0),
    }
}

/// Share of paid attendees buying in each of `tier_count` tiers.
///
/// The tier density is sampled at `tier_count + 1` evenly spaced points over
/// [0, 1] and normalized over all samples; the last sample (x = 1) has zero
/// density, so the returned `tier_count` weights sum to 1. With a single tier
/// both samples sit on zero density and the whole mass goes to that tier.
pub fn tier_proportions(tier_count: u32) -> Vec<f64> {
    if tier_count == 0 {
        return Vec::new();
    }
    let n = tier_count as usize;
    let step = 1.0 / tier_count as f64;
    let density: Vec<f64> = match beta(TIER_SHAPE) {
        Some(dist) => (0..=n)
            .map(|k| if k == n { 1.0 } else { k as f64 * step })
            .map(|x| dist.pdf(x))
            .collect(),
        None => vec![1.0; n],
    };
    let total: f64 = density.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        let mut weights = vec![0.0; n];
        weights[0] = 1.0;
        return weights;
    }
    density.iter().take(n).map(|d| d / total).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn arrival_fraction_bounds() {
        assert_eq!(arrival_fraction(0.0), 0.0);
        assert_eq!(arrival_fraction(1.0), 1.0);
        assert_eq!(arrival_fraction(1.5), 1.0);
        let mid = arrival_fraction(0.25);
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn five_tiers_are_front_loaded() {
        let w = tier_proportions(5);
        assert_eq!(w.len(), 5);
        // density is zero at x = 0
        assert_eq!(w[0], 0.0);
        // Beta(2, 5) peaks at x = 0.2
        assert!(w[1] > w[2] && w[2] > w[3] && w[3] > w[4]);
    }

    #[test]
    fn degenerate_tier_counts() {
        assert!(tier_proportions(0).is_empty());
        assert_eq!(tier_proportions(1), vec![1.0]);
    }

    proptest! {
        #[test]
        fn tier_proportions_sum_to_one(tiers in 1u32..200) {
            let w = tier_proportions(tiers);
            prop_assert_eq!(w.len(), tiers as usize);
            let sum: f64 = w.iter().sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
            prop_assert!(w.iter().all(|&x| x >= 0.0));
        }

        #[test]
        fn arrival_fraction_monotonic(a in 0.0f64..1.2, b in 0.0f64..1.2) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(arrival_fraction(lo) <= arrival_fraction(hi));
        }
    }
}
