//! Probability helpers.
//!
//! Every function takes the random source explicitly; nothing here touches
//! thread-local or global randomness.

use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Bernoulli trial. Out-of-range probabilities are clamped (NaN counts as 0).
pub fn bernoulli<R: Rng + ?Sized>(rng: &mut R, p: f32) -> bool {
    let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
    rng.gen_bool(p as f64)
}

/// One Gaussian sample, clamped to `[min, max]`.
///
/// A non-positive `sigma` degenerates to the (clamped) mean.
pub fn clamp_normal<R: Rng + ?Sized>(rng: &mut R, mean: f32, sigma: f32, min: f32, max: f32) -> f32 {
    let value = match Normal::new(mean, sigma) {
        Ok(dist) if sigma > 0.0 => dist.sample(rng),
        _ => mean,
    };
    value.clamp(min, max)
}

/// Gaussian restricted to `[min, max]` by rejection, falling back to clamping
/// after a bounded number of attempts.
pub fn truncated_normal<R: Rng + ?Sized>(
    rng: &mut R,
    mean: f32,
    sigma: f32,
    min: f32,
    max: f32,
) -> f32 {
    const MAX_ATTEMPTS: usize = 16;
    let Ok(dist) = Normal::new(mean, sigma) else {
        return mean.clamp(min, max);
    };
    if sigma <= 0.0 {
        return mean.clamp(min, max);
    }
    for _ in 0..MAX_ATTEMPTS {
        let v = dist.sample(rng);
        if (min..=max).contains(&v) {
            return v;
        }
    }
    dist.sample(rng).clamp(min, max)
}

/// Index drawn proportionally to `weights`. Negative weights count as zero.
/// Returns `None` when every weight is zero or the slice is empty.
pub fn weighted_index<R: Rng + ?Sized>(rng: &mut R, weights: &[f32]) -> Option<usize> {
    let total: f32 = weights.iter().map(|w| w.max(0.0)).sum();
    if !(total > 0.0) {
        return None;
    }
    let mut roll = rng.gen::<f32>() * total;
    let mut last_positive = None;
    for (i, w) in weights.iter().enumerate() {
        let w = w.max(0.0);
        if w <= 0.0 {
            continue;
        }
        if roll < w {
            return Some(i);
        }
        roll -= w;
        last_positive = Some(i);
    }
    // float rounding
    last_positive
}

#[inline]
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_bernoulli_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!((0..100).all(|_| bernoulli(&mut rng, 1.0)));
        assert!((0..100).all(|_| !bernoulli(&mut rng, 0.0)));
        assert!(!bernoulli(&mut rng, f32::NAN));
        assert!(bernoulli(&mut rng, 7.0));
    }

    #[test]
    fn test_truncated_normal_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = truncated_normal(&mut rng, 26.0, 4.0, 16.0, 36.0);
            assert!((16.0..=36.0).contains(&v));
        }
        assert_eq!(truncated_normal(&mut rng, 50.0, 0.0, 0.0, 40.0), 40.0);
    }

    #[test]
    fn test_weighted_index() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(weighted_index(&mut rng, &[]), None);
        assert_eq!(weighted_index(&mut rng, &[0.0, 0.0]), None);
        for _ in 0..200 {
            assert_eq!(weighted_index(&mut rng, &[0.0, 2.0, -1.0]), Some(1));
        }
        let mut counts = [0usize; 2];
        for _ in 0..4000 {
            if let Some(i) = weighted_index(&mut rng, &[1.0, 3.0]) {
                counts[i] += 1;
            }
        }
        assert!(counts[1] > counts[0] * 2);
    }

    #[test]
    fn test_sigmoid_shape() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-6);
        assert!(sigmoid(10.0) > 0.99);
        assert!(sigmoid(-10.0) < 0.01);
    }
}
