//! Distance functions over coordinate slices.

/// A symmetric, non-negative distance between two positions.
///
/// Any `Fn(&[f64], &[f64]) -> f64` closure is a metric.
pub trait Metric {
    /// Compute the distance between `a` and `b`.
    fn distance(&self, a: &[f64], b: &[f64]) -> f64;
}

/// Euclidean distance: `sqrt(sum((a_k - b_k)^2))`.
///
/// Always the true distance, never the squared form, so `eps` means the same
/// thing for every caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Metric for Euclidean {
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

impl<F> Metric for F
where
    F: Fn(&[f64], &[f64]) -> f64,
{
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        self(a, b)
    }
}
