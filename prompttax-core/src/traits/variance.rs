//! Randomness Source for Synthetic Trends
//!
//! Trend series perturb usage by a random factor per day. Isolating the draw
//! behind this trait lets tests supply a seeded RNG or a constant stub and
//! assert exact output instead of range membership.

/// Produces one multiplicative usage factor per call
pub trait VarianceSource {
    /// Next factor, expected in `[VARIANCE_MIN, VARIANCE_MAX)`
    fn next_factor(&mut self) -> f64;
}

impl<V: VarianceSource + ?Sized> VarianceSource for &mut V {
    fn next_factor(&mut self) -> f64 {
        (**self).next_factor()
    }
}
