use num::BigRational;
use num::bigint::BigInt;
use tracing::debug;

/// Produces `count` evenly spaced samples covering `[from, to)`.
///
/// The first sample equals `from` and the spacing is `(to - from) / count`, so every
/// sample stays strictly below `to`. An empty or inverted interval yields no samples.
#[must_use]
pub fn sample_axis(from: &BigRational, to: &BigRational, count: usize) -> Vec<BigRational> {
    if from >= to {
        debug!(%from, %to, "refusing to sample an empty interval");
        return Vec::new();
    }

    if count == 0 {
        return Vec::new();
    }

    let step = (to - from) / BigRational::from_integer(BigInt::from(count));

    (0..count)
        .map(|i| from + &step * BigRational::from_integer(BigInt::from(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(numer: i64, denom: i64) -> BigRational {
        BigRational::new(BigInt::from(numer), BigInt::from(denom))
    }

    #[test]
    fn test_sample_count_and_first_value() {
        let from = ratio(-5, 2);
        let to = ratio(3, 2);
        let samples = sample_axis(&from, &to, 40);

        assert_eq!(samples.len(), 40);
        assert_eq!(samples[0], from);
    }

    #[test]
    fn test_samples_strictly_increasing_and_below_upper_bound() {
        let from = ratio(-2, 1);
        let to = ratio(2, 1);
        let samples = sample_axis(&from, &to, 40);

        assert!(samples.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(samples.iter().all(|s| *s >= from && *s < to));
    }

    #[test]
    fn test_sample_spacing_is_exact() {
        let from = ratio(-2, 1);
        let to = ratio(2, 1);
        let samples = sample_axis(&from, &to, 40);
        let step = ratio(1, 10);

        for pair in samples.windows(2) {
            assert_eq!(&pair[1] - &pair[0], step);
        }
        assert_eq!(samples[39], ratio(19, 10));
    }

    #[test]
    fn test_awkward_spacing_still_yields_exact_count() {
        // 1/3 steps never terminate in decimal, the count must still be exact
        let samples = sample_axis(&ratio(0, 1), &ratio(1, 1), 3);

        assert_eq!(samples, vec![ratio(0, 1), ratio(1, 3), ratio(2, 3)]);
    }

    #[test]
    fn test_single_sample() {
        let samples = sample_axis(&ratio(1, 1), &ratio(2, 1), 1);

        assert_eq!(samples, vec![ratio(1, 1)]);
    }

    #[test]
    fn test_equal_bounds_yield_nothing() {
        let samples = sample_axis(&ratio(1, 1), &ratio(1, 1), 40);

        assert!(samples.is_empty());
    }

    #[test]
    fn test_inverted_bounds_yield_nothing() {
        let samples = sample_axis(&ratio(2, 1), &ratio(-2, 1), 40);

        assert!(samples.is_empty());
    }

    #[test]
    fn test_zero_count_yields_nothing() {
        let samples = sample_axis(&ratio(-2, 1), &ratio(2, 1), 0);

        assert!(samples.is_empty());
    }
}
