//! Summary statistics over threshold samples.

////////////////////////////////////////////////////////////////////////////////

/// Returns the arithmetic mean of `samples`, or NaN if empty.
pub fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Returns the sample standard deviation of `samples`, with Bessel's
/// correction (n - 1 denominator). NaN for fewer than two samples.
pub fn stddev(samples: &[f64]) -> f64 {
    let mean = mean(samples);
    let sum_of_squares: f64 = samples.iter().map(|x| (x - mean) * (x - mean)).sum();

    (sum_of_squares / (samples.len() as f64 - 1.0)).sqrt()
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mean_of_samples() {
        assert_eq!(mean(&[0.5]), 0.5);
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn mean_of_empty_is_nan() {
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn stddev_of_samples() {
        let samples = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

        // Sample variance of this set is exactly 32 / 7.
        let expected = (32.0f64 / 7.0).sqrt();

        assert!((stddev(&samples) - expected).abs() < 1e-12);
    }

    #[test]
    fn stddev_of_constant_samples_is_zero() {
        assert_eq!(stddev(&[0.3, 0.3, 0.3]), 0.0);
    }

    #[test]
    fn stddev_of_singleton_is_nan() {
        assert!(stddev(&[0.5]).is_nan());
    }
}
