/// Mean and sample standard deviation of one channel over the currently
/// plotted (possibly cropped) rows.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelStats {
    pub name: String,
    pub mean: f64,
    pub std: f64,
}

impl ChannelStats {
    pub fn from_values(name: &str, values: &[f64]) -> Self {
        Self {
            name: name.to_string(),
            mean: mean(values),
            std: sample_std(values),
        }
    }
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (normalized by n - 1).
///
/// Returns NaN for fewer than two samples.
pub fn sample_std(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (sum_sq / (n - 1) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_std_of_cropped_scenario() {
        // The [20, 30, 40, 50] subset after cropping [10..=60] by one step.
        let values = [20.0, 30.0, 40.0, 50.0];
        assert_eq!(mean(&values), 35.0);
        let expected = (500.0_f64 / 3.0).sqrt();
        assert!((sample_std(&values) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_std_needs_two_samples() {
        assert!(sample_std(&[1.0]).is_nan());
        assert!(sample_std(&[]).is_nan());
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_stats_record_carries_channel_name() {
        let stats = ChannelStats::from_values("Voltage", &[1.0, 3.0]);
        assert_eq!(stats.name, "Voltage");
        assert_eq!(stats.mean, 2.0);
        assert!((stats.std - 2.0_f64.sqrt()).abs() < 1e-12);
    }
}
