/// Descriptive statistics over plain `f64` series.
pub struct SeriesStats;

impl SeriesStats {
    pub fn mean(data: &[f64]) -> Option<f64> {
        if data.is_empty() {
            return None;
        }
        Some(data.iter().sum::<f64>() / data.len() as f64)
    }

    /// Sample standard deviation (n - 1 denominator). `None` below two points.
    pub fn sample_std_dev(data: &[f64]) -> Option<f64> {
        if data.len() < 2 {
            return None;
        }
        let mean = Self::mean(data)?;
        let variance = data
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / (data.len() - 1) as f64;
        Some(variance.sqrt())
    }

    /// Calculates the Pearson correlation coefficient between two slices.
    /// Returns None if slices have different lengths, fewer than two points,
    /// or either series is constant.
    pub fn compute_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
        if x.len() != y.len() || x.len() < 2 {
            return None;
        }
        let mean_x = Self::mean(x)?;
        let mean_y = Self::mean(y)?;
        let numerator: f64 = x
            .iter()
            .zip(y.iter())
            .map(|(xi, yi)| (xi - mean_x) * (yi - mean_y))
            .sum();
        let denominator_x: f64 = x.iter().map(|xi| (xi - mean_x).powi(2)).sum();
        let denominator_y: f64 = y.iter().map(|yi| (yi - mean_y).powi(2)).sum();
        let denominator = (denominator_x * denominator_y).sqrt();
        if denominator == 0.0 {
            None
        } else {
            Some(numerator / denominator)
        }
    }
}
