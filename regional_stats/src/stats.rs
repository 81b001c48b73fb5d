use crate::config::*;

impl SummaryStats {
    /// Computes the statistics over the values that are present.
    ///
    /// The standard deviation is the population one (divided by `count`).
    /// An empty population gives a NaN mean and deviation.
    pub fn from_values<I: IntoIterator<Item = Option<f64>>>(values: I) -> SummaryStats {
        let present: Vec<f64> = values.into_iter().flatten().collect();
        let count = present.len();
        let sum: f64 = present.iter().sum();
        let mean = sum / count as f64;
        let squares: f64 = present.iter().map(|x| (x - mean) * (x - mean)).sum();
        SummaryStats {
            count,
            sum,
            mean,
            std: (squares / count as f64).sqrt(),
        }
    }

    /// Number of standard deviations between `value` and the mean.
    ///
    /// No guard on a zero deviation: the result is then NaN or infinite.
    pub fn z_score(&self, value: f64) -> f64 {
        (value - self.mean) / self.std
    }
}

impl ZLegend {
    pub const OFFSETS: [i32; 5] = [-2, -1, 0, 1, 2];

    pub fn from_stats(stats: &SummaryStats) -> ZLegend {
        let mut entries = [(0, 0.0); 5];
        for (entry, offset) in entries.iter_mut().zip(ZLegend::OFFSETS) {
            *entry = (offset, stats.mean + (offset as f64) * stats.std);
        }
        ZLegend { entries }
    }

    /// The purge percentage sitting `offset` standard deviations away from the mean.
    pub fn value_at(&self, offset: i32) -> Option<f64> {
        self.entries
            .iter()
            .find(|(o, _)| *o == offset)
            .map(|(_, v)| *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_three_values() {
        let s = SummaryStats::from_values(vec![Some(10.0), Some(20.0), Some(30.0)]);
        assert_eq!(s.count, 3);
        assert_eq!(s.sum, 60.0);
        assert_eq!(s.mean, 20.0);
        assert!((s.std - (200.0_f64 / 3.0).sqrt()).abs() < 1e-12);
        assert!((s.std - 8.165).abs() < 1e-3);
    }

    #[test]
    fn missing_values_are_excluded() {
        let s = SummaryStats::from_values(vec![Some(1.0), None, Some(3.0), None]);
        assert_eq!(s.count, 2);
        assert_eq!(s.sum, 4.0);
        assert_eq!(s.mean, 2.0);
        assert_eq!(s.std, 1.0);
    }

    #[test]
    fn empty_population() {
        let s = SummaryStats::from_values(vec![None, None]);
        assert_eq!(s.count, 0);
        assert_eq!(s.sum, 0.0);
        assert!(s.mean.is_nan());
        assert!(s.std.is_nan());
    }

    #[test]
    fn single_value_has_zero_deviation() {
        let s = SummaryStats::from_values(vec![Some(0.4)]);
        assert_eq!(s.std, 0.0);
        assert!(s.z_score(0.4).is_nan());
        assert!(s.z_score(0.5).is_infinite());
    }

    #[test]
    fn z_score() {
        let s = SummaryStats::from_values(vec![Some(2.0), Some(4.0)]);
        assert_eq!(s.z_score(3.0), 0.0);
        assert_eq!(s.z_score(5.0), 2.0);
        assert_eq!(s.z_score(2.0), -1.0);
    }

    #[test]
    fn legend() {
        let s = SummaryStats::from_values(vec![Some(2.0), Some(4.0)]);
        let legend = ZLegend::from_stats(&s);
        assert_eq!(
            legend.entries,
            [(-2, 1.0), (-1, 2.0), (0, 3.0), (1, 4.0), (2, 5.0)]
        );
        assert_eq!(legend.value_at(1), Some(4.0));
        assert_eq!(legend.value_at(3), None);
    }
}
