//! Per-generation fitness history for post-run analysis.
//!
//! The engine records the best and average fitness after every evaluation.
//! [`FitnessHistory::normalized`] scales both series by the run's maximum
//! observed best fitness, giving plot-ready values in `[0, 1]`;
//! [`FitnessHistory::write_json`] exports the series for an external
//! plotting tool.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Best and average fitness for every completed evaluation, in generation
/// order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FitnessHistory {
    best: Vec<f64>,
    average: Vec<f64>,
}

impl FitnessHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one generation's best and average fitness.
    pub fn record(&mut self, best: f64, average: f64) {
        self.best.push(best);
        self.average.push(average);
    }

    /// Number of recorded generations.
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// The best-fitness series.
    pub fn best(&self) -> &[f64] {
        &self.best
    }

    /// The average-fitness series.
    pub fn average(&self) -> &[f64] {
        &self.average
    }

    /// Both series scaled into `[0, 1]` by the maximum observed best
    /// fitness.
    ///
    /// Returns empty series when nothing was recorded or the maximum is
    /// zero (an all-zero run has no meaningful normalization).
    pub fn normalized(&self) -> NormalizedHistory {
        let max = self.best.iter().copied().fold(0.0_f64, f64::max);
        if max == 0.0 {
            return NormalizedHistory::default();
        }
        NormalizedHistory {
            best: self.best.iter().map(|f| f / max).collect(),
            average: self.average.iter().map(|f| f / max).collect(),
        }
    }

    /// Writes the normalized history as JSON for external plotting.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.normalized())?;
        Ok(())
    }
}

/// Fitness series normalized to `[0, 1]`, ready for plotting against the
/// generation number.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizedHistory {
    pub best: Vec<f64>,
    pub average: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_len() {
        let mut history = FitnessHistory::new();
        assert!(history.is_empty());
        history.record(4.0, 2.0);
        history.record(9.0, 5.0);
        assert_eq!(history.len(), 2);
        assert_eq!(history.best(), &[4.0, 9.0]);
        assert_eq!(history.average(), &[2.0, 5.0]);
    }

    #[test]
    fn test_normalized_scales_by_max_best() {
        let mut history = FitnessHistory::new();
        history.record(2.0, 1.0);
        history.record(8.0, 4.0);
        let normalized = history.normalized();
        assert_eq!(normalized.best, vec![0.25, 1.0]);
        assert_eq!(normalized.average, vec![0.125, 0.5]);
    }

    #[test]
    fn test_normalized_values_in_unit_interval() {
        let mut history = FitnessHistory::new();
        for g in 1..=20 {
            let best = f64::from(g * g);
            history.record(best, best / 2.0);
        }
        let normalized = history.normalized();
        for value in normalized.best.iter().chain(&normalized.average) {
            assert!((0.0..=1.0).contains(value));
        }
        assert_eq!(*normalized.best.last().unwrap(), 1.0);
    }

    #[test]
    fn test_normalized_empty_and_all_zero() {
        assert!(FitnessHistory::new().normalized().best.is_empty());

        let mut history = FitnessHistory::new();
        history.record(0.0, 0.0);
        assert!(history.normalized().best.is_empty());
    }

    #[test]
    fn test_write_json_round_trip() {
        let mut history = FitnessHistory::new();
        history.record(2.0, 1.0);
        history.record(4.0, 3.0);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        history.write_json(&path).unwrap();

        let data = std::fs::read_to_string(&path).unwrap();
        let parsed: NormalizedHistory = serde_json::from_str(&data).unwrap();
        assert_eq!(parsed.best, vec![0.5, 1.0]);
        assert_eq!(parsed.average, vec![0.25, 0.75]);
    }
}
