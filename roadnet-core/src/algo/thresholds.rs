//! Cost thresholds isochrone results are bucketed into

use itertools::{Itertools, MinMaxResult};

use crate::{Cost, Error};

/// Smallest threshold that is at least `cost`, or `None` if every threshold
/// is below it
pub fn assign_threshold(cost: Cost, thresholds: &[f64]) -> Option<f64> {
    thresholds
        .iter()
        .copied()
        .filter(|&threshold| cost <= threshold)
        .min_by(f64::total_cmp)
}

/// Non-empty set of isochrone thresholds, optionally carrying the labels
/// they were parsed from
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    values: Vec<f64>,
    labels: Option<Vec<String>>,
    min: f64,
    max: f64,
}

impl Thresholds {
    /// # Errors
    ///
    /// Returns `InvalidData` if `values` is empty or holds a negative or
    /// non-finite value
    pub fn new(values: Vec<f64>) -> Result<Self, Error> {
        if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(Error::InvalidData(format!(
                "Thresholds must be finite and non-negative, got {bad}"
            )));
        }
        let (min, max) = match values.iter().copied().minmax_by(f64::total_cmp) {
            MinMaxResult::NoElements => {
                return Err(Error::InvalidData(
                    "At least one threshold is required".to_string(),
                ));
            }
            MinMaxResult::OneElement(value) => (value, value),
            MinMaxResult::MinMax(min, max) => (min, max),
        };
        Ok(Self {
            values,
            labels: None,
            min,
            max,
        })
    }

    /// Thresholds given as numeric labels such as `"15"`. Results assigned
    /// to these thresholds report the label instead of the number.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if a label is not a number
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Result<Self, Error> {
        let values = labels
            .iter()
            .map(|label| {
                let label = label.as_ref();
                label.trim().parse::<f64>().map_err(|_| {
                    Error::InvalidData(format!("Threshold label '{label}' is not a number"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let mut thresholds = Self::new(values)?;
        thresholds.labels = Some(labels.iter().map(|l| l.as_ref().to_string()).collect());
        Ok(thresholds)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    pub fn is_labeled(&self) -> bool {
        self.labels.is_some()
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn assign(&self, cost: Cost) -> Option<f64> {
        assign_threshold(cost, &self.values)
    }

    /// Label of a threshold value, the first one given for that value
    pub fn label_for(&self, value: f64) -> Option<&str> {
        let labels = self.labels.as_ref()?;
        self.values
            .iter()
            .position(|&v| v == value)
            .map(|i| labels[i].as_str())
    }
}
