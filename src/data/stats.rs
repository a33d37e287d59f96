use std::collections::BTreeMap;

use super::model::{ModelKind, UnifiedAnomalyTable};

// ---------------------------------------------------------------------------
// Grouped statistics over a (filtered) unified table
// ---------------------------------------------------------------------------

/// Number of records of one model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coverage {
    pub model: ModelKind,
    pub files: usize,
}

/// A per-model statistic; `None` when it is undefined for the model's data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelStatistic {
    pub model: ModelKind,
    pub value: Option<f64>,
}

/// Box-plot summary of one model's anomaly ratios.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    /// Values beyond the whiskers.
    pub outliers: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatioDistribution {
    pub model: ModelKind,
    pub summary: Option<BoxSummary>,
}

/// All ratios of each model present in `table`, missing values included.
/// Keys are ordered by model label.
fn group_ratios(table: &UnifiedAnomalyTable) -> BTreeMap<ModelKind, Vec<Option<f64>>> {
    let mut groups: BTreeMap<ModelKind, Vec<Option<f64>>> = BTreeMap::new();
    for record in table.iter() {
        groups.entry(record.model).or_default().push(record.anomaly_ratio);
    }
    groups
}

fn present(values: &[Option<f64>]) -> Vec<f64> {
    values.iter().flatten().copied().collect()
}

/// Row count per model.
pub fn coverage(table: &UnifiedAnomalyTable) -> Vec<Coverage> {
    group_ratios(table)
        .into_iter()
        .map(|(model, values)| Coverage {
            model,
            files: values.len(),
        })
        .collect()
}

/// Mean anomaly ratio per model, ignoring missing ratios.
pub fn average_ratio(table: &UnifiedAnomalyTable) -> Vec<ModelStatistic> {
    group_ratios(table)
        .into_iter()
        .map(|(model, values)| ModelStatistic {
            model,
            value: mean(&present(&values)),
        })
        .collect()
}

/// Sample standard deviation of the anomaly ratio per model.
pub fn stability(table: &UnifiedAnomalyTable) -> Vec<ModelStatistic> {
    group_ratios(table)
        .into_iter()
        .map(|(model, values)| ModelStatistic {
            model,
            value: sample_std_dev(&present(&values)),
        })
        .collect()
}

/// Box-plot summary of the anomaly ratio per model.
pub fn distribution(table: &UnifiedAnomalyTable) -> Vec<RatioDistribution> {
    group_ratios(table)
        .into_iter()
        .map(|(model, values)| RatioDistribution {
            model,
            summary: BoxSummary::from_values(&present(&values)),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Scalar statistics
// ---------------------------------------------------------------------------

/// Arithmetic mean; `None` for no values or a result that is not finite.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    mean.is_finite().then_some(mean)
}

/// Standard deviation with `n - 1` degrees of freedom; undefined below two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    let std = (sum_sq / (values.len() - 1) as f64).sqrt();
    std.is_finite().then_some(std)
}

/// Quantile of sorted data with linear interpolation between closest ranks.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

impl BoxSummary {
    /// Quartiles plus whiskers reaching the most extreme values within
    /// 1.5 × IQR of the box. `None` for no values.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile(&sorted, 0.25);
        let median = quantile(&sorted, 0.5);
        let q3 = quantile(&sorted, 0.75);
        let reach = 1.5 * (q3 - q1);
        let (lo_fence, hi_fence) = (q1 - reach, q3 + reach);

        let (inside, outliers): (Vec<f64>, Vec<f64>) = sorted
            .iter()
            .copied()
            .partition(|v| (lo_fence..=hi_fence).contains(v));
        let lower_whisker = inside.iter().copied().fold(q1, f64::min);
        let upper_whisker = inside.iter().copied().fold(q3, f64::max);

        Some(BoxSummary {
            lower_whisker,
            q1,
            median,
            q3,
            upper_whisker,
            outliers,
        })
    }
}
