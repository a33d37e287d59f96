use crate::data::aggregate::{supervised_records, unify};
use crate::data::error::DataError;
use crate::data::filter::{filter_by_models, FilterSelection};
use crate::data::loader::LoadedTables;
use crate::data::model::{ModelKind, SupervisedRecord, UnifiedAnomalyTable};
use crate::data::normalize::normalize;
use crate::data::stats::{self, Coverage, ModelStatistic, RatioDistribution};

// ---------------------------------------------------------------------------
// Comparison – everything derived from the files, before filtering
// ---------------------------------------------------------------------------

/// Normalized and typed view of the loaded result files.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub unified: UnifiedAnomalyTable,
    pub supervised: Vec<SupervisedRecord>,
}

impl Comparison {
    pub fn from_tables(tables: &LoadedTables) -> Result<Self, DataError> {
        let unified = unify(
            &normalize(&tables.lstm_unsupervised),
            &normalize(&tables.mset),
            &normalize(&tables.isolation_forest),
        )?;
        let supervised = supervised_records(&normalize(&tables.lstm_supervised))?;
        Ok(Comparison {
            unified,
            supervised,
        })
    }

    /// Models offered in the selection widget.
    pub fn available_models(&self) -> Vec<ModelKind> {
        self.unified.distinct_models()
    }
}

// ---------------------------------------------------------------------------
// Dashboard – what the central panel renders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub available_models: Vec<ModelKind>,
    pub total_records: usize,
    pub filtered: UnifiedAnomalyTable,
    pub coverage: Vec<Coverage>,
    pub average_ratio: Vec<ModelStatistic>,
    pub stability: Vec<ModelStatistic>,
    pub distribution: Vec<RatioDistribution>,
    pub supervised: Vec<SupervisedRecord>,
}

impl Dashboard {
    pub fn build(comparison: Comparison, selection: &FilterSelection) -> Self {
        let filtered = filter_by_models(&comparison.unified, selection);
        log::debug!(
            "Filtered {} of {} records for {} selected models",
            filtered.len(),
            comparison.unified.len(),
            selection.len()
        );

        Dashboard {
            available_models: comparison.available_models(),
            total_records: comparison.unified.len(),
            coverage: stats::coverage(&filtered),
            average_ratio: stats::average_ratio(&filtered),
            stability: stats::stability(&filtered),
            distribution: stats::distribution(&filtered),
            supervised: comparison.supervised,
            filtered,
        }
    }
}
