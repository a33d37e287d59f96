use std::collections::BTreeSet;

use super::model::{ModelKind, UnifiedAnomalyTable};

// ---------------------------------------------------------------------------
// Model selection
// ---------------------------------------------------------------------------

/// The set of model labels the user wants to compare.
///
/// An empty selection is valid and filters everything out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    selected: BTreeSet<ModelKind>,
}

impl FilterSelection {
    /// Select every model in `models` (the default selection).
    pub fn all(models: &[ModelKind]) -> Self {
        FilterSelection {
            selected: models.iter().copied().collect(),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn contains(&self, model: ModelKind) -> bool {
        self.selected.contains(&model)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn insert(&mut self, model: ModelKind) {
        self.selected.insert(model);
    }

    pub fn remove(&mut self, model: ModelKind) {
        self.selected.remove(&model);
    }

    /// Whether every model in `models` is selected.
    pub fn covers(&self, models: &[ModelKind]) -> bool {
        models.iter().all(|m| self.selected.contains(m))
    }

    /// Drop every label that is not in `available`.
    pub fn retain_available(&mut self, available: &[ModelKind]) {
        self.selected.retain(|m| available.contains(m));
    }

    /// Follow a change of the available models: a selection that covered all
    /// previously available models grows to cover the new ones, any other
    /// selection is only clipped.
    pub fn sync_available(&mut self, previous: &[ModelKind], available: &[ModelKind]) {
        if self.covers(previous) {
            self.selected.extend(available.iter().copied());
        }
        self.retain_available(available);
    }

    pub fn iter(&self) -> impl Iterator<Item = ModelKind> + '_ {
        self.selected.iter().copied()
    }
}

impl FromIterator<ModelKind> for FilterSelection {
    fn from_iter<I: IntoIterator<Item = ModelKind>>(iter: I) -> Self {
        FilterSelection {
            selected: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Rows of `table` whose model is selected, in their original order.
pub fn filter_by_models(
    table: &UnifiedAnomalyTable,
    selection: &FilterSelection,
) -> UnifiedAnomalyTable {
    table
        .iter()
        .filter(|record| selection.contains(record.model))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::AnomalyRecord;

    fn record(file: &str, ratio: f64, model: ModelKind) -> AnomalyRecord {
        AnomalyRecord {
            folder: "A".into(),
            file: file.into(),
            anomaly_ratio: Some(ratio),
            model,
        }
    }

    fn unified() -> UnifiedAnomalyTable {
        UnifiedAnomalyTable::new(vec![
            record("f1", 0.10, ModelKind::LstmUnsupervised),
            record("f1", 0.12, ModelKind::Mset),
            record("f2", 0.30, ModelKind::Mset),
            record("f3", 0.20, ModelKind::IsolationForest),
        ])
    }

    #[test]
    fn full_selection_returns_table_unchanged() {
        let table = unified();
        let selection = FilterSelection::all(&table.distinct_models());
        assert_eq!(filter_by_models(&table, &selection), table);
    }

    #[test]
    fn empty_selection_returns_no_rows() {
        let filtered = filter_by_models(&unified(), &FilterSelection::none());
        assert!(filtered.is_empty());
    }

    #[test]
    fn keeps_only_selected_models_in_order() {
        let table = unified();
        let selection: FilterSelection = [ModelKind::Mset].into_iter().collect();
        let filtered = filter_by_models(&table, &selection);

        let files: Vec<_> = filtered.iter().map(|r| r.file.as_str()).collect();
        assert_eq!(files, vec!["f1", "f2"]);
        assert!(filtered.iter().all(|r| r.model == ModelKind::Mset));
        // input untouched
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn filtering_is_idempotent_and_narrowing() {
        let table = unified();
        let narrow: FilterSelection = [ModelKind::Mset].into_iter().collect();
        let wide: FilterSelection = [ModelKind::Mset, ModelKind::IsolationForest]
            .into_iter()
            .collect();

        let once = filter_by_models(&table, &wide);
        assert_eq!(filter_by_models(&once, &wide), once);
        assert_eq!(filter_by_models(&once, &narrow), filter_by_models(&table, &narrow));
    }

    #[test]
    fn insert_remove_and_retain_keep_selection_consistent() {
        let mut selection = FilterSelection::all(&ModelKind::ALL);
        selection.remove(ModelKind::Mset);
        assert!(!selection.contains(ModelKind::Mset));
        selection.insert(ModelKind::Mset);
        assert!(selection.contains(ModelKind::Mset));

        selection.retain_available(&[ModelKind::Mset, ModelKind::IsolationForest]);
        assert_eq!(
            selection.iter().collect::<Vec<_>>(),
            vec![ModelKind::IsolationForest, ModelKind::Mset]
        );
    }

    #[test]
    fn full_selection_picks_up_models_that_reappear() {
        let before = [ModelKind::LstmUnsupervised, ModelKind::IsolationForest];
        let after = [
            ModelKind::LstmUnsupervised,
            ModelKind::Mset,
            ModelKind::IsolationForest,
        ];

        let mut full = FilterSelection::all(&before);
        full.sync_available(&before, &after);
        assert!(full.covers(&after));

        let mut partial: FilterSelection = [ModelKind::IsolationForest].into_iter().collect();
        partial.sync_available(&before, &after);
        assert_eq!(partial.iter().collect::<Vec<_>>(), vec![ModelKind::IsolationForest]);

        // models that disappear are still clipped
        let mut clipped = FilterSelection::all(&after);
        clipped.sync_available(&after, &before);
        assert!(!clipped.contains(ModelKind::Mset));
        assert!(clipped.covers(&before));
    }
}
