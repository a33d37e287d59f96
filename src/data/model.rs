use std::fmt;

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

/// Column appended by the loader to tag every row with its model.
pub const MODEL_TAG_COLUMN: &str = "Model";

pub const FOLDER: &str = "folder";
pub const FILE: &str = "file";
pub const ANOMALY_RATIO: &str = "anomaly_ratio";
pub const MODEL: &str = "model";
pub const ACCURACY: &str = "accuracy";
pub const PRECISION: &str = "precision";
pub const RECALL: &str = "recall";
pub const F1: &str = "f1";

// ---------------------------------------------------------------------------
// ModelKind – the four evaluated models
// ---------------------------------------------------------------------------

/// One of the four evaluated anomaly detection models.
///
/// Variants are declared in label order so that the derived `Ord` sorts
/// grouped output the same way a group-by on the label string would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModelKind {
    IsolationForest,
    LstmSupervised,
    LstmUnsupervised,
    Mset,
}

impl ModelKind {
    /// All models, in the order their result files are loaded.
    pub const ALL: [ModelKind; 4] = [
        ModelKind::LstmUnsupervised,
        ModelKind::LstmSupervised,
        ModelKind::Mset,
        ModelKind::IsolationForest,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ModelKind::IsolationForest => "Isolation Forest",
            ModelKind::LstmSupervised => "LSTM Supervised",
            ModelKind::LstmUnsupervised => "LSTM Unsupervised",
            ModelKind::Mset => "MSET",
        }
    }

    /// Exact inverse of [`ModelKind::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// RawTable – a delimited file as read from disk
// ---------------------------------------------------------------------------

/// Header names and string cells of one result file, kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Human readable name used in error messages (the model label).
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(name: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        RawTable {
            name: name.into(),
            headers,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the column with exactly this name. When a name is repeated
    /// the last occurrence wins.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().rposition(|h| h == name)
    }

    /// Set the [`MODEL_TAG_COLUMN`] of every row to `model`, appending the
    /// column if the file does not already have it.
    pub fn with_model_column(mut self, model: ModelKind) -> Self {
        let label = model.label().to_string();
        match self.headers.iter().position(|h| h == MODEL_TAG_COLUMN) {
            Some(idx) => {
                for row in &mut self.rows {
                    if let Some(cell) = row.get_mut(idx) {
                        *cell = label.clone();
                    }
                }
            }
            None => {
                self.headers.push(MODEL_TAG_COLUMN.to_string());
                for row in &mut self.rows {
                    row.push(label.clone());
                }
            }
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Typed records
// ---------------------------------------------------------------------------

/// One evaluated (folder, file) pair of a ratio-producing model.
#[derive(Debug, Clone, PartialEq)]
pub struct AnomalyRecord {
    pub folder: String,
    pub file: String,
    /// `None` when the source cell was empty or NA.
    pub anomaly_ratio: Option<f64>,
    pub model: ModelKind,
}

/// Classification quality of the supervised LSTM on one (folder, file) pair.
///
/// Metric cells are kept as the text found in the file; this table is only
/// displayed, never aggregated.
#[derive(Debug, Clone, PartialEq)]
pub struct SupervisedRecord {
    pub folder: String,
    pub file: String,
    pub accuracy: String,
    pub precision: String,
    pub recall: String,
    pub f1: String,
}

// ---------------------------------------------------------------------------
// UnifiedAnomalyTable – long-form records of the ratio-producing models
// ---------------------------------------------------------------------------

/// Concatenated anomaly records. A record's row index is its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnifiedAnomalyTable {
    records: Vec<AnomalyRecord>,
}

impl UnifiedAnomalyTable {
    pub fn new(records: Vec<AnomalyRecord>) -> Self {
        UnifiedAnomalyTable { records }
    }

    pub fn records(&self) -> &[AnomalyRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnomalyRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct model labels in order of first appearance.
    pub fn distinct_models(&self) -> Vec<ModelKind> {
        let mut models = Vec::new();
        for record in &self.records {
            if !models.contains(&record.model) {
                models.push(record.model);
            }
        }
        models
    }
}

impl FromIterator<AnomalyRecord> for UnifiedAnomalyTable {
    fn from_iter<I: IntoIterator<Item = AnomalyRecord>>(iter: I) -> Self {
        UnifiedAnomalyTable::new(iter.into_iter().collect())
    }
}
