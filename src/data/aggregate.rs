use super::error::SchemaError;
use super::model::{
    AnomalyRecord, ModelKind, RawTable, SupervisedRecord, UnifiedAnomalyTable, ACCURACY,
    ANOMALY_RATIO, F1, FILE, FOLDER, MODEL, PRECISION, RECALL,
};

// ---------------------------------------------------------------------------
// Schema mapping: normalized RawTable → typed records
// ---------------------------------------------------------------------------

/// Cells read as a missing number, besides the empty string.
const NA_VALUES: &[&str] = &["na", "n/a", "nan", "null", "none", "<na>"];

/// Resolves the column positions a record type needs once per table.
struct Columns<'a, const N: usize> {
    table: &'a RawTable,
    names: [&'static str; N],
    indices: [usize; N],
}

impl<'a, const N: usize> Columns<'a, N> {
    fn resolve(table: &'a RawTable, names: [&'static str; N]) -> Result<Self, SchemaError> {
        let mut indices = [0; N];
        for (slot, name) in indices.iter_mut().zip(names) {
            *slot = table
                .column_index(name)
                .ok_or_else(|| SchemaError::MissingColumn {
                    table: table.name.clone(),
                    column: name,
                })?;
        }
        Ok(Columns {
            table,
            names,
            indices,
        })
    }

    fn text(&self, row: &[String], col: usize) -> String {
        row.get(self.indices[col]).cloned().unwrap_or_default()
    }

    fn number(&self, row_no: usize, row: &[String], col: usize) -> Result<Option<f64>, SchemaError> {
        let cell = row.get(self.indices[col]).map(String::as_str).unwrap_or("");
        parse_number(cell).ok_or_else(|| SchemaError::InvalidValue {
            table: self.table.name.clone(),
            row: row_no,
            column: self.names[col],
            value: cell.to_string(),
        })
    }
}

/// `Some(None)` for a missing value, `None` when the cell is not a finite
/// number (`inf`, `1e400` and the like are rejected).
fn parse_number(cell: &str) -> Option<Option<f64>> {
    let cell = cell.trim();
    if cell.is_empty() || NA_VALUES.contains(&cell.to_ascii_lowercase().as_str()) {
        return Some(None);
    }
    let value: f64 = cell.parse().ok()?;
    value.is_finite().then_some(Some(value))
}

/// Map a normalized ratio table onto [`AnomalyRecord`]s.
pub fn anomaly_records(table: &RawTable) -> Result<Vec<AnomalyRecord>, SchemaError> {
    let cols = Columns::resolve(table, [FOLDER, FILE, ANOMALY_RATIO, MODEL])?;

    table
        .rows
        .iter()
        .enumerate()
        .map(|(row_no, row)| -> Result<AnomalyRecord, SchemaError> {
            let label = cols.text(row, 3);
            let model = ModelKind::from_label(&label).ok_or_else(|| SchemaError::UnknownModel {
                table: table.name.clone(),
                row: row_no,
                value: label.clone(),
            })?;
            Ok(AnomalyRecord {
                folder: cols.text(row, 0),
                file: cols.text(row, 1),
                anomaly_ratio: cols.number(row_no, row, 2)?,
                model,
            })
        })
        .collect()
}

/// Project a normalized supervised table onto [`SupervisedRecord`]s.
///
/// Only the columns must exist; cell contents are copied unchanged.
pub fn supervised_records(table: &RawTable) -> Result<Vec<SupervisedRecord>, SchemaError> {
    let cols = Columns::resolve(table, [FOLDER, FILE, ACCURACY, PRECISION, RECALL, F1])?;

    Ok(table
        .rows
        .iter()
        .map(|row| SupervisedRecord {
            folder: cols.text(row, 0),
            file: cols.text(row, 1),
            accuracy: cols.text(row, 2),
            precision: cols.text(row, 3),
            recall: cols.text(row, 4),
            f1: cols.text(row, 5),
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Concatenation
// ---------------------------------------------------------------------------

/// Concatenate the three ratio-producing tables (already normalized) in
/// the given order into one [`UnifiedAnomalyTable`].
pub fn unify(
    lstm_unsupervised: &RawTable,
    mset: &RawTable,
    isolation_forest: &RawTable,
) -> Result<UnifiedAnomalyTable, SchemaError> {
    let mut records = Vec::with_capacity(
        lstm_unsupervised.len() + mset.len() + isolation_forest.len(),
    );
    for table in [lstm_unsupervised, mset, isolation_forest] {
        records.extend(anomaly_records(table)?);
    }

    let out_of_range = records
        .iter()
        .filter_map(|r| r.anomaly_ratio)
        .filter(|ratio| !(0.0..=1.0).contains(ratio))
        .count();
    if out_of_range > 0 {
        log::warn!("{out_of_range} anomaly ratios fall outside [0, 1]");
    }

    Ok(UnifiedAnomalyTable::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{write_sample_results, TestDir};
    use crate::data::loader::load_metrics;
    use crate::data::normalize::normalize;

    fn table(name: &str, headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable::new(
            name,
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn unified_table_concatenates_three_ratio_tables() {
        let dir = TestDir::new("aggregate_unify");
        write_sample_results(dir.path());
        let tables = load_metrics(dir.path()).unwrap();

        let unified = unify(
            &normalize(&tables.lstm_unsupervised),
            &normalize(&tables.mset),
            &normalize(&tables.isolation_forest),
        )
        .unwrap();

        assert_eq!(
            unified.len(),
            tables.lstm_unsupervised.len() + tables.mset.len() + tables.isolation_forest.len()
        );
        assert!(unified
            .iter()
            .all(|r| r.model != ModelKind::LstmSupervised));
        assert_eq!(
            unified.distinct_models(),
            vec![
                ModelKind::LstmUnsupervised,
                ModelKind::Mset,
                ModelKind::IsolationForest
            ]
        );

        // source rows keep their content and relative order
        let mset: Vec<_> = unified
            .iter()
            .filter(|r| r.model == ModelKind::Mset)
            .map(|r| (r.file.as_str(), r.anomaly_ratio))
            .collect();
        assert_eq!(mset, vec![("f1", Some(0.10)), ("f2", Some(0.30))]);
        assert_eq!(unified.records()[2].file, "f1");
    }

    #[test]
    fn missing_column_is_a_schema_error() {
        let mset = table("MSET", &["folder", "file", "model"], &[&["A", "f1", "MSET"]]);
        let empty = table("x", &["folder", "file", "anomaly_ratio", "model"], &[]);

        assert_eq!(
            unify(&empty, &mset, &empty),
            Err(SchemaError::MissingColumn {
                table: "MSET".into(),
                column: "anomaly_ratio"
            })
        );
    }

    #[test]
    fn unnormalized_headers_are_not_matched() {
        let raw = table("MSET", &["Folder", "file", "anomaly_ratio", "model"], &[]);
        assert!(matches!(
            anomaly_records(&raw),
            Err(SchemaError::MissingColumn { column: "folder", .. })
        ));
    }

    #[test]
    fn non_numeric_ratio_is_rejected_with_row_number() {
        let raw = table(
            "MSET",
            &["folder", "file", "anomaly_ratio", "model"],
            &[&["A", "f1", "0.1", "MSET"], &["A", "f2", "high", "MSET"]],
        );
        assert_eq!(
            anomaly_records(&raw),
            Err(SchemaError::InvalidValue {
                table: "MSET".into(),
                row: 1,
                column: "anomaly_ratio",
                value: "high".into()
            })
        );
    }

    #[test]
    fn empty_and_na_ratios_are_missing_values() {
        let raw = table(
            "MSET",
            &["folder", "file", "anomaly_ratio", "model"],
            &[
                &["A", "f1", "", "MSET"],
                &["A", "f2", "NaN", "MSET"],
                &["A", "f3", "NA", "MSET"],
                &["A", "f4", " 1.5 ", "MSET"],
            ],
        );
        let ratios: Vec<_> = anomaly_records(&raw)
            .unwrap()
            .into_iter()
            .map(|r| r.anomaly_ratio)
            .collect();
        // out-of-range ratios are kept as they are
        assert_eq!(ratios, vec![None, None, None, Some(1.5)]);
    }

    #[test]
    fn unknown_model_label_is_rejected() {
        let raw = table(
            "MSET",
            &["folder", "file", "anomaly_ratio", "model"],
            &[&["A", "f1", "0.1", "mset"]],
        );
        assert!(matches!(
            anomaly_records(&raw),
            Err(SchemaError::UnknownModel { row: 0, .. })
        ));
    }

    #[test]
    fn supervised_projection_keeps_metric_columns() {
        let dir = TestDir::new("aggregate_supervised");
        write_sample_results(dir.path());
        let tables = load_metrics(dir.path()).unwrap();

        let records = supervised_records(&normalize(&tables.lstm_supervised)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].folder, "A");
        assert_eq!(records[0].accuracy, "0.95");
        assert_eq!(records[0].f1, "0.874");
        assert_eq!(records[1].recall, "");
    }

    #[test]
    fn supervised_cells_pass_through_verbatim() {
        let raw = table(
            "LSTM Supervised",
            &["folder", "file", "accuracy", "precision", "recall", "f1", "model"],
            &[
                &["A", "f1", "0.95", "0.123456", "0.00004", "-", "LSTM Supervised"],
                &["B", "f2", "0.9500", "NaN", "n/a", "1e-7", "LSTM Supervised"],
            ],
        );
        let records = supervised_records(&raw).unwrap();

        assert_eq!(records[0].accuracy, "0.95");
        assert_eq!(records[0].precision, "0.123456");
        assert_eq!(records[0].recall, "0.00004");
        // a non-numeric cell does not fail the table
        assert_eq!(records[0].f1, "-");
        assert_eq!(records[1].accuracy, "0.9500");
        assert_eq!(records[1].precision, "NaN");
        assert_eq!(records[1].f1, "1e-7");
    }

    #[test]
    fn non_finite_ratios_are_rejected() {
        for cell in ["inf", "-inf", "1e400", "-Infinity"] {
            let raw = table(
                "MSET",
                &["folder", "file", "anomaly_ratio", "model"],
                &[&["A", "f1", cell, "MSET"]],
            );
            assert!(
                matches!(
                    anomaly_records(&raw),
                    Err(SchemaError::InvalidValue { column: "anomaly_ratio", .. })
                ),
                "{cell} should be rejected"
            );
        }
    }

    #[test]
    fn supervised_table_without_f1_is_a_schema_error() {
        let raw = table(
            "LSTM Supervised",
            &["folder", "file", "accuracy", "precision", "recall"],
            &[],
        );
        assert!(matches!(
            supervised_records(&raw),
            Err(SchemaError::MissingColumn { column: "f1", .. })
        ));
    }
}
