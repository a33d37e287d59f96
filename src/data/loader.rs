use std::fs::File;
use std::path::{Path, PathBuf};

use super::error::DataError;
use super::model::{ModelKind, RawTable};

// ---------------------------------------------------------------------------
// Result file locations
// ---------------------------------------------------------------------------

/// Location of a model's metrics file, relative to the results base directory.
pub fn relative_path(model: ModelKind) -> &'static str {
    match model {
        ModelKind::LstmUnsupervised => "result_lstm_us/fault_metrics.csv",
        ModelKind::LstmSupervised => "result_lstm_s/supervised_test_metrics.csv",
        ModelKind::Mset => "result_mset/mset_metrics.csv",
        ModelKind::IsolationForest => "result_isolation_forest/isolation_forest_metrics.csv",
    }
}

// ---------------------------------------------------------------------------
// Loaded tables
// ---------------------------------------------------------------------------

/// The four result files as read from disk, each tagged with its model.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTables {
    pub lstm_unsupervised: RawTable,
    pub lstm_supervised: RawTable,
    pub mset: RawTable,
    pub isolation_forest: RawTable,
}

/// Read all four result files below `base_dir`.
///
/// Fails on the first file that is missing, unreadable or not valid CSV.
pub fn load_metrics(base_dir: &Path) -> Result<LoadedTables, DataError> {
    let load = |model: ModelKind| -> Result<RawTable, DataError> {
        let path = base_dir.join(relative_path(model));
        let table = read_table(&path, model.label())?.with_model_column(model);
        log::info!(
            "Loaded {} rows with columns {:?} from {}",
            table.len(),
            table.headers,
            path.display()
        );
        Ok(table)
    };

    Ok(LoadedTables {
        lstm_unsupervised: load(ModelKind::LstmUnsupervised)?,
        lstm_supervised: load(ModelKind::LstmSupervised)?,
        mset: load(ModelKind::Mset)?,
        isolation_forest: load(ModelKind::IsolationForest)?,
    })
}

/// Read a comma-separated file with a header row into a [`RawTable`].
///
/// Every row must have as many fields as the header; cells are kept as
/// text and must be valid UTF-8.
pub fn read_table(path: &Path, name: &str) -> Result<RawTable, DataError> {
    let file = File::open(path).map_err(|source| DataError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let parse_err = |source: csv::Error| DataError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);
    let headers: Vec<String> = reader
        .headers()
        .map_err(parse_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(parse_err)?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    Ok(RawTable::new(name, headers, rows))
}

// ---------------------------------------------------------------------------
// Read-through cache
// ---------------------------------------------------------------------------

/// Memoizes [`load_metrics`] for one base directory.
///
/// The first [`MetricsCache::get_or_load`] reads the files; later calls hand
/// out the same tables until [`MetricsCache::clear`] is called.
#[derive(Debug)]
pub struct MetricsCache {
    base_dir: PathBuf,
    tables: Option<LoadedTables>,
}

impl MetricsCache {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        MetricsCache {
            base_dir: base_dir.into(),
            tables: None,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn is_loaded(&self) -> bool {
        self.tables.is_some()
    }

    pub fn get_or_load(&mut self) -> Result<&LoadedTables, DataError> {
        let tables = match self.tables.take() {
            Some(tables) => tables,
            None => load_metrics(&self.base_dir)?,
        };
        Ok(self.tables.insert(tables))
    }

    pub fn clear(&mut self) {
        if self.tables.take().is_some() {
            log::debug!("Cleared cached metrics for {}", self.base_dir.display());
        }
    }
}
