//! Test helpers: scratch directories and small result files.

use std::path::{Path, PathBuf};

use super::loader::relative_path;
use super::model::ModelKind;

/// A scratch directory under the system temp dir, removed on drop.
pub struct TestDir(PathBuf);

impl TestDir {
    pub fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "anomaly-dashboard-{}-{name}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&path);
        std::fs::create_dir_all(&path).unwrap();
        TestDir(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

pub fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

/// Write all four result files with mixed-case headers.
///
/// Ratio rows: LSTM Unsupervised 2, MSET 2 (0.10 and 0.30), Isolation
/// Forest 1 (0.20). The supervised file has 2 rows.
pub fn write_sample_results(base: &Path) {
    let files = [
        (
            ModelKind::LstmUnsupervised,
            "Folder,File,Anomaly_Ratio\nA,f1,0.05\nB,f3,0.15\n",
        ),
        (
            ModelKind::LstmSupervised,
            "Folder,File,Accuracy,Precision,Recall,F1\n\
             A,f1,0.95,0.90,0.85,0.874\n\
             B,f3,0.91,0.80,,0.80\n",
        ),
        (
            ModelKind::Mset,
            "folder,file,anomaly_ratio,threshold\nA,f1,0.10,3.2\nA,f2,0.30,3.1\n",
        ),
        (
            ModelKind::IsolationForest,
            "FOLDER,FILE,ANOMALY_RATIO\nB,f3,0.20\n",
        ),
    ];
    for (model, contents) in files {
        write_file(&base.join(relative_path(model)), contents);
    }
}
