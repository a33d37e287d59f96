use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

// Folder / file layout of the sample benchmark.
const FOLDERS: [&str; 4] = ["bearing_fault", "pump_cavitation", "valve_leak", "normal_operation"];
const RUNS_PER_FOLDER: usize = 6;

// ---------------------------------------------------------------------------
// Row types (headers deliberately use mixed case, like real result files)
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct RatioRow<'a> {
    #[serde(rename = "Folder")]
    folder: &'a str,
    #[serde(rename = "File")]
    file: &'a str,
    #[serde(rename = "Anomaly_Ratio")]
    anomaly_ratio: f64,
}

#[derive(Serialize)]
struct MsetRow<'a> {
    folder: &'a str,
    file: &'a str,
    anomaly_ratio: f64,
    threshold: f64,
}

#[derive(Serialize)]
struct SupervisedRow<'a> {
    #[serde(rename = "Folder")]
    folder: &'a str,
    #[serde(rename = "File")]
    file: &'a str,
    #[serde(rename = "Accuracy")]
    accuracy: f64,
    #[serde(rename = "Precision")]
    precision: f64,
    #[serde(rename = "Recall")]
    recall: f64,
    #[serde(rename = "F1")]
    f1: f64,
}

/// Deterministic generator (splitmix64) so samples are reproducible.
struct SampleRng(u64);

impl SampleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in [0, 1).
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// `center` ± `spread`, clamped to [0, 1].
    fn around(&mut self, center: f64, spread: f64) -> f64 {
        let v = center + (self.unit() * 2.0 - 1.0) * spread;
        (v.clamp(0.0, 1.0) * 10_000.0).round() / 10_000.0
    }
}

fn runs() -> Vec<(&'static str, String)> {
    FOLDERS
        .iter()
        .flat_map(|&folder| (1..=RUNS_PER_FOLDER).map(move |i| (folder, format!("run_{i:02}.csv"))))
        .collect()
}

/// Typical anomaly ratio of a folder; faults trigger more detections.
fn base_ratio(folder: &str) -> f64 {
    if folder == "normal_operation" {
        0.03
    } else {
        0.18
    }
}

fn write_rows<T: Serialize>(base: &Path, relative: &str, rows: &[T]) -> Result<()> {
    let path = base.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV writer")?;
    println!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let mut rng = SampleRng(42);
    let runs = runs();

    let lstm_us: Vec<RatioRow> = runs
        .iter()
        .map(|(folder, file)| RatioRow {
            folder: *folder,
            file: file.as_str(),
            anomaly_ratio: rng.around(base_ratio(folder) * 1.1, 0.06),
        })
        .collect();
    write_rows(&out_dir, "result_lstm_us/fault_metrics.csv", &lstm_us)?;

    let lstm_s: Vec<SupervisedRow> = runs
        .iter()
        .map(|(folder, file)| {
            let precision = rng.around(0.88, 0.08);
            let recall = rng.around(0.82, 0.10);
            let f1 = if precision + recall > 0.0 {
                2.0 * precision * recall / (precision + recall)
            } else {
                0.0
            };
            SupervisedRow {
                folder: *folder,
                file: file.as_str(),
                accuracy: rng.around(0.93, 0.05),
                precision,
                recall,
                f1: (f1 * 10_000.0).round() / 10_000.0,
            }
        })
        .collect();
    write_rows(&out_dir, "result_lstm_s/supervised_test_metrics.csv", &lstm_s)?;

    let mset: Vec<MsetRow> = runs
        .iter()
        .map(|(folder, file)| MsetRow {
            folder: *folder,
            file: file.as_str(),
            anomaly_ratio: rng.around(base_ratio(folder), 0.03),
            threshold: rng.around(0.5, 0.2) * 10.0,
        })
        .collect();
    write_rows(&out_dir, "result_mset/mset_metrics.csv", &mset)?;

    // Isolation Forest was not evaluated on every run.
    let iso: Vec<RatioRow> = runs
        .iter()
        .step_by(2)
        .map(|(folder, file)| RatioRow {
            folder: *folder,
            file: file.as_str(),
            anomaly_ratio: rng.around(base_ratio(folder) * 0.9, 0.10),
        })
        .collect();
    write_rows(
        &out_dir,
        "result_isolation_forest/isolation_forest_metrics.csv",
        &iso,
    )?;

    Ok(())
}
