/// Data layer: result files, typed records, aggregation and statistics.
///
/// Architecture:
/// ```text
///  result_*/…metrics.csv (×4)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read CSV → RawTable + "Model" tag   (MetricsCache)
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  lower-case column names
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  typed records, 3 ratio tables → UnifiedAnomalyTable
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  keep selected models
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  coverage / mean / std / box summary per model
///   └──────────┘
/// ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod stats;

#[cfg(test)]
pub mod fixtures;
