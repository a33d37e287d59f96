use std::path::PathBuf;

/// Startup settings of the dashboard window.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Directory holding the `result_*` folders.
    pub base_dir: PathBuf,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let base_dir = std::env::current_dir().unwrap_or_else(|e| {
            log::warn!("Cannot resolve working directory ({e}), using '.'");
            PathBuf::from(".")
        });
        Self {
            base_dir,
            window_size: [1280.0, 900.0],
            min_window_size: [700.0, 500.0],
        }
    }
}
