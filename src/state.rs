use std::path::PathBuf;

use crate::color::ColorMap;
use crate::dashboard::{Comparison, Dashboard};
use crate::data::error::DataError;
use crate::data::filter::FilterSelection;
use crate::data::loader::MetricsCache;
use crate::data::model::ModelKind;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Memoized result files of the current base directory.
    pub cache: MetricsCache,

    /// Models chosen in the side panel. `None` until the first successful
    /// load, which selects every available model.
    pub selection: Option<FilterSelection>,

    /// Models offered by the last successful run, used to tell whether the
    /// selection was "everything" when the offer changes.
    pub known_models: Vec<ModelKind>,

    /// Output of the last pipeline run (None when it failed).
    pub dashboard: Option<Dashboard>,

    /// Stable colour per model.
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let mut state = Self {
            cache: MetricsCache::new(base_dir),
            selection: None,
            known_models: Vec::new(),
            dashboard: None,
            color_map: ColorMap::default(),
            status_message: None,
        };
        state.refresh();
        state
    }

    /// Re-run normalize → aggregate → filter → statistics on the cached
    /// tables, loading them first if needed.
    pub fn refresh(&mut self) {
        match self.run_pipeline() {
            Ok(dashboard) => {
                self.dashboard = Some(dashboard);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to build dashboard: {e:#}");
                self.dashboard = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    fn run_pipeline(&mut self) -> Result<Dashboard, DataError> {
        let tables = self.cache.get_or_load()?;
        let comparison = Comparison::from_tables(tables)?;
        let available = comparison.available_models();

        let selection = self
            .selection
            .get_or_insert_with(|| FilterSelection::all(&available));
        selection.sync_available(&self.known_models, &available);
        self.known_models = available;

        Ok(Dashboard::build(comparison, selection))
    }

    /// Drop the cached files and read them again.
    pub fn reload(&mut self) {
        self.cache.clear();
        self.refresh();
    }

    /// Switch to another results directory with a fresh cache and selection.
    pub fn set_base_dir(&mut self, dir: PathBuf) {
        log::info!("Switching results directory to {}", dir.display());
        self.cache = MetricsCache::new(dir);
        self.selection = None;
        self.known_models.clear();
        self.refresh();
    }

    pub fn is_selected(&self, model: ModelKind) -> bool {
        self.selection.as_ref().is_some_and(|s| s.contains(model))
    }

    /// Select or deselect a single model and rebuild the dashboard.
    pub fn set_model_selected(&mut self, model: ModelKind, selected: bool) {
        let selection = self.selection.get_or_insert_with(FilterSelection::none);
        if selected {
            selection.insert(model);
        } else {
            selection.remove(model);
        }
        self.refresh();
    }

    /// Select every available model.
    pub fn select_all(&mut self) {
        let available = self
            .dashboard
            .as_ref()
            .map(|d| d.available_models.clone())
            .unwrap_or_default();
        self.selection = Some(FilterSelection::all(&available));
        self.refresh();
    }

    /// Deselect every model.
    pub fn select_none(&mut self) {
        self.selection = Some(FilterSelection::none());
        self.refresh();
    }
}
