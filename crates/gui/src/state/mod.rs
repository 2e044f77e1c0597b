pub mod contour;
pub mod hover;
pub mod loader;
pub mod model;
pub mod settings;

pub use contour::{legend_tick_values, ContourState, LEGEND_TICKS};
pub use hover::{resolve_hover, HoverState, HoverTransition};
pub use loader::{LoadOutcome, LoaderState};
pub use model::{ElementHit, ModelState};
pub use settings::{AppSettings, Language};

use std::path::PathBuf;

/// Combined application state
pub struct AppState {
    pub model: ModelState,
    pub hover: HoverState,
    pub contour: ContourState,
    pub loader: LoaderState,
    pub settings: AppSettings,
    /// Skip diagnostics of the last completed load
    pub diagnostics: Vec<String>,
    /// File the current model came from
    pub loaded_path: Option<PathBuf>,
    /// Show settings window
    pub show_settings_window: bool,
    /// Show the controls side panel
    pub show_controls_panel: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            model: ModelState::default(),
            hover: HoverState::default(),
            contour: ContourState::default(),
            loader: LoaderState::default(),
            settings: AppSettings::load(),
            diagnostics: Vec::new(),
            loaded_path: None,
            show_settings_window: false,
            show_controls_panel: true,
        }
    }
}

impl AppState {
    /// Fold a finished load into the state: swap the model atomically,
    /// drop any hover, re-apply the contour if it was on.
    pub fn apply_load_outcome(&mut self, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Loaded {
                path,
                elements,
                diagnostics,
            } => {
                tracing::info!(
                    "loaded {} elements from {:?} ({} skipped)",
                    elements.len(),
                    path,
                    diagnostics.len()
                );
                self.hover.reset(&mut self.model);
                self.model.replace(elements);
                self.diagnostics = diagnostics;
                self.loaded_path = Some(path);

                if self.contour.is_enabled() {
                    if self.model.is_empty() {
                        self.contour.disable(&mut self.model);
                    } else {
                        self.contour.apply(&mut self.model);
                    }
                }
            }
            LoadOutcome::Failed { path, error } => {
                tracing::error!("failed to load {:?}: {error}", path);
                self.diagnostics = vec![format!("{}: {error}", path.display())];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::assemble;
    use crate::fixtures::*;
    use crate::ramp::RAINBOW;

    fn outcome_for(doc: &shared::Document) -> LoadOutcome {
        let (elements, diagnostics) = assemble(doc);
        LoadOutcome::Loaded {
            path: PathBuf::from("model.json"),
            elements,
            diagnostics,
        }
    }

    #[test]
    fn test_apply_loaded_outcome_swaps_model() {
        let mut state = AppState::default();
        state.apply_load_outcome(outcome_for(&document_straight_group(&[0.5, 1.0])));
        assert_eq!(state.model.len(), 2);
        assert_eq!(state.loaded_path, Some(PathBuf::from("model.json")));
        assert!(state.diagnostics.is_empty());
    }

    #[test]
    fn test_failed_load_keeps_current_model() {
        let mut state = AppState::default();
        state.apply_load_outcome(outcome_for(&document_single_straight()));
        state.apply_load_outcome(LoadOutcome::Failed {
            path: PathBuf::from("broken.json"),
            error: shared::ModelError::MalformedDocument("expected object".to_string()),
        });
        assert_eq!(state.model.len(), 1);
        assert_eq!(state.diagnostics.len(), 1);
        assert!(state.diagnostics[0].contains("malformed document"));
    }

    #[test]
    fn test_contour_reapplied_after_reload() {
        let mut state = AppState::default();
        state.apply_load_outcome(outcome_for(&document_thickness_spread()));
        state.contour.enable(&mut state.model).unwrap();

        state.apply_load_outcome(outcome_for(&document_straight_group(&[0.5, 1.0])));
        assert!(state.contour.is_enabled());
        // New model is recolored, not left amber
        assert_eq!(state.model.elements()[0].base_color, RAINBOW.sample(0.0));
    }

    #[test]
    fn test_hover_cleared_on_reload() {
        let mut state = AppState::default();
        state.apply_load_outcome(outcome_for(&document_single_straight()));
        let id = state.model.elements()[0].id.clone();
        state.hover.update(&mut state.model, Some(id));

        state.apply_load_outcome(outcome_for(&document_single_straight()));
        assert!(state.hover.hovered().is_none());
    }
}
