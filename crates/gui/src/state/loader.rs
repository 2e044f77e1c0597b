//! Background model loading.
//!
//! Reading and assembling a large document can take a while, so it runs on
//! a worker thread and the app polls the channel once per frame. A
//! generation counter discards results of loads that were superseded
//! before they finished.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

use shared::{Document, ModelError};

use crate::build::{assemble, RenderableElement};

/// Result of one load request
pub enum LoadOutcome {
    Loaded {
        path: PathBuf,
        elements: Vec<RenderableElement>,
        diagnostics: Vec<String>,
    },
    Failed {
        path: PathBuf,
        error: ModelError,
    },
}

pub struct LoaderState {
    tx: Sender<(u64, LoadOutcome)>,
    rx: Receiver<(u64, LoadOutcome)>,
    generation: u64,
    in_flight: bool,
}

impl Default for LoaderState {
    fn default() -> Self {
        let (tx, rx) = channel();
        Self {
            tx,
            rx,
            generation: 0,
            in_flight: false,
        }
    }
}

impl LoaderState {
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Kick off a load on a worker thread; supersedes any load in flight
    pub fn start_load(&mut self, path: PathBuf) {
        self.generation += 1;
        self.in_flight = true;
        let generation = self.generation;
        let tx = self.tx.clone();

        tracing::info!("loading model from {:?}", path);
        std::thread::spawn(move || {
            let outcome = load_document(&path);
            // Receiver may be gone during shutdown
            let _ = tx.send((generation, outcome));
        });
    }

    /// Poll once per frame; stale generations are dropped silently
    pub fn poll(&mut self) -> Option<LoadOutcome> {
        let mut latest = None;
        while let Ok((generation, outcome)) = self.rx.try_recv() {
            if generation == self.generation {
                latest = Some(outcome);
            } else {
                tracing::debug!("discarding stale load result (generation {generation})");
            }
        }
        if latest.is_some() {
            self.in_flight = false;
        }
        latest
    }
}

fn load_document(path: &PathBuf) -> LoadOutcome {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            return LoadOutcome::Failed {
                path: path.clone(),
                error: ModelError::MalformedDocument(format!("cannot read file: {e}")),
            }
        }
    };

    match Document::from_json(&json) {
        Ok(doc) => {
            let (elements, diagnostics) = assemble(&doc);
            LoadOutcome::Loaded {
                path: path.clone(),
                elements,
                diagnostics,
            }
        }
        Err(error) => LoadOutcome::Failed {
            path: path.clone(),
            error,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::json_single_straight;

    fn poll_until_done(loader: &mut LoaderState) -> LoadOutcome {
        for _ in 0..200 {
            if let Some(outcome) = loader.poll() {
                return outcome;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        panic!("load did not finish");
    }

    fn temp_model_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_valid_file() {
        let path = temp_model_file("jview_loader_ok.json", json_single_straight());
        let mut loader = LoaderState::default();
        loader.start_load(path.clone());
        assert!(loader.is_loading());

        match poll_until_done(&mut loader) {
            LoadOutcome::Loaded {
                path: p,
                elements,
                diagnostics,
            } => {
                assert_eq!(p, path);
                assert_eq!(elements.len(), 1);
                assert!(diagnostics.is_empty());
            }
            LoadOutcome::Failed { error, .. } => panic!("unexpected failure: {error}"),
        }
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let path = temp_model_file("jview_loader_bad.json", "{ not json");
        let mut loader = LoaderState::default();
        loader.start_load(path);

        match poll_until_done(&mut loader) {
            LoadOutcome::Failed { error, .. } => {
                assert!(matches!(error, ModelError::MalformedDocument(_)));
            }
            LoadOutcome::Loaded { .. } => panic!("expected failure"),
        }
    }

    #[test]
    fn test_load_missing_file_fails() {
        let mut loader = LoaderState::default();
        loader.start_load(PathBuf::from("/no/such/file.json"));

        match poll_until_done(&mut loader) {
            LoadOutcome::Failed { error, .. } => {
                assert!(matches!(error, ModelError::MalformedDocument(_)));
            }
            LoadOutcome::Loaded { .. } => panic!("expected failure"),
        }
    }

    #[test]
    fn test_superseded_load_is_discarded() {
        let bad = temp_model_file("jview_loader_stale.json", "{ not json");
        let good = temp_model_file("jview_loader_fresh.json", json_single_straight());

        let mut loader = LoaderState::default();
        loader.start_load(bad);
        loader.start_load(good.clone());

        // Only the second load's outcome may surface
        match poll_until_done(&mut loader) {
            LoadOutcome::Loaded { path, .. } => assert_eq!(path, good),
            LoadOutcome::Failed { error, .. } => panic!("stale outcome surfaced: {error}"),
        }
    }
}
