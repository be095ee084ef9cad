//! Loading state shared by both controller styles.

use serde::Serialize;

use crate::model::{titles, Record};
use crate::ui::mvi::UiState;

/// Where a screen is in its load cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPhase {
    /// No load requested yet.
    #[default]
    Idle,
    /// A load was accepted and has not been applied yet.
    Loading,
    /// The last load was applied (successfully or as an empty result).
    Loaded,
}

/// Loading flag and records of one screen session.
///
/// Records only change when a load completes, in the same update that
/// clears the loading flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RefreshState {
    pub phase: LoadPhase,
    pub records: Vec<Record>,
}

impl UiState for RefreshState {}

impl RefreshState {
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Accept a load request. Returns false, leaving the state untouched,
    /// when a load is already in flight.
    pub fn begin_load(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.phase = LoadPhase::Loading;
        true
    }

    /// Apply the result of the in-flight load.
    pub fn finish_load(&mut self, records: Vec<Record>) {
        self.phase = LoadPhase::Loaded;
        self.records = records;
    }

    /// Status line the screen shows above the list.
    pub fn status_line(&self) -> &'static str {
        if self.is_loading() {
            "Loading..."
        } else {
            "Models loaded"
        }
    }

    pub fn titles(&self) -> Vec<&str> {
        titles(&self.records)
    }
}
