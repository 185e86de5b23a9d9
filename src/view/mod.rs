//! View surface the follower form renders into
//!
//! The form never prints directly. It drives a [`ViewSurface`], which is either
//! the in-memory [`DisplayState`] (headless, used by tests) or the
//! [`TerminalView`] that also shows a spinner while a request is in flight.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::client::FollowerCounts;

pub mod render;
pub mod terminal;

pub use render::{render_counts, set_message};
pub use terminal::TerminalView;

/// Visual classification of the status message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    None,
    Success,
    Error,
}

/// Contents of the results panel after a successful fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsPanel {
    pub organization: String,
    pub counts: FollowerCounts,
    pub organic: String,
    pub paid: String,
    pub total: String,
    pub fetched_at: DateTime<Local>,
    pub fetched_label: String,
}

/// Operations the form performs on its view
pub trait ViewSurface {
    /// Replace the status message and its classification
    fn set_status(&mut self, text: &str, kind: MessageKind);

    /// Fill the results panel and make it visible
    fn show_results(&mut self, panel: ResultsPanel);

    /// Hide the results panel
    fn hide_results(&mut self);

    /// Enable or disable the submit control
    fn set_submit_enabled(&mut self, enabled: bool);

    /// Change the submit control's label
    fn set_submit_label(&mut self, label: &str);
}

/// In-memory view state, overwritten on every submission
#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    pub message: String,
    pub message_kind: MessageKind,
    pub results_visible: bool,
    pub results: Option<ResultsPanel>,
    pub submit_enabled: bool,
    pub submit_label: String,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Results panel, only while it is visible
    pub fn visible_results(&self) -> Option<&ResultsPanel> {
        self.results.as_ref().filter(|_| self.results_visible)
    }
}

impl ViewSurface for DisplayState {
    fn set_status(&mut self, text: &str, kind: MessageKind) {
        self.message = text.to_string();
        self.message_kind = kind;
    }

    fn show_results(&mut self, panel: ResultsPanel) {
        self.results = Some(panel);
        self.results_visible = true;
    }

    fn hide_results(&mut self) {
        self.results_visible = false;
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn set_submit_label(&mut self, label: &str) {
        self.submit_label = label.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> ResultsPanel {
        let fetched_at = Local::now();
        ResultsPanel {
            organization: "urn:li:organization:1".to_string(),
            counts: FollowerCounts::new(1, 2),
            organic: "1".to_string(),
            paid: "2".to_string(),
            total: "3".to_string(),
            fetched_at,
            fetched_label: "Fetched at now".to_string(),
        }
    }

    #[test]
    fn test_display_state_starts_hidden() {
        let state = DisplayState::new();
        assert!(!state.results_visible);
        assert!(state.visible_results().is_none());
        assert_eq!(state.message_kind, MessageKind::None);
    }

    #[test]
    fn test_hide_keeps_panel_but_hides_it() {
        let mut state = DisplayState::new();
        state.show_results(panel());
        assert!(state.visible_results().is_some());

        state.hide_results();
        assert!(state.results.is_some());
        assert!(state.visible_results().is_none());
    }

    #[test]
    fn test_message_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MessageKind::Success).unwrap(),
            "\"success\""
        );
        assert_eq!(
            serde_json::to_string(&MessageKind::Error).unwrap(),
            "\"error\""
        );
    }
}
