//! Terminal view with a progress spinner

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::{DisplayState, MessageKind, ResultsPanel, ViewSurface};

/// Terminal-backed view.
///
/// Keeps a [`DisplayState`] for the final output and shows a spinner on stderr
/// labelled with the submit control's text while the control is disabled.
pub struct TerminalView {
    state: DisplayState,
    spinner: Option<ProgressBar>,
    show_spinner: bool,
}

impl TerminalView {
    pub fn new(show_spinner: bool) -> Self {
        Self {
            state: DisplayState::new(),
            spinner: None,
            show_spinner,
        }
    }

    #[allow(dead_code)]
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn into_state(mut self) -> DisplayState {
        self.stop_spinner();
        std::mem::take(&mut self.state)
    }

    fn start_spinner(&mut self) {
        if !self.show_spinner || self.spinner.is_some() {
            return;
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(self.state.submit_label.clone());
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
    }

    fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl ViewSurface for TerminalView {
    fn set_status(&mut self, text: &str, kind: MessageKind) {
        self.state.set_status(text, kind);
    }

    fn show_results(&mut self, panel: ResultsPanel) {
        self.state.show_results(panel);
    }

    fn hide_results(&mut self) {
        self.state.hide_results();
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.state.set_submit_enabled(enabled);
        if enabled {
            self.stop_spinner();
        } else {
            self.start_spinner();
        }
    }

    fn set_submit_label(&mut self, label: &str) {
        self.state.set_submit_label(label);
        if let Some(spinner) = &self.spinner {
            spinner.set_message(label.to_string());
        }
    }
}

impl Drop for TerminalView {
    fn drop(&mut self) {
        self.stop_spinner();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_follows_submit_control() {
        let mut view = TerminalView::new(true);

        view.set_submit_enabled(false);
        view.set_submit_label("Fetching...");
        assert!(view.spinner.is_some());
        assert!(!view.state().submit_enabled);

        view.set_submit_enabled(true);
        assert!(view.spinner.is_none());
        assert!(view.state().submit_enabled);
    }

    #[test]
    fn test_spinner_disabled() {
        let mut view = TerminalView::new(false);
        view.set_submit_enabled(false);
        assert!(view.spinner.is_none());
    }

    #[test]
    fn test_into_state_keeps_status() {
        let mut view = TerminalView::new(false);
        view.set_status("Follower counts updated.", MessageKind::Success);

        let state = view.into_state();
        assert_eq!(state.message, "Follower counts updated.");
        assert_eq!(state.message_kind, MessageKind::Success);
    }
}
