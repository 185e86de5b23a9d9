//! Output formatting for CLI results

use colored::Colorize;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::models::{FollowerStatsDisplay, FollowerStatsRecord};
use crate::view::{DisplayState, MessageKind};

pub mod formatters;
pub mod json;
pub mod table;

/// Render the final view state in the requested format.
///
/// Returns `None` when there is nothing to print on stdout (no visible
/// results); errors are reported by the caller on stderr.
pub fn render(state: &DisplayState, format: OutputFormat) -> Result<Option<String>> {
    let Some(panel) = state.visible_results() else {
        return Ok(None);
    };

    let output = match format {
        OutputFormat::Pretty => {
            let mut lines = vec![
                format!("{} {}", "Organization:".bold(), panel.organization),
                format!("{} {}", "Organic followers:".bold(), panel.organic),
                format!("{} {}", "Paid followers:".bold(), panel.paid),
                format!("{} {}", "Total followers:".bold(), panel.total.bold()),
                panel.fetched_label.dimmed().to_string(),
            ];
            if state.message_kind == MessageKind::Success && !state.message.is_empty() {
                lines.push(String::new());
                lines.push(format!("{} {}", "✓".green(), state.message.green()));
            }
            lines.join("\n")
        }
        OutputFormat::Table => table::format_table(&[FollowerStatsDisplay::from(panel)]),
        OutputFormat::Json => json::format_json(&FollowerStatsRecord::from(panel), &state.message)?,
    };

    Ok(Some(output))
}

/// Format and print the view state to stdout
pub fn print(state: &DisplayState, format: OutputFormat) -> Result<()> {
    if let Some(output) = render(state, format)? {
        println!("{}", output);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FollowerCounts;
    use crate::client::models::resolve_org_urn;
    use crate::view::{ViewSurface, render_counts};

    fn rendered_state() -> DisplayState {
        colored::control::set_override(false);
        let mut state = DisplayState::new();
        let urn = resolve_org_urn(None, Some("12345")).unwrap();
        render_counts(&mut state, &urn, FollowerCounts::new(12_000, 345));
        state.set_status("Follower counts updated.", MessageKind::Success);
        state
    }

    #[test]
    fn test_render_nothing_without_results() {
        let mut state = DisplayState::new();
        state.set_status("LinkedIn rejected the token (401 Unauthorized).", MessageKind::Error);

        for format in [OutputFormat::Pretty, OutputFormat::Table, OutputFormat::Json] {
            assert!(render(&state, format).unwrap().is_none());
        }
    }

    #[test]
    fn test_render_pretty() {
        let output = render(&rendered_state(), OutputFormat::Pretty)
            .unwrap()
            .unwrap();

        assert!(output.contains("Organization: urn:li:organization:12345"));
        assert!(output.contains("Organic followers: 12,000"));
        assert!(output.contains("Paid followers: 345"));
        assert!(output.contains("Total followers: 12,345"));
        assert!(output.contains("Fetched at "));
        assert!(output.contains("Follower counts updated."));
    }

    #[test]
    fn test_render_table() {
        let output = render(&rendered_state(), OutputFormat::Table)
            .unwrap()
            .unwrap();

        assert!(output.contains("ORGANIZATION"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("12,345"));
    }

    #[test]
    fn test_render_json() {
        let output = render(&rendered_state(), OutputFormat::Json)
            .unwrap()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["data"]["organicFollowerCount"], 12000);
        assert_eq!(value["data"]["paidFollowerCount"], 345);
        assert_eq!(value["data"]["totalFollowerCount"], 12345);
        assert_eq!(value["meta"]["message"], "Follower counts updated.");
    }
}
