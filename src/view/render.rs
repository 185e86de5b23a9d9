//! Rendering helpers that translate form results into view updates

use chrono::Local;

use super::{MessageKind, ResultsPanel, ViewSurface};
use crate::client::{FollowerCounts, OrganizationUrn};
use crate::output::formatters::{fetched_at_label, format_count};

/// Replace the status message. Clearing is `set_message(view, "", MessageKind::None)`.
pub fn set_message<V: ViewSurface + ?Sized>(view: &mut V, text: &str, kind: MessageKind) {
    view.set_status(text, kind);
}

/// Fill the results panel with formatted counts and reveal it.
///
/// The total is always recomputed from organic and paid.
pub fn render_counts<V: ViewSurface + ?Sized>(
    view: &mut V,
    org_urn: &OrganizationUrn,
    counts: FollowerCounts,
) {
    let fetched_at = Local::now();

    view.show_results(ResultsPanel {
        organization: org_urn.to_string(),
        counts,
        organic: format_count(counts.organic_follower_count),
        paid: format_count(counts.paid_follower_count),
        total: format_count(counts.total()),
        fetched_label: fetched_at_label(&fetched_at),
        fetched_at,
    });
}
