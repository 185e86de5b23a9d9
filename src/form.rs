//! Follower statistics form
//!
//! Ties input resolution, the API call and view rendering together. A
//! submission walks `Idle -> Validating -> Fetching -> Success | Failed` and
//! always ends back in `Idle` with the submit control re-enabled.

use crate::client::models::resolve_org_urn;
use crate::client::{FollowerCounts, FollowerStatsApi, OrganizationUrn};
use crate::error::{Error, Result, ValidationError};
use crate::view::{MessageKind, ViewSurface, render_counts, set_message};

/// Label of the idle submit control
pub const SUBMIT_LABEL: &str = "Fetch follower count";

/// Label of the submit control while a request is in flight
pub const BUSY_LABEL: &str = "Fetching...";

/// Status message after a successful fetch
pub const SUCCESS_MESSAGE: &str = "Follower counts updated.";

/// Raw form fields as captured at submit time
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub access_token: String,
    pub organization_id: Option<String>,
    pub organization_urn: Option<String>,
}

/// Where a submission currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Validating,
    Fetching,
    Success,
    Failed,
}

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub organization: OrganizationUrn,
    pub counts: FollowerCounts,
}

/// Form component bound to an API client and a view surface
pub struct FollowerStatsForm<A, V> {
    api: A,
    view: V,
    phase: SubmissionPhase,
}

fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl<A: FollowerStatsApi, V: ViewSurface> FollowerStatsForm<A, V> {
    pub fn new(api: A, mut view: V) -> Self {
        view.set_submit_enabled(true);
        view.set_submit_label(SUBMIT_LABEL);

        Self {
            api,
            view,
            phase: SubmissionPhase::Idle,
        }
    }

    #[allow(dead_code)]
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    #[allow(dead_code)]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Run one submission.
    ///
    /// The outcome is rendered into the view before returning; the returned
    /// result lets callers pick an exit status. Taking `&mut self` keeps a
    /// second submission from starting while one is pending.
    pub async fn submit(&mut self, input: &FormInput) -> Result<Submission> {
        set_message(&mut self.view, "", MessageKind::None);
        self.view.hide_results();

        self.transition(SubmissionPhase::Validating);
        let org_urn = match self.validate(input) {
            Ok(urn) => urn,
            Err(err) => {
                let err = Error::from(err);
                set_message(&mut self.view, &err.user_message(), MessageKind::Error);
                self.transition(SubmissionPhase::Idle);
                return Err(err);
            }
        };
        let access_token = input.access_token.trim();

        self.transition(SubmissionPhase::Fetching);
        self.view.set_submit_enabled(false);
        self.view.set_submit_label(BUSY_LABEL);

        let outcome = self
            .api
            .fetch_follower_statistics(access_token, &org_urn)
            .await;

        let result = match outcome {
            Ok(statistics) => {
                self.transition(SubmissionPhase::Success);
                let counts = statistics.counts();
                render_counts(&mut self.view, &org_urn, counts);
                set_message(&mut self.view, SUCCESS_MESSAGE, MessageKind::Success);
                Ok(Submission {
                    organization: org_urn,
                    counts,
                })
            }
            Err(err) => {
                self.transition(SubmissionPhase::Failed);
                log::debug!("Follower statistics request failed: {:?}", err);
                set_message(&mut self.view, &err.user_message(), MessageKind::Error);
                Err(err)
            }
        };

        self.view.set_submit_enabled(true);
        self.view.set_submit_label(SUBMIT_LABEL);
        self.transition(SubmissionPhase::Idle);

        result
    }

    fn validate(&self, input: &FormInput) -> std::result::Result<OrganizationUrn, ValidationError> {
        if input.access_token.trim().is_empty() {
            return Err(ValidationError::MissingToken);
        }

        resolve_org_urn(
            trimmed(input.organization_urn.as_deref()),
            trimmed(input.organization_id.as_deref()),
        )
    }

    fn transition(&mut self, next: SubmissionPhase) {
        log::debug!("Form phase {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}
