//! Organization identifier models

use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;

/// Scheme prefix for LinkedIn organization URNs
pub const ORG_URN_PREFIX: &str = "urn:li:organization:";

/// Canonical LinkedIn organization URN (`urn:li:organization:<id>`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrganizationUrn(String);

impl OrganizationUrn {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrganizationUrn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OrganizationUrn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Resolve user input into a single organization URN.
///
/// An explicit URN wins and is only trimmed, never validated. Otherwise the ID
/// is used: an ID that is already a URN passes through, a numeric ID gets the
/// organization prefix, and anything else is rejected.
pub fn resolve_org_urn(
    urn: Option<&str>,
    org_id: Option<&str>,
) -> Result<OrganizationUrn, ValidationError> {
    if let Some(urn) = urn.map(str::trim).filter(|u| !u.is_empty()) {
        return Ok(OrganizationUrn(urn.to_string()));
    }

    let org_id = org_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(ValidationError::MissingIdentifier)?;

    if org_id.starts_with(ORG_URN_PREFIX) {
        return Ok(OrganizationUrn(org_id.to_string()));
    }

    if !org_id.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NonNumericId);
    }

    Ok(OrganizationUrn(format!("{ORG_URN_PREFIX}{org_id}")))
}
