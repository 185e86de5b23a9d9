//! Organization and credential arguments for the fetch command

use clap::Args;

/// Inputs of the follower statistics form.
///
/// Each value falls back to its environment variable, then to the config file.
#[derive(Debug, Clone, Args, Default)]
pub struct FetchArgs {
    /// LinkedIn access token with organization admin permissions
    #[arg(long, env = "LINKEDIN_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Numeric LinkedIn organization ID
    #[arg(long, env = "LINKEDIN_ORGANIZATION_ID")]
    pub organization_id: Option<String>,

    /// Full organization URN (e.g. urn:li:organization:12345); wins over --organization-id
    #[arg(long, env = "LINKEDIN_ORGANIZATION_URN")]
    pub organization_urn: Option<String>,

    /// HTTP timeout in seconds [default: 10]
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}
