//! Command execution context
//!
//! Loads the config file once and merges it with CLI/env values so command
//! handlers get a ready-to-use client, output format and form input.

use std::time::Duration;

use crate::cli::{FetchArgs, GlobalOptions, OutputFormat};
use crate::client::LinkedInClient;
use crate::client::linkedin::API_BASE_URL;
use crate::config::Config;
use crate::error::Result;
use crate::form::FormInput;

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded configuration (empty when no file exists)
    pub config: Config,
    /// LinkedIn API client
    pub client: LinkedInClient,
    /// Resolved output format
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Arguments
    /// * `opts` - Global CLI options
    /// * `timeout_override` - Request timeout from the command line, in seconds
    ///
    /// # Errors
    /// Returns error if an existing config file cannot be parsed or the HTTP
    /// client cannot be built.
    pub fn new(opts: &GlobalOptions, timeout_override: Option<u64>) -> Result<Self> {
        let config = Config::load_or_default(opts.config_ref())?;

        let format = resolve_format(opts.format, &config);
        let timeout = Duration::from_secs(timeout_override.unwrap_or_else(|| config.timeout_secs()));
        let api_url = opts
            .api_url_ref()
            .or(config.api_url.as_deref())
            .unwrap_or(API_BASE_URL);

        log::debug!("Using API root {} with {:?} timeout", api_url, timeout);
        let client = LinkedInClient::with_base_url(api_url, timeout)?;

        Ok(Self {
            config,
            client,
            format,
        })
    }

    /// Build the form input, falling back to config values for anything not
    /// given on the command line or in the environment.
    pub fn form_input(&self, args: &FetchArgs) -> FormInput {
        form_input(args, &self.config)
    }
}

fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or_else(|| {
        config
            .preferences
            .format
            .as_deref()
            .and_then(OutputFormat::from_name)
    })
    .unwrap_or_default()
}

fn form_input(args: &FetchArgs, config: &Config) -> FormInput {
    // Flags for the identifier win as a pair, so a config URN never overrides
    // an ID given on the command line.
    let (organization_id, organization_urn) =
        if args.organization_id.is_some() || args.organization_urn.is_some() {
            (args.organization_id.clone(), args.organization_urn.clone())
        } else {
            (config.organization_id.clone(), config.organization_urn.clone())
        };

    FormInput {
        access_token: args
            .access_token
            .clone()
            .or_else(|| config.access_token.clone())
            .unwrap_or_default(),
        organization_id,
        organization_urn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preferences;

    fn config() -> Config {
        Config {
            access_token: Some("config-token".to_string()),
            organization_id: Some("111".to_string()),
            organization_urn: Some("urn:li:organization:222".to_string()),
            preferences: Preferences {
                format: Some("table".to_string()),
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_form_input_prefers_args() {
        let args = FetchArgs {
            access_token: Some("flag-token".to_string()),
            organization_id: Some("333".to_string()),
            ..FetchArgs::default()
        };

        let input = form_input(&args, &config());
        assert_eq!(input.access_token, "flag-token");
        assert_eq!(input.organization_id.as_deref(), Some("333"));
        assert!(input.organization_urn.is_none());
    }

    #[test]
    fn test_form_input_falls_back_to_config() {
        let input = form_input(&FetchArgs::default(), &config());
        assert_eq!(input.access_token, "config-token");
        assert_eq!(input.organization_id.as_deref(), Some("111"));
        assert_eq!(
            input.organization_urn.as_deref(),
            Some("urn:li:organization:222")
        );
    }

    #[test]
    fn test_form_input_without_anything() {
        let input = form_input(&FetchArgs::default(), &Config::default());
        assert!(input.access_token.is_empty());
        assert!(input.organization_id.is_none());
        assert!(input.organization_urn.is_none());
    }

    #[test]
    fn test_resolve_format_precedence() {
        assert_eq!(
            resolve_format(Some(OutputFormat::Json), &config()),
            OutputFormat::Json
        );
        assert_eq!(resolve_format(None, &config()), OutputFormat::Table);
        assert_eq!(
            resolve_format(None, &Config::default()),
            OutputFormat::Pretty
        );
    }

    #[test]
    fn test_context_with_missing_config_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("none.yaml");
        let opts = GlobalOptions {
            config: Some(path.to_string_lossy().to_string()),
            api_url: Some("http://127.0.0.1:9".to_string()),
            ..GlobalOptions::default()
        };

        let ctx = CommandContext::new(&opts, Some(1)).unwrap();
        assert_eq!(ctx.format, OutputFormat::Pretty);
        assert_eq!(
            ctx.client.statistics_url(),
            "http://127.0.0.1:9/v2/organizationalEntityFollowerStatistics"
        );
    }
}
