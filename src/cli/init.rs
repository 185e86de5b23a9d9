//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::GlobalOptions;
use crate::client::models::{ORG_URN_PREFIX, resolve_org_urn};
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Stores an existing access token and a default organization. Obtaining the
/// token (OAuth) happens outside lifollow.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to lifollow!".bold().green());
    println!("Let's store your LinkedIn settings.\n");

    let mut config = Config::load_or_default(opts.config_ref())?;

    let access_token: String = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter your LinkedIn access token")
        .interact()?;

    let organization: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Default organization ID or URN (leave empty to skip)")
        .allow_empty(true)
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            if input.trim().is_empty() {
                return Ok(());
            }
            resolve_org_urn(None, Some(input.as_str()))
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;

    config.access_token = Some(access_token.trim().to_string());
    apply_organization(&mut config, &organization);

    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    if let Ok(urn) = resolve_org_urn(
        config.organization_urn.as_deref(),
        config.organization_id.as_deref(),
    ) {
        println!("  Default organization: {}", urn.to_string().bold());
    }

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "lifollow status".cyan());
    println!("  {} - Fetch follower counts", "lifollow fetch".cyan());

    Ok(())
}

/// Store the entered organization as either an ID or a URN
fn apply_organization(config: &mut Config, organization: &str) {
    let organization = organization.trim();
    if organization.is_empty() {
        return;
    }

    if organization.starts_with(ORG_URN_PREFIX) {
        config.organization_urn = Some(organization.to_string());
        config.organization_id = None;
    } else {
        config.organization_id = Some(organization.to_string());
        config.organization_urn = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_numeric_id_clears_urn() {
        let mut config = Config {
            organization_urn: Some("urn:li:organization:1".to_string()),
            ..Config::default()
        };

        apply_organization(&mut config, " 42 ");
        assert_eq!(config.organization_id.as_deref(), Some("42"));
        assert!(config.organization_urn.is_none());
    }

    #[test]
    fn test_apply_urn_clears_id() {
        let mut config = Config {
            organization_id: Some("42".to_string()),
            ..Config::default()
        };

        apply_organization(&mut config, "urn:li:organization:7");
        assert_eq!(
            config.organization_urn.as_deref(),
            Some("urn:li:organization:7")
        );
        assert!(config.organization_id.is_none());
    }

    #[test]
    fn test_apply_empty_keeps_existing() {
        let mut config = Config {
            organization_id: Some("42".to_string()),
            ..Config::default()
        };

        apply_organization(&mut config, "   ");
        assert_eq!(config.organization_id.as_deref(), Some("42"));
    }
}
