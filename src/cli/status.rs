//! Status command implementation

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::client::models::resolve_org_urn;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "lifollow Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;

    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::NotFound)) => {
            println!("{} Configuration not found", "✗".red());
            println!();
            println!(
                "Run {} to create a configuration file, or pass --access-token and --organization-id to {}.",
                "lifollow init".cyan(),
                "lifollow fetch".cyan()
            );
            println!();
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    println!("Config file: {}", config_path.display().to_string().cyan());
    println!();

    match config.access_token.as_deref() {
        Some(token) if !token.trim().is_empty() => {
            println!("{} Access token configured ({})", "✓".green(), mask_token(token));
        }
        _ => {
            println!("{} Access token not configured", "✗".red());
            println!("  → Run 'lifollow init' or set LINKEDIN_ACCESS_TOKEN");
        }
    }

    if config.organization_urn.is_none() && config.organization_id.is_none() {
        println!("{} No default organization set", "○".dimmed());
    } else {
        match resolve_org_urn(
            config.organization_urn.as_deref(),
            config.organization_id.as_deref(),
        ) {
            Ok(urn) => println!("{} Default organization: {}", "✓".green(), urn),
            Err(err) => println!("{} Default organization invalid: {}", "⚠".yellow(), err),
        }
    }

    if let Some(ref api_url) = config.api_url {
        println!("{} Custom API URL: {}", "○".dimmed(), api_url.cyan());
    }

    println!(
        "{} Request timeout: {}s",
        "○".dimmed(),
        config.timeout_secs()
    );

    if let Some(ref format) = config.preferences.format {
        println!("{} Default output format: {}", "○".dimmed(), format);
    }

    println!();

    Ok(())
}

/// Mask a token for display, keeping only its first and last four characters
fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.trim().chars().collect();
    if chars.len() <= 12 {
        return "****".to_string();
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}
