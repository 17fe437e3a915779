//! Startup configuration layered from defaults, `portfolio.toml`, environment
//! variables, and command line flags, in that order.

use std::{collections::HashMap, fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/xbddlwpo";

const CONFIG_FILE: &str = "portfolio.toml";

#[derive(Parser, Debug)]
pub struct CliArgs {
    /// Contact form endpoint; pass an empty string to disable delivery.
    #[arg(long)]
    pub form_endpoint: Option<String>,
    /// Show the maintenance notice instead of the site.
    #[arg(long)]
    pub maintenance: bool,
    /// Load the project catalog from a JSON file instead of the bundled data.
    #[arg(long)]
    pub catalog_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub form_endpoint: String,
    pub maintenance_mode: bool,
    pub catalog_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            maintenance_mode: false,
            catalog_path: None,
        }
    }
}

pub fn load_settings(args: &CliArgs) -> anyhow::Result<Settings> {
    let file_contents = match fs::read_to_string(CONFIG_FILE) {
        Ok(raw) => Some(raw),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
        Err(err) => return Err(err).with_context(|| format!("failed to read {CONFIG_FILE}")),
    };
    let env: HashMap<String, String> = std::env::vars().collect();
    resolve_settings(file_contents.as_deref(), &env, args)
}

fn resolve_settings(
    file_contents: Option<&str>,
    env: &HashMap<String, String>,
    args: &CliArgs,
) -> anyhow::Result<Settings> {
    let mut settings = match file_contents {
        Some(raw) => {
            toml::from_str::<Settings>(raw).with_context(|| format!("invalid {CONFIG_FILE}"))?
        }
        None => Settings::default(),
    };

    if let Some(v) = env.get("PORTFOLIO__FORM_ENDPOINT") {
        settings.form_endpoint = v.clone();
    }
    if let Some(v) = env.get("PORTFOLIO__MAINTENANCE") {
        settings.maintenance_mode = parse_bool_flag(v);
    }
    if let Some(v) = env.get("PORTFOLIO__CATALOG_PATH") {
        settings.catalog_path = Some(PathBuf::from(v));
    }

    if let Some(v) = &args.form_endpoint {
        settings.form_endpoint = v.clone();
    }
    if args.maintenance {
        settings.maintenance_mode = true;
    }
    if let Some(v) = &args.catalog_path {
        settings.catalog_path = Some(v.clone());
    }

    validate_form_endpoint(&settings.form_endpoint)?;
    Ok(settings)
}

fn parse_bool_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

// Empty means "no delivery". Anything else must parse as a URL so that a
// typo fails at startup instead of on the first submission.
fn validate_form_endpoint(endpoint: &str) -> anyhow::Result<()> {
    if endpoint.trim().is_empty() {
        return Ok(());
    }
    Url::parse(endpoint).with_context(|| format!("invalid form endpoint '{endpoint}'"))?;
    Ok(())
}
