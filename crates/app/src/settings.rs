//! Settings for the `finops` binary.
//!
//! Sources, lowest priority first: the optional TOML file
//! (`config/finops.toml` or `--config`), `FINOPS_*` environment variables,
//! then command line flags.
use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/finops.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Role for this session. Asked interactively when missing.
    pub role: Option<String>,
    /// JSON store path. Without it the ledger only lives in memory.
    pub store: Option<String>,
    /// Label printed next to ledger amounts.
    pub base_currency: String,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            role: None,
            store: None,
            base_currency: "UAH".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "finops", about = "Record incomes, expenses and investments")]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Session role: Reader, Editor or Admin.
    #[arg(long)]
    role: Option<String>,
    /// Path of the JSON store.
    #[arg(long)]
    store: Option<String>,
    /// Currency label for ledger amounts.
    #[arg(long)]
    base_currency: Option<String>,
    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    log_level: Option<String>,
}

pub fn load() -> Result<Settings> {
    resolve(Args::parse())
}

pub fn resolve(args: Args) -> Result<Settings> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("FINOPS"));
    let mut settings: Settings = builder.build()?.try_deserialize()?;

    if let Some(role) = args.role {
        settings.role = Some(role);
    }
    if let Some(store) = args.store {
        settings.store = Some(store);
    }
    if let Some(base_currency) = args.base_currency {
        settings.base_currency = base_currency;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file_or_flags() {
        let args = Args::try_parse_from(["finops", "--config", "does/not/exist"]).unwrap();
        let settings = resolve(args).unwrap();

        assert_eq!(settings.base_currency, Settings::default().base_currency);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "finops",
            "--config",
            "does/not/exist",
            "--role",
            "editor",
            "--store",
            "data/ops.json",
            "--base-currency",
            "EUR",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let settings = resolve(args).unwrap();

        assert_eq!(settings.role.as_deref(), Some("editor"));
        assert_eq!(settings.store.as_deref(), Some("data/ops.json"));
        assert_eq!(settings.base_currency, "EUR");
        assert_eq!(settings.log_level, "debug");
    }
}
