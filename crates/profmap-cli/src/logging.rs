// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::config::Config;
use anyhow::{Context, Result};
use std::env;
use std::fs::OpenOptions;

const LOG_ENV: &str = "PROFMAP_LOG";

/// Installs `env_logger` writing to `[log].file`. Without a file the logger
/// stays uninstalled and records are dropped; the terminal belongs to the TUI.
pub fn init(config: &Config) -> Result<()> {
    let Some(path) = config.log_file() else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| {
            format!(
                "open log file {} -- fix [log].file or remove it",
                path.display()
            )
        })?;

    let filters = filter_spec(env::var(LOG_ENV).ok(), config.log_level());
    env_logger::Builder::new()
        .parse_filters(&filters)
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("install logger")?;
    log::debug!("logging to {} with filter {filters:?}", path.display());
    Ok(())
}

fn filter_spec(from_env: Option<String>, level: &str) -> String {
    match from_env {
        Some(spec) if !spec.trim().is_empty() => spec,
        _ => level.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::filter_spec;

    #[test]
    fn env_filter_wins_over_config_level() {
        assert_eq!(
            filter_spec(Some("profmap_geocode=debug".to_owned()), "info"),
            "profmap_geocode=debug"
        );
    }

    #[test]
    fn blank_env_filter_falls_back_to_config_level() {
        assert_eq!(filter_spec(Some("  ".to_owned()), "warn"), "warn");
        assert_eq!(filter_spec(None, "info"), "info");
    }
}
