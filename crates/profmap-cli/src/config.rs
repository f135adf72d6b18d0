// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use log::LevelFilter;
use profmap_app::{DEFAULT_ZOOM, MAX_ZOOM};
use profmap_geocode::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

const APP_NAME: &str = "profmap";
const CONFIG_VERSION: i64 = 1;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub geocoder: Geocoder,
    #[serde(default)]
    pub map: Map,
    #[serde(default)]
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            geocoder: Geocoder::default(),
            map: Map::default(),
            log: Log::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geocoder {
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    pub timeout: Option<String>,
}

impl Default for Geocoder {
    fn default() -> Self {
        Self {
            base_url: Some(DEFAULT_BASE_URL.to_owned()),
            user_agent: Some(DEFAULT_USER_AGENT.to_owned()),
            timeout: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Map {
    pub zoom: Option<i64>,
}

impl Default for Map {
    fn default() -> Self {
        Self {
            zoom: Some(i64::from(DEFAULT_ZOOM)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Log {
    pub file: Option<String>,
    pub level: Option<String>,
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("PROFMAP_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set PROFMAP_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and keep values under [geocoder], [map], and [log]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1. Regenerate it with `profmap --print-example-config`",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(base_url) = &self.geocoder.base_url
            && base_url.trim().is_empty()
        {
            bail!("geocoder.base_url in {} must not be empty", path.display());
        }

        if let Some(user_agent) = &self.geocoder.user_agent
            && user_agent.trim().is_empty()
        {
            bail!(
                "geocoder.user_agent in {} must not be empty; Nominatim requires an identifying agent",
                path.display()
            );
        }

        if let Some(timeout) = &self.geocoder.timeout {
            let parsed = parse_duration(timeout)?;
            if parsed <= Duration::ZERO {
                bail!(
                    "geocoder.timeout in {} must be positive, got {}",
                    path.display(),
                    timeout
                );
            }
        }

        if let Some(zoom) = self.map.zoom
            && zoom < 0
        {
            bail!(
                "map.zoom in {} must be between 0 and {MAX_ZOOM}, got {zoom}",
                path.display()
            );
        }

        if let Some(level) = &self.log.level
            && LevelFilter::from_str(level).is_err()
        {
            bail!(
                "log.level in {} must be one of off, error, warn, info, debug, trace; got {level:?}",
                path.display()
            );
        }

        Ok(())
    }

    pub fn geocoder_base_url(&self) -> &str {
        self.geocoder
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn geocoder_user_agent(&self) -> &str {
        self.geocoder
            .user_agent
            .as_deref()
            .unwrap_or(DEFAULT_USER_AGENT)
    }

    pub fn geocoder_timeout(&self) -> Result<Option<Duration>> {
        self.geocoder
            .timeout
            .as_deref()
            .map(parse_duration)
            .transpose()
    }

    pub fn map_zoom(&self) -> u8 {
        let zoom = self
            .map
            .zoom
            .unwrap_or(i64::from(DEFAULT_ZOOM))
            .clamp(0, i64::from(MAX_ZOOM));
        u8::try_from(zoom).unwrap_or(DEFAULT_ZOOM)
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.log.file.as_deref().map(PathBuf::from)
    }

    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# profmap config\n# Place this file at: {}\n\nversion = 1\n\n[geocoder]\nbase_url = \"{}\"\n# Nominatim's usage policy asks for an identifying user agent.\nuser_agent = \"{}\"\n# Optional. No timeout unless set.\n# timeout = \"5s\"\n\n[map]\nzoom = {}\n\n[log]\n# Optional. Logging is off unless a file is set; PROFMAP_LOG overrides level.\n# file = \"/tmp/profmap.log\"\nlevel = \"{}\"\n",
            path.display(),
            DEFAULT_BASE_URL,
            DEFAULT_USER_AGENT,
            DEFAULT_ZOOM,
            DEFAULT_LOG_LEVEL,
        )
    }
}

fn parse_duration(raw: &str) -> Result<Duration> {
    let (digits, to_duration): (&str, fn(u64) -> Duration) =
        if let Some(value) = raw.strip_suffix("ms") {
            (value, Duration::from_millis)
        } else if let Some(value) = raw.strip_suffix('s') {
            (value, Duration::from_secs)
        } else if let Some(value) = raw.strip_suffix('m') {
            (value, |mins| Duration::from_secs(mins.saturating_mul(60)))
        } else {
            return Err(invalid_duration(raw));
        };

    let value: u64 = digits.parse().map_err(|_| invalid_duration(raw))?;
    Ok(to_duration(value))
}

fn invalid_duration(raw: &str) -> anyhow::Error {
    anyhow!("invalid duration {raw:?}; use one of: <N>ms, <N>s, <N>m (for example 500ms or 5s)")
}
