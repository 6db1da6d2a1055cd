// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use seekbar_app::{TabFilters, Timing};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::Level;

pub const APP_NAME: &str = "seekbar";
const CONFIG_VERSION: i64 = 1;
const DEFAULT_LOADING_DELAY: &str = "1000ms";
const DEFAULT_TOAST_DURATION: &str = "1000ms";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub timing: TimingSection,
    #[serde(default)]
    pub tabs: Tabs,
    #[serde(default)]
    pub logging: Logging,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            timing: TimingSection::default(),
            tabs: Tabs::default(),
            logging: Logging::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimingSection {
    pub loading_delay: Option<String>,
    pub toast_duration: Option<String>,
}

impl Default for TimingSection {
    fn default() -> Self {
        Self {
            loading_delay: Some(DEFAULT_LOADING_DELAY.to_owned()),
            toast_duration: Some(DEFAULT_TOAST_DURATION.to_owned()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tabs {
    pub files: Option<bool>,
    pub people: Option<bool>,
    pub chats: Option<bool>,
    pub lists: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Logging {
    pub level: Option<String>,
    pub path: Option<String>,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: Some(DEFAULT_LOG_LEVEL.to_owned()),
            path: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("SEEKBAR_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set SEEKBAR_CONFIG_PATH to the config file")
        })?;

        Ok(config_root.join(APP_NAME).join("config.toml"))
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
                    "config file {} has no version; add `version = 1` and keep values under [timing], [tabs], and [logging]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
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
        for (key, raw) in [
            ("timing.loading_delay", &self.timing.loading_delay),
            ("timing.toast_duration", &self.timing.toast_duration),
        ] {
            let Some(raw) = raw else {
                continue;
            };
            let parsed = parse_duration(raw)
                .with_context(|| format!("{key} in {}", path.display()))?;
            if parsed <= Duration::ZERO {
                bail!(
                    "{key} in {} must be positive, got {}",
                    path.display(),
                    raw
                );
            }
        }

        self.log_level()
            .with_context(|| format!("logging.level in {}", path.display()))?;

        if let Some(log_path) = &self.logging.path
            && log_path.trim().is_empty()
        {
            bail!(
                "logging.path in {} must not be empty; remove the key to use the default",
                path.display()
            );
        }

        Ok(())
    }

    pub fn timing(&self) -> Result<Timing> {
        Ok(Timing {
            loading_delay: parse_duration(
                self.timing
                    .loading_delay
                    .as_deref()
                    .unwrap_or(DEFAULT_LOADING_DELAY),
            )?,
            toast_duration: parse_duration(
                self.timing
                    .toast_duration
                    .as_deref()
                    .unwrap_or(DEFAULT_TOAST_DURATION),
            )?,
        })
    }

    pub fn tab_filters(&self) -> TabFilters {
        let defaults = TabFilters::default();
        TabFilters {
            files: self.tabs.files.unwrap_or(defaults.files),
            people: self.tabs.people.unwrap_or(defaults.people),
            chats: self.tabs.chats.unwrap_or(defaults.chats),
            lists: self.tabs.lists.unwrap_or(defaults.lists),
        }
    }

    pub fn log_level(&self) -> Result<Level> {
        let raw = self.logging.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL);
        raw.parse::<Level>().map_err(|_| {
            anyhow!("invalid log level {raw:?}; use one of: error, warn, info, debug, trace")
        })
    }

    /// Log file location: `SEEKBAR_LOG_PATH`, then `[logging].path`, then the
    /// platform data directory.
    pub fn log_path(&self) -> Result<PathBuf> {
        if let Some(path) = env::var_os("SEEKBAR_LOG_PATH") {
            return Ok(PathBuf::from(path));
        }
        if let Some(path) = &self.logging.path {
            return Ok(PathBuf::from(path));
        }
        let data_root = dirs::data_local_dir().ok_or_else(|| {
            anyhow!("cannot resolve data directory; set SEEKBAR_LOG_PATH or [logging].path")
        })?;
        Ok(data_root.join(APP_NAME).join(format!("{APP_NAME}.log")))
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# seekbar config\n# Place this file at: {}\n\nversion = 1\n\n[timing]\n# How long the skeleton placeholder shows after each keystroke.\nloading_delay = \"{}\"\n# How long the \"Link copied\" toast stays up.\ntoast_duration = \"{}\"\n\n[tabs]\nfiles = true\npeople = true\nchats = false\nlists = false\n\n[logging]\nlevel = \"{}\"\n# Optional. Default is the platform data dir (for example ~/.local/share/seekbar/seekbar.log)\n# path = \"/absolute/path/to/seekbar.log\"\n",
            path.display(),
            DEFAULT_LOADING_DELAY,
            DEFAULT_TOAST_DURATION,
            DEFAULT_LOG_LEVEL,
        )
    }
}

fn parse_duration(raw: &str) -> Result<Duration> {
    if let Some(value) = raw.strip_suffix("ms") {
        let millis: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_millis(millis));
    }
    if let Some(value) = raw.strip_suffix('s') {
        let secs: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_secs(secs));
    }
    if let Some(value) = raw.strip_suffix('m') {
        let mins: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        let secs = mins
            .checked_mul(60)
            .ok_or_else(|| anyhow!("invalid duration {raw:?}; value is too large"))?;
        return Ok(Duration::from_secs(secs));
    }

    bail!("invalid duration {raw:?}; use one of: <N>ms, <N>s, <N>m (for example 500ms or 1s)")
}

#[cfg(test)]
mod tests {
    use super::{Config, parse_duration};
    use anyhow::Result;
    use std::path::PathBuf;
    use std::sync::{Mutex, OnceLock};
    use std::time::Duration;
    use tracing::Level;

    fn write_config(content: &str) -> Result<(tempfile::TempDir, PathBuf)> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        std::fs::write(&path, content)?;
        Ok((temp, path))
    }

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        match ENV_LOCK.get_or_init(|| Mutex::new(())).lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[test]
    fn missing_config_uses_defaults() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let config = Config::load(&temp.path().join("missing.toml"))?;
        assert_eq!(config.version, 1);

        let timing = config.timing()?;
        assert_eq!(timing.loading_delay, Duration::from_millis(1000));
        assert_eq!(timing.toast_duration, Duration::from_millis(1000));

        let filters = config.tab_filters();
        assert!(filters.files && filters.people);
        assert!(!filters.chats && !filters.lists);
        assert_eq!(config.log_level()?, Level::INFO);
        Ok(())
    }

    #[test]
    fn unversioned_config_is_rejected_with_actionable_message() -> Result<()> {
        let (_temp, path) = write_config("[tabs]\nchats = true\n")?;
        let error = Config::load(&path).expect_err("unversioned config should fail");
        let message = error.to_string();
        assert!(message.contains("version = 1"));
        assert!(message.contains("[timing], [tabs], and [logging]"));
        Ok(())
    }

    #[test]
    fn v1_config_parses() -> Result<()> {
        let (_temp, path) = write_config(
            "version = 1\n[timing]\nloading_delay = \"250ms\"\ntoast_duration = \"2s\"\n[tabs]\nfiles = false\nchats = true\n[logging]\nlevel = \"debug\"\npath = \"/tmp/seekbar-test.log\"\n",
        )?;

        let config = Config::load(&path)?;
        let timing = config.timing()?;
        assert_eq!(timing.loading_delay, Duration::from_millis(250));
        assert_eq!(timing.toast_duration, Duration::from_secs(2));

        let filters = config.tab_filters();
        assert!(!filters.files);
        assert!(filters.people);
        assert!(filters.chats);
        assert!(!filters.lists);
        assert_eq!(config.log_level()?, Level::DEBUG);
        Ok(())
    }

    #[test]
    fn malformed_config_returns_parse_error() -> Result<()> {
        let (_temp, path) = write_config("{{not toml")?;
        let error = Config::load(&path).expect_err("malformed config should fail");
        assert!(error.to_string().contains("parse TOML config"));
        Ok(())
    }

    #[test]
    fn unsupported_config_version_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 2\n")?;
        let error = Config::load(&path).expect_err("v2 config should fail");
        assert!(error.to_string().contains("unsupported config version 2"));
        Ok(())
    }

    #[test]
    fn zero_durations_are_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[timing]\ntoast_duration = \"0ms\"\n")?;
        let error = Config::load(&path).expect_err("zero toast duration should fail");
        let message = error.to_string();
        assert!(message.contains("timing.toast_duration"));
        assert!(message.contains("must be positive"));
        Ok(())
    }

    #[test]
    fn invalid_log_level_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[logging]\nlevel = \"loud\"\n")?;
        let error = Config::load(&path).expect_err("unknown level should fail");
        assert!(format!("{error:#}").contains("invalid log level"));
        Ok(())
    }

    #[test]
    fn empty_log_path_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[logging]\npath = \"  \"\n")?;
        let error = Config::load(&path).expect_err("blank log path should fail");
        assert!(error.to_string().contains("must not be empty"));
        Ok(())
    }

    #[test]
    fn default_path_honors_env_override() -> Result<()> {
        let _guard = env_lock();
        let temp = tempfile::tempdir()?;
        let override_path = temp.path().join("custom-config.toml");
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("SEEKBAR_CONFIG_PATH", &override_path);
        }
        let resolved = Config::default_path()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("SEEKBAR_CONFIG_PATH");
        }
        assert_eq!(resolved, override_path);
        Ok(())
    }

    #[test]
    fn default_path_uses_config_toml_suffix_when_no_env_override() -> Result<()> {
        let _guard = env_lock();
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::remove_var("SEEKBAR_CONFIG_PATH");
        }
        let path = Config::default_path()?;
        assert!(path.ends_with("seekbar/config.toml"));
        Ok(())
    }

    #[test]
    fn log_path_prefers_env_then_config_then_default() -> Result<()> {
        let _guard = env_lock();
        let (_temp, path) =
            write_config("version = 1\n[logging]\npath = \"/explicit/from-config.log\"\n")?;
        let config = Config::load(&path)?;

        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("SEEKBAR_LOG_PATH", "/from/env.log");
        }
        let from_env = config.log_path()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("SEEKBAR_LOG_PATH");
        }
        assert_eq!(from_env, PathBuf::from("/from/env.log"));
        assert_eq!(
            config.log_path()?,
            PathBuf::from("/explicit/from-config.log")
        );

        let defaults = Config::default();
        assert!(defaults.log_path()?.ends_with("seekbar/seekbar.log"));
        Ok(())
    }

    #[test]
    fn durations_parse_ms_seconds_and_minutes() -> Result<()> {
        assert_eq!(parse_duration("500ms")?, Duration::from_millis(500));
        assert_eq!(parse_duration("5s")?, Duration::from_secs(5));
        assert_eq!(parse_duration("2m")?, Duration::from_secs(120));
        Ok(())
    }

    #[test]
    fn durations_reject_minutes_that_overflow() -> Result<()> {
        let error = parse_duration(&format!("{}m", u64::MAX))
            .expect_err("overflowing minutes should fail");
        assert!(error.to_string().contains("invalid duration"));

        let (_temp, path) = write_config(&format!(
            "version = 1\n[timing]\nloading_delay = \"{}m\"\n",
            u64::MAX / 30
        ))?;
        let error =
            Config::load(&path).expect_err("overflowing config duration should fail");
        assert!(format!("{error:#}").contains("timing.loading_delay"));
        Ok(())
    }

    #[test]
    fn durations_reject_garbage() {
        let error = parse_duration("soon").expect_err("invalid duration should fail");
        assert!(error.to_string().contains("invalid duration"));
    }

    #[test]
    fn example_config_round_trips_through_loader() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        let example = Config::example_config(&path);
        assert!(example.contains("version = 1"));
        assert!(example.contains("[timing]"));
        assert!(example.contains("[tabs]"));
        assert!(example.contains("[logging]"));

        std::fs::write(&path, example)?;
        let config = Config::load(&path)?;
        assert_eq!(config.timing()?, seekbar_app::Timing::default());
        Ok(())
    }
}
