//! Configuration and CLI argument handling
//!
//! The host binary is configured through the command line; the timer itself
//! is configured through [`TimerSettings`], read from an optional JSON file
//! and overridden by individual flags.

pub mod settings;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde_json::{Map, Value};

pub use settings::TimerSettings;

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone)]
#[command(name = "pomodoro-panel")]
#[command(about = "A tick-driven Pomodoro timer for 64x64 pixel displays")]
#[command(version = "1.0.0")]
pub struct Config {
    /// JSON file holding timer settings (name, work_minutes, ...)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Title shown on the first line
    #[arg(long)]
    pub name: Option<String>,

    /// Work phase length in minutes
    #[arg(long)]
    pub work_minutes: Option<String>,

    /// Short break length in minutes
    #[arg(long)]
    pub short_break_minutes: Option<String>,

    /// Long break length in minutes
    #[arg(long)]
    pub long_break_minutes: Option<String>,

    /// Work phases per round
    #[arg(long)]
    pub slices_per_round: Option<String>,

    /// Rounds before the round counter wraps
    #[arg(long)]
    pub rounds: Option<String>,

    /// Poll period of the display loop in milliseconds
    #[arg(long, default_value = "16")]
    pub poll_ms: u64,

    /// Write surface commands to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Serve the read-only status API on this port
    #[arg(long)]
    pub status_port: Option<u16>,

    /// Host address for the status API
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Status API address, if the API is enabled
    pub fn status_address(&self) -> Option<String> {
        self.status_port.map(|port| format!("{}:{}", self.host, port))
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Poll period, never shorter than one millisecond
    pub fn poll_period(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.poll_ms.max(1))
    }

    /// Raw setting values: the config file first, then CLI overrides on top
    pub fn setting_values(&self) -> anyhow::Result<Map<String, Value>> {
        let mut values = match &self.config {
            Some(path) => read_settings_file(path)?,
            None => Map::new(),
        };

        let overrides = [
            ("name", &self.name),
            ("work_minutes", &self.work_minutes),
            ("short_break_minutes", &self.short_break_minutes),
            ("long_break_minutes", &self.long_break_minutes),
            ("slices_per_round", &self.slices_per_round),
            ("rounds", &self.rounds),
        ];
        for (key, value) in overrides {
            if let Some(value) = value {
                values.insert(key.to_string(), Value::String(value.clone()));
            }
        }

        Ok(values)
    }

    /// Resolve the timer settings, degrading to defaults when the file is unusable
    pub fn timer_settings(&self) -> TimerSettings {
        match self.setting_values() {
            Ok(values) => TimerSettings::from_values(&values),
            Err(e) => {
                tracing::warn!("Ignoring settings file: {:#}", e);
                let without_file = Self { config: None, ..self.clone() };
                without_file
                    .setting_values()
                    .map(|values| TimerSettings::from_values(&values))
                    .unwrap_or_default()
            }
        }
    }
}

/// Read a JSON object of settings from disk
pub fn read_settings_file(path: &std::path::Path) -> anyhow::Result<Map<String, Value>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let parsed: Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    match parsed {
        Value::Object(map) => Ok(map),
        other => anyhow::bail!("{} must hold a JSON object, found {}", path.display(), kind_of(&other)),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["pomodoro-panel"];
        argv.extend_from_slice(args);
        Config::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_without_flags() {
        let config = parse(&[]);
        assert_eq!(config.poll_ms, 16);
        assert_eq!(config.status_address(), None);
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.timer_settings(), TimerSettings::default());
    }

    #[test]
    fn flags_override_settings() {
        let config = parse(&["--work-minutes", "50", "--rounds", "3", "--name", "Deep", "-v"]);
        let settings = config.timer_settings();
        assert_eq!(settings.work_minutes, 50);
        assert_eq!(settings.rounds, 3);
        assert_eq!(settings.name, "Deep");
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn non_numeric_flag_falls_back_to_default() {
        let config = parse(&["--short-break-minutes", "soon"]);
        assert_eq!(config.timer_settings().short_break_minutes, 5);
    }

    #[test]
    fn status_address_uses_host() {
        let config = parse(&["--status-port", "8080", "--host", "0.0.0.0"]);
        assert_eq!(config.status_address().as_deref(), Some("0.0.0.0:8080"));
    }

    #[test]
    fn settings_file_is_merged_under_flags() {
        let path = std::env::temp_dir().join(format!("pomodoro-panel-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"work_minutes": 40, "rounds": "2", "name": "File"}"#).unwrap();

        let config = parse(&["--config", path.to_str().unwrap(), "--name", "Flag"]);
        let settings = config.timer_settings();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.work_minutes, 40);
        assert_eq!(settings.rounds, 2);
        assert_eq!(settings.name, "Flag");
    }

    #[test]
    fn unreadable_file_keeps_flag_overrides() {
        let config = parse(&["--config", "/nonexistent/pomodoro.json", "--work-minutes", "30"]);
        assert!(config.setting_values().is_err());
        assert_eq!(config.timer_settings().work_minutes, 30);
    }

    #[test]
    fn settings_file_must_be_an_object() {
        let path = std::env::temp_dir().join(format!("pomodoro-panel-array-{}.json", std::process::id()));
        std::fs::write(&path, "[1, 2]").unwrap();
        let err = read_settings_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(err.to_string().contains("an array"));
    }
}
