pub mod fallback;
pub mod inspect;
pub mod metrics;
pub mod parse;
pub mod version;

use anyhow::Context;
use callcap_core::Config;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use std::path::Path;

/// Engine config from an optional JSON file, defaults otherwise
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    Config::from_json(&json).with_context(|| format!("loading config {}", path.display()))
}

/// The requested day, or today's UTC date
pub fn resolve_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Utc::now().date_naive())
}

/// Pretty JSON to `output` (atomically) or stdout
pub fn emit_json<T: Serialize>(value: &T, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            callcap_logs::write_json_atomic(path, value)?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_defaults() {
        assert_eq!(load_config(None).unwrap(), Config::default());
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"tiny_sample_max_calls": 3}"#).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.tiny_sample_max_calls, 3);
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_resolve_date_prefers_explicit() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(resolve_date(Some(day)), day);
    }
}
