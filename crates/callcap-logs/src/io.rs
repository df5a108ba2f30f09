//! Batch loading and atomic JSON output

use crate::error::{LogError, Result};
use crate::types::CallRecord;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
#[serde(untagged)]
enum Batch {
    Many(Vec<CallRecord>),
    One(Box<CallRecord>),
}

/// Parse a JSON document holding either an array of calls or a single call
pub fn parse_calls(content: &str) -> serde_json::Result<Vec<CallRecord>> {
    match serde_json::from_str::<Batch>(content)? {
        Batch::Many(calls) => Ok(calls),
        Batch::One(call) => Ok(vec![*call]),
    }
}

/// Load a batch of calls from a `.json` file, a `.jsonl` file, or a directory
/// of `.json` files (read in file-name order)
pub fn load_calls(path: &Path) -> Result<Vec<CallRecord>> {
    if !path.exists() {
        return Err(LogError::NotFound(path.to_path_buf()));
    }

    if path.is_dir() {
        let mut calls = Vec::new();
        for file in discover_json_files(path)? {
            calls.extend(load_json_file(&file)?);
        }
        tracing::debug!(dir = %path.display(), calls = calls.len(), "loaded call directory");
        return Ok(calls);
    }

    if path.extension().and_then(|e| e.to_str()) == Some("jsonl") {
        return load_jsonl_file(path);
    }

    load_json_file(path)
}

fn load_json_file(path: &Path) -> Result<Vec<CallRecord>> {
    let content = std::fs::read_to_string(path).map_err(|e| LogError::io(path, e))?;
    parse_calls(&content).map_err(|e| LogError::json(path, e))
}

fn load_jsonl_file(path: &Path) -> Result<Vec<CallRecord>> {
    let content = std::fs::read_to_string(path).map_err(|e| LogError::io(path, e))?;
    let mut calls = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(line) {
            Ok(call) => calls.push(call),
            Err(e) => {
                tracing::warn!(file = %path.display(), line = idx + 1, error = %e, "skipping malformed call record");
            }
        }
    }

    Ok(calls)
}

fn discover_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| LogError::io(dir, e))?;

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect();

    files.sort();
    Ok(files)
}

/// Write pretty JSON atomically using temp file + rename
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| LogError::io(parent, e))?;
        }
    }

    let mut data = serde_json::to_vec_pretty(value).map_err(|e| LogError::json(path, e))?;
    data.push(b'\n');

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data).map_err(|e| LogError::io(&temp_path, e))?;
    std::fs::rename(&temp_path, path).map_err(|e| LogError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Turn;

    fn sample_call(text: &str) -> CallRecord {
        CallRecord::new()
            .with_duration(45.0)
            .with_turns([Turn::agent("Hello"), Turn::user(text)])
    }

    #[test]
    fn test_parse_array_and_single() {
        let array = r#"[{"conversation": []}, {"conversation": []}]"#;
        assert_eq!(parse_calls(array).unwrap().len(), 2);

        let single = r#"{"summary": {"duration_seconds": 12}, "conversation": []}"#;
        let calls = parse_calls(single).unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].summary.duration_seconds, Some(12.0));
    }

    #[test]
    fn test_parse_rejects_scalars() {
        assert!(parse_calls("42").is_err());
    }

    #[test]
    fn test_load_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("batch.json");
        let calls = vec![sample_call("one"), sample_call("two")];

        write_json_atomic(&file, &calls).unwrap();
        let loaded = load_calls(&file).unwrap();

        assert_eq!(loaded, calls);
        assert!(!file.with_extension("tmp").exists());
    }

    #[test]
    fn test_load_jsonl_skips_malformed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("calls.jsonl");
        let line = serde_json::to_string(&sample_call("ok")).unwrap();
        std::fs::write(&file, format!("{line}\n\nnot json\n{line}\n")).unwrap();

        let loaded = load_calls(&file).unwrap();
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn test_load_directory_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        write_json_atomic(&dir.path().join("b.json"), &sample_call("second")).unwrap();
        write_json_atomic(&dir.path().join("a.json"), &sample_call("first")).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let loaded = load_calls(dir.path()).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].conversation[1].text, "first");
        assert_eq!(loaded[1].conversation[1].text, "second");
    }

    #[test]
    fn test_load_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_calls(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LogError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_json_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("broken.json");
        std::fs::write(&file, "{not json").unwrap();

        let err = load_calls(&file).unwrap_err();
        assert!(matches!(err, LogError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
