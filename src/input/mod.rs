use crate::error::{Result, ScoutError};
use crate::types::evaluation::Evaluation;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// An evaluation read from disk together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedEvaluation {
    pub path: PathBuf,
    pub sha256: String,
    pub evaluation: Evaluation,
}

pub fn load_evaluation(path: &Path) -> Result<LoadedEvaluation> {
    if !path.exists() {
        return Err(ScoutError::PathNotFound(path.display().to_string()));
    }
    let bytes = fs::read(path)?;
    let evaluation = parse_bytes(&bytes).map_err(|err| match err {
        ScoutError::InvalidEvaluation { message, .. } => ScoutError::InvalidEvaluation {
            path: path.display().to_string(),
            message,
        },
        other => other,
    })?;
    tracing::debug!(
        path = %path.display(),
        items = evaluation.items.len(),
        "loaded evaluation"
    );

    Ok(LoadedEvaluation {
        path: path.to_path_buf(),
        sha256: sha256_hex(&bytes),
        evaluation,
    })
}

/// Parses an evaluation document, unwrapping `props` wrappers on the document and its items.
pub fn parse_evaluation(text: &str) -> Result<Evaluation> {
    parse_bytes(text.as_bytes())
}

fn parse_bytes(bytes: &[u8]) -> Result<Evaluation> {
    let invalid = |message: String| ScoutError::InvalidEvaluation {
        path: "<input>".to_string(),
        message,
    };

    let parsed = serde_json::from_slice::<Value>(bytes).map_err(|e| invalid(e.to_string()))?;
    let mut document = unwrap_props(parsed);
    if !document.is_object() {
        return Err(invalid("expected a JSON object".to_string()));
    }
    match document.get_mut("items") {
        Some(Value::Array(entries)) => {
            for entry in entries.iter_mut() {
                *entry = unwrap_props(std::mem::take(entry));
            }
        }
        Some(slot @ Value::Null) => *slot = Value::Array(Vec::new()),
        Some(_) => return Err(invalid("\"items\" must be an array".to_string())),
        None => {}
    }

    serde_json::from_value(document).map_err(|e| invalid(e.to_string()))
}

/// Lists every `.json` file below `root`, sorted by path.
pub fn discover_evaluations(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    files
}

fn unwrap_props(value: Value) -> Value {
    match value {
        Value::Object(mut fields) => match fields.remove("props") {
            Some(inner @ Value::Object(_)) => inner,
            Some(other) => {
                fields.insert("props".to_string(), other);
                Value::Object(fields)
            }
            None => Value::Object(fields),
        },
        other => other,
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}
