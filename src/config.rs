use crate::error::{Result, ScoutError};
use crate::types::config::ScoutConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "scout-score.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/scout-score/config.toml";

/// Loads the layered config: global, then the working directory, then an explicit file.
pub fn load_config(cwd: &Path, explicit: Option<&Path>) -> Result<ScoutConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(cwd, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    cwd: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<ScoutConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ScoutError::PathNotFound(path.display().to_string()));
        }
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &cwd.join(DEFAULT_CONFIG_FILE))?;
    if let Some(path) = explicit {
        merge_file_if_exists(&mut merged, path)?;
    }

    let cfg: ScoutConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ScoutError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ScoutError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_files_yield_default_config() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None, None).expect("load should not fail");
        assert!(cfg.report.is_none());
        assert_eq!(cfg.log_level(), "warn");
    }

    #[test]
    fn explicit_config_must_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing = dir.path().join("nope.toml");
        let err = load_config_with_global(dir.path(), Some(&missing), None)
            .expect_err("missing explicit config should fail");
        assert!(matches!(err, ScoutError::PathNotFound(_)));
    }

    #[test]
    fn layers_merge_global_then_cwd_then_explicit() {
        let cwd = TempDir::new().expect("cwd temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");
        let explicit_path = cwd.path().join("override.toml");

        fs::write(
            &global_path,
            r#"
[report]
title = "Global Title"
format = "json"

[logging]
level = "info"
"#,
        )
        .expect("global config should write");
        fs::write(
            cwd.path().join(DEFAULT_CONFIG_FILE),
            r#"
[report]
title = "Academy Scouting"
"#,
        )
        .expect("cwd config should write");
        fs::write(
            &explicit_path,
            r#"
[logging]
level = "debug"
"#,
        )
        .expect("explicit config should write");

        let cfg = load_config_with_global(cwd.path(), Some(&explicit_path), Some(&global_path))
            .expect("load should succeed");

        assert_eq!(cfg.title(), "Academy Scouting");
        assert_eq!(cfg.report_format(), Some("json"));
        assert_eq!(cfg.log_level(), "debug");
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let cwd = TempDir::new().expect("cwd temp dir should be created");
        fs::write(cwd.path().join(DEFAULT_CONFIG_FILE), "[report\n").expect("config should write");

        let err = load_config_with_global(cwd.path(), None, None)
            .expect_err("malformed config should fail");
        assert!(matches!(err, ScoutError::ConfigParse(_)));
    }
}
