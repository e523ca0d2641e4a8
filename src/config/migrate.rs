//! Configuration file checks and upgrades.
//!
//! Older files may lack keys added later (`user`, `profile`, ...). `check`
//! lists them, `migrate` rewrites the file with defaults filled in.

use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Keys expected at the top level and inside `profile`.
const TOP_LEVEL_KEYS: &[&str] = &["database", "user", "profile", "separator_char"];
const PROFILE_KEYS: &[&str] = &["display_name", "contract", "sector", "city"];

/// Dotted names of the keys missing from a YAML document.
pub fn missing_keys(yaml: &Value) -> Vec<String> {
    let mut missing = Vec::new();

    let Some(map) = yaml.as_mapping() else {
        return TOP_LEVEL_KEYS.iter().map(|k| k.to_string()).collect();
    };

    for key in TOP_LEVEL_KEYS {
        if !map.contains_key(*key) {
            missing.push(key.to_string());
        }
    }

    if let Some(profile) = map
        .get("profile")
        .and_then(Value::as_mapping)
    {
        for key in PROFILE_KEYS {
            if !profile.contains_key(*key) {
                missing.push(format!("profile.{key}"));
            }
        }
    }

    missing
}

/// Report the keys missing from the configuration file at `path`.
pub fn check_file(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;
    Ok(missing_keys(&yaml))
}

/// Rewrite the configuration file with every missing key set to its default.
/// Returns `true` when the file changed.
pub fn migrate_file(path: &Path) -> AppResult<bool> {
    let missing = check_file(path)?;
    if missing.is_empty() {
        info("Configuration is up to date.");
        return Ok(false);
    }

    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    fs::write(path, serde_yaml::to_string(&cfg)?)?;

    success(format!(
        "Configuration migrated, added: {}",
        missing.join(", ")
    ));
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_missing_top_level_and_profile_keys() {
        let yaml: Value =
            serde_yaml::from_str("database: x.sqlite\nprofile:\n  contract: CDD\n").unwrap();
        let missing = missing_keys(&yaml);
        assert!(missing.contains(&"user".to_string()));
        assert!(missing.contains(&"separator_char".to_string()));
        assert!(missing.contains(&"profile.sector".to_string()));
        assert!(!missing.contains(&"profile.contract".to_string()));
        assert!(!missing.contains(&"database".to_string()));
    }

    #[test]
    fn migrate_fills_defaults_and_keeps_values() {
        let mut path = std::env::temp_dir();
        path.push("rshiftlog_config_migrate_test.conf");
        fs::write(&path, "database: /tmp/keep.sqlite\nprofile:\n  contract: CDD\n").unwrap();

        assert!(migrate_file(&path).unwrap());
        assert!(check_file(&path).unwrap().is_empty());

        let cfg: Config = serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(cfg.database, "/tmp/keep.sqlite");
        assert_eq!(cfg.profile.contract, "CDD");
        assert_eq!(cfg.user, "local");

        assert!(!migrate_file(&path).unwrap());
        fs::remove_file(&path).ok();
    }
}
