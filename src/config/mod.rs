use crate::errors::{AppError, AppResult};
use crate::models::contract::{ContractType, quota_for};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod migrate;

/// Sector label whose workers track palettes.
pub const FFL_SECTOR: &str = "FFL (Fruits, Légumes, Fleurs)";

/// Worker profile: who the records belong to and which quota applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub display_name: String,
    #[serde(default = "default_contract")]
    pub contract: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub city: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            contract: default_contract(),
            sector: String::new(),
            city: String::new(),
        }
    }
}

impl Profile {
    /// Contract as stored; unknown values read as CDI.
    pub fn contract_type(&self) -> ContractType {
        ContractType::from_code(&self.contract).unwrap_or_default()
    }

    pub fn daily_quota(&self) -> u32 {
        quota_for(Some(&self.contract))
    }

    pub fn is_ffl(&self) -> bool {
        let s = self.sector.trim();
        s == FFL_SECTOR || s.to_uppercase().starts_with("FFL")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_user() -> String {
    "local".to_string()
}
fn default_contract() -> String {
    ContractType::Cdi.code().to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            user: default_user(),
            profile: Profile::default(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform.
    /// `RSHIFTLOG_HOME` overrides it.
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var("RSHIFTLOG_HOME")
            && !dir.trim().is_empty()
        {
            return PathBuf::from(dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rshiftlog")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rshiftlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rshiftlog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rshiftlog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the configuration file.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// First character of `separator_char`, `-` when empty.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            dir.join("rshiftlog.sqlite")
        };

        if !is_test {
            // keep an existing profile, only the database location changes
            let mut config = Self::load().unwrap_or_default();
            config.database = db_path.to_string_lossy().to_string();
            config.save()?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }

    /// Apply `--db` / `--user` overrides from the command line.
    pub fn with_overrides(mut self, db: Option<&String>, user: Option<&String>) -> AppResult<Self> {
        if let Some(custom_db) = db {
            self.database = custom_db.clone();
        }
        if let Some(u) = user {
            let u = u.trim();
            if u.is_empty() {
                return Err(AppError::Config("user identity cannot be empty".into()));
            }
            self.user = u.to_string();
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/x.sqlite\n").unwrap();
        assert_eq!(cfg.user, "local");
        assert_eq!(cfg.profile.contract, "CDI");
        assert_eq!(cfg.profile.daily_quota(), 1260);
        assert_eq!(cfg.separator(), '-');
    }

    #[test]
    fn profile_quota_and_sector() {
        let p = Profile {
            contract: "cdd".into(),
            sector: FFL_SECTOR.into(),
            ..Default::default()
        };
        assert_eq!(p.daily_quota(), 1190);
        assert_eq!(p.contract_type(), ContractType::Cdd);
        assert!(p.is_ffl());

        let other = Profile {
            contract: "interim".into(),
            sector: "SEC".into(),
            ..Default::default()
        };
        assert_eq!(other.daily_quota(), 1260);
        assert!(!other.is_ffl());
    }

    #[test]
    fn overrides_replace_db_and_user() {
        let cfg = Config::default()
            .with_overrides(Some(&"/tmp/a.sqlite".to_string()), Some(&"bob".to_string()))
            .unwrap();
        assert_eq!(cfg.database, "/tmp/a.sqlite");
        assert_eq!(cfg.user, "bob");

        assert!(
            Config::default()
                .with_overrides(None, Some(&"  ".to_string()))
                .is_err()
        );
    }
}
