use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;
use tracing::debug;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Serialized view of the effective configuration.
    pub fn render(cfg: &Config) -> AppResult<String> {
        Ok(serde_yaml::to_string(cfg)?)
    }

    /// Editor used when none is requested: `$EDITOR`, `$VISUAL`, then the
    /// platform default.
    pub fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    /// Open `path` in `requested` (or the default editor), falling back to the
    /// default editor once when the requested one fails.
    pub fn edit(path: &Path, requested: Option<&str>) -> AppResult<()> {
        let fallback = Self::default_editor();
        let first = requested.map(str::to_string).unwrap_or_else(|| fallback.clone());

        debug!(editor = %first, path = %path.display(), "opening configuration");
        if Self::run_editor(&first, path) {
            success(format!("Configuration file edited using '{first}'"));
            return Ok(());
        }

        if first == fallback {
            return Err(AppError::Config(format!("editor '{first}' failed")));
        }

        warning(format!(
            "Editor '{first}' not available, falling back to '{fallback}'"
        ));
        if Self::run_editor(&fallback, path) {
            success(format!("Configuration file edited using fallback '{fallback}'"));
            Ok(())
        } else {
            Err(AppError::Config(format!(
                "failed to edit configuration with '{fallback}'"
            )))
        }
    }

    fn run_editor(editor: &str, path: &Path) -> bool {
        matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
    }
}
