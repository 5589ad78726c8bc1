//! gradebook configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::report::DedupScope;

/// Top-level gradebook configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Output format used when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
    /// How much of the registry a per-student report deduplicates.
    #[serde(default)]
    pub dedup_scope: DedupScope,
    /// Register unknown students when a roster enrolls them.
    #[serde(default)]
    pub auto_register: bool,
    /// Roster used when `--roster` is not given.
    #[serde(default)]
    pub roster: Option<PathBuf>,
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            dedup_scope: DedupScope::default(),
            auto_register: false,
            roster: None,
        }
    }
}

impl GradebookConfig {
    /// Pick the roster path: the explicit one, else the configured default.
    pub fn roster_path(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        explicit
            .or_else(|| self.roster.clone())
            .context("no roster given; pass --roster or set `roster` in gradebook.toml")
    }

    /// Pick the output format for a command that supports `supported`.
    ///
    /// An explicit format must be supported. The configured default is
    /// shared by every command, so one that does not apply here falls back
    /// to `text`.
    pub fn format(&self, explicit: Option<String>, supported: &[&str]) -> Result<String> {
        match explicit {
            Some(format) if supported.contains(&format.as_str()) => Ok(format),
            Some(format) => anyhow::bail!(
                "unknown format: {format} (expected {})",
                supported.join(", ")
            ),
            None if supported.contains(&self.default_format.as_str()) => {
                Ok(self.default_format.clone())
            }
            None => {
                tracing::debug!(
                    "default format {} does not apply here, using text",
                    self.default_format
                );
                Ok(default_format())
            }
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order when no path is given:
/// 1. `gradebook.toml` in the current directory
/// 2. `~/.config/gradebook/config.toml`
///
/// Environment variable overrides: `GRADEBOOK_ROSTER`, `GRADEBOOK_FORMAT`.
pub fn load_config_from(path: Option<&Path>) -> Result<GradebookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradebook.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => GradebookConfig::default(),
    };

    if let Ok(roster) = std::env::var("GRADEBOOK_ROSTER") {
        config.roster = Some(PathBuf::from(roster));
    }
    if let Ok(format) = std::env::var("GRADEBOOK_FORMAT") {
        config.default_format = format;
    }

    config.roster = config
        .roster
        .map(|p| PathBuf::from(resolve_env_vars(&p.to_string_lossy())));

    Ok(config)
}

/// Parse a config from a TOML string.
pub fn parse_config_str(content: &str) -> Result<GradebookConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradebook"))
}
