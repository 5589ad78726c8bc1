pub mod demo;
pub mod init;
pub mod list;
pub mod student;
pub mod summary;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::config::{load_config_from, GradebookConfig};
use gradebook_core::parser::load_registry;
use gradebook_core::Registry;

/// Load the config, then the roster it points at (or the explicit one).
fn load(
    roster: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<(GradebookConfig, Registry)> {
    let config = load_config_from(config_path.as_deref())?;
    let roster_path = config.roster_path(roster)?;
    tracing::info!("using roster {}", roster_path.display());
    let registry = load_registry(&roster_path, config.auto_register)?;
    Ok((config, registry))
}
