//! The `gradebook validate` command.

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::config::load_config_from;
use gradebook_core::parser::{parse_roster, validate_roster};

pub fn execute(roster: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let roster_path = config.roster_path(roster)?;
    let roster = parse_roster(&roster_path)?;

    println!(
        "Roster: {} ({} students, {} enrollments)",
        roster_path.display(),
        roster.students.len(),
        roster.enrollments.len()
    );

    let warnings = validate_roster(&roster);
    for w in &warnings {
        let prefix = w
            .student
            .as_ref()
            .map(|name| format!("  [{name}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Roster valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
