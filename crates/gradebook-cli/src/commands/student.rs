//! The `gradebook student` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(
    roster: Option<PathBuf>,
    name: String,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let (config, mut registry) = super::load(roster, config_path)?;
    let report = registry.student_report_with(&name, config.dedup_scope);

    if config.format(format, &["text", "json"])? == "json" {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    Ok(())
}
