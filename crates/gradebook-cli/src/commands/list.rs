//! The `gradebook list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use gradebook_core::model::{format_average, NO_COURSES_TEXT};

pub fn execute(roster: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let (_, mut registry) = super::load(roster, config_path)?;

    if registry.is_empty() {
        println!("No students registered.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Student", "Completed", "Average"]);
    for row in registry.student_stats() {
        let average = row
            .average
            .map(format_average)
            .unwrap_or_else(|| NO_COURSES_TEXT.to_string());
        table.add_row(vec![row.name, row.completed.to_string(), average]);
    }
    println!("{table}");

    Ok(())
}
