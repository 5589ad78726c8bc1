//! The `gradebook summary` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use gradebook_core::model::format_average;
use gradebook_core::report::SummaryReport;

pub fn execute(
    roster: Option<PathBuf>,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let (config, mut registry) = super::load(roster, config_path)?;
    let summary = registry.summary();

    match config.format(format, &["text", "json", "table"])?.as_str() {
        "json" => {
            println!("{}", SummaryReport::new(summary).to_json()?);
        }
        "table" => {
            let mut table = Table::new();
            table.set_header(vec!["Category", "Student", "Value"]);
            table.add_row(vec![
                "students".to_string(),
                String::new(),
                summary.students.to_string(),
            ]);
            if let Some(leader) = &summary.most_courses {
                table.add_row(vec![
                    "most courses completed".to_string(),
                    leader.name.clone(),
                    leader.completed.to_string(),
                ]);
            }
            if let Some(leader) = &summary.best_average {
                table.add_row(vec![
                    "best average grade".to_string(),
                    leader.name.clone(),
                    format_average(leader.average),
                ]);
            }
            println!("{table}");
        }
        _ => println!("{summary}"),
    }

    Ok(())
}
