//! The `gradebook init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("gradebook.toml").exists() {
        println!("gradebook.toml already exists, skipping.");
    } else {
        std::fs::write("gradebook.toml", SAMPLE_CONFIG)?;
        println!("Created gradebook.toml");
    }

    std::fs::create_dir_all("rosters")?;
    let example_path = std::path::Path::new("rosters/example.toml");
    if example_path.exists() {
        println!("rosters/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_ROSTER)?;
        println!("Created rosters/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: gradebook validate --roster rosters/example.toml");
    println!("  2. Run: gradebook summary");
    println!("  3. Run: gradebook student --name Eliza");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradebook configuration

roster = "rosters/example.toml"
default_format = "text"
dedup_scope = "registry"
auto_register = false
"#;

const EXAMPLE_ROSTER: &str = r#"students = ["Peter", "Eliza"]

[[enrollments]]
student = "Peter"
course = "Data Structures and Algorithms"
grade = 1

[[enrollments]]
student = "Peter"
course = "Introduction to Programming"
grade = 1

[[enrollments]]
student = "Peter"
course = "Advanced Course in Programming"
grade = 1

[[enrollments]]
student = "Eliza"
course = "Introduction to Programming"
grade = 5

[[enrollments]]
student = "Eliza"
course = "Introduction to Computer Science"
grade = 4
"#;
