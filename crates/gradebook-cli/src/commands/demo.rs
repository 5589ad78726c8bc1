//! The `gradebook demo` command.

use anyhow::Result;

use gradebook_core::Registry;

pub fn execute() -> Result<()> {
    let mut registry = Registry::new();
    registry.add_student("Peter");
    registry.add_student("Eliza");
    registry.add_course("Peter", ("Data Structures and Algorithms", 1))?;
    registry.add_course("Peter", ("Introduction to Programming", 1))?;
    registry.add_course("Peter", ("Advanced Course in Programming", 1))?;
    registry.add_course("Eliza", ("Introduction to Programming", 5))?;
    registry.add_course("Eliza", ("Introduction to Computer Science", 4))?;

    registry.print_summary();
    Ok(())
}
