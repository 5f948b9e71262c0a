use crate::errors::AppResult;
use crate::models::catalog::{DEPARTMENTS, EMPLOYEES, THEMES};
use crate::ui::messages::header;

/// Print the option lists offered by `submit`.
pub fn handle() -> AppResult<()> {
    header("Themes (use the number with --row)");
    for t in THEMES {
        println!("  {t}");
    }

    header("Employees");
    for e in EMPLOYEES {
        if *e == "Other" {
            println!("  (any other name is accepted as free text)");
        } else {
            println!("  {e}");
        }
    }

    header("Departments");
    for d in DEPARTMENTS {
        println!("  {d}");
    }
    println!();

    Ok(())
}
