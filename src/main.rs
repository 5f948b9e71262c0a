//! rWeekReport main entrypoint.

use rweekreport::run;
use rweekreport::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
