//! rWeekplan main entrypoint.

use rweekplan::run;
use rweekplan::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
