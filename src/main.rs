//! ecotracker main entrypoint.

use ecotracker::run;
use ecotracker::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
