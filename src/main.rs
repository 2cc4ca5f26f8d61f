//! rShiftlog main entrypoint.

use rshiftlog::run;
use rshiftlog::ui::messages::error;

fn main() {
    pretty_env_logger::init();

    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
