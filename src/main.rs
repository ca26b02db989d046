//! rHOSlogger main entrypoint.

use rhoslogger::run;
use rhoslogger::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
