//! rKiosk main entrypoint.

use rkiosk::run;
use rkiosk::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        if e.is_domain() {
            error(&e);
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}
