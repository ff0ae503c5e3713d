//! hourtally main entrypoint.

use hourtally::run;
use hourtally::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
