//! daybook-export main entrypoint.

use daybook_export::run;
use daybook_export::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
