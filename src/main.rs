// Wed Oct 14 2026 - Alex

use reven::ui::{cli, ErrorDisplay};

fn main() {
    if let Err(e) = cli::run() {
        ErrorDisplay::new().print(&e);
        std::process::exit(1);
    }
}
