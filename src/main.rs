//! Codexweave binary entry point.

use codexweave::ui::output;

fn main() {
    if let Err(err) = codexweave::cli::run() {
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
