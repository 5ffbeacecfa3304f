mod app;
mod catalog;
mod config;
mod form;
mod logging;
mod runtime;
mod source;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The TUI still works without a log file; say so and move on.
    if let Err(e) = logging::init() {
        eprintln!("milkcrate: logging disabled: {e}");
    }

    runtime::run()
}
