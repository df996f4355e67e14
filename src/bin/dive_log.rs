use std::process;

use dive_log::{
    cli::{self, output},
    config::Preferences,
    form::SessionEnd,
    init,
};

fn main() {
    init();

    let prefs = Preferences::from_env();
    let report = match cli::run(&prefs) {
        Ok(report) => report,
        Err(err) => {
            output::error(err);
            process::exit(1);
        }
    };

    match report.end {
        SessionEnd::Submitted {
            gas_remaining: Some(remaining),
        } => output::success(format!("Gas remaining: {remaining}")),
        // Unreadable gas readings stay in the error slot; the exit is still a
        // normal one.
        SessionEnd::Submitted {
            gas_remaining: None,
        }
        | SessionEnd::Cancelled => {}
    }
}
