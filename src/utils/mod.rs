use std::sync::Once;

use tracing_subscriber::filter::{Directive, LevelFilter};

use crate::config::Preferences;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "dive_log=warn";

/// Initializes the global tracing subscriber. Output goes to stderr so it never
/// interleaves with the form drawn on stdout.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let prefs = Preferences::from_env();
        let filter =
            EnvFilter::from_default_env().add_directive(directive(prefs.log_filter.as_deref()));

        // A subscriber may already be installed by an embedding binary or test.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

fn directive(requested: Option<&str>) -> Directive {
    requested
        .and_then(|raw| raw.parse().ok())
        .or_else(|| DEFAULT_DIRECTIVE.parse().ok())
        .unwrap_or_else(|| LevelFilter::WARN.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(raw: &str) -> String {
        raw.parse::<Directive>().expect("valid directive").to_string()
    }

    #[test]
    fn falls_back_to_default_directive() {
        assert_eq!(directive(None).to_string(), parsed(DEFAULT_DIRECTIVE));
    }

    #[test]
    fn honours_requested_directive() {
        assert_eq!(
            directive(Some("dive_log=debug")).to_string(),
            parsed("dive_log=debug")
        );
    }
}
