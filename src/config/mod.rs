use std::env;

pub const PLAIN_VAR: &str = "DIVE_LOG_PLAIN";
pub const NO_COLOR_VAR: &str = "NO_COLOR";
pub const LOG_VAR: &str = "DIVE_LOG_LOG";
pub const TEST_KEYS_VAR: &str = "DIVE_LOG_TEST_KEYS";

/// Runtime preferences. Nothing is read from or written to disk; every value
/// comes from the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub plain_mode: bool,
    pub log_filter: Option<String>,
    pub scripted_keys: Option<String>,
}

impl Preferences {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds preferences from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let plain_mode = lookup(PLAIN_VAR).is_some_and(|value| is_truthy(&value))
            || lookup(NO_COLOR_VAR).is_some();
        let log_filter = lookup(LOG_VAR).filter(|value| !value.trim().is_empty());
        let scripted_keys = lookup(TEST_KEYS_VAR);

        Self {
            plain_mode,
            log_filter,
            scripted_keys,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
