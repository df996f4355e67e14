#![doc(test(attr(deny(warnings))))]

//! Dive Log is a paginated terminal form for recording a dive. Fields are
//! grouped into pages, navigated with arrow and tab keys, and submitted from
//! the last field, which reports the gas remaining.

pub mod cli;
pub mod config;
pub mod errors;
pub mod form;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Dive Log tracing initialized.");
    });
}
