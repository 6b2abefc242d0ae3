#![doc(test(attr(deny(warnings))))]

//! Tracker Core offers the in-memory ledger, budgeting, and notification
//! primitives behind the interactive budget tracker CLI.

pub mod cli;
pub mod domain;
pub mod errors;
pub mod ledger;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("tracker_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Tracker Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
