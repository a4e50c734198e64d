//! Logging for the algorithms.
//!
//! With the `tracing` feature enabled this re-exports the `tracing` macros
//! the algorithms use, and [`init_tracing`] installs a subscriber that prints
//! events through the test writer at the level named by `ALLPAIRS_LOG`
//! (`debug`, `trace`, ...).  Logging is off when the variable is unset.  With
//! the feature disabled every macro and function here is a no-op.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    use tracing_subscriber::{
        Layer, Registry, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
    };

    /// Environment variable holding the log level for [`init_tracing`].
    pub const LOG_ENV_VAR: &str = "ALLPAIRS_LOG";

    /// Parses a level such as `"debug"`.  Missing or unparsable values turn
    /// logging off.
    pub(crate) fn level_filter(value: Option<&str>) -> LevelFilter {
        value
            .and_then(|level| level.parse().ok())
            .unwrap_or(LevelFilter::OFF)
    }

    /// Installs the global subscriber once.  Later calls, and calls after
    /// another subscriber was installed, do nothing.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let level = level_filter(std::env::var(LOG_ENV_VAR).ok().as_deref());
            let _ = Registry::default()
                .with(fmt::layer().with_test_writer().with_filter(level))
                .try_init();
        });
    }

    pub use tracing::{debug, info_span, trace};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub const LOG_ENV_VAR: &str = "ALLPAIRS_LOG";

    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    // No-op replacements for the tracing macros.
    macro_rules! info_span {
        ($($args:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    macro_rules! debug {
        ($($args:tt)*) => {{}};
    }

    macro_rules! trace {
        ($($args:tt)*) => {{}};
    }

    pub(crate) use {debug, info_span, trace};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
