//! Logging support.
//!
//! With the `tracing` feature enabled, the crate-internal `debug!` and
//! `trace!` macros forward to the `tracing` crate.  Without it they expand to
//! nothing and [`init_tracing`] is a no-op.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    pub(crate) use tracing::{debug, trace};

    /// Installs a formatting subscriber that writes through the test harness's
    /// captured output.  Only the first call has any effect, and an already
    /// installed global subscriber is left in place.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_max_level(tracing::Level::TRACE)
                .with_test_writer()
                .try_init();
        });
    }
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    macro_rules! debug {
        ($($arg:tt)*) => {{}};
    }

    macro_rules! trace {
        ($($arg:tt)*) => {{}};
    }

    pub(crate) use {debug, trace};
}

#[cfg(feature = "tracing")]
pub use enabled::init_tracing;
#[cfg(feature = "tracing")]
pub(crate) use enabled::{debug, trace};

#[cfg(not(feature = "tracing"))]
pub use disabled::init_tracing;
#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::{debug, trace};
