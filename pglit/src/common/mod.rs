//! Shared macros.

/// Trace when `verbose` feature enabled.
macro_rules! verbose {
    ($($tt:tt)*) => {
        #[cfg(feature = "verbose")]
        tracing::trace!($($tt)*)
    };
}

/// Create and enter `Span` when `verbose` feature enabled.
macro_rules! span {
    ($($tt:tt)*) => {
        #[cfg(feature = "verbose")]
        let span = tracing::trace_span!($($tt)*);
        #[cfg(feature = "verbose")]
        let _span = span.enter();
    };
}

pub(crate) use span;
pub(crate) use verbose;
