/// Sink for the messages produced while parsing and comparing statuses
///
/// Both methods do nothing by default, so `()` can be used
/// to silence everything
pub trait Diagnostics {
    #[allow(unused_variables)]
    fn debug(&self, message: &str) {}

    #[allow(unused_variables)]
    fn warn(&self, message: &str) {}
}

impl Diagnostics for () {}

impl<T: Diagnostics + ?Sized> Diagnostics for &T {
    #[inline]
    fn debug(&self, message: &str) {
        (**self).debug(message)
    }

    #[inline]
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}

/// Forwards all the messages to `tracing`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    #[inline]
    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }

    #[inline]
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}
