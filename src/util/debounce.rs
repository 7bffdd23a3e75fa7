//! Cancel-pending-then-schedule timer handle.

/// A single outstanding deferred callback per trigger type.
///
/// Scheduling again before the delay elapses cancels the pending run, so a
/// burst of triggers (a window drag-resize, a rapid theme double-toggle)
/// fires the callback once, after the quiet period.
#[derive(Default)]
pub struct Debounce {
    #[cfg(feature = "csr")]
    pending: Option<gloo_timers::callback::Timeout>,
}

impl Debounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending callback with `f`, to run after `delay_ms`.
    pub fn schedule(&mut self, delay_ms: u32, f: impl FnOnce() + 'static) {
        #[cfg(feature = "csr")]
        {
            if let Some(pending) = self.pending.take() {
                pending.cancel();
            }
            self.pending = Some(gloo_timers::callback::Timeout::new(delay_ms, f));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = delay_ms;
            drop(f);
        }
    }
}
