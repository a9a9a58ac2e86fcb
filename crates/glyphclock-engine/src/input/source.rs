use std::time::Duration;

use anyhow::Result;

use super::ClockEvent;

/// Blocking, bounded source of input events.
///
/// This is the scheduler's only suspension point.
pub trait EventSource {
    /// Waits at most `timeout` for the next event.
    ///
    /// Returns `Ok(None)` when the timeout elapsed without an event; that is
    /// a normal outcome, not an error.
    fn wait_event(&mut self, timeout: Duration) -> Result<Option<ClockEvent>>;
}

impl<E: EventSource + ?Sized> EventSource for &mut E {
    fn wait_event(&mut self, timeout: Duration) -> Result<Option<ClockEvent>> {
        (**self).wait_event(timeout)
    }
}
