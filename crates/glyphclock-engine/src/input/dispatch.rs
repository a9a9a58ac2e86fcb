use crate::coords::ViewportSize;

use super::{ClockEvent, Key};

/// What the scheduler should do about one event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Dispatch {
    /// Leave the running state.
    Stop,
    /// Re-query and store the viewport. Does not repaint.
    Resize(ViewportSize),
    /// Nothing to do.
    Ignore,
}

/// Maps an event to its effect on the scheduler.
///
/// Pure: no timing or rendering decisions are made here.
pub fn dispatch(event: &ClockEvent) -> Dispatch {
    match event {
        ClockEvent::Quit => Dispatch::Stop,
        ClockEvent::KeyDown(Key::Escape) => Dispatch::Stop,
        ClockEvent::Resize(size) => Dispatch::Resize(*size),
        ClockEvent::KeyDown(_) | ClockEvent::Other => Dispatch::Ignore,
    }
}
