use crate::coords::ViewportSize;

/// Keyboard key identifier.
///
/// The clock reacts to a single quit key. Every other key becomes
/// `Key::Unknown(u32)` with the platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Unknown(u32),
}

/// Platform-agnostic event consumed by the scheduler.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ClockEvent {
    /// The window was asked to close.
    Quit,
    /// A key went down.
    KeyDown(Key),
    /// The window drawable size changed.
    Resize(ViewportSize),
    /// Any event the clock does not react to.
    Other,
}

impl ClockEvent {
    pub const fn resize(width: u32, height: u32) -> Self {
        ClockEvent::Resize(ViewportSize::new(width, height))
    }
}
