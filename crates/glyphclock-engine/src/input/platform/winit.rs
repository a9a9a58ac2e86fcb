use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::coords::ViewportSize;
use crate::input::{ClockEvent, Key};

/// Translates a winit `WindowEvent` into a [`ClockEvent`].
///
/// Key releases and repeats collapse into `Other`; only fresh presses count as
/// `KeyDown`.
pub fn translate_window_event(event: &WindowEvent) -> ClockEvent {
    match event {
        WindowEvent::CloseRequested => ClockEvent::Quit,

        WindowEvent::Resized(size) => ClockEvent::Resize(ViewportSize::from(*size)),

        WindowEvent::KeyboardInput { event, .. }
            if event.state == ElementState::Pressed && !event.repeat =>
        {
            ClockEvent::KeyDown(map_key(event.physical_key))
        }

        _ => ClockEvent::Other,
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        PhysicalKey::Code(other) => Key::Unknown(other as u32),
        // NativeKeyCode is not a u32 in winit 0.30.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}
