use crate::math::{Point, Vector};

/// Whether an event has been processed or ignored.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum EventStatus {
    /// The event was not handled.
    Ignored,
    /// The event was handled and should not be processed any further.
    Processed,
}

impl Default for EventStatus {
    fn default() -> Self {
        Self::Ignored
    }
}

impl EventStatus {
    /// Updates `self` such that if either `self` or `other` are `Processed`,
    /// `self` will be processed.
    pub fn update_with(&mut self, other: Self) {
        if other == Self::Processed {
            *self = Self::Processed;
        }
    }
}

/// Describes the state of a button or key.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum ElementState {
    /// The button or key went down.
    Pressed,
    /// The button or key came back up.
    Released,
}

/// A mouse button.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum MouseButton {
    /// The primary button.
    Left,
    /// The secondary button.
    Right,
    /// The wheel button.
    Middle,
    /// Any other button, by its platform index.
    Other(u16),
}

/// An input event, already translated by the platform layer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Event {
    /// A keyboard event.
    Keyboard {
        /// The hardware-dependent scan code.
        scancode: u32,
        /// Indicates pressed or released.
        state: ElementState,
    },
    /// A mouse button event.
    MouseButton {
        /// The button that triggered this event.
        button: MouseButton,
        /// Indicates pressed or released.
        state: ElementState,
    },
    /// Mouse cursor event. `None` when the cursor leaves the render target.
    MouseMoved {
        /// The location of the cursor.
        position: Option<Point<f32>>,
    },
    /// Mouse wheel event.
    MouseWheel {
        /// The scroll amount.
        delta: Vector<f32>,
    },
}

/// An event from an input device.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InputEvent {
    /// The device that triggered this event.
    pub device_id: u64,
    /// The event that was triggered.
    pub event: Event,
}

impl From<Event> for InputEvent {
    fn from(event: Event) -> Self {
        Self {
            device_id: 0,
            event,
        }
    }
}
