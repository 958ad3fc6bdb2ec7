//! Touch events and the cross-thread input queue

use std::collections::VecDeque;

use parking_lot::Mutex;

/// One touch gesture sample in normalized device coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Press { x: f32, y: f32 },
    Drag { x: f32, y: f32 },
    Release,
    /// Pinch delta from the secondary pointer, dollies the camera
    Zoom { delta: f32 },
}

/// Queue decoupling the host's input thread from the frame callback.
/// The input thread pushes; the frame callback drains at the top of
/// each frame, so simulation state is only ever touched on the frame
/// thread.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Mutex<VecDeque<TouchEvent>>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an event; safe to call from the host's input thread
    pub fn push(&self, event: TouchEvent) {
        self.events.lock().push_back(event);
    }

    /// Take all pending events in arrival order
    pub fn drain(&self) -> Vec<TouchEvent> {
        self.events.lock().drain(..).collect()
    }
}
