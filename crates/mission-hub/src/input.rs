/// Input event types the hub understands. Generic — carries no hub
/// semantics; the bridge pushes, the app drains each tick.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// A touch/click began at screen coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// A touch/click ended at screen coordinates (x, y).
    PointerUp { x: f32, y: f32 },
    /// A touch/cursor moved to screen coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// Scroll wheel; positive delta zooms in.
    Wheel { delta: f32 },
    /// A key was pressed.
    KeyDown { key_code: u32 },
    /// A custom event from the UI layer (buttons, resize, external selects).
    /// `kind` identifies the event; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// Key codes the hub reacts to.
pub mod keys {
    pub const ENTER: u32 = 13;
    pub const ESCAPE: u32 = 27;
    pub const SPACE: u32 = 32;
}

/// Custom event kinds pushed by the bridge.
pub mod custom {
    /// a = width, b = height.
    pub const RESIZE: u32 = 1;
    /// Welcome overlay dismissed.
    pub const WELCOME_DISMISS: u32 = 2;
    /// Audio toggle button pressed.
    pub const AUDIO_TOGGLE: u32 = 3;
    /// Contact channel activated; a = index into `document.contact`.
    pub const CONTACT_ACTIVATE: u32 = 4;
    /// Detail panel close button pressed.
    pub const PANEL_CLOSE: u32 = 5;
    /// Boot splash skip control pressed.
    pub const SPLASH_SKIP: u32 = 6;
    /// Mission card activated in the 2D hub; a = index into `document.missions`.
    pub const CARD_ACTIVATE: u32 = 7;
}

/// A queue of input events. The bridge writes events into the queue; the
/// app reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from the bridge).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::KeyDown { key_code: keys::ESCAPE });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn wheel_event_carries_delta() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Wheel { delta: -1.5 });
        match q.drain()[0] {
            InputEvent::Wheel { delta } => assert_eq!(delta, -1.5),
            _ => panic!("expected Wheel event"),
        }
    }
}
