use mission_hub::{FrameSnapshot, HubApp, InputEvent, InputQueue, RenderMode};

/// Owns the hub app plus its input queue and frame snapshot, and wires up
/// the per-frame loop. The browser pushes input between frames; each tick
/// routes it, advances the app by elapsed time, and rebuilds the snapshot
/// buffers JS reads through raw pointers.
pub struct HubRunner {
    app: HubApp,
    input: InputQueue,
    snapshot: FrameSnapshot,
}

impl HubRunner {
    pub fn new(app: HubApp) -> Self {
        let mut snapshot = FrameSnapshot::new();
        snapshot.capture(&app);
        Self {
            app,
            input: InputQueue::new(),
            snapshot,
        }
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: route input, advance all animated state, snapshot.
    pub fn tick(&mut self, dt: f32) {
        self.app.update(dt, &self.input);
        self.input.drain();
        self.snapshot.capture(&self.app);
    }

    pub fn app(&self) -> &HubApp {
        &self.app
    }

    pub fn snapshot(&self) -> &FrameSnapshot {
        &self.snapshot
    }

    /// Whether the 3D scene path is mounted (for cursor/DOM bookkeeping).
    pub fn is_scene_mode(&self) -> bool {
        self.app.mode() == RenderMode::Scene3D
    }

    /// Index of the hovered node, or -1. JS uses this for cursor feedback.
    pub fn hovered_node(&self) -> i32 {
        self.app
            .scene()
            .and_then(|s| s.hovered())
            .map(|i| i as i32)
            .unwrap_or(-1)
    }

    /// Currently selected mission id, empty string when none.
    pub fn selected_mission(&self) -> String {
        self.app.selected_mission().unwrap_or_default().to_string()
    }
}
