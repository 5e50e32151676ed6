//! Top-level hub container.
//!
//! Owns the loaded document, the selection state, and every interactive
//! subsystem, and routes input in a fixed order: boot splash, then welcome
//! overlay, then the detail panel, then the active hub (3D scene or 2D
//! fallback). One `update` call per frame drives everything from elapsed
//! time; there are no free-running timers.

pub mod counter;
pub mod detail;
pub mod fallback;
pub mod panels;
pub mod splash;
pub mod welcome;

use glam::Vec2;

use crate::content::PortfolioDocument;
use crate::input::{custom, keys, InputEvent, InputQueue};
use crate::platform::{Capabilities, Router, StorageFlag};
use crate::scene::{HubEvent, HubScene};
use crate::telemetry::TelemetrySink;

use detail::{DetailPanel, PanelResponse};
use fallback::FallbackHub;
use panels::{AudioToggle, CommandBar, ImpactLedger};
use splash::BootSplash;
use welcome::WelcomeOverlay;

/// Which rendering path is mounted. Decided once at startup from the
/// capability probe; never switches at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Scene3D,
    Fallback2D,
}

pub struct HubApp {
    doc: PortfolioDocument,
    mode: RenderMode,
    scene: Option<HubScene>,
    fallback: Option<FallbackHub>,
    selected_mission: Option<String>,
    panel: Option<DetailPanel>,
    splash: BootSplash,
    welcome: WelcomeOverlay,
    ledger: ImpactLedger,
    audio: AudioToggle,
    sink: TelemetrySink,
    storage: Option<Box<dyn StorageFlag>>,
}

impl HubApp {
    pub fn new(
        doc: PortfolioDocument,
        caps: Capabilities,
        sink: TelemetrySink,
        storage: Option<Box<dyn StorageFlag>>,
        router: Box<dyn Router>,
        screen_width: f32,
        screen_height: f32,
    ) -> Self {
        let mode = if caps.webgl {
            RenderMode::Scene3D
        } else {
            RenderMode::Fallback2D
        };
        let scene = match mode {
            RenderMode::Scene3D => Some(HubScene::new(&doc.missions, screen_width, screen_height)),
            RenderMode::Fallback2D => None,
        };
        let fallback = match mode {
            RenderMode::Scene3D => None,
            RenderMode::Fallback2D => Some(FallbackHub::new(router)),
        };
        let welcome = WelcomeOverlay::new(storage.as_deref());
        let ledger = ImpactLedger::new(&doc);

        Self {
            doc,
            mode,
            scene,
            fallback,
            selected_mission: None,
            panel: None,
            splash: BootSplash::new(),
            welcome,
            ledger,
            audio: AudioToggle::default(),
            sink,
            storage,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn document(&self) -> &PortfolioDocument {
        &self.doc
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn scene(&self) -> Option<&HubScene> {
        self.scene.as_ref()
    }

    pub fn fallback(&self) -> Option<&FallbackHub> {
        self.fallback.as_ref()
    }

    pub fn splash(&self) -> &BootSplash {
        &self.splash
    }

    pub fn ledger(&self) -> &ImpactLedger {
        &self.ledger
    }

    pub fn selected_mission(&self) -> Option<&str> {
        self.selected_mission.as_deref()
    }

    pub fn panel(&self) -> Option<&DetailPanel> {
        self.panel.as_ref()
    }

    pub fn is_welcome_visible(&self) -> bool {
        self.welcome.is_visible()
    }

    pub fn is_audio_enabled(&self) -> bool {
        self.audio.is_enabled()
    }

    // ── Frame loop ───────────────────────────────────────────────────

    /// One frame: route pending input, then advance all animated state.
    pub fn update(&mut self, dt: f32, input: &InputQueue) {
        for event in input.iter() {
            self.handle(*event);
        }
        self.tick(dt);
    }

    fn tick(&mut self, dt: f32) {
        self.splash.tick(dt);
        if !self.splash.is_closed() {
            return;
        }
        self.ledger.tick(dt);
        if let Some(scene) = &mut self.scene {
            scene.tick(dt);
        }
    }

    fn handle(&mut self, event: InputEvent) {
        // Splash gates everything: skip keys pass through, the rest drops.
        if !self.splash.is_closed() {
            match event {
                InputEvent::KeyDown { key_code }
                    if matches!(key_code, keys::ENTER | keys::SPACE | keys::ESCAPE) =>
                {
                    self.splash.skip();
                }
                InputEvent::Custom { kind: custom::SPLASH_SKIP, .. } => self.splash.skip(),
                _ => {}
            }
            return;
        }

        // Global controls live above both hub modes.
        match event {
            InputEvent::Custom { kind: custom::RESIZE, a, b, .. } => {
                if let Some(scene) = &mut self.scene {
                    scene.resize(a, b);
                }
                return;
            }
            InputEvent::Custom { kind: custom::WELCOME_DISMISS, .. } => {
                self.welcome.dismiss(self.storage.as_deref());
                return;
            }
            InputEvent::Custom { kind: custom::AUDIO_TOGGLE, .. } => {
                self.audio.toggle(&self.sink);
                return;
            }
            InputEvent::Custom { kind: custom::CONTACT_ACTIVATE, a, .. } => {
                if let Some(channel) = self.doc.contact.get(a as usize) {
                    CommandBar::activate(channel, &self.sink);
                }
                return;
            }
            _ => {}
        }

        // The welcome overlay is modal: it swallows everything below the
        // global controls until dismissed.
        if self.welcome.is_visible() {
            return;
        }

        // An open panel owns Escape and shields the background from
        // pointer input.
        if self.panel.is_some() {
            let response = match event {
                InputEvent::KeyDown { key_code: keys::ESCAPE } => {
                    self.panel.as_mut().map(|p| p.on_escape())
                }
                InputEvent::Custom { kind: custom::PANEL_CLOSE, .. } => {
                    self.panel.as_mut().map(|p| p.on_close_button())
                }
                // The panel overlays the canvas, so a raw canvas press
                // while it is open is a backdrop press. Presses inside the
                // panel's own DOM never reach the queue.
                InputEvent::PointerDown { .. } => {
                    self.panel.as_mut().map(|p| p.on_pointer_down(false))
                }
                InputEvent::PointerUp { .. } | InputEvent::PointerMove { .. } | InputEvent::Wheel { .. } => {
                    Some(PanelResponse::Consumed)
                }
                _ => None,
            };
            if response == Some(PanelResponse::Close) {
                self.close_panel();
            }
            if response.is_some() {
                return;
            }
        }

        // Finally, the active hub.
        match self.mode {
            RenderMode::Scene3D => self.handle_scene(event),
            RenderMode::Fallback2D => self.handle_fallback(event),
        }
    }

    fn handle_scene(&mut self, event: InputEvent) {
        let Some(scene) = &mut self.scene else { return };
        match event {
            InputEvent::PointerDown { x, y } => scene.on_pointer_down(Vec2::new(x, y)),
            InputEvent::PointerMove { x, y } => scene.on_pointer_move(Vec2::new(x, y)),
            InputEvent::PointerUp { x, y } => {
                if let Some(HubEvent::MissionActivated(id)) = scene.on_pointer_up(Vec2::new(x, y)) {
                    self.open_mission(&id, "modal");
                }
            }
            InputEvent::Wheel { delta } => scene.on_wheel(delta),
            _ => {}
        }
    }

    fn handle_fallback(&mut self, event: InputEvent) {
        if let InputEvent::Custom { kind: custom::CARD_ACTIVATE, a, .. } = event {
            let Some(mission) = self.doc.missions.get(a as usize) else {
                return;
            };
            let id = mission.id.clone();
            if let Some(hub) = &self.fallback {
                hub.on_mission_open(mission);
            }
            self.open_mission(&id, "fallback_2d");
        }
    }

    /// Select a mission and mount its detail panel. The panel mount is the
    /// single emitter of `mission_open`.
    fn open_mission(&mut self, id: &str, source: &str) {
        let Some(mission) = self.doc.mission(id) else {
            return;
        };
        self.panel = Some(DetailPanel::open(mission, &self.sink, source));
        self.selected_mission = Some(id.to_string());
        if let Some(scene) = &mut self.scene {
            scene.set_selected(Some(id));
        }
    }

    fn close_panel(&mut self) {
        self.panel = None;
        self.selected_mission = None;
        if let Some(scene) = &mut self.scene {
            scene.set_selected(None);
        }
        if let Some(hub) = &self.fallback {
            hub.on_mission_close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Mission, PortfolioDocument};
    use crate::platform::{Capabilities, MemoryFlags, MemoryRouter};
    use crate::telemetry::{EventName, TelemetryEvent, TelemetrySink};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn doc() -> PortfolioDocument {
        PortfolioDocument {
            missions: vec![
                Mission {
                    id: "alpha".into(),
                    title: "Alpha".into(),
                    position: [0.0, 0.0, 0.0],
                    color: "#00f5d4".into(),
                    ..Default::default()
                },
                Mission {
                    id: "beta".into(),
                    title: "Beta".into(),
                    position: [2.0, 0.0, 0.0],
                    color: "#ff5d8f".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    fn capturing_sink() -> (TelemetrySink, Rc<RefCell<Vec<TelemetryEvent>>>) {
        let captured = Rc::new(RefCell::new(Vec::new()));
        let inner = Rc::clone(&captured);
        let sink = TelemetrySink::with_hook(Box::new(move |e| {
            inner.borrow_mut().push(e.clone());
        }));
        (sink, captured)
    }

    fn app_3d(sink: TelemetrySink) -> HubApp {
        HubApp::new(
            doc(),
            Capabilities { webgl: true, storage: true },
            sink,
            Some(Box::new(MemoryFlags::default())),
            Box::new(MemoryRouter::default()),
            800.0,
            600.0,
        )
    }

    /// Tick past the whole boot sequence and dismiss the welcome overlay.
    fn boot(app: &mut HubApp) {
        let mut input = InputQueue::new();
        input.push(InputEvent::KeyDown { key_code: keys::ESCAPE });
        app.update(1.0 / 60.0, &input);
        let empty = InputQueue::new();
        for _ in 0..30 {
            app.update(1.0 / 60.0, &empty);
        }
        assert!(app.splash().is_closed());
        let mut dismiss = InputQueue::new();
        dismiss.push(InputEvent::Custom { kind: custom::WELCOME_DISMISS, a: 0.0, b: 0.0, c: 0.0 });
        app.update(1.0 / 60.0, &dismiss);
    }

    fn click(app: &mut HubApp, x: f32, y: f32) {
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x, y });
        input.push(InputEvent::PointerUp { x, y });
        app.update(1.0 / 60.0, &input);
    }

    #[test]
    fn capability_probe_chooses_mode() {
        let (sink, _) = capturing_sink();
        let app = app_3d(sink);
        assert_eq!(app.mode(), RenderMode::Scene3D);

        let (sink, _) = capturing_sink();
        let app = HubApp::new(
            doc(),
            Capabilities { webgl: false, storage: false },
            sink,
            None,
            Box::new(MemoryRouter::default()),
            800.0,
            600.0,
        );
        assert_eq!(app.mode(), RenderMode::Fallback2D);
        assert!(app.scene().is_none());
    }

    #[test]
    fn clicking_beta_node_selects_it_with_one_open_event() {
        let (sink, captured) = capturing_sink();
        let mut app = app_3d(sink);
        boot(&mut app);

        let pos = {
            let scene = app.scene().unwrap();
            scene.camera.project(scene.nodes[1].position).pos
        };
        click(&mut app, pos.x, pos.y);

        assert_eq!(app.selected_mission(), Some("beta"));
        let opens: Vec<_> = captured
            .borrow()
            .iter()
            .filter(|e| e.name == EventName::MissionOpen)
            .cloned()
            .collect();
        assert_eq!(opens.len(), 1);
        assert_eq!(opens[0].mission_id.as_deref(), Some("beta"));
        assert_eq!(opens[0].source, "modal");
    }

    #[test]
    fn escape_closes_panel_and_clears_selection() {
        let (sink, _) = capturing_sink();
        let mut app = app_3d(sink);
        boot(&mut app);

        let pos = {
            let scene = app.scene().unwrap();
            scene.camera.project(scene.nodes[0].position).pos
        };
        click(&mut app, pos.x, pos.y);
        assert!(app.panel().is_some());

        let mut input = InputQueue::new();
        input.push(InputEvent::KeyDown { key_code: keys::ESCAPE });
        app.update(1.0 / 60.0, &input);
        assert!(app.panel().is_none());
        assert_eq!(app.selected_mission(), None);
        assert!(!app.scene().unwrap().nodes[0].selected);
    }

    #[test]
    fn open_panel_shields_background_from_clicks() {
        let (sink, captured) = capturing_sink();
        let mut app = app_3d(sink);
        boot(&mut app);

        let pos = {
            let scene = app.scene().unwrap();
            scene.camera.project(scene.nodes[0].position).pos
        };
        click(&mut app, pos.x, pos.y);
        assert_eq!(captured.borrow().len(), 1);

        // A backdrop press closes the panel but never reaches the scene —
        // no second activation even right on top of a node.
        click(&mut app, pos.x, pos.y);
        assert!(app.panel().is_none());
        assert_eq!(
            captured
                .borrow()
                .iter()
                .filter(|e| e.name == EventName::MissionOpen)
                .count(),
            1
        );
    }

    #[test]
    fn splash_swallows_pointer_input() {
        let (sink, captured) = capturing_sink();
        let mut app = app_3d(sink);
        // Still playing: clicks go nowhere.
        click(&mut app, 400.0, 300.0);
        assert_eq!(app.selected_mission(), None);
        assert!(captured.borrow().is_empty());
        assert!(!app.splash().is_closed());
    }

    #[test]
    fn fallback_card_activation_routes_fragment_and_panel() {
        struct SharedRouter(Rc<MemoryRouter>);
        impl crate::platform::Router for SharedRouter {
            fn push_fragment(&self, fragment: &str) {
                self.0.push_fragment(fragment);
            }
            fn clear_fragment(&self) {
                self.0.clear_fragment();
            }
        }

        let router = Rc::new(MemoryRouter::default());
        let (sink, captured) = capturing_sink();
        let mut app = HubApp::new(
            doc(),
            Capabilities { webgl: false, storage: true },
            sink,
            Some(Box::new(MemoryFlags::default())),
            Box::new(SharedRouter(Rc::clone(&router))),
            800.0,
            600.0,
        );
        boot(&mut app);

        let mut input = InputQueue::new();
        input.push(InputEvent::Custom { kind: custom::CARD_ACTIVATE, a: 1.0, b: 0.0, c: 0.0 });
        app.update(1.0 / 60.0, &input);

        assert_eq!(app.selected_mission(), Some("beta"));
        assert_eq!(router.fragment().as_deref(), Some("beta"));
        let events = captured.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].source, "fallback_2d");
        drop(events);

        let mut close = InputQueue::new();
        close.push(InputEvent::KeyDown { key_code: keys::ESCAPE });
        app.update(1.0 / 60.0, &close);
        assert_eq!(router.fragment(), None);
        assert_eq!(app.selected_mission(), None);
    }

    #[test]
    fn welcome_overlay_dismiss_persists_flag() {
        let (sink, _) = capturing_sink();
        let mut app = app_3d(sink);
        assert!(app.is_welcome_visible());
        boot(&mut app);
        assert!(!app.is_welcome_visible());
    }

    #[test]
    fn audio_toggle_custom_event() {
        let (sink, captured) = capturing_sink();
        let mut app = app_3d(sink);
        boot(&mut app);
        let mut input = InputQueue::new();
        input.push(InputEvent::Custom { kind: custom::AUDIO_TOGGLE, a: 0.0, b: 0.0, c: 0.0 });
        app.update(1.0 / 60.0, &input);
        assert!(app.is_audio_enabled());
        assert_eq!(captured.borrow()[0].name, EventName::AudioToggle);
    }

    #[test]
    fn contact_activation_uses_authored_event() {
        let mut d = doc();
        d.contact.push(crate::content::ContactChannel {
            kind: crate::content::ContactKind::Resume,
            label: "Resume".into(),
            href: "/cv.pdf".into(),
            tracking_event: "resume_download".into(),
        });
        let (sink, captured) = capturing_sink();
        let mut app = HubApp::new(
            d,
            Capabilities { webgl: true, storage: true },
            sink,
            Some(Box::new(MemoryFlags::default())),
            Box::new(MemoryRouter::default()),
            800.0,
            600.0,
        );
        boot(&mut app);
        let mut input = InputQueue::new();
        input.push(InputEvent::Custom { kind: custom::CONTACT_ACTIVATE, a: 0.0, b: 0.0, c: 0.0 });
        app.update(1.0 / 60.0, &input);
        assert_eq!(captured.borrow()[0].name, EventName::ResumeDownload);
    }
}
