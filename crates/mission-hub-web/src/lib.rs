pub mod browser;
pub mod runner;

pub use runner::HubRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use mission_hub::telemetry::TelemetrySink;
use mission_hub::{load_document, HubApp, InputEvent, StorageFlag};

thread_local! {
    static RUNNER: RefCell<Option<HubRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut HubRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Hub not initialized. Call hub_init() first.");
        f(runner)
    })
}

/// Initialize the hub from the content JSON. `force_fallback` mounts the
/// 2D path even when WebGL is available (e.g. prefers-reduced-motion).
#[wasm_bindgen]
pub fn hub_init(content_json: &str, width: f32, height: f32, force_fallback: bool) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let doc = load_document(content_json);
    let mut caps = browser::probe_capabilities();
    if force_fallback {
        caps.webgl = false;
    }
    let sink = match browser::analytics_hook() {
        Some(hook) => TelemetrySink::with_hook(hook),
        None => TelemetrySink::disconnected(),
    };
    let storage = browser::BrowserFlags::probe().map(|f| Box::new(f) as Box<dyn StorageFlag>);
    let app = HubApp::new(
        doc,
        caps,
        sink,
        storage,
        Box::new(browser::BrowserRouter),
        width,
        height,
    );

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(HubRunner::new(app));
    });
    log::info!("mission-hub: initialized");
}

#[wasm_bindgen]
pub fn hub_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// ---- Input ----

#[wasm_bindgen]
pub fn hub_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn hub_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

#[wasm_bindgen]
pub fn hub_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn hub_wheel(delta: f32) {
    with_runner(|r| r.push_input(InputEvent::Wheel { delta }));
}

#[wasm_bindgen]
pub fn hub_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

#[wasm_bindgen]
pub fn hub_custom_event(kind: u32, a: f32, b: f32, c: f32) {
    with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_header_ptr() -> *const f32 {
    with_runner(|r| r.snapshot().header_ptr())
}

#[wasm_bindgen]
pub fn get_nodes_ptr() -> *const f32 {
    with_runner(|r| r.snapshot().nodes_ptr())
}

#[wasm_bindgen]
pub fn get_node_count() -> u32 {
    with_runner(|r| r.snapshot().node_count())
}

#[wasm_bindgen]
pub fn get_particles_ptr() -> *const f32 {
    with_runner(|r| r.snapshot().particles_ptr())
}

#[wasm_bindgen]
pub fn get_particle_count() -> u32 {
    with_runner(|r| r.snapshot().particle_count())
}

#[wasm_bindgen]
pub fn get_hovered_node() -> i32 {
    with_runner(|r| r.hovered_node())
}

#[wasm_bindgen]
pub fn get_selected_mission() -> String {
    with_runner(|r| r.selected_mission())
}

#[wasm_bindgen]
pub fn is_scene_mode() -> bool {
    with_runner(|r| r.is_scene_mode())
}

/// Hero-stat counter rows as a JSON array for the DOM layer.
#[wasm_bindgen]
pub fn get_ledger_rows() -> String {
    with_runner(|r| r.app().ledger().rows_json())
}

/// Boot splash lines, newline-joined; the DOM layer reveals
/// `progress × count` of them.
#[wasm_bindgen]
pub fn get_boot_lines() -> String {
    mission_hub::BOOT_LINES.join("\n")
}
