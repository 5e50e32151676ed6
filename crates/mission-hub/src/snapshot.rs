//! Flat per-frame snapshot for the host renderer.
//!
//! The bridge exposes these buffers to JS as raw pointers into WASM
//! memory; stride and field order are the wire format and must stay in
//! sync with the TypeScript reader.

use bytemuck::{Pod, Zeroable};

use crate::hub::splash::SplashPhase;
use crate::hub::{HubApp, RenderMode};
use crate::scene::VisualTier;

/// One projected mission node. 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct NodeInstance {
    /// Projected screen position.
    pub x: f32,
    pub y: f32,
    /// View-space depth for draw ordering (smaller = nearer).
    pub depth: f32,
    /// Screen-space size factor (eased node scale × perspective scale).
    pub scale: f32,
    /// Accent color.
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub emissive: f32,
    pub glow_opacity: f32,
    pub ring_opacity: f32,
    pub ring_angle: f32,
    /// 0 = idle, 1 = hovered, 2 = selected. Also gates the period label.
    pub tier: f32,
}

impl NodeInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// One projected background particle. 4 floats = 16 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct ParticleInstance {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
    pub _pad: f32,
}

impl ParticleInstance {
    pub const FLOATS: usize = 4;
}

/// Header field indices.
pub const HEADER_FLOATS: usize = 8;
pub const HEADER_MODE: usize = 0;
pub const HEADER_SPLASH_PHASE: usize = 1;
pub const HEADER_SPLASH_PROGRESS: usize = 2;
pub const HEADER_WELCOME_VISIBLE: usize = 3;
pub const HEADER_PANEL_OPEN: usize = 4;
pub const HEADER_AUDIO_ENABLED: usize = 5;
pub const HEADER_GRID_OFFSET: usize = 6;
pub const HEADER_SWEEP_ANGLE: usize = 7;

/// Everything the renderer needs for one frame.
pub struct FrameSnapshot {
    pub header: [f32; HEADER_FLOATS],
    pub nodes: Vec<NodeInstance>,
    pub particles: Vec<ParticleInstance>,
}

impl FrameSnapshot {
    pub fn new() -> Self {
        Self {
            header: [0.0; HEADER_FLOATS],
            nodes: Vec::with_capacity(16),
            particles: Vec::with_capacity(crate::scene::PARTICLE_COUNT),
        }
    }

    /// Rebuild from current app state. Buffers are reused across frames.
    pub fn capture(&mut self, app: &HubApp) {
        self.nodes.clear();
        self.particles.clear();

        self.header[HEADER_MODE] = match app.mode() {
            RenderMode::Scene3D => 0.0,
            RenderMode::Fallback2D => 1.0,
        };
        self.header[HEADER_SPLASH_PHASE] = match app.splash().phase() {
            SplashPhase::Playing => 0.0,
            SplashPhase::Complete => 1.0,
            SplashPhase::Fading => 2.0,
            SplashPhase::Closed => 3.0,
        };
        self.header[HEADER_SPLASH_PROGRESS] = app.splash().progress();
        self.header[HEADER_WELCOME_VISIBLE] = f32::from(app.is_welcome_visible());
        self.header[HEADER_PANEL_OPEN] = f32::from(app.panel().is_some());
        self.header[HEADER_AUDIO_ENABLED] = f32::from(app.is_audio_enabled());

        let Some(scene) = app.scene() else {
            self.header[HEADER_GRID_OFFSET] = 0.0;
            self.header[HEADER_SWEEP_ANGLE] = 0.0;
            return;
        };
        self.header[HEADER_GRID_OFFSET] = scene.grid.offset_z;
        self.header[HEADER_SWEEP_ANGLE] = scene.sweep.angle;

        for node in &scene.nodes {
            let proj = scene.camera.project(node.position);
            let [r, g, b] = node.color;
            self.nodes.push(NodeInstance {
                x: proj.pos.x,
                y: proj.pos.y,
                depth: proj.depth,
                scale: node.scale * proj.scale,
                r,
                g,
                b,
                emissive: node.emissive_intensity(),
                glow_opacity: node.glow_opacity(),
                ring_opacity: node.ring_opacity(),
                ring_angle: node.ring_angle,
                tier: match node.tier() {
                    VisualTier::Idle => 0.0,
                    VisualTier::Hovered => 1.0,
                    VisualTier::Selected => 2.0,
                },
            });
        }

        for pos in scene.particles.positions() {
            let proj = scene.camera.project(pos);
            self.particles.push(ParticleInstance {
                x: proj.pos.x,
                y: proj.pos.y,
                depth: proj.depth,
                _pad: 0.0,
            });
        }
    }

    // ── Raw accessors for the bridge ─────────────────────────────────

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn nodes_ptr(&self) -> *const f32 {
        self.nodes.as_ptr() as *const f32
    }

    pub fn node_count(&self) -> u32 {
        self.nodes.len() as u32
    }

    pub fn particles_ptr(&self) -> *const f32 {
        self.particles.as_ptr() as *const f32
    }

    pub fn particle_count(&self) -> u32 {
        self.particles.len() as u32
    }
}

impl Default for FrameSnapshot {
    fn default() -> Self {
        Self::new()
    }
}
