//! Per-mission node visual state.
//!
//! Each node runs two independent little machines: Idle ↔ Hovered from
//! pointer enter/leave, and Unselected ↔ Selected driven by the parent.
//! Selected always outranks hovered for visuals. Rotation advances every
//! frame regardless of interaction; scale eases toward its tier target.

use crate::anim::damp;
use crate::content::Mission;
use crate::math3d::Vec3;

/// Visual emphasis tier. Selected takes precedence when both flags are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualTier {
    Idle,
    Hovered,
    Selected,
}

impl VisualTier {
    pub fn of(selected: bool, hovered: bool) -> Self {
        if selected {
            VisualTier::Selected
        } else if hovered {
            VisualTier::Hovered
        } else {
            VisualTier::Idle
        }
    }

    /// Pick the per-tier value of a three-level policy.
    #[inline]
    fn pick(self, idle: f32, hovered: f32, selected: f32) -> f32 {
        match self {
            VisualTier::Idle => idle,
            VisualTier::Hovered => hovered,
            VisualTier::Selected => selected,
        }
    }
}

/// One interactive node in the 3D hub.
#[derive(Debug, Clone)]
pub struct MissionNode {
    pub mission_id: String,
    pub title: String,
    pub period: String,
    /// Authored world position.
    pub position: Vec3,
    /// Node accent color, 0..1 rgb.
    pub color: [f32; 3],
    pub hovered: bool,
    pub selected: bool,
    /// Current eased scale (starts at the idle target).
    pub scale: f32,
    /// Core mesh rotation, radians.
    pub yaw: f32,
    pub pitch: f32,
    /// Decorative ring rotation, radians.
    pub ring_angle: f32,
}

impl MissionNode {
    /// Base interaction radius in world units (the glow sphere).
    pub const HIT_RADIUS: f32 = 0.45;

    const SCALE_IDLE: f32 = 1.0;
    const SCALE_HOVERED: f32 = 1.2;
    const SCALE_SELECTED: f32 = 1.4;
    /// Exponential approach rate for scale transitions.
    const SCALE_RATE: f32 = 5.0;

    const YAW_RATE: f32 = 0.6;
    const PITCH_RATE: f32 = 0.2;
    const RING_RATE_IDLE: f32 = 0.5;
    const RING_RATE_HOVERED: f32 = 1.5;

    pub fn new(mission: &Mission) -> Self {
        Self {
            mission_id: mission.id.clone(),
            title: mission.title.clone(),
            period: mission.period.clone(),
            position: Vec3::from_array(mission.position),
            color: mission.color_rgb(),
            hovered: false,
            selected: false,
            scale: Self::SCALE_IDLE,
            yaw: 0.0,
            pitch: 0.0,
            ring_angle: 0.0,
        }
    }

    pub fn tier(&self) -> VisualTier {
        VisualTier::of(self.selected, self.hovered)
    }

    pub fn scale_target(&self) -> f32 {
        self.tier()
            .pick(Self::SCALE_IDLE, Self::SCALE_HOVERED, Self::SCALE_SELECTED)
    }

    pub fn glow_opacity(&self) -> f32 {
        self.tier().pick(0.04, 0.10, 0.15)
    }

    pub fn ring_opacity(&self) -> f32 {
        self.tier().pick(0.3, 0.7, 0.9)
    }

    pub fn emissive_intensity(&self) -> f32 {
        self.tier().pick(0.8, 1.8, 2.5)
    }

    pub fn light_intensity(&self) -> f32 {
        self.tier().pick(0.5, 2.0, 3.0)
    }

    /// The period line shows only while the node has attention.
    pub fn label_shows_period(&self) -> bool {
        self.hovered || self.selected
    }

    /// Advance one frame: monotonic rotation, eased scale.
    pub fn tick(&mut self, dt: f32) {
        self.yaw += Self::YAW_RATE * dt;
        self.pitch += Self::PITCH_RATE * dt;
        let ring_rate = if self.hovered {
            Self::RING_RATE_HOVERED
        } else {
            Self::RING_RATE_IDLE
        };
        self.ring_angle += ring_rate * dt;
        self.scale = damp(self.scale, self.scale_target(), Self::SCALE_RATE, dt);
    }
}
