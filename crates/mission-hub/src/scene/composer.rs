//! Hub scene assembly and interaction.
//!
//! Owns the orbit camera, one node per mission, and the deterministic
//! decorations. Pointer input is discriminated into click vs drag: clicks
//! hit-test the nodes and report activation upward, drags orbit the camera.
//! A click that lands on a node is consumed — it never also moves the
//! camera. Auto-rotation runs whenever the user is not dragging.

use glam::Vec2;

use crate::content::Mission;
use crate::math3d::OrbitCamera;
use crate::scene::decor::{GridFloor, ParticleField, RadarSweep};
use crate::scene::node::MissionNode;

/// Events the scene reports to its parent container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HubEvent {
    /// A mission node was activated (clicked/tapped).
    MissionActivated(String),
}

/// The composed 3D hub scene.
pub struct HubScene {
    pub nodes: Vec<MissionNode>,
    pub camera: OrbitCamera,
    pub grid: GridFloor,
    pub sweep: RadarSweep,
    pub particles: ParticleField,
    pointer_down: bool,
    dragging: bool,
    pointer_start: Vec2,
    last_pointer: Vec2,
    hovered: Option<usize>,
}

impl HubScene {
    /// Screen-pixel travel before a press becomes a drag.
    const DRAG_THRESHOLD: f32 = 5.0;

    pub fn new(missions: &[Mission], screen_width: f32, screen_height: f32) -> Self {
        Self {
            nodes: missions.iter().map(MissionNode::new).collect(),
            camera: OrbitCamera::new(screen_width, screen_height),
            grid: GridFloor::default(),
            sweep: RadarSweep::default(),
            particles: ParticleField::default(),
            pointer_down: false,
            dragging: false,
            pointer_start: Vec2::ZERO,
            last_pointer: Vec2::ZERO,
            hovered: None,
        }
    }

    /// Parent-driven selection. At most one node is selected.
    pub fn set_selected(&mut self, mission_id: Option<&str>) {
        for node in &mut self.nodes {
            node.selected = mission_id == Some(node.mission_id.as_str());
        }
    }

    /// Index of the currently hovered node, for cursor feedback.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Advance all animated scene state by elapsed time.
    pub fn tick(&mut self, dt: f32) {
        for node in &mut self.nodes {
            node.tick(dt);
        }
        self.grid.tick(dt);
        self.sweep.tick(dt);
        self.particles.tick(dt);
        if !self.dragging {
            self.camera.auto_rotate(dt);
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.set_screen_size(width, height);
    }

    pub fn on_pointer_down(&mut self, pos: Vec2) {
        self.pointer_down = true;
        self.dragging = false;
        self.pointer_start = pos;
        self.last_pointer = pos;
    }

    pub fn on_pointer_move(&mut self, pos: Vec2) {
        if self.pointer_down {
            if !self.dragging && pos.distance(self.pointer_start) > Self::DRAG_THRESHOLD {
                self.dragging = true;
                self.set_hovered(None);
            }
            if self.dragging {
                let delta = pos - self.last_pointer;
                self.camera.orbit(delta.x, delta.y);
            }
        } else {
            let hit = self.hit_test(pos);
            self.set_hovered(hit);
        }
        self.last_pointer = pos;
    }

    /// Release the pointer. A non-drag release over a node activates it and
    /// consumes the gesture.
    pub fn on_pointer_up(&mut self, pos: Vec2) -> Option<HubEvent> {
        // A release whose press never reached the scene (e.g. it was
        // consumed by an overlay) must not activate anything.
        if !self.pointer_down {
            return None;
        }
        let was_drag = self.dragging;
        self.pointer_down = false;
        self.dragging = false;
        if was_drag {
            return None;
        }
        let hit = self.hit_test(pos)?;
        let id = self.nodes[hit].mission_id.clone();
        Some(HubEvent::MissionActivated(id))
    }

    pub fn on_wheel(&mut self, delta: f32) {
        self.camera.zoom(delta);
    }

    /// Project every node and return the front-most one whose scaled radius
    /// covers the screen position.
    fn hit_test(&self, pos: Vec2) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, node) in self.nodes.iter().enumerate() {
            let proj = self.camera.project(node.position);
            if proj.depth <= 0.0 {
                continue;
            }
            let radius = MissionNode::HIT_RADIUS * node.scale * proj.scale;
            if pos.distance(proj.pos) <= radius {
                match best {
                    Some((_, depth)) if depth <= proj.depth => {}
                    _ => best = Some((i, proj.depth)),
                }
            }
        }
        best.map(|(i, _)| i)
    }

    fn set_hovered(&mut self, hit: Option<usize>) {
        if self.hovered == hit {
            return;
        }
        if let Some(prev) = self.hovered {
            self.nodes[prev].hovered = false;
        }
        if let Some(next) = hit {
            self.nodes[next].hovered = true;
        }
        self.hovered = hit;
    }
}
