//! Deterministic scene decorations: particle field, ground grid, radar
//! sweep. No randomness anywhere — the particle layout is a fixed
//! golden-angle spiral computed once, identical across reloads.

use std::sync::OnceLock;

use crate::math3d::Vec3;

/// Number of background particles.
pub const PARTICLE_COUNT: usize = 120;

/// Golden angle in radians.
const GOLDEN_ANGLE: f32 = 2.399963;

/// The fixed particle positions, computed once per process.
pub fn particle_positions() -> &'static [Vec3; PARTICLE_COUNT] {
    static POSITIONS: OnceLock<[Vec3; PARTICLE_COUNT]> = OnceLock::new();
    POSITIONS.get_or_init(|| {
        let mut out = [Vec3::ZERO; PARTICLE_COUNT];
        for (i, slot) in out.iter_mut().enumerate() {
            let t = i as f32 / PARTICLE_COUNT as f32;
            let phi = i as f32 * GOLDEN_ANGLE;
            let r = t.sqrt();
            *slot = Vec3::new(
                r * phi.cos() * 10.0,
                (t - 0.5) * 10.0,
                r * phi.sin() * 10.0,
            );
        }
        out
    })
}

/// Slowly spinning shell holding the particle field.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    pub rotation: f32,
}

impl ParticleField {
    const SPIN_RATE: f32 = 0.015;

    pub fn tick(&mut self, dt: f32) {
        self.rotation += Self::SPIN_RATE * dt;
    }

    /// Particle positions under the current shell rotation.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        particle_positions()
            .iter()
            .map(move |p| p.rotate_y(self.rotation))
    }
}

/// Ground grid drifting toward the viewer, wrapping every unit.
#[derive(Debug, Clone, Default)]
pub struct GridFloor {
    pub offset_z: f32,
}

impl GridFloor {
    const DRIFT_RATE: f32 = 0.3;
    /// Grid plane height.
    pub const HEIGHT: f32 = -1.2;

    pub fn tick(&mut self, dt: f32) {
        self.offset_z = (self.offset_z - Self::DRIFT_RATE * dt).rem_euclid(1.0);
    }
}

/// Rotating radar sweep wedge just above the grid.
#[derive(Debug, Clone, Default)]
pub struct RadarSweep {
    pub angle: f32,
}

impl RadarSweep {
    const SWEEP_RATE: f32 = 0.4;

    pub fn tick(&mut self, dt: f32) {
        self.angle += Self::SWEEP_RATE * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_field_is_deterministic() {
        let a: Vec<Vec3> = particle_positions().to_vec();
        let b: Vec<Vec3> = particle_positions().to_vec();
        assert_eq!(a, b);
        assert_eq!(a.len(), PARTICLE_COUNT);
    }

    #[test]
    fn first_particle_sits_at_spiral_origin() {
        let p = particle_positions()[0];
        assert_eq!(p.x, 0.0);
        assert_eq!(p.z, 0.0);
        assert_eq!(p.y, -5.0);
    }

    #[test]
    fn particles_stay_inside_the_shell() {
        for p in particle_positions().iter() {
            assert!(p.x.abs() <= 10.0);
            assert!(p.y.abs() <= 5.0);
            assert!(p.z.abs() <= 10.0);
        }
    }

    #[test]
    fn grid_offset_wraps_within_unit() {
        let mut grid = GridFloor::default();
        for _ in 0..1000 {
            grid.tick(0.016);
            assert!((0.0..1.0).contains(&grid.offset_z), "offset {}", grid.offset_z);
        }
    }

    #[test]
    fn sweep_advances_with_time() {
        let mut sweep = RadarSweep::default();
        sweep.tick(2.0);
        assert!((sweep.angle - 0.8).abs() < 1e-6);
    }
}
