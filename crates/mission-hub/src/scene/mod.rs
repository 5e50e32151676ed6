pub mod composer;
pub mod decor;
pub mod node;

pub use composer::{HubEvent, HubScene};
pub use decor::{particle_positions, GridFloor, ParticleField, RadarSweep, PARTICLE_COUNT};
pub use node::{MissionNode, VisualTier};
