pub mod anim;
pub mod content;
pub mod hub;
pub mod input;
pub mod math3d;
pub mod platform;
pub mod scene;
pub mod snapshot;
pub mod telemetry;

// Re-export key types at crate root for convenience
pub use anim::{damp, lerp, Easing};
pub use content::{load_document, Mission, PortfolioDocument};
pub use hub::detail::{DetailPanel, PanelResponse};
pub use hub::fallback::FallbackHub;
pub use hub::panels::{AudioToggle, CommandBar, ImpactLedger, OperationsFeed};
pub use hub::splash::{BootSplash, SplashPhase, BOOT_LINES};
pub use hub::welcome::WelcomeOverlay;
pub use hub::{HubApp, RenderMode};
pub use input::{InputEvent, InputQueue};
pub use math3d::{OrbitCamera, Projection, Vec3};
pub use platform::{Capabilities, Router, StorageFlag};
pub use scene::{HubEvent, HubScene, MissionNode, VisualTier};
pub use snapshot::{FrameSnapshot, NodeInstance, ParticleInstance};
pub use telemetry::{EventExtras, EventName, TelemetryEvent, TelemetrySink, TrackHook};
