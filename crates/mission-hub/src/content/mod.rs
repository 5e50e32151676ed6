pub mod loader;
pub mod model;

pub use loader::{document, install, load_document, validate, Violation};
pub use model::{
    Certification, ContactChannel, ContactKind, Education, HeroStat, ImpactMetric, Mission,
    OpenToRole, PortfolioDocument, Profile, SkillCluster, TimelineEntry,
};
