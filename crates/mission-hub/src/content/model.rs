use serde::{Deserialize, Serialize};

/// The operator profile shown in the header and operations feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    pub summary: String,
}

/// A headline statistic (e.g. "12+ years"). `value` may be numeric-with-suffix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeroStat {
    pub id: String,
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub suffix: Option<String>,
}

/// A single metric inside a mission's impact block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImpactMetric {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub suffix: Option<String>,
}

/// One work-history entry with narrative, metrics, and a 3D display position.
///
/// `id` is the stable key used for selection, fragment routing, and telemetry
/// correlation. `position` is authored, never computed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: String,
    pub title: String,
    pub tagline: String,
    pub challenge: String,
    pub solution: String,
    #[serde(default)]
    pub impact_metrics: Vec<ImpactMetric>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub period: String,
    pub company: String,
    /// Fixed spatial coordinate in the 3D hub.
    pub position: [f32; 3],
    /// Hex color string, used for the node's glow, ring, label, and accents.
    pub color: String,
}

impl Mission {
    /// Parse `color` as `#rrggbb` into linear 0..1 components.
    /// Falls back to white: the loader validates shape, not color syntax.
    pub fn color_rgb(&self) -> [f32; 3] {
        parse_hex_color(&self.color).unwrap_or([1.0, 1.0, 1.0])
    }
}

/// A named group of skills for the capabilities grid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillCluster {
    pub category: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// A career timeline entry. Insertion order is display order; never re-sorted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub period: String,
    pub role: String,
    pub company: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year: String,
}

/// Kind of contact channel in the command bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    #[default]
    Email,
    Phone,
    Linkedin,
    Resume,
}

/// A clickable contact channel. `tracking_event` names the telemetry event
/// emitted when activated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactChannel {
    #[serde(rename = "type")]
    pub kind: ContactKind,
    pub label: String,
    pub href: String,
    pub tracking_event: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenToRole {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// The root content document. Loaded once at startup, immutable afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDocument {
    pub profile: Profile,
    #[serde(default)]
    pub hero_stats: Vec<HeroStat>,
    #[serde(default)]
    pub skills: Vec<SkillCluster>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub missions: Vec<Mission>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub open_to_roles: Vec<OpenToRole>,
    #[serde(default)]
    pub contact: Vec<ContactChannel>,
}

impl PortfolioDocument {
    /// Look up a mission by id.
    pub fn mission(&self, id: &str) -> Option<&Mission> {
        self.missions.iter().find(|m| m.id == id)
    }
}

fn parse_hex_color(s: &str) -> Option<[f32; 3]> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0])
}
