//! 2D fallback hub: the same content model rendered as a scrollable
//! document when the 3D scene is unavailable or undesired. Mission detail
//! opens the same panel as the 3D path; additionally the location fragment
//! tracks the open mission so detail states are deep-linkable and
//! back-navigable.

use crate::content::{Mission, PortfolioDocument};
use crate::platform::Router;

/// Header block above the grids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackHeader {
    pub banner: String,
    pub name: String,
    pub title: String,
    pub contact_line: String,
}

/// One cell of the hero-stat grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCell {
    pub id: String,
    pub display: String,
    pub label: String,
}

/// One clickable mission card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionCard {
    pub id: String,
    pub title: String,
    pub meta: String,
    pub tagline: String,
    pub color: String,
}

/// One cell of the skills grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCell {
    pub category: String,
    pub skills: Vec<String>,
}

pub struct FallbackHub {
    router: Box<dyn Router>,
}

impl FallbackHub {
    pub fn new(router: Box<dyn Router>) -> Self {
        Self { router }
    }

    pub fn header(&self, doc: &PortfolioDocument) -> FallbackHeader {
        FallbackHeader {
            banner: "OPERATION CLOUD COMMANDER".to_string(),
            name: doc.profile.name.clone(),
            title: doc.profile.title.clone(),
            contact_line: format!(
                "{} · {} · {}",
                doc.profile.location, doc.profile.email, doc.profile.phone
            ),
        }
    }

    pub fn stat_cells(&self, doc: &PortfolioDocument) -> Vec<StatCell> {
        doc.hero_stats
            .iter()
            .map(|stat| StatCell {
                id: stat.id.clone(),
                display: format!("{}{}", stat.value, stat.suffix.as_deref().unwrap_or("")),
                label: stat.label.clone(),
            })
            .collect()
    }

    pub fn mission_cards(&self, doc: &PortfolioDocument) -> Vec<MissionCard> {
        doc.missions
            .iter()
            .map(|m| MissionCard {
                id: m.id.clone(),
                title: m.title.clone(),
                meta: format!("{} · {}", m.period, m.company),
                tagline: m.tagline.clone(),
                color: m.color.clone(),
            })
            .collect()
    }

    pub fn skill_cells(&self, doc: &PortfolioDocument) -> Vec<SkillCell> {
        doc.skills
            .iter()
            .map(|cluster| SkillCell {
                category: cluster.category.clone(),
                skills: cluster.skills.clone(),
            })
            .collect()
    }

    /// A mission card was activated: point the fragment at it. The detail
    /// panel itself (and its single open event) is the container's job.
    pub fn on_mission_open(&self, mission: &Mission) {
        self.router.push_fragment(&mission.id);
    }

    /// The detail panel closed: clear the fragment.
    pub fn on_mission_close(&self) {
        self.router.clear_fragment();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{HeroStat, Mission, PortfolioDocument, SkillCluster};
    use crate::platform::MemoryRouter;
    use std::rc::Rc;

    fn doc() -> PortfolioDocument {
        PortfolioDocument {
            hero_stats: vec![HeroStat {
                id: "years".into(),
                value: "12".into(),
                label: "Years".into(),
                suffix: Some("+".into()),
            }],
            skills: vec![SkillCluster {
                category: "Cloud".into(),
                skills: vec!["AWS".into(), "GCP".into()],
            }],
            missions: vec![Mission {
                id: "alpha".into(),
                title: "Alpha".into(),
                period: "2021".into(),
                company: "Acme".into(),
                tagline: "Lift and shift".into(),
                color: "#00f5d4".into(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    struct SharedRouter(Rc<MemoryRouter>);

    impl Router for SharedRouter {
        fn push_fragment(&self, fragment: &str) {
            self.0.push_fragment(fragment);
        }
        fn clear_fragment(&self) {
            self.0.clear_fragment();
        }
    }

    #[test]
    fn stat_cells_join_value_and_suffix() {
        let hub = FallbackHub::new(Box::new(MemoryRouter::default()));
        let cells = hub.stat_cells(&doc());
        assert_eq!(cells[0].display, "12+");
        assert_eq!(cells[0].label, "Years");
    }

    #[test]
    fn mission_cards_carry_meta_line() {
        let hub = FallbackHub::new(Box::new(MemoryRouter::default()));
        let cards = hub.mission_cards(&doc());
        assert_eq!(cards[0].meta, "2021 · Acme");
        assert_eq!(cards[0].id, "alpha");
    }

    #[test]
    fn fragment_follows_open_and_close() {
        let router = Rc::new(MemoryRouter::default());
        let hub = FallbackHub::new(Box::new(SharedRouter(Rc::clone(&router))));
        let d = doc();
        hub.on_mission_open(&d.missions[0]);
        assert_eq!(router.fragment().as_deref(), Some("alpha"));
        hub.on_mission_close();
        assert_eq!(router.fragment(), None);
    }

    #[test]
    fn skills_grid_preserves_order() {
        let hub = FallbackHub::new(Box::new(MemoryRouter::default()));
        let cells = hub.skill_cells(&doc());
        assert_eq!(cells[0].skills, vec!["AWS", "GCP"]);
    }
}
