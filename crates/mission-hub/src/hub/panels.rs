//! Persistent side panels and the command bar: pure projections of the
//! content document plus their interaction dispatch. The operations feed
//! shows profile and timeline; the impact ledger shows animated hero stats
//! and skills; the command bar exposes contact channels with their
//! authored tracking events.

use crate::content::{
    Certification, ContactChannel, ContactKind, Education, OpenToRole, PortfolioDocument, Profile,
    SkillCluster, TimelineEntry,
};
use serde::Serialize;

use crate::hub::counter::AnimatedCounter;
use crate::telemetry::{EventExtras, EventName, TelemetrySink};

/// One row of the impact ledger's stat block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerRow {
    pub id: String,
    pub display: String,
    pub label: String,
}

/// Hero stats with running counters, plus the skills grid.
pub struct ImpactLedger {
    counters: Vec<(String, String, AnimatedCounter)>,
}

impl ImpactLedger {
    pub fn new(doc: &PortfolioDocument) -> Self {
        Self {
            counters: doc
                .hero_stats
                .iter()
                .map(|stat| {
                    let full = format!("{}{}", stat.value, stat.suffix.as_deref().unwrap_or(""));
                    (stat.id.clone(), stat.label.clone(), AnimatedCounter::new(&full))
                })
                .collect(),
        }
    }

    pub fn tick(&mut self, dt: f32) {
        for (_, _, counter) in &mut self.counters {
            counter.tick(dt);
        }
    }

    pub fn rows(&self) -> Vec<LedgerRow> {
        self.counters
            .iter()
            .map(|(id, label, counter)| LedgerRow {
                id: id.clone(),
                display: counter.display().to_string(),
                label: label.clone(),
            })
            .collect()
    }

    pub fn is_settled(&self) -> bool {
        self.counters.iter().all(|(_, _, c)| c.is_done())
    }

    /// Current rows serialized for the bridge; stat text cannot travel
    /// through the float snapshot.
    pub fn rows_json(&self) -> String {
        serde_json::to_string(&self.rows()).unwrap_or_else(|_| "[]".to_string())
    }
}

/// The operations feed is a straight read of the document; it has no state
/// of its own.
#[derive(Debug, Clone, Copy)]
pub struct OperationsFeed<'a> {
    pub profile: &'a Profile,
    pub timeline: &'a [TimelineEntry],
    pub education: &'a [Education],
    pub certifications: &'a [Certification],
}

impl<'a> OperationsFeed<'a> {
    pub fn of(doc: &'a PortfolioDocument) -> Self {
        Self {
            profile: &doc.profile,
            timeline: &doc.timeline,
            education: &doc.education,
            certifications: &doc.certifications,
        }
    }
}

/// Skills grid shown under the impact ledger, in authored order.
pub fn skill_clusters(doc: &PortfolioDocument) -> &[SkillCluster] {
    &doc.skills
}

/// Open-to roles shown under the impact ledger.
pub fn open_to_roles(doc: &PortfolioDocument) -> &[OpenToRole] {
    &doc.open_to_roles
}

/// Command bar over the contact channels.
pub struct CommandBar;

impl CommandBar {
    /// The primary action (email), when authored.
    pub fn primary(doc: &PortfolioDocument) -> Option<&ContactChannel> {
        doc.contact.iter().find(|c| c.kind == ContactKind::Email)
    }

    /// Everything except the primary, in authored order.
    pub fn secondaries(doc: &PortfolioDocument) -> Vec<&ContactChannel> {
        doc.contact
            .iter()
            .filter(|c| c.kind != ContactKind::Email)
            .collect()
    }

    /// Dispatch a channel's authored tracking event. Unknown event names
    /// are dropped by the sink; activation itself cannot fail.
    pub fn activate(channel: &ContactChannel, sink: &TelemetrySink) {
        sink.track_named(&channel.tracking_event, EventExtras::source("command_bar"));
    }
}

/// Ambient audio toggle. The audio graph lives on the host side; the core
/// tracks the on/off state and emits the telemetry event.
#[derive(Debug, Default)]
pub struct AudioToggle {
    enabled: bool,
}

impl AudioToggle {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn toggle(&mut self, sink: &TelemetrySink) -> bool {
        self.enabled = !self.enabled;
        sink.track(
            EventName::AudioToggle,
            EventExtras::source("audio_toggle_button"),
        );
        self.enabled
    }
}
