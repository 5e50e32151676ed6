//! Best-effort interaction telemetry.
//!
//! Fire-and-forget: `track` never fails, never blocks, and guarantees at
//! most one delivery attempt. Without an installed hook it does nothing
//! observable beyond a debug-build log line.

use std::fmt;

use chrono::{SecondsFormat, Utc};

/// The closed set of interaction events the hub emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventName {
    MissionOpen,
    CtaClick,
    ResumeDownload,
    ContactClick,
    AudioToggle,
}

impl EventName {
    /// Stable wire name forwarded to the analytics hook.
    pub fn as_str(self) -> &'static str {
        match self {
            EventName::MissionOpen => "mission_open",
            EventName::CtaClick => "cta_click",
            EventName::ResumeDownload => "resume_download",
            EventName::ContactClick => "contact_click",
            EventName::AudioToggle => "audio_toggle",
        }
    }

    /// Parse a wire name, e.g. a `trackingEvent` string authored in content.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "mission_open" => Some(EventName::MissionOpen),
            "cta_click" => Some(EventName::CtaClick),
            "resume_download" => Some(EventName::ResumeDownload),
            "contact_click" => Some(EventName::ContactClick),
            "audio_toggle" => Some(EventName::AudioToggle),
            _ => None,
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional context attached to an event.
#[derive(Debug, Clone, Default)]
pub struct EventExtras {
    pub source: Option<String>,
    pub mission_id: Option<String>,
}

impl EventExtras {
    pub fn source(source: &str) -> Self {
        Self {
            source: Some(source.to_string()),
            mission_id: None,
        }
    }

    pub fn with_mission(mut self, mission_id: &str) -> Self {
        self.mission_id = Some(mission_id.to_string());
        self
    }
}

/// A fully-built event record as handed to the hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryEvent {
    pub name: EventName,
    /// Where in the UI the event originated. "unknown" when unspecified.
    pub source: String,
    /// ISO-8601 capture time.
    pub timestamp: String,
    /// Correlated mission, when the event concerns one.
    pub mission_id: Option<String>,
}

/// The injected forwarding function (browser analytics, test capture).
pub type TrackHook = Box<dyn Fn(&TelemetryEvent)>;

/// Sink for interaction events. No buffering, no retry, no delivery
/// guarantee.
pub struct TelemetrySink {
    hook: Option<TrackHook>,
}

impl TelemetrySink {
    /// A sink with no forwarding hook (hook absent in this environment).
    pub fn disconnected() -> Self {
        Self { hook: None }
    }

    /// A sink forwarding every event to `hook`.
    pub fn with_hook(hook: TrackHook) -> Self {
        Self { hook: Some(hook) }
    }

    /// Record an interaction event. Side effect only; cannot fail.
    pub fn track(&self, name: EventName, extras: EventExtras) {
        let event = TelemetryEvent {
            name,
            source: extras.source.unwrap_or_else(|| "unknown".to_string()),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            mission_id: extras.mission_id,
        };

        if let Some(hook) = &self.hook {
            hook(&event);
        }

        if cfg!(debug_assertions) {
            log::debug!("[telemetry] {} source={}", event.name, event.source);
        }
    }

    /// Track an event named by a content-authored wire string. Unknown
    /// names are dropped (debug log only) — the event set is closed.
    pub fn track_named(&self, name: &str, extras: EventExtras) {
        match EventName::parse(name) {
            Some(event) => self.track(event, extras),
            None => log::debug!("[telemetry] dropping unknown event name {name:?}"),
        }
    }
}

impl Default for TelemetrySink {
    fn default() -> Self {
        Self::disconnected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn capturing_sink() -> (TelemetrySink, Rc<RefCell<Vec<TelemetryEvent>>>) {
        let captured = Rc::new(RefCell::new(Vec::new()));
        let inner = Rc::clone(&captured);
        let sink = TelemetrySink::with_hook(Box::new(move |e| {
            inner.borrow_mut().push(e.clone());
        }));
        (sink, captured)
    }

    #[test]
    fn track_without_hook_is_silent() {
        let sink = TelemetrySink::disconnected();
        sink.track(EventName::CtaClick, EventExtras::default());
        sink.track(
            EventName::MissionOpen,
            EventExtras::source("modal").with_mission("alpha"),
        );
        // Nothing to assert beyond "did not panic".
    }

    #[test]
    fn source_defaults_to_unknown() {
        let (sink, captured) = capturing_sink();
        sink.track(EventName::ResumeDownload, EventExtras::default());
        let events = captured.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].source, "unknown");
        assert_eq!(events[0].mission_id, None);
    }

    #[test]
    fn mission_id_included_only_when_given() {
        let (sink, captured) = capturing_sink();
        sink.track(
            EventName::MissionOpen,
            EventExtras::source("fallback_2d").with_mission("beta"),
        );
        let events = captured.borrow();
        assert_eq!(events[0].mission_id.as_deref(), Some("beta"));
        assert_eq!(events[0].source, "fallback_2d");
        assert_eq!(events[0].name, EventName::MissionOpen);
    }

    #[test]
    fn timestamp_is_iso8601_utc() {
        let (sink, captured) = capturing_sink();
        sink.track(EventName::AudioToggle, EventExtras::default());
        let ts = captured.borrow()[0].timestamp.clone();
        assert!(ts.ends_with('Z'), "timestamp was {ts}");
        assert!(ts.contains('T'));
    }

    #[test]
    fn unknown_named_event_is_dropped() {
        let (sink, captured) = capturing_sink();
        sink.track_named("self_destruct", EventExtras::source("command_bar"));
        assert!(captured.borrow().is_empty());
        sink.track_named("cta_click", EventExtras::source("command_bar"));
        assert_eq!(captured.borrow().len(), 1);
    }

    #[test]
    fn wire_names_round_trip() {
        for name in [
            EventName::MissionOpen,
            EventName::CtaClick,
            EventName::ResumeDownload,
            EventName::ContactClick,
            EventName::AudioToggle,
        ] {
            assert_eq!(EventName::parse(name.as_str()), Some(name));
        }
    }
}
