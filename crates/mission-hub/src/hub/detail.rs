//! Mission detail panel state.
//!
//! Opening the panel emits exactly one `mission_open` event per mount.
//! Close paths: close button, backdrop click, Escape — each resolves to a
//! single close signal; pointer events inside the panel are consumed so
//! they neither close it nor reach background handlers.

use crate::content::Mission;
use crate::telemetry::{EventExtras, EventName, TelemetrySink};

/// How a pointer/key event against an open panel resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelResponse {
    /// Close the panel. Emitted at most once per mount.
    Close,
    /// The panel swallowed the event; background handlers must not run.
    Consumed,
}

#[derive(Debug)]
pub struct DetailPanel {
    mission_id: String,
    closing: bool,
}

impl DetailPanel {
    /// Mount the panel for a mission. Fires the open event here — once —
    /// regardless of how often the panel is re-read afterwards.
    pub fn open(mission: &Mission, sink: &TelemetrySink, source: &str) -> Self {
        sink.track(
            EventName::MissionOpen,
            EventExtras::source(source).with_mission(&mission.id),
        );
        Self {
            mission_id: mission.id.clone(),
            closing: false,
        }
    }

    pub fn mission_id(&self) -> &str {
        &self.mission_id
    }

    /// A pointer press while the panel is open. `inside` is whether it
    /// landed within the panel bounds.
    pub fn on_pointer_down(&mut self, inside: bool) -> PanelResponse {
        if inside {
            PanelResponse::Consumed
        } else {
            self.close()
        }
    }

    /// Escape key.
    pub fn on_escape(&mut self) -> PanelResponse {
        self.close()
    }

    /// Explicit close control.
    pub fn on_close_button(&mut self) -> PanelResponse {
        self.close()
    }

    fn close(&mut self) -> PanelResponse {
        if self.closing {
            PanelResponse::Consumed
        } else {
            self.closing = true;
            PanelResponse::Close
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Mission;
    use crate::telemetry::{TelemetryEvent, TelemetrySink};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn mission() -> Mission {
        Mission {
            id: "alpha".into(),
            title: "Alpha".into(),
            ..Default::default()
        }
    }

    fn capturing_sink() -> (TelemetrySink, Rc<RefCell<Vec<TelemetryEvent>>>) {
        let captured = Rc::new(RefCell::new(Vec::new()));
        let inner = Rc::clone(&captured);
        let sink = TelemetrySink::with_hook(Box::new(move |e| {
            inner.borrow_mut().push(e.clone());
        }));
        (sink, captured)
    }

    #[test]
    fn open_emits_exactly_one_mission_open() {
        let (sink, captured) = capturing_sink();
        let panel = DetailPanel::open(&mission(), &sink, "modal");
        // Re-reads do not re-emit.
        let _ = panel.mission_id();
        let _ = panel.mission_id();
        let events = captured.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, EventName::MissionOpen);
        assert_eq!(events[0].mission_id.as_deref(), Some("alpha"));
        assert_eq!(events[0].source, "modal");
    }

    #[test]
    fn escape_closes_once() {
        let (sink, _) = capturing_sink();
        let mut panel = DetailPanel::open(&mission(), &sink, "modal");
        assert_eq!(panel.on_escape(), PanelResponse::Close);
        assert_eq!(panel.on_escape(), PanelResponse::Consumed);
    }

    #[test]
    fn backdrop_click_closes_inside_click_does_not() {
        let (sink, _) = capturing_sink();
        let mut panel = DetailPanel::open(&mission(), &sink, "modal");
        assert_eq!(panel.on_pointer_down(true), PanelResponse::Consumed);
        assert_eq!(panel.on_pointer_down(true), PanelResponse::Consumed);
        assert_eq!(panel.on_pointer_down(false), PanelResponse::Close);
    }

    #[test]
    fn close_button_closes_once() {
        let (sink, _) = capturing_sink();
        let mut panel = DetailPanel::open(&mission(), &sink, "modal");
        assert_eq!(panel.on_close_button(), PanelResponse::Close);
        assert_eq!(panel.on_close_button(), PanelResponse::Consumed);
    }
}
