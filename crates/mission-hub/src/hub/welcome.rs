//! First-visit welcome overlay. Visible unless the `welcomeSeen` flag is
//! already present; dismissal writes the flag once. With no storage
//! capability the overlay still shows and nothing persists.

use crate::platform::StorageFlag;

pub struct WelcomeOverlay {
    visible: bool,
    flag_written: bool,
}

impl WelcomeOverlay {
    /// The single persisted key. Presence is the entire contract.
    pub const FLAG: &'static str = "welcomeSeen";

    pub fn new(storage: Option<&dyn StorageFlag>) -> Self {
        let visible = match storage {
            Some(s) => !s.is_set(Self::FLAG),
            None => true,
        };
        Self {
            visible,
            flag_written: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn dismiss(&mut self, storage: Option<&dyn StorageFlag>) {
        if !self.visible {
            return;
        }
        self.visible = false;
        if let Some(s) = storage {
            if !self.flag_written {
                s.set(Self::FLAG);
                self.flag_written = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryFlags;

    #[test]
    fn visible_on_first_visit_hidden_after() {
        let flags = MemoryFlags::default();
        let mut overlay = WelcomeOverlay::new(Some(&flags));
        assert!(overlay.is_visible());
        overlay.dismiss(Some(&flags));
        assert!(!overlay.is_visible());
        assert!(flags.is_set(WelcomeOverlay::FLAG));

        let next_session = WelcomeOverlay::new(Some(&flags));
        assert!(!next_session.is_visible());
    }

    #[test]
    fn no_storage_still_shows_and_never_persists() {
        let mut overlay = WelcomeOverlay::new(None);
        assert!(overlay.is_visible());
        overlay.dismiss(None);
        assert!(!overlay.is_visible());
    }

    #[test]
    fn repeated_dismiss_writes_flag_once() {
        let flags = MemoryFlags::default();
        let mut overlay = WelcomeOverlay::new(Some(&flags));
        overlay.dismiss(Some(&flags));
        overlay.dismiss(Some(&flags));
        assert!(flags.is_set(WelcomeOverlay::FLAG));
    }
}
