//! Boot splash: a timed, skippable terminal-style reveal gating first
//! paint. Pure dt-driven state machine, no content-data dependency.
//! Dropping it cancels every pending timer.

/// The fixed boot sequence.
pub const BOOT_LINES: [&str; 7] = [
    "INITIALIZING OPERATION CLOUD COMMANDER...",
    "LOADING MISSION DATABASE............... OK",
    "ESTABLISHING SECURE CHANNEL............ OK",
    "MOUNTING AWS TELEMETRY GRID............ OK",
    "VERIFYING OPERATOR CREDENTIALS......... OK",
    "CLOUD INFRASTRUCTURE SCAN COMPLETE..... OK",
    "5 MISSIONS LOADED. STANDBY.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Revealing lines one by one.
    Playing,
    /// All lines shown; waiting out the settle delay.
    Complete,
    /// Skip requested; brief fade before closing.
    Fading,
    /// Done. The parent mounts the hub.
    Closed,
}

#[derive(Debug, Clone)]
pub struct BootSplash {
    phase: SplashPhase,
    revealed: usize,
    timer: f32,
}

impl BootSplash {
    /// The first line lands slightly later than the rest.
    const FIRST_LINE_DELAY: f32 = 0.4;
    const LINE_INTERVAL: f32 = 0.34;
    const SETTLE_DELAY: f32 = 0.8;
    const FADE_DURATION: f32 = 0.3;

    pub fn new() -> Self {
        Self {
            phase: SplashPhase::Playing,
            revealed: 0,
            timer: 0.0,
        }
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    pub fn is_closed(&self) -> bool {
        self.phase == SplashPhase::Closed
    }

    /// Lines revealed so far, in order.
    pub fn revealed_lines(&self) -> &'static [&'static str] {
        &BOOT_LINES[..self.revealed]
    }

    /// Reveal fraction for the progress bar.
    pub fn progress(&self) -> f32 {
        self.revealed as f32 / BOOT_LINES.len() as f32
    }

    /// Short-circuit the sequence (Enter/Space/Escape or skip control).
    pub fn skip(&mut self) {
        if self.phase != SplashPhase::Closed {
            self.phase = SplashPhase::Fading;
            self.timer = 0.0;
        }
    }

    /// Advance timers by elapsed time.
    pub fn tick(&mut self, dt: f32) {
        self.timer += dt;
        match self.phase {
            SplashPhase::Playing => loop {
                let interval = if self.revealed == 0 {
                    Self::FIRST_LINE_DELAY
                } else {
                    Self::LINE_INTERVAL
                };
                if self.timer < interval {
                    break;
                }
                self.timer -= interval;
                if self.revealed < BOOT_LINES.len() {
                    self.revealed += 1;
                } else {
                    self.phase = SplashPhase::Complete;
                    break;
                }
            },
            SplashPhase::Complete => {
                if self.timer >= Self::SETTLE_DELAY {
                    self.phase = SplashPhase::Closed;
                }
            }
            SplashPhase::Fading => {
                if self.timer >= Self::FADE_DURATION {
                    self.phase = SplashPhase::Closed;
                }
            }
            SplashPhase::Closed => {}
        }
    }
}

impl Default for BootSplash {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(splash: &mut BootSplash, seconds: f32) {
        // 60 fps steps so interval boundaries land naturally.
        let steps = (seconds * 60.0).round() as usize;
        for _ in 0..steps {
            splash.tick(1.0 / 60.0);
        }
    }

    #[test]
    fn first_line_lands_after_longer_delay() {
        let mut s = BootSplash::new();
        run(&mut s, 0.35);
        assert_eq!(s.revealed_lines().len(), 0);
        run(&mut s, 0.1);
        assert_eq!(s.revealed_lines().len(), 1);
        assert_eq!(s.revealed_lines()[0], BOOT_LINES[0]);
    }

    #[test]
    fn full_playback_reaches_closed() {
        let mut s = BootSplash::new();
        // 0.4 + 7×0.34 covers all reveals plus the completion beat, then
        // the 0.8 settle.
        run(&mut s, 0.4 + 7.0 * 0.34 + 0.1);
        assert_eq!(s.phase(), SplashPhase::Complete);
        assert_eq!(s.revealed_lines().len(), BOOT_LINES.len());
        run(&mut s, 0.85);
        assert!(s.is_closed());
    }

    #[test]
    fn skip_mid_playback_closes_within_fade() {
        let mut s = BootSplash::new();
        // Reach line 2 of 7.
        run(&mut s, 0.4 + 0.34 + 0.05);
        assert_eq!(s.revealed_lines().len(), 2);
        s.skip();
        assert_eq!(s.phase(), SplashPhase::Fading);
        run(&mut s, 0.31);
        assert!(s.is_closed());
        // Remaining lines were never revealed.
        assert_eq!(s.revealed_lines().len(), 2);
    }

    #[test]
    fn progress_is_monotonic() {
        let mut s = BootSplash::new();
        let mut last = s.progress();
        for _ in 0..300 {
            s.tick(1.0 / 60.0);
            let p = s.progress();
            assert!(p >= last);
            last = p;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn skip_after_close_is_a_no_op() {
        let mut s = BootSplash::new();
        run(&mut s, 5.0);
        assert!(s.is_closed());
        s.skip();
        assert!(s.is_closed());
    }
}
