//! Animated hero-stat counters.
//!
//! A counter runs 0 → target over a fixed duration in quantized steps with
//! cubic-out easing, preserving any non-numeric prefix/suffix of the
//! authored value ("$3.5M" counts the 3.5). Non-numeric values display
//! verbatim immediately. Runs once; dropping the counter cancels it.

use crate::anim::Easing;

#[derive(Debug, Clone)]
pub struct AnimatedCounter {
    prefix: String,
    suffix: String,
    /// None when the authored value has no numeric part.
    target: Option<f32>,
    raw: String,
    elapsed: f32,
    display: String,
}

impl AnimatedCounter {
    const DURATION: f32 = 1.8;
    const STEPS: u32 = 40;

    pub fn new(value: &str) -> Self {
        let numeric: String = value.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
        let target = numeric.parse::<f32>().ok();

        let prefix: String = value
            .chars()
            .take_while(|c| !c.is_ascii_digit() && *c != '.')
            .collect();
        let suffix: String = value
            .chars()
            .rev()
            .take_while(|c| !c.is_ascii_digit() && *c != '.')
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();

        let display = match target {
            Some(t) => format_value(&prefix, 0.0, t, &suffix),
            None => value.to_string(),
        };

        Self {
            prefix,
            suffix,
            target,
            raw: value.to_string(),
            elapsed: 0.0,
            display,
        }
    }

    pub fn is_done(&self) -> bool {
        self.target.is_none() || self.elapsed >= Self::DURATION
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Advance by elapsed time; the display updates on step boundaries.
    pub fn tick(&mut self, dt: f32) {
        let Some(target) = self.target else {
            return;
        };
        if self.elapsed >= Self::DURATION {
            return;
        }
        self.elapsed = (self.elapsed + dt).min(Self::DURATION);
        let step = ((self.elapsed / Self::DURATION) * Self::STEPS as f32).floor();
        let progress = step / Self::STEPS as f32;
        let current = Easing::CubicOut.apply(progress) * target;
        self.display = format_value(&self.prefix, current, target, &self.suffix);
    }

    /// The authored value string.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

fn format_value(prefix: &str, current: f32, target: f32, suffix: &str) -> String {
    if target.fract() == 0.0 {
        format!("{prefix}{}{suffix}", current.round() as i64)
    } else {
        format!("{prefix}{current:.2}{suffix}")
    }
}
