//! Toast notification lifecycle and styling.
//!
//! A notification moves through a fixed timeline measured from the moment it
//! is appended to the page:
//!
//! | At | Phase | Pose |
//! |----|-------|------|
//! | 0 | `Created` | hidden (transparent, shifted right) |
//! | `entry_delay_ms` | `Visible` | shown |
//! | `dwell_ms` | `FadingOut` | hidden |
//! | `dwell_ms + exit_ms` | `Removed` | detached |
//!
//! The state machine is pure; the `dom` module drives it with timers.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    FAILURE_COLOR, NOTIFICATION_DWELL_MS, NOTIFICATION_ENTRY_DELAY_MS, NOTIFICATION_EXIT_MS,
    SUCCESS_COLOR,
};

/// Named durations of the notification timeline, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationTimings {
    /// Append to slide-in.
    pub entry_delay_ms: u32,
    /// Append to fade-out.
    pub dwell_ms: u32,
    /// Fade-out to removal; also the CSS transition length.
    pub exit_ms: u32,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            entry_delay_ms: NOTIFICATION_ENTRY_DELAY_MS,
            dwell_ms: NOTIFICATION_DWELL_MS,
            exit_ms: NOTIFICATION_EXIT_MS,
        }
    }
}

impl NotificationTimings {
    /// Milliseconds after append at which the element is detached.
    #[must_use]
    pub fn removal_at_ms(&self) -> u32 {
        self.dwell_ms.saturating_add(self.exit_ms)
    }

    /// Timer offsets (from append) for every transition after `Created`.
    #[must_use]
    pub fn schedule(&self) -> [(u32, Phase); 3] {
        [
            (self.entry_delay_ms, Phase::Visible),
            (self.dwell_ms, Phase::FadingOut),
            (self.removal_at_ms(), Phase::Removed),
        ]
    }

    /// The phase a notification is in `elapsed_ms` after it was appended.
    #[cfg(test)]
    pub(crate) fn phase_at(&self, elapsed_ms: u32) -> Phase {
        self.schedule()
            .into_iter()
            .filter(|(at, _)| elapsed_ms >= *at)
            .map(|(_, phase)| phase)
            .max()
            .unwrap_or(Phase::Created)
    }

    /// CSS `transition` value matching `exit_ms`.
    #[must_use]
    pub fn transition_css(&self) -> String {
        format!("all {}s ease", f64::from(self.exit_ms) / 1000.0)
    }
}

/// Lifecycle phase. Ordered: a notification only ever moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Created,
    Visible,
    FadingOut,
    Removed,
}

/// Opacity and transform for one phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pose {
    pub opacity: &'static str,
    pub transform: &'static str,
}

const HIDDEN: Pose = Pose { opacity: "0", transform: "translateX(100%)" };
const SHOWN: Pose = Pose { opacity: "1", transform: "translateX(0)" };

impl Phase {
    #[must_use]
    pub fn pose(self) -> Pose {
        match self {
            Self::Visible => SHOWN,
            Self::Created | Self::FadingOut | Self::Removed => HIDDEN,
        }
    }
}

/// Success (green) or failure (red).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Success,
    Failure,
}

impl Tone {
    #[must_use]
    pub fn from_success(is_success: bool) -> Self {
        if is_success { Self::Success } else { Self::Failure }
    }

    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Success => SUCCESS_COLOR,
            Self::Failure => FAILURE_COLOR,
        }
    }
}

/// One toast and where it is in its lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    message: String,
    tone: Tone,
    phase: Phase,
}

impl Notification {
    #[must_use]
    pub fn new(message: impl Into<String>, tone: Tone) -> Self {
        Self { message: message.into(), tone, phase: Phase::Created }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn tone(&self) -> Tone {
        self.tone
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Move to `target` if it is later than the current phase.
    ///
    /// Returns `false` (and changes nothing) for stale or repeated ticks, so
    /// a timer firing late can never pull a removed toast back on screen.
    pub fn advance_to(&mut self, target: Phase) -> bool {
        if target <= self.phase {
            return false;
        }
        self.phase = target;
        true
    }

    /// Full inline style for the element at creation, in the hidden pose.
    #[must_use]
    pub fn css_text(&self, timings: &NotificationTimings) -> String {
        let pose = Phase::Created.pose();
        format!(
            "position: fixed; top: 20px; right: 20px; padding: 16px 20px; \
             border-radius: 8px; color: white; font-weight: 500; z-index: 1000; \
             opacity: {}; transform: {}; transition: {}; max-width: 300px; \
             background-color: {}; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);",
            pose.opacity,
            pose.transform,
            timings.transition_css(),
            self.tone.background(),
        )
    }
}
