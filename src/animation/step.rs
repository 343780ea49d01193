//! One unit of an animation sequence.

use std::time::Duration;

use egui::{Color32, Vec2};

use crate::scene::ElementId;

/// How the target element moves while the step plays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// No movement; only the highlight/settle colours apply.
    Still,
    /// Rise by `height` and come back down (ease-out each way).
    Lift { height: f32 },
    /// Single sine hop of `height`.
    Bounce { height: f32 },
    /// Scale oscillation around 1.0.
    Pulse { amplitude: f32, cycles: f32 },
    /// Target travels by `delta` while `partner` travels by `-delta`, both
    /// following an arc of height `arc`.
    Swap {
        partner: ElementId,
        delta: Vec2,
        arc: f32,
    },
}

/// Colour policy applied when the motion ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    /// Back to the colour the element had when the step began.
    Restore,
    /// Leave the highlight colour on.
    Keep,
    /// Switch to a new colour.
    Recolor(Color32),
    /// Drop any override and show the scene's base colour.
    Clear,
}

/// A single element animation: highlight, move for `duration`, settle,
/// then pause for `hold` before the next step.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub target: ElementId,
    pub motion: Motion,
    pub duration: Duration,
    pub hold: Duration,
    pub highlight: Option<Color32>,
    pub settle: Settle,
}

impl Step {
    /// A zero-length step on `target` that changes nothing yet.
    pub fn new(target: ElementId) -> Self {
        Self {
            target,
            motion: Motion::Still,
            duration: Duration::ZERO,
            hold: Duration::ZERO,
            highlight: None,
            settle: Settle::Restore,
        }
    }

    /// Instantly paints `target` with `color`, which stays afterwards.
    pub fn recolor(target: ElementId, color: Color32) -> Self {
        Self::new(target).highlight(color).settle(Settle::Keep)
    }

    /// Instantly returns `target` to its base colour.
    pub fn clear(target: ElementId) -> Self {
        Self::new(target).settle(Settle::Clear)
    }

    pub fn motion(mut self, motion: Motion, duration: Duration) -> Self {
        self.motion = motion;
        self.duration = duration;
        self
    }

    pub fn highlight(mut self, color: Color32) -> Self {
        self.highlight = Some(color);
        self
    }

    pub fn settle(mut self, settle: Settle) -> Self {
        self.settle = settle;
        self
    }

    pub fn hold(mut self, hold: Duration) -> Self {
        self.hold = hold;
        self
    }

    /// Element moved along with the target, if any.
    pub fn partner(&self) -> Option<ElementId> {
        match self.motion {
            Motion::Swap { partner, .. } => Some(partner),
            _ => None,
        }
    }

    /// Motion time plus the trailing pause.
    pub fn total(&self) -> Duration {
        self.duration + self.hold
    }
}

/// Visual override the sequencer keeps for an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementStyle {
    /// Displacement from the scene position, in world units (y up).
    pub offset: Vec2,
    pub scale: f32,
    /// `None` means the scene's base colour.
    pub color: Option<Color32>,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
            color: None,
        }
    }
}

impl ElementStyle {
    pub fn is_identity(&self) -> bool {
        self.offset == Vec2::ZERO && self.scale == 1.0 && self.color.is_none()
    }

    /// Same colour, transforms back at rest.
    pub fn at_rest(&self) -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
            color: self.color,
        }
    }
}
