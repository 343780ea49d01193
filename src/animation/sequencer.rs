//! Frame-driven step sequencer.
//!
//! One sequencer per widget. It plays [`Step`]s strictly one after another,
//! refuses new sequences while busy (no queuing), supports cancellation and
//! reports progress through [`SequenceEvent`]s returned from [`Sequencer::advance`].
//!
//! Time only moves when the caller advances it, so the whole thing is
//! deterministic and testable without a display.

use std::collections::HashMap;
use std::time::Duration;

use egui::Vec2;
use tracing::debug;

use crate::animation::easing;
use crate::animation::step::{ElementStyle, Motion, Settle, Step};
use crate::error::{Result, VizError};
use crate::scene::ElementId;

/// Where the sequencer is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequencerState {
    #[default]
    Idle,
    Running {
        step: usize,
        elapsed: Duration,
        /// True once the motion finished and the trailing hold is running.
        holding: bool,
    },
    /// Cancel requested; resolved on the next `advance`. `interrupted` is
    /// the step whose motion was still playing, if any.
    Cancelling { interrupted: Option<usize> },
}

/// Notifications produced while advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceEvent {
    StepStarted(usize),
    /// Motion and settle of step `i` are done (its hold may still follow).
    StepCompleted(usize),
    Finished,
    Cancelled,
}

/// Styles captured when a step begins, restored or built upon while it plays.
#[derive(Debug, Clone, Copy)]
struct Captured {
    target: ElementStyle,
    partner: Option<ElementStyle>,
}

#[derive(Debug, Default)]
pub struct Sequencer {
    steps: Vec<Step>,
    state: SequencerState,
    captured: Option<Captured>,
    overlay: HashMap<ElementId, ElementStyle>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// True whenever a sequence is running or being cancelled.
    pub fn is_busy(&self) -> bool {
        !matches!(self.state, SequencerState::Idle)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the step currently playing or holding.
    pub fn current_step(&self) -> Option<usize> {
        match self.state {
            SequencerState::Running { step, .. } => Some(step),
            _ => None,
        }
    }

    /// Override for `id`, identity when the element is untouched.
    pub fn style(&self, id: ElementId) -> ElementStyle {
        self.overlay.get(&id).copied().unwrap_or_default()
    }

    /// Drops every colour and transform override.
    ///
    /// Ignored while busy so a running step never loses its captured base.
    pub fn clear_overlay(&mut self) {
        if !self.is_busy() {
            self.overlay.clear();
        }
    }

    /// Starts playing `steps`. Clears any overlay left by a previous run.
    ///
    /// Fails with [`VizError::Busy`] if a sequence is already active; the
    /// request is not queued.
    pub fn start(&mut self, steps: Vec<Step>) -> Result<Vec<SequenceEvent>> {
        if self.is_busy() {
            debug!("sequence refused: busy");
            return Err(VizError::Busy);
        }

        self.overlay.clear();
        self.steps = steps;
        self.captured = None;

        let mut events = Vec::new();
        if self.steps.is_empty() {
            events.push(SequenceEvent::Finished);
            return Ok(events);
        }

        debug!(steps = self.steps.len(), "sequence started");
        self.state = SequencerState::Running {
            step: 0,
            elapsed: Duration::ZERO,
            holding: false,
        };
        self.begin_step(0, &mut events);
        // Zero-length leading steps (instant recolours) apply immediately.
        events.extend(self.advance(Duration::ZERO));
        Ok(events)
    }

    /// Requests cancellation. Returns false when nothing is running.
    pub fn cancel(&mut self) -> bool {
        match self.state {
            SequencerState::Running { step, holding, .. } => {
                debug!("sequence cancel requested");
                self.state = SequencerState::Cancelling {
                    interrupted: (!holding).then_some(step),
                };
                true
            }
            _ => false,
        }
    }

    /// Moves time forward by `dt`, sampling the current step and walking
    /// through as many step boundaries as the time budget covers.
    pub fn advance(&mut self, dt: Duration) -> Vec<SequenceEvent> {
        let mut events = Vec::new();

        if let SequencerState::Cancelling { interrupted } = self.state {
            self.finish_cancel(interrupted, &mut events);
            return events;
        }

        let mut budget = dt;
        while let SequencerState::Running {
            step,
            elapsed,
            holding,
        } = self.state
        {
            let (duration, hold) = {
                let current = &self.steps[step];
                (current.duration, current.hold)
            };
            if !holding {
                let remaining = duration.saturating_sub(elapsed);
                if budget < remaining {
                    let elapsed = elapsed + budget;
                    let progress = elapsed.as_secs_f32() / duration.as_secs_f32();
                    self.sample(step, progress);
                    self.state = SequencerState::Running {
                        step,
                        elapsed,
                        holding: false,
                    };
                    break;
                }
                budget -= remaining;
                self.complete_step(step, &mut events);
                self.state = SequencerState::Running {
                    step,
                    elapsed: Duration::ZERO,
                    holding: true,
                };
            } else {
                let remaining = hold.saturating_sub(elapsed);
                if budget < remaining {
                    self.state = SequencerState::Running {
                        step,
                        elapsed: elapsed + budget,
                        holding: true,
                    };
                    break;
                }
                budget -= remaining;
                let next = step + 1;
                if next >= self.steps.len() {
                    self.state = SequencerState::Idle;
                    self.captured = None;
                    debug!("sequence finished");
                    events.push(SequenceEvent::Finished);
                    break;
                }
                self.state = SequencerState::Running {
                    step: next,
                    elapsed: Duration::ZERO,
                    holding: false,
                };
                self.begin_step(next, &mut events);
            }
        }

        events
    }

    /// Plays until idle in fixed increments. Mostly for tests and headless use.
    pub fn run_to_end(&mut self, frame: Duration) -> Vec<SequenceEvent> {
        let mut events = Vec::new();
        while self.is_busy() {
            events.extend(self.advance(frame));
        }
        events
    }

    fn begin_step(&mut self, index: usize, events: &mut Vec<SequenceEvent>) {
        let (target_id, partner_id, highlight) = {
            let step = &self.steps[index];
            (step.target, step.partner(), step.highlight)
        };
        let target = self.style(target_id);
        let partner = partner_id.map(|p| self.style(p));
        self.captured = Some(Captured { target, partner });

        if let Some(color) = highlight {
            self.overlay.entry(target_id).or_default().color = Some(color);
        }
        events.push(SequenceEvent::StepStarted(index));
    }

    fn sample(&mut self, index: usize, progress: f32) {
        let Some(captured) = self.captured else {
            return;
        };
        let step = self.steps[index].clone();
        let base = captured.target;

        match step.motion {
            Motion::Still => {}
            Motion::Lift { height } => {
                let style = self.overlay.entry(step.target).or_default();
                style.offset = base.offset + Vec2::new(0.0, easing::lift(progress) * height);
            }
            Motion::Bounce { height } => {
                let style = self.overlay.entry(step.target).or_default();
                style.offset = base.offset + Vec2::new(0.0, easing::bounce(progress) * height);
            }
            Motion::Pulse { amplitude, cycles } => {
                let style = self.overlay.entry(step.target).or_default();
                style.scale = base.scale * easing::pulse(progress, amplitude, cycles);
            }
            Motion::Swap {
                partner,
                delta,
                arc,
            } => {
                let eased = easing::ease_out_cubic(progress);
                let rise = Vec2::new(0.0, easing::bounce(eased) * arc);
                let style = self.overlay.entry(step.target).or_default();
                style.offset = base.offset + delta * eased + rise;
                let partner_base = captured.partner.unwrap_or_default();
                let style = self.overlay.entry(partner).or_default();
                style.offset = partner_base.offset - delta * eased + rise;
            }
        }
    }

    fn complete_step(&mut self, index: usize, events: &mut Vec<SequenceEvent>) {
        let step = self.steps[index].clone();
        let captured = self.captured.unwrap_or(Captured {
            target: ElementStyle::default(),
            partner: None,
        });

        // Transforms come back to rest at the end of every motion.
        let style = self.overlay.entry(step.target).or_default();
        style.offset = captured.target.offset;
        style.scale = captured.target.scale;
        style.color = match step.settle {
            Settle::Restore => captured.target.color,
            Settle::Keep => style.color,
            Settle::Recolor(color) => Some(color),
            Settle::Clear => None,
        };
        if let (Some(partner), Some(base)) = (step.partner(), captured.partner) {
            let style = self.overlay.entry(partner).or_default();
            style.offset = base.offset;
            style.scale = base.scale;
        }

        self.overlay.retain(|_, style| !style.is_identity());
        events.push(SequenceEvent::StepCompleted(index));
    }

    fn finish_cancel(&mut self, interrupted: Option<usize>, events: &mut Vec<SequenceEvent>) {
        // A step cut off mid-motion never settles; its elements get back the
        // colours they had when it began.
        if let (Some(index), Some(captured)) = (interrupted, self.captured) {
            let step = &self.steps[index];
            let (target, partner) = (step.target, step.partner());
            self.overlay.entry(target).or_default().color = captured.target.color;
            if let (Some(partner), Some(base)) = (partner, captured.partner) {
                self.overlay.entry(partner).or_default().color = base.color;
            }
        }
        for style in self.overlay.values_mut() {
            *style = style.at_rest();
        }
        self.overlay.retain(|_, style| !style.is_identity());
        self.state = SequencerState::Idle;
        self.captured = None;
        debug!("sequence cancelled");
        events.push(SequenceEvent::Cancelled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    const FRAME: Duration = Duration::from_millis(16);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_start_refused_while_busy() {
        let mut seq = Sequencer::new();
        seq.start(vec![Step::new(1).motion(Motion::Bounce { height: 1.0 }, ms(100))])
            .unwrap();
        assert!(seq.is_busy());
        assert_eq!(seq.start(vec![Step::new(2)]), Err(VizError::Busy));
    }

    #[test]
    fn test_steps_run_strictly_in_order() {
        let mut seq = Sequencer::new();
        let steps = (0..3)
            .map(|i| Step::new(i).motion(Motion::Bounce { height: 1.0 }, ms(50)).hold(ms(20)))
            .collect();
        let mut events = seq.start(steps).unwrap();
        events.extend(seq.run_to_end(FRAME));

        let expected = vec![
            SequenceEvent::StepStarted(0),
            SequenceEvent::StepCompleted(0),
            SequenceEvent::StepStarted(1),
            SequenceEvent::StepCompleted(1),
            SequenceEvent::StepStarted(2),
            SequenceEvent::StepCompleted(2),
            SequenceEvent::Finished,
        ];
        assert_eq!(events, expected);
        assert!(!seq.is_busy());
    }

    #[test]
    fn test_bounce_peaks_midway_and_rests() {
        let mut seq = Sequencer::new();
        seq.start(vec![Step::new(7).motion(Motion::Bounce { height: 2.0 }, ms(1000))])
            .unwrap();
        seq.advance(ms(500));
        let mid = seq.style(7);
        assert!((mid.offset.y - 2.0).abs() < 1e-3);
        seq.advance(ms(500));
        assert_eq!(seq.style(7), ElementStyle::default());
    }

    #[test]
    fn test_zero_length_steps_apply_at_start() {
        let mut seq = Sequencer::new();
        let events = seq
            .start(vec![
                Step::recolor(1, Color32::RED),
                Step::recolor(2, Color32::GREEN),
            ])
            .unwrap();
        assert_eq!(events.last(), Some(&SequenceEvent::Finished));
        assert_eq!(seq.style(1).color, Some(Color32::RED));
        assert_eq!(seq.style(2).color, Some(Color32::GREEN));
    }

    #[test]
    fn test_settle_policies() {
        let mut seq = Sequencer::new();
        seq.start(vec![
            Step::recolor(1, Color32::YELLOW),
            Step::new(1)
                .highlight(Color32::RED)
                .motion(Motion::Pulse { amplitude: 0.3, cycles: 4.0 }, ms(100)),
            Step::new(2)
                .highlight(Color32::RED)
                .settle(Settle::Recolor(Color32::GREEN))
                .motion(Motion::Still, ms(100)),
        ])
        .unwrap();
        seq.run_to_end(FRAME);
        // Restored to the colour it had before the pulse.
        assert_eq!(seq.style(1).color, Some(Color32::YELLOW));
        assert_eq!(seq.style(1).scale, 1.0);
        assert_eq!(seq.style(2).color, Some(Color32::GREEN));
    }

    #[test]
    fn test_swap_moves_both_elements() {
        let mut seq = Sequencer::new();
        let delta = Vec2::new(4.0, 0.0);
        seq.start(vec![Step::new(0).motion(
            Motion::Swap {
                partner: 1,
                delta,
                arc: 2.0,
            },
            ms(1000),
        )])
        .unwrap();
        seq.advance(ms(999));
        let a = seq.style(0).offset;
        let b = seq.style(1).offset;
        assert!((a.x - 4.0).abs() < 0.01);
        assert!((b.x + 4.0).abs() < 0.01);
        let events = seq.advance(ms(1));
        assert!(events.contains(&SequenceEvent::StepCompleted(0)));
        assert_eq!(seq.style(0), ElementStyle::default());
        assert_eq!(seq.style(1), ElementStyle::default());
    }

    #[test]
    fn test_cancel_resets_transforms_and_idles() {
        let mut seq = Sequencer::new();
        seq.start(vec![
            Step::new(3)
                .highlight(Color32::RED)
                .motion(Motion::Lift { height: 1.0 }, ms(1000)),
            Step::new(4).motion(Motion::Bounce { height: 1.0 }, ms(1000)),
        ])
        .unwrap();
        seq.advance(ms(250));
        assert!(seq.style(3).offset.y > 0.0);

        assert!(seq.cancel());
        assert_eq!(
            seq.state(),
            SequencerState::Cancelling {
                interrupted: Some(0)
            }
        );
        assert!(seq.is_busy());
        let events = seq.advance(FRAME);
        assert_eq!(events, vec![SequenceEvent::Cancelled]);
        assert!(!seq.is_busy());
        assert_eq!(seq.style(3).offset, Vec2::ZERO);
        assert_eq!(seq.style(3).color, None);
        assert!(!seq.cancel());
    }

    #[test]
    fn test_new_sequencer_is_idle() {
        assert_eq!(SequencerState::default(), SequencerState::Idle);
        let seq = Sequencer::new();
        assert_eq!(seq.state(), SequencerState::Idle);
        assert_eq!(seq.current_step(), None);
    }

    #[test]
    fn test_cancel_during_hold_keeps_settled_colour() {
        let mut seq = Sequencer::new();
        seq.start(vec![
            Step::new(5)
                .highlight(Color32::RED)
                .settle(Settle::Keep)
                .motion(Motion::Pulse { amplitude: 0.4, cycles: 1.0 }, ms(100))
                .hold(ms(500)),
            Step::clear(5),
        ])
        .unwrap();
        seq.advance(ms(200));

        assert!(seq.cancel());
        assert_eq!(seq.state(), SequencerState::Cancelling { interrupted: None });
        seq.advance(FRAME);
        assert_eq!(seq.style(5).color, Some(Color32::RED));
        assert_eq!(seq.style(5).scale, 1.0);
    }

    #[test]
    fn test_large_dt_crosses_many_boundaries() {
        let mut seq = Sequencer::new();
        let steps = (0..4)
            .map(|i| Step::new(i).motion(Motion::Still, ms(10)).hold(ms(10)))
            .collect();
        seq.start(steps).unwrap();
        let events = seq.advance(ms(1000));
        assert_eq!(events.last(), Some(&SequenceEvent::Finished));
        assert_eq!(
            events.iter().filter(|e| matches!(e, SequenceEvent::StepCompleted(_))).count(),
            4
        );
    }

    #[test]
    fn test_empty_sequence_finishes_immediately() {
        let mut seq = Sequencer::new();
        assert_eq!(seq.start(Vec::new()), Ok(vec![SequenceEvent::Finished]));
        assert!(!seq.is_busy());
    }
}
