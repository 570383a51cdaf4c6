// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-driven actions.

use super::{Action, ActionContext};
use crate::error::BoxError;

/// An easing curve applied to the completion fraction.
pub type Interpolation = fn(f64) -> f64;

/// The behavior of a [`TemporalAction`], driven by completion percent.
pub trait Temporal: 'static {
    /// Called on the first frame, before the first
    /// [`update`](Self::update).
    ///
    /// # Errors
    ///
    /// Propagated out of the acting [`Scene`](crate::actor::Scene).
    fn begin(&mut self, cx: &mut ActionContext<'_>) -> Result<(), BoxError> {
        _ = cx;
        Ok(())
    }

    /// Applies the action at `percent`, usually in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Propagated out of the acting [`Scene`](crate::actor::Scene).
    fn update(&mut self, cx: &mut ActionContext<'_>, percent: f64) -> Result<(), BoxError>;

    /// Called once, after the final [`update`](Self::update).
    ///
    /// # Errors
    ///
    /// Propagated out of the acting [`Scene`](crate::actor::Scene).
    fn end(&mut self, cx: &mut ActionContext<'_>) -> Result<(), BoxError> {
        _ = cx;
        Ok(())
    }

    /// Resets run-time state.
    fn restart(&mut self) {}
}

/// An action that runs a [`Temporal`] behavior over `duration` seconds.
///
/// The first [`act`](Action::act) calls `begin`. Every act advances time,
/// computes `percent = time / duration` (exactly 1 once complete), applies
/// the interpolation, substitutes `1 - percent` when reversed, and calls
/// `update`. The act that completes also calls `end`; later acts do nothing
/// and report completion.
#[derive(Clone, Debug, Default)]
pub struct TemporalAction<T> {
    duration: f64,
    time: f64,
    reverse: bool,
    interpolation: Option<Interpolation>,
    began: bool,
    complete: bool,
    behavior: T,
}

impl<T: Temporal> TemporalAction<T> {
    /// Creates an action running `behavior` over `duration` seconds.
    pub fn new(duration: f64, behavior: T) -> Self {
        Self {
            duration,
            time: 0.0,
            reverse: false,
            interpolation: None,
            began: false,
            complete: false,
            behavior,
        }
    }

    /// Builder for [`set_interpolation`](Self::set_interpolation).
    #[must_use]
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = Some(interpolation);
        self
    }

    /// Makes the next act complete the action.
    pub fn finish(&mut self) {
        self.time = self.duration;
    }

    /// Length in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Sets the length in seconds.
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = duration;
    }

    /// Seconds elapsed.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Sets the seconds elapsed.
    pub fn set_time(&mut self, time: f64) {
        self.time = time;
    }

    /// Whether the action runs from end to start.
    #[must_use]
    pub fn is_reverse(&self) -> bool {
        self.reverse
    }

    /// Sets whether the action runs from end to start.
    pub fn set_reverse(&mut self, reverse: bool) {
        self.reverse = reverse;
    }

    /// The easing curve.
    #[must_use]
    pub fn interpolation(&self) -> Option<Interpolation> {
        self.interpolation
    }

    /// Sets the easing curve; `None` is linear.
    pub fn set_interpolation(&mut self, interpolation: Option<Interpolation>) {
        self.interpolation = interpolation;
    }

    /// Whether the action has run to completion.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The driven behavior.
    #[must_use]
    pub fn behavior(&self) -> &T {
        &self.behavior
    }

    /// The driven behavior, mutably.
    pub fn behavior_mut(&mut self) -> &mut T {
        &mut self.behavior
    }
}

impl<T: Temporal> Action for TemporalAction<T> {
    fn act(&mut self, cx: &mut ActionContext<'_>, delta: f64) -> Result<bool, BoxError> {
        if self.complete {
            return Ok(true);
        }
        if !self.began {
            self.behavior.begin(cx)?;
            self.began = true;
        }
        self.time += delta;
        self.complete = self.time >= self.duration;
        let mut percent = if self.complete {
            1.0
        } else {
            self.time / self.duration
        };
        if let Some(interpolation) = self.interpolation {
            percent = interpolation(percent);
        }
        self.behavior
            .update(cx, if self.reverse { 1.0 - percent } else { percent })?;
        if self.complete {
            self.behavior.end(cx)?;
        }
        Ok(self.complete)
    }

    fn restart(&mut self) {
        self.time = 0.0;
        self.began = false;
        self.complete = false;
        self.behavior.restart();
    }

    fn reset(&mut self) {
        self.restart();
        self.reverse = false;
        self.interpolation = None;
    }
}
