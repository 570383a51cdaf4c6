// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Events and listeners.
//!
//! An [`Event`] is a mutable, poolable record that travels through the actor
//! tree during [`Scene::fire`](crate::actor::Scene::fire). Each notified
//! [`EventListener`] may mark it handled, stop further propagation, or cancel
//! it outright.
//!
//! The concrete kind of an event is expressed through an optional type-erased
//! payload. Listeners that care about a specific kind test for it with
//! [`Event::is`] or borrow it with [`Event::payload`].

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::actor::{ActorId, Scene};
use crate::error::BoxError;
use crate::pool::Poolable;
use crate::stage::Stage;

/// A message dispatched through the actor tree.
pub struct Event {
    pub(crate) stage: Option<Rc<dyn Stage>>,
    pub(crate) target: Option<ActorId>,
    pub(crate) listener_actor: Option<ActorId>,
    pub(crate) capture: bool,
    pub(crate) bubbles: bool,
    pub(crate) handled: bool,
    pub(crate) stopped: bool,
    pub(crate) cancelled: bool,
    payload: Option<Box<dyn Any>>,
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("has_stage", &self.stage.is_some())
            .field("target", &self.target)
            .field("listener_actor", &self.listener_actor)
            .field("capture", &self.capture)
            .field("bubbles", &self.bubbles)
            .field("handled", &self.handled)
            .field("stopped", &self.stopped)
            .field("cancelled", &self.cancelled)
            .field("has_payload", &self.payload.is_some())
            .finish()
    }
}

impl Default for Event {
    fn default() -> Self {
        Self::new()
    }
}

impl Event {
    /// Creates a bubbling event without a payload.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stage: None,
            target: None,
            listener_actor: None,
            capture: false,
            bubbles: true,
            handled: false,
            stopped: false,
            cancelled: false,
            payload: None,
        }
    }

    /// Creates a bubbling event carrying `payload`.
    #[must_use]
    pub fn with_payload<T: Any>(payload: T) -> Self {
        let mut event = Self::new();
        event.set_payload(payload);
        event
    }

    /// Marks the event handled.
    pub fn handle(&mut self) {
        self.handled = true;
    }

    /// Stops propagation once the current actor's listeners have run.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Cancels the event: marks it cancelled, stopped and handled.
    ///
    /// The originator of a cancelled event may undo whatever action the event
    /// announced.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.stopped = true;
        self.handled = true;
    }

    /// Whether any listener handled the event.
    #[must_use]
    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// Whether propagation was stopped.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Whether the event was cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Whether the event propagates to ascendants after reaching its target.
    #[must_use]
    pub fn bubbles(&self) -> bool {
        self.bubbles
    }

    /// Sets whether the event bubbles. Defaults to `true`.
    pub fn set_bubbles(&mut self, bubbles: bool) {
        self.bubbles = bubbles;
    }

    /// Whether the event is currently in the capture phase.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.capture
    }

    /// The actor the event was fired on.
    #[must_use]
    pub fn target(&self) -> Option<ActorId> {
        self.target
    }

    /// Sets the originating actor.
    pub fn set_target(&mut self, target: Option<ActorId>) {
        self.target = target;
    }

    /// The actor whose listeners are currently being notified.
    #[must_use]
    pub fn listener_actor(&self) -> Option<ActorId> {
        self.listener_actor
    }

    /// The stage the event was fired in, if any.
    #[must_use]
    pub fn stage(&self) -> Option<&Rc<dyn Stage>> {
        self.stage.as_ref()
    }

    /// Sets the stage; [`fire`](crate::actor::Scene::fire) only fills it in
    /// when unset.
    pub fn set_stage(&mut self, stage: Option<Rc<dyn Stage>>) {
        self.stage = stage;
    }

    /// Replaces the payload.
    pub fn set_payload<T: Any>(&mut self, payload: T) {
        self.payload = Some(Box::new(payload));
    }

    /// Removes and drops the payload.
    pub fn clear_payload(&mut self) {
        self.payload = None;
    }

    /// Returns `true` if the payload is exactly of type `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.payload.as_deref().is_some_and(|p| p.is::<T>())
    }

    /// Borrows the payload as `T`.
    #[must_use]
    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.payload.as_deref().and_then(|p| p.downcast_ref::<T>())
    }

    /// Mutably borrows the payload as `T`.
    #[must_use]
    pub fn payload_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.payload.as_deref_mut().and_then(|p| p.downcast_mut::<T>())
    }
}

impl Poolable for Event {
    /// Restores every field to its default, dropping the payload.
    fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Receives events notified on an actor.
///
/// Listeners take `&self` because the same listener may be re-entered when a
/// callback fires further events; use interior mutability for state.
pub trait EventListener {
    /// Handles `event`, returning `true` if it was handled.
    ///
    /// # Errors
    ///
    /// Any error is annotated with the notified actor and propagated out of
    /// [`Scene::fire`](crate::actor::Scene::fire).
    fn handle(&self, scene: &mut Scene, event: &mut Event) -> Result<bool, BoxError>;
}

/// A shared, pointer-identified listener.
pub type ListenerRef = Rc<dyn EventListener>;

/// Adapts a closure into a [`ListenerRef`].
pub fn listener_fn<F>(f: F) -> ListenerRef
where
    F: Fn(&mut Scene, &mut Event) -> bool + 'static,
{
    Rc::new(FnListener(f))
}

struct FnListener<F>(F);

impl<F> EventListener for FnListener<F>
where
    F: Fn(&mut Scene, &mut Event) -> bool,
{
    fn handle(&self, scene: &mut Scene, event: &mut Event) -> Result<bool, BoxError> {
        Ok((self.0)(scene, event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Click(u8);
    struct Key;

    #[test]
    fn cancel_sets_all_flags() {
        let mut event = Event::new();
        event.cancel();
        assert!(event.is_cancelled() && event.is_stopped() && event.is_handled());
    }

    #[test]
    fn stop_does_not_cancel() {
        let mut event = Event::new();
        event.stop();
        assert!(event.is_stopped());
        assert!(!event.is_cancelled());
        assert!(!event.is_handled());
    }

    #[test]
    fn payload_kind_matches_exactly() {
        let mut event = Event::with_payload(Click(2));
        assert!(event.is::<Click>());
        assert!(!event.is::<Key>());
        assert_eq!(event.payload::<Click>().map(|c| c.0), Some(2));
        if let Some(click) = event.payload_mut::<Click>() {
            click.0 = 3;
        }
        assert_eq!(event.payload::<Click>().map(|c| c.0), Some(3));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut event = Event::with_payload(Key);
        event.cancel();
        event.set_bubbles(false);
        event.reset();
        assert!(event.bubbles());
        assert!(!event.is_handled() && !event.is_stopped() && !event.is_cancelled());
        assert!(event.target().is_none());
        assert!(!event.is::<Key>());
    }
}
