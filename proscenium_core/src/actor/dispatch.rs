// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener registration and two-phase event dispatch.
//!
//! [`Scene::fire`] delivers an event in three steps:
//!
//! 1. **Capture**: capture listeners of every ascendant, root first, then
//!    the target's own capture listeners.
//! 2. **Target**: the target's normal listeners.
//! 3. **Bubble**: if the event bubbles, normal listeners of every ascendant,
//!    parent first.
//!
//! Dispatch ends after the current actor's listeners as soon as a listener
//! stops or cancels the event. The ascendant chain is snapshotted before
//! dispatch, so listeners that reparent actors do not change who is
//! notified.

use std::rc::Rc;

use super::id::ActorId;
use super::store::Scene;
use crate::delayed::DelayedRemovalVec;
use crate::error::{Error, Result, truncate_context};
use crate::event::{Event, ListenerRef};
use crate::trace::{FireEvent, NotifyEvent};

impl Scene {
    /// Adds a listener notified during the target and bubble phases.
    /// Returns `false` if it was already registered.
    pub fn add_listener(&mut self, id: ActorId, listener: ListenerRef) -> bool {
        add_unique(&mut self.node_mut(id).listeners, listener)
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ActorId, listener: &ListenerRef) -> bool {
        self.node_mut(id)
            .listeners
            .remove_first(|l| Rc::ptr_eq(l, listener))
    }

    /// Adds a listener notified during the capture phase.
    /// Returns `false` if it was already registered.
    pub fn add_capture_listener(&mut self, id: ActorId, listener: ListenerRef) -> bool {
        add_unique(&mut self.node_mut(id).capture_listeners, listener)
    }

    /// Removes a capture listener. Returns `false` if it was not registered.
    pub fn remove_capture_listener(&mut self, id: ActorId, listener: &ListenerRef) -> bool {
        self.node_mut(id)
            .capture_listeners
            .remove_first(|l| Rc::ptr_eq(l, listener))
    }

    /// The actor's normal listeners, including ones pending removal.
    #[must_use]
    pub fn listeners(&self, id: ActorId) -> &[ListenerRef] {
        self.node(id).listeners.as_slice()
    }

    /// The actor's capture listeners, including ones pending removal.
    #[must_use]
    pub fn capture_listeners(&self, id: ActorId) -> &[ListenerRef] {
        self.node(id).capture_listeners.as_slice()
    }

    /// Removes all normal and capture listeners.
    pub fn clear_listeners(&mut self, id: ActorId) {
        let node = self.node_mut(id);
        node.listeners.clear();
        node.capture_listeners.clear();
    }

    /// Fires `event` at `id` through the capture, target and bubble phases.
    ///
    /// Sets the event's target to `id`, and its stage to the actor's stage
    /// unless one is already set. Returns whether the event was cancelled.
    ///
    /// Ascendants destroyed by a listener mid-dispatch are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Listener`] if a listener fails; dispatch stops there.
    pub fn fire(&mut self, id: ActorId, event: &mut Event) -> Result<bool> {
        if event.stage.is_none() {
            event.stage = self.node(id).stage.clone();
        }
        event.target = Some(id);

        let ascendants = self.snapshot_ascendants(id);
        let result = self.propagate(id, &ascendants, event);
        let depth = ascendants.len();
        self.snapshots.free(ascendants);

        self.tracer.fire(&FireEvent {
            target: id,
            ascendants: depth,
            handled: event.handled,
            stopped: event.stopped,
            cancelled: event.cancelled,
        });
        result?;
        Ok(event.cancelled)
    }

    fn propagate(&mut self, id: ActorId, ascendants: &[ActorId], event: &mut Event) -> Result<()> {
        for &actor in ascendants.iter().rev() {
            self.notify_live(actor, event, true)?;
            if event.stopped {
                return Ok(());
            }
        }

        self.notify_live(id, event, true)?;
        if event.stopped {
            return Ok(());
        }
        self.notify_live(id, event, false)?;
        if event.stopped || !event.bubbles {
            return Ok(());
        }

        for &actor in ascendants {
            self.notify_live(actor, event, false)?;
            if event.stopped {
                return Ok(());
            }
        }
        Ok(())
    }

    fn notify_live(&mut self, actor: ActorId, event: &mut Event, capture: bool) -> Result<()> {
        if self.is_alive(actor) {
            self.notify(actor, event, capture)?;
        }
        Ok(())
    }

    /// Notifies the actor's capture or normal listeners of `event`, in
    /// registration order. Returns whether the event is cancelled.
    ///
    /// Listeners may add or remove listeners on this actor while being
    /// notified: removals take effect once every listener registered at the
    /// start has been notified, and additions are notified in the same pass.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Listener`] if a listener fails. Later listeners are
    /// not notified.
    ///
    /// # Panics
    ///
    /// Panics if the event has no target.
    pub fn notify(&mut self, id: ActorId, event: &mut Event, capture: bool) -> Result<bool> {
        assert!(
            event.target.is_some(),
            "event target must be set before notifying listeners"
        );
        let node = self.node_mut(id);
        let list = if capture {
            &mut node.capture_listeners
        } else {
            &mut node.listeners
        };
        if list.is_empty() {
            return Ok(event.cancelled);
        }
        list.begin();

        event.listener_actor = Some(id);
        event.capture = capture;
        if event.stage.is_none() {
            event.stage = node.stage.clone();
        }

        let mut index = 0;
        let mut failure = None;
        while self.is_alive(id) {
            let Some(listener) = self.listener_list(id, capture).get(index).cloned() else {
                break;
            };
            index += 1;
            match listener.handle(self, event) {
                Ok(true) => event.handled = true,
                Ok(false) => {}
                Err(source) => {
                    failure = Some(source);
                    break;
                }
            }
        }

        // A listener may have destroyed the actor; its lists are gone then.
        let alive = self.is_alive(id);
        if alive {
            self.listener_list(id, capture).end();
        }

        self.tracer.notify(&NotifyEvent {
            actor: id,
            capture,
            listeners: index,
            handled: event.handled,
        });

        match failure {
            Some(source) => {
                let actor = if alive {
                    self.describe(id)
                } else {
                    format!("{id:?}")
                };
                Err(Error::Listener {
                    actor: truncate_context(actor),
                    source,
                })
            }
            None => Ok(event.cancelled),
        }
    }

    /// Drops stage focus held by `actor`: touch focuses whose listener is the
    /// actor are cancelled, and scroll and keyboard focus are cleared if
    /// they are on the actor or one of its descendants.
    pub fn unfocus(&mut self, actor: ActorId) {
        let Some(stage) = self.node(actor).stage.clone() else {
            return;
        };
        for focus in stage.touch_focuses() {
            if focus.listener_actor == actor {
                stage.cancel_touch_focus(&focus);
            }
        }
        if let Some(focus) = stage.scroll_focus()
            && self.is_alive(focus)
            && self.is_descendant_of(focus, actor)
        {
            stage.set_scroll_focus(None);
        }
        if let Some(focus) = stage.keyboard_focus()
            && self.is_alive(focus)
            && self.is_descendant_of(focus, actor)
        {
            stage.set_keyboard_focus(None);
        }
    }

    fn listener_list(&mut self, id: ActorId, capture: bool) -> &mut DelayedRemovalVec<ListenerRef> {
        let node = self.node_mut(id);
        if capture {
            &mut node.capture_listeners
        } else {
            &mut node.listeners
        }
    }
}

fn add_unique(list: &mut DelayedRemovalVec<ListenerRef>, listener: ListenerRef) -> bool {
    if list.contains(|l| Rc::ptr_eq(l, &listener)) {
        return false;
    }
    list.push(listener);
    true
}
