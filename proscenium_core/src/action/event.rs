// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Actions completed by events.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use super::{Action, ActionContext};
use crate::actor::{ActorId, Scene};
use crate::error::BoxError;
use crate::event::{Event, EventListener, ListenerRef};

/// Handler invoked by an [`EventAction`] for matching events. Returns
/// whether the event was handled, which also completes the action.
pub type EventDelegate = dyn FnMut(&mut Scene, &mut Event) -> Result<bool, BoxError>;

struct EventActionState<T> {
    active: Cell<bool>,
    result: Cell<bool>,
    delegate: RefCell<Box<EventDelegate>>,
    kind: PhantomData<fn() -> T>,
}

impl<T: Any> EventListener for EventActionState<T> {
    fn handle(&self, scene: &mut Scene, event: &mut Event) -> Result<bool, BoxError> {
        if !self.active.get() || !event.is::<T>() {
            return Ok(false);
        }
        let Ok(mut delegate) = self.delegate.try_borrow_mut() else {
            log::debug!("skipped a matching event fired from inside its own delegate");
            return Ok(false);
        };
        let result = delegate(scene, event)?;
        self.result.set(result);
        Ok(result)
    }
}

/// Waits for an event whose payload is a `T`.
///
/// While attached, the action listens on its target. Once it has been acted
/// at least once it is active: each matching event goes to the delegate, and
/// the delegate's verdict becomes the action's result, so the action
/// completes on the first act after a matching event was handled. Events
/// that arrive before the first act are ignored, and so are matching events
/// fired while the delegate itself is running.
pub struct EventAction<T> {
    state: Rc<EventActionState<T>>,
}

impl<T> fmt::Debug for EventAction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventAction")
            .field("kind", &std::any::type_name::<T>())
            .field("active", &self.state.active.get())
            .field("result", &self.state.result.get())
            .finish_non_exhaustive()
    }
}

impl<T: Any> EventAction<T> {
    /// Creates an action that completes when `delegate` handles a `T` event.
    pub fn new(
        delegate: impl FnMut(&mut Scene, &mut Event) -> Result<bool, BoxError> + 'static,
    ) -> Self {
        Self {
            state: Rc::new(EventActionState {
                active: Cell::new(false),
                result: Cell::new(false),
                delegate: RefCell::new(Box::new(delegate)),
                kind: PhantomData,
            }),
        }
    }

    /// Whether matching events are being delivered to the delegate.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.active.get()
    }

    /// The delegate's verdict for the last matching event.
    #[must_use]
    pub fn result(&self) -> bool {
        self.state.result.get()
    }

    /// Overrides the result reported by the next act.
    pub fn set_result(&mut self, result: bool) {
        self.state.result.set(result);
    }

    /// The listener registered on the target.
    #[must_use]
    pub fn listener(&self) -> ListenerRef {
        self.state.clone()
    }
}

impl<T: Any> Action for EventAction<T> {
    fn act(&mut self, _cx: &mut ActionContext<'_>, _delta: f64) -> Result<bool, BoxError> {
        self.state.active.set(true);
        Ok(self.state.result.get())
    }

    fn restart(&mut self) {
        self.state.result.set(false);
        self.state.active.set(false);
    }

    fn target_changed(&mut self, scene: &mut Scene, old: Option<ActorId>, new: Option<ActorId>) {
        let listener = self.listener();
        if let Some(old) = old
            && scene.is_alive(old)
        {
            scene.remove_listener(old, &listener);
        }
        if let Some(new) = new {
            scene.add_listener(new, listener);
        }
    }
}
