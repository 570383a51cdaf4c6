// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared action handles.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use super::Action;
use super::pool::ActionPool;
use crate::actor::{ActorId, Scene};
use crate::error::BoxError;
use crate::pool::{Pool, Poolable};

struct ActionNode {
    actor: Cell<Option<ActorId>>,
    target: Cell<Option<ActorId>>,
    running: Cell<bool>,
    /// Set when the actor changed while the action was borrowed by its own
    /// `act`; delivered once it returns.
    actor_change_pending: Cell<bool>,
    /// Whether the handle currently sits in a pool's free list.
    in_pool: Cell<bool>,
    pool: RefCell<Option<Weak<RefCell<Pool<ActionHandle>>>>>,
    action: RefCell<Box<dyn Action>>,
}

/// A shared handle to an action and its actor, target and pool state.
///
/// Clones refer to the same action; compare with
/// [`ptr_eq`](Self::ptr_eq).
#[derive(Clone)]
pub struct ActionHandle(Rc<ActionNode>);

impl fmt::Debug for ActionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionHandle")
            .field("actor", &self.0.actor.get())
            .field("target", &self.0.target.get())
            .field("running", &self.0.running.get())
            .field("pooled", &self.is_pooled())
            .finish_non_exhaustive()
    }
}

/// Scope guard that raises the running flag and restores its previous value
/// on every exit path.
struct RunGuard<'a> {
    flag: &'a Cell<bool>,
    previous: bool,
}

impl<'a> RunGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        let previous = flag.replace(true);
        Self { flag, previous }
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(self.previous);
    }
}

/// What an action sees while it acts.
pub struct ActionContext<'a> {
    /// The scene the action's actor lives in.
    pub scene: &'a mut Scene,
    handle: &'a ActionHandle,
}

impl fmt::Debug for ActionContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionContext")
            .field("handle", self.handle)
            .finish_non_exhaustive()
    }
}

impl ActionContext<'_> {
    /// The actor currently driving the action. Becomes `None` if a nested
    /// callback detached the action.
    #[must_use]
    pub fn actor(&self) -> Option<ActorId> {
        self.handle.actor()
    }

    /// The actor the action operates on.
    #[must_use]
    pub fn target(&self) -> Option<ActorId> {
        self.handle.target()
    }

    /// The target, if it is still alive in the scene.
    #[must_use]
    pub fn live_target(&self) -> Option<ActorId> {
        self.target().filter(|&target| self.scene.is_alive(target))
    }

    /// The handle of the acting action.
    #[must_use]
    pub fn handle(&self) -> &ActionHandle {
        self.handle
    }
}

impl ActionHandle {
    /// Wraps an action in a new, unpooled handle.
    pub fn new(action: impl Action) -> Self {
        Self(Rc::new(ActionNode {
            actor: Cell::new(None),
            target: Cell::new(None),
            running: Cell::new(false),
            actor_change_pending: Cell::new(false),
            in_pool: Cell::new(false),
            pool: RefCell::new(None),
            action: RefCell::new(Box::new(action)),
        }))
    }

    /// Returns `true` if both handles refer to the same action.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// The actor driving the action.
    #[must_use]
    pub fn actor(&self) -> Option<ActorId> {
        self.0.actor.get()
    }

    /// The actor the action operates on.
    #[must_use]
    pub fn target(&self) -> Option<ActorId> {
        self.0.target.get()
    }

    /// Returns `true` while the action is inside [`act`](Self::act).
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.0.running.get()
    }

    /// Returns `true` if the action belongs to a live pool.
    #[must_use]
    pub fn is_pooled(&self) -> bool {
        self.0
            .pool
            .borrow()
            .as_ref()
            .is_some_and(|pool| pool.strong_count() > 0)
    }

    /// Advances the action by `delta` seconds. Returns `true` when done.
    ///
    /// While this runs the action is flagged as running, so a nested free
    /// cannot hand it out again. The flag is restored on every exit path.
    ///
    /// # Errors
    ///
    /// Propagates the action's error, or fails if the action is already
    /// acting further up the stack.
    pub fn act(&self, scene: &mut Scene, delta: f64) -> Result<bool, BoxError> {
        let result = {
            let _guard = RunGuard::enter(&self.0.running);
            let mut action = self.0.action.try_borrow_mut().inspect_err(|_| {
                log::warn!("action re-entered while acting: {self:?}");
            })?;
            let mut cx = ActionContext {
                scene: &mut *scene,
                handle: self,
            };
            action.act(&mut cx, delta)
        };
        if self.0.actor_change_pending.replace(false) {
            let actor = self.actor();
            self.with_action(|action| action.actor_changed(scene, actor));
            if actor.is_none() && !self.is_running() {
                self.release_to_pool(scene);
            }
        }
        result
    }

    /// Resets run-time state so the action can run again.
    pub fn restart(&self) {
        self.with_action(|action| action.restart());
    }

    /// Attaches the action to `actor`, or detaches it with `None`.
    ///
    /// The target follows the actor when none is set. Detaching an idle,
    /// pooled action also clears its target and returns it to the pool.
    pub fn set_actor(&self, scene: &mut Scene, actor: Option<ActorId>) {
        self.0.actor.set(actor);
        if actor.is_some() && self.target().is_none() {
            self.set_target(scene, actor);
        }
        if !self.with_action(|action| action.actor_changed(scene, actor)) {
            self.0.actor_change_pending.set(true);
        }
        if actor.is_none() && !self.is_running() {
            self.release_to_pool(scene);
        }
    }

    /// Returns a detached action to its pool, if it has one.
    fn release_to_pool(&self, scene: &mut Scene) {
        let pool = self.0.pool.borrow().as_ref().and_then(Weak::upgrade);
        if let Some(inner) = pool {
            self.set_target(scene, None);
            ActionPool::from_inner(inner).free(self.clone());
        }
    }

    /// Sets the actor the action operates on.
    pub fn set_target(&self, scene: &mut Scene, target: Option<ActorId>) {
        let old = self.0.target.replace(target);
        if old != target {
            self.with_action(|action| action.target_changed(scene, old, target));
        }
    }

    /// Runs `f` on the action if it is a `A`. Returns `None` if it is not,
    /// or if the action is currently acting.
    pub fn with<A: Action, R>(&self, f: impl FnOnce(&mut A) -> R) -> Option<R> {
        let mut action = self.0.action.try_borrow_mut().ok()?;
        (**action).as_any_mut().downcast_mut::<A>().map(f)
    }

    /// Returns `true` if the action is a `A`.
    #[must_use]
    pub fn is<A: Action>(&self) -> bool {
        self.0
            .action
            .try_borrow()
            .is_ok_and(|action| (**action).as_any().is::<A>())
    }

    fn with_action(&self, f: impl FnOnce(&mut dyn Action)) -> bool {
        match self.0.action.try_borrow_mut() {
            Ok(mut action) => {
                f(&mut **action);
                true
            }
            Err(_) => false,
        }
    }

    pub(crate) fn attach_pool(&self, pool: Weak<RefCell<Pool<Self>>>) {
        self.0.in_pool.set(false);
        *self.0.pool.borrow_mut() = Some(pool);
    }

    /// Returns `true` if the handle was obtained from `pool` and has not
    /// been reset since.
    pub(crate) fn belongs_to(&self, pool: &Rc<RefCell<Pool<Self>>>) -> bool {
        self.0
            .pool
            .borrow()
            .as_ref()
            .is_some_and(|owner| Weak::ptr_eq(owner, &Rc::downgrade(pool)))
    }

    /// Whether the handle sits in a pool's free list.
    pub(crate) fn is_free(&self) -> bool {
        self.0.in_pool.get()
    }

    /// Marks the handle as sitting in a pool's free list.
    pub(crate) fn enter_pool(&self) {
        self.0.in_pool.set(true);
    }
}

impl Poolable for ActionHandle {
    /// Clears actor, target and pool, then resets the action.
    fn reset(&mut self) {
        self.0.actor.set(None);
        self.0.target.set(None);
        *self.0.pool.borrow_mut() = None;
        if !self.with_action(|action| action.reset()) {
            log::warn!("reset skipped for an action that is acting: {self:?}");
        }
    }
}
