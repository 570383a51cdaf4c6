// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pools of reusable actions.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::Action;
use super::handle::ActionHandle;
use crate::pool::Pool;

/// A shared pool of actions of one kind.
///
/// Handles obtained here remember the pool and return to it when they are
/// detached from their actor (see [`ActionHandle::set_actor`]). Clones share
/// the same free list.
#[derive(Clone)]
pub struct ActionPool {
    inner: Rc<RefCell<Pool<ActionHandle>>>,
}

impl fmt::Debug for ActionPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ActionPool").field(&*self.inner.borrow()).finish()
    }
}

impl ActionPool {
    /// Creates an unbounded pool building actions with `factory`.
    pub fn new<A: Action>(factory: impl Fn() -> A + 'static) -> Self {
        Self::with_max(usize::MAX, factory)
    }

    /// Creates a pool that retains at most `max` idle actions.
    pub fn with_max<A: Action>(max: usize, factory: impl Fn() -> A + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Pool::with_max(max, move || {
                ActionHandle::new(factory())
            }))),
        }
    }

    pub(crate) fn from_inner(inner: Rc<RefCell<Pool<ActionHandle>>>) -> Self {
        Self { inner }
    }

    /// Hands out an idle action, creating one if none is free.
    pub fn obtain(&self) -> ActionHandle {
        let handle = self.inner.borrow_mut().obtain();
        handle.attach_pool(Rc::downgrade(&self.inner));
        handle
    }

    /// Resets `handle` and makes it available again. Returns `false`, and
    /// keeps the action as is, if it is currently acting.
    ///
    /// # Panics
    ///
    /// Panics if the action is already free, or was not obtained from this
    /// pool.
    pub fn free(&self, handle: ActionHandle) -> bool {
        if handle.is_running() {
            log::debug!("ignored free of a running action: {handle:?}");
            return false;
        }
        assert!(!handle.is_free(), "action freed twice");
        assert!(
            handle.belongs_to(&self.inner),
            "action was not obtained from this pool"
        );
        handle.enter_pool();
        self.inner.borrow_mut().free(handle);
        true
    }

    /// Number of idle actions.
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.inner.borrow().free_count()
    }

    /// Number of actions handed out and not yet returned.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.inner.borrow().outstanding()
    }

    /// Highest number of idle actions held at once.
    #[must_use]
    pub fn peak(&self) -> usize {
        self.inner.borrow().peak()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::action::ActionContext;
    use crate::actor::Scene;
    use crate::error::BoxError;

    #[derive(Default)]
    struct Done;

    impl Action for Done {
        fn act(&mut self, _: &mut ActionContext<'_>, _: f64) -> Result<bool, BoxError> {
            Ok(true)
        }
    }

    #[test]
    fn detaching_returns_to_pool() {
        let mut scene = Scene::new();
        let actor = scene.create_actor();
        let pool = ActionPool::new(Done::default);
        let handle = pool.obtain();
        assert!(handle.is_pooled());
        scene.add_action(actor, handle.clone());
        assert_eq!(pool.outstanding(), 1);

        scene.act(actor, 0.1).unwrap();
        assert!(scene.actions(actor).is_empty());
        assert_eq!(pool.free_count(), 1);
        assert_eq!(pool.outstanding(), 0);
        assert_eq!(handle.actor(), None);
        assert!(!handle.is_pooled());

        let again = pool.obtain();
        assert!(again.ptr_eq(&handle));
    }

    #[test]
    #[should_panic(expected = "action freed twice")]
    fn double_free_panics() {
        let pool = ActionPool::new(Done::default);
        let handle = pool.obtain();
        pool.free(handle.clone());
        pool.free(handle);
    }

    #[test]
    #[should_panic(expected = "not obtained from this pool")]
    fn freeing_foreign_action_panics() {
        let pool = ActionPool::new(Done::default);
        pool.free(ActionHandle::new(Done));
    }

    #[test]
    #[should_panic(expected = "not obtained from this pool")]
    fn freeing_foreign_action_panics_while_others_are_out() {
        let pool = ActionPool::new(Done::default);
        let _held = pool.obtain();
        pool.free(ActionHandle::new(Done));
    }

    #[test]
    #[should_panic(expected = "not obtained from this pool")]
    fn freeing_into_another_pool_panics() {
        let pool = ActionPool::new(Done::default);
        let other = ActionPool::new(Done::default);
        let _held = pool.obtain();
        other.free(other.obtain());
        pool.free(other.obtain());
    }

    /// Frees itself into its pool from inside `act`.
    struct SelfFreeing {
        pool: Rc<Cell<Option<ActionPool>>>,
        freed: Rc<Cell<Option<bool>>>,
    }

    impl Action for SelfFreeing {
        fn act(&mut self, cx: &mut ActionContext<'_>, _: f64) -> Result<bool, BoxError> {
            if let Some(pool) = self.pool.take() {
                self.freed.set(Some(pool.free(cx.handle().clone())));
            }
            Ok(false)
        }
    }

    #[test]
    fn running_action_is_not_handed_out() {
        let mut scene = Scene::new();
        let actor = scene.create_actor();
        let slot = Rc::new(Cell::new(None));
        let freed = Rc::new(Cell::new(None));
        let pool = {
            let slot = Rc::clone(&slot);
            let freed = Rc::clone(&freed);
            ActionPool::new(move || SelfFreeing {
                pool: Rc::clone(&slot),
                freed: Rc::clone(&freed),
            })
        };
        let handle = pool.obtain();
        slot.set(Some(pool.clone()));
        scene.add_action(actor, handle.clone());

        scene.act(actor, 0.1).unwrap();
        assert_eq!(freed.get(), Some(false));
        assert_eq!(pool.free_count(), 0);
        assert!(!pool.obtain().ptr_eq(&handle));
        assert_eq!(scene.actions(actor).len(), 1);
    }
}
