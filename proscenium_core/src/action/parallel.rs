// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composite actions.

use super::{Action, ActionContext, ActionHandle};
use crate::actor::{ActorId, Scene};
use crate::error::BoxError;

/// Runs child actions side by side until all of them are done.
///
/// Each act runs every child that is still attached to an actor, in order.
/// If a child's side effects detach this action from its actor, the act
/// stops and reports completion. Once complete, further acts do nothing.
#[derive(Debug, Default)]
pub struct ParallelAction {
    actions: Vec<ActionHandle>,
    actor: Option<ActorId>,
    complete: bool,
}

impl ParallelAction {
    /// Creates a composite of `actions`.
    #[must_use]
    pub fn new(actions: impl IntoIterator<Item = ActionHandle>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            actor: None,
            complete: false,
        }
    }

    /// Appends a child before the composite is attached.
    pub fn push(&mut self, action: ActionHandle) {
        self.actions.push(action);
    }

    /// Appends a child, attaching it to this composite's actor.
    pub fn add_action(&mut self, scene: &mut Scene, action: ActionHandle) {
        if self.actor.is_some() {
            action.set_actor(scene, self.actor);
        }
        self.actions.push(action);
    }

    /// The child actions.
    #[must_use]
    pub fn actions(&self) -> &[ActionHandle] {
        &self.actions
    }
}

impl Action for ParallelAction {
    fn act(&mut self, cx: &mut ActionContext<'_>, delta: f64) -> Result<bool, BoxError> {
        if self.complete {
            return Ok(true);
        }
        self.complete = true;
        for action in &self.actions {
            if cx.actor().is_none() {
                break;
            }
            if action.actor().is_some() && !action.act(cx.scene, delta)? {
                self.complete = false;
            }
            if cx.actor().is_none() {
                return Ok(true);
            }
        }
        Ok(self.complete)
    }

    fn restart(&mut self) {
        self.complete = false;
        for action in &self.actions {
            action.restart();
        }
    }

    fn reset(&mut self) {
        self.restart();
        self.actions.clear();
    }

    fn actor_changed(&mut self, scene: &mut Scene, actor: Option<ActorId>) {
        self.actor = actor;
        for action in &self.actions {
            action.set_actor(scene, actor);
        }
    }
}

/// Runs child actions one after another.
///
/// Completes when the last child completes. If a child's side effects detach
/// this action from its actor, the act stops and reports completion.
#[derive(Debug, Default)]
pub struct SequenceAction {
    actions: Vec<ActionHandle>,
    actor: Option<ActorId>,
    index: usize,
}

impl SequenceAction {
    /// Creates a sequence of `actions`.
    #[must_use]
    pub fn new(actions: impl IntoIterator<Item = ActionHandle>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            actor: None,
            index: 0,
        }
    }

    /// Appends a child before the sequence is attached.
    pub fn push(&mut self, action: ActionHandle) {
        self.actions.push(action);
    }

    /// Appends a child, attaching it to this sequence's actor.
    pub fn add_action(&mut self, scene: &mut Scene, action: ActionHandle) {
        if self.actor.is_some() {
            action.set_actor(scene, self.actor);
        }
        self.actions.push(action);
    }

    /// The child actions.
    #[must_use]
    pub fn actions(&self) -> &[ActionHandle] {
        &self.actions
    }

    /// Index of the child currently running.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Action for SequenceAction {
    fn act(&mut self, cx: &mut ActionContext<'_>, delta: f64) -> Result<bool, BoxError> {
        let Some(action) = self.actions.get(self.index) else {
            return Ok(true);
        };
        let done = action.act(cx.scene, delta)?;
        if cx.actor().is_none() {
            return Ok(true);
        }
        if done {
            self.index += 1;
        }
        Ok(self.index >= self.actions.len())
    }

    fn restart(&mut self) {
        self.index = 0;
        for action in &self.actions {
            action.restart();
        }
    }

    fn reset(&mut self) {
        self.restart();
        self.actions.clear();
    }

    fn actor_changed(&mut self, scene: &mut Scene, actor: Option<ActorId>) {
        self.actor = actor;
        for action in &self.actions {
            action.set_actor(scene, actor);
        }
    }
}
