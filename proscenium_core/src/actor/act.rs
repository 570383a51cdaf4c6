// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attaching and running actions.

use super::id::ActorId;
use super::store::Scene;
use crate::action::ActionHandle;
use crate::error::{Error, Result, truncate_context};
use crate::trace::ActionEvent;

impl Scene {
    /// Attaches `action` to the actor; it runs on every
    /// [`act`](Self::act) until it completes.
    pub fn add_action(&mut self, id: ActorId, action: ActionHandle) {
        action.set_actor(self, Some(id));
        let node = self.node_mut(id);
        node.actions.push(action);
        if let Some(stage) = &node.stage
            && stage.actions_request_rendering()
        {
            stage.request_rendering();
        }
    }

    /// Detaches `action` from the actor. Returns `false` if it was not
    /// attached.
    pub fn remove_action(&mut self, id: ActorId, action: &ActionHandle) -> bool {
        let actions = &mut self.node_mut(id).actions;
        match actions.iter().position(|a| a.ptr_eq(action)) {
            Some(index) => {
                let action = actions.remove(index);
                action.set_actor(self, None);
                true
            }
            None => false,
        }
    }

    /// The actor's actions, in the order they run.
    #[must_use]
    pub fn actions(&self, id: ActorId) -> &[ActionHandle] {
        &self.node(id).actions
    }

    /// Returns `true` if the actor has actions.
    #[must_use]
    pub fn has_actions(&self, id: ActorId) -> bool {
        !self.node(id).actions.is_empty()
    }

    /// Detaches every action, last first.
    pub fn clear_actions(&mut self, id: ActorId) {
        let actions = std::mem::take(&mut self.node_mut(id).actions);
        for action in actions.iter().rev() {
            action.set_actor(self, None);
        }
    }

    /// Advances the actor's actions by `delta` seconds, then, for groups,
    /// acts every child in paint order.
    ///
    /// Completed actions are detached. Actions may add or remove actions on
    /// the same actor while acting; each remaining action still runs once.
    /// Children added or removed while acting take effect next frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Action`] if an action fails. The failing action
    /// stays attached and later actions and children do not run this frame.
    pub fn act(&mut self, id: ActorId, delta: f64) -> Result<()> {
        self.act_actions(id, delta)?;
        if !self.is_alive(id) || !self.is_group(id) {
            return Ok(());
        }
        let children = self.snapshot_children(id);
        let mut result = Ok(());
        for &child in &children {
            if !self.is_alive(child) {
                continue;
            }
            result = self.act(child, delta);
            if result.is_err() {
                break;
            }
        }
        self.snapshots.free(children);
        result
    }

    fn act_actions(&mut self, id: ActorId, delta: f64) -> Result<()> {
        let node = self.node(id);
        if node.actions.is_empty() {
            return Ok(());
        }
        if let Some(stage) = &node.stage
            && stage.actions_request_rendering()
        {
            stage.request_rendering();
        }

        let mut index = 0;
        while self.is_alive(id) {
            let Some(action) = self.node(id).actions.get(index).cloned() else {
                break;
            };
            let done = action.act(self, delta).map_err(|source| Error::Action {
                actor: truncate_context(self.describe_lossy(id)),
                source,
            })?;
            if !self.is_alive(id) {
                break;
            }
            let actions = &mut self.node_mut(id).actions;
            if done && index < actions.len() {
                // Earlier completions may have shifted or removed the action.
                let position = if actions[index].ptr_eq(&action) {
                    Some(index)
                } else {
                    actions.iter().position(|a| a.ptr_eq(&action))
                };
                if let Some(position) = position {
                    actions.remove(position);
                    let remaining = actions.len();
                    action.set_actor(self, None);
                    self.tracer.action_complete(&ActionEvent {
                        actor: id,
                        remaining,
                    });
                    continue;
                }
            }
            index += 1;
        }
        Ok(())
    }

    /// `describe`, tolerating an actor destroyed by the failing callback.
    fn describe_lossy(&self, id: ActorId) -> String {
        if self.is_alive(id) {
            self.describe(id)
        } else {
            format!("{id:?}")
        }
    }
}
