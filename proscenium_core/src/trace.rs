// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for dispatch, actions and hierarchy changes.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! [`Scene`](crate::actor::Scene) calls as it works. All method bodies default
//! to no-ops, so implementing only the events you care about is fine.
//!
//! The scene owns a [`Tracer`]. When the `trace` feature is **off**, every
//! `Tracer` method compiles to nothing (zero overhead). When **on**, each
//! method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use std::cell::RefCell;
use std::rc::Rc;

use crate::actor::ActorId;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when [`Scene::fire`](crate::actor::Scene::fire) finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FireEvent {
    /// The actor the event was fired on.
    pub target: ActorId,
    /// Number of ascendants snapshotted before dispatch.
    pub ascendants: usize,
    /// Final handled flag.
    pub handled: bool,
    /// Final stopped flag.
    pub stopped: bool,
    /// Final cancelled flag.
    pub cancelled: bool,
}

/// Emitted after one actor's listeners were notified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotifyEvent {
    /// The notified actor.
    pub actor: ActorId,
    /// Whether capture listeners were notified.
    pub capture: bool,
    /// Number of listeners swept.
    pub listeners: usize,
    /// Handled flag after the sweep.
    pub handled: bool,
}

/// Emitted when a finished action is removed from its actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionEvent {
    /// The actor that ran the action.
    pub actor: ActorId,
    /// Actions still attached to the actor.
    pub remaining: usize,
}

/// What happened to a group's child list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HierarchyChange {
    /// The child was attached.
    Added,
    /// The child was detached.
    Removed,
}

/// Emitted when a child is attached to or detached from a group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HierarchyEvent {
    /// The group.
    pub parent: ActorId,
    /// The child.
    pub child: ActorId,
    /// Attach or detach.
    pub change: HierarchyChange,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the scene.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when an event dispatch completes.
    fn on_fire(&mut self, e: &FireEvent) {
        _ = e;
    }

    /// Called after an actor's listener list was swept.
    fn on_notify(&mut self, e: &NotifyEvent) {
        _ = e;
    }

    /// Called when a finished action is removed from its actor.
    fn on_action_complete(&mut self, e: &ActionEvent) {
        _ = e;
    }

    /// Called when a group's child list changes.
    fn on_hierarchy(&mut self, e: &HierarchyEvent) {
        _ = e;
    }
}

/// Shared sinks let callers keep a handle while the scene records into it.
impl<S: TraceSink + ?Sized> TraceSink for Rc<RefCell<S>> {
    fn on_fire(&mut self, e: &FireEvent) {
        self.borrow_mut().on_fire(e);
    }

    fn on_notify(&mut self, e: &NotifyEvent) {
        self.borrow_mut().on_notify(e);
    }

    fn on_action_complete(&mut self, e: &ActionEvent) {
        self.borrow_mut().on_action_complete(e);
    }

    fn on_hierarchy(&mut self, e: &HierarchyEvent) {
        self.borrow_mut().on_hierarchy(e);
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin owner of an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing and
/// [`Tracer::new`] drops the sink. When **on**, each method checks the inner
/// `Option` (one branch) before dispatching to the sink.
#[derive(Default)]
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<Box<dyn TraceSink>>,
}

impl std::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Tracer {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: Box<dyn TraceSink>) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {}
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns `true` if events reach a sink.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        #[cfg(feature = "trace")]
        {
            self.sink.is_some()
        }
        #[cfg(not(feature = "trace"))]
        {
            false
        }
    }

    /// Emits a [`FireEvent`].
    #[inline]
    pub fn fire(&mut self, e: &FireEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_fire(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`NotifyEvent`].
    #[inline]
    pub fn notify(&mut self, e: &NotifyEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_notify(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`ActionEvent`].
    #[inline]
    pub fn action_complete(&mut self, e: &ActionEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_action_complete(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`HierarchyEvent`].
    #[inline]
    pub fn hierarchy(&mut self, e: &HierarchyEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_hierarchy(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn id(idx: u32) -> ActorId {
        ActorId { idx, generation: 0 }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_fire(&FireEvent {
            target: id(0),
            ascendants: 0,
            handled: false,
            stopped: false,
            cancelled: false,
        });
        sink.on_hierarchy(&HierarchyEvent {
            parent: id(0),
            child: id(1),
            change: HierarchyChange::Added,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        assert!(!tracer.is_enabled());
        tracer.action_complete(&ActionEvent {
            actor: id(3),
            remaining: 0,
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_shared_sink() {

        #[derive(Default)]
        struct RecordingSink {
            completed: Vec<ActorId>,
        }
        impl TraceSink for RecordingSink {
            fn on_action_complete(&mut self, e: &ActionEvent) {
                self.completed.push(e.actor);
            }
        }

        let sink = Rc::new(RefCell::new(RecordingSink::default()));
        let mut tracer = Tracer::new(Box::new(sink.clone()));
        assert!(tracer.is_enabled());
        tracer.action_complete(&ActionEvent {
            actor: id(4),
            remaining: 1,
        });
        assert_eq!(sink.borrow().completed, [id(4)]);
    }
}
