// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`].
//!
//! Actor handles are recorded as raw `(index, generation)` pairs
//! ([`RecordedActor`]); they identify actors within one recording but are not
//! usable as live handles.

use proscenium_core::actor::ActorId;
use proscenium_core::trace::{
    ActionEvent, FireEvent, HierarchyChange, HierarchyEvent, NotifyEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_FIRE: u8 = 1;
const TAG_NOTIFY: u8 = 2;
const TAG_ACTION_COMPLETE: u8 = 3;
const TAG_HIERARCHY: u8 = 4;

const FLAG_HANDLED: u8 = 1 << 0;
const FLAG_STOPPED: u8 = 1 << 1;
const FLAG_CANCELLED: u8 = 1 << 2;
const FLAG_CAPTURE: u8 = 1 << 3;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Discards everything recorded so far.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_actor(&mut self, actor: ActorId) {
        self.write_u32(actor.index());
        self.write_u32(actor.generation());
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "counts capped at u32::MAX for recording"
    )]
    fn write_count(&mut self, count: usize) {
        self.write_u32(count.min(u32::MAX as usize) as u32);
    }
}

fn flag(set: bool, bit: u8) -> u8 {
    if set { bit } else { 0 }
}

impl TraceSink for RecorderSink {
    fn on_fire(&mut self, e: &FireEvent) {
        self.write_u8(TAG_FIRE);
        self.write_actor(e.target);
        self.write_count(e.ascendants);
        self.write_u8(
            flag(e.handled, FLAG_HANDLED)
                | flag(e.stopped, FLAG_STOPPED)
                | flag(e.cancelled, FLAG_CANCELLED),
        );
    }

    fn on_notify(&mut self, e: &NotifyEvent) {
        self.write_u8(TAG_NOTIFY);
        self.write_actor(e.actor);
        self.write_count(e.listeners);
        self.write_u8(flag(e.handled, FLAG_HANDLED) | flag(e.capture, FLAG_CAPTURE));
    }

    fn on_action_complete(&mut self, e: &ActionEvent) {
        self.write_u8(TAG_ACTION_COMPLETE);
        self.write_actor(e.actor);
        self.write_count(e.remaining);
    }

    fn on_hierarchy(&mut self, e: &HierarchyEvent) {
        self.write_u8(TAG_HIERARCHY);
        self.write_actor(e.parent);
        self.write_actor(e.child);
        self.write_u8(match e.change {
            HierarchyChange::Added => 0,
            HierarchyChange::Removed => 1,
        });
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// An actor handle as recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RecordedActor {
    /// Slot index.
    pub index: u32,
    /// Slot generation.
    pub generation: u32,
}

impl RecordedActor {
    /// Whether this record refers to `actor`.
    #[must_use]
    pub fn is(self, actor: ActorId) -> bool {
        self.index == actor.index() && self.generation == actor.generation()
    }
}

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// A [`FireEvent`].
    Fire {
        /// The actor the event was fired on.
        target: RecordedActor,
        /// Number of ascendants.
        ascendants: u32,
        /// Final handled flag.
        handled: bool,
        /// Final stopped flag.
        stopped: bool,
        /// Final cancelled flag.
        cancelled: bool,
    },
    /// A [`NotifyEvent`].
    Notify {
        /// The notified actor.
        actor: RecordedActor,
        /// Capture phase.
        capture: bool,
        /// Listeners swept.
        listeners: u32,
        /// Handled flag after the sweep.
        handled: bool,
    },
    /// An [`ActionEvent`].
    ActionComplete {
        /// The acting actor.
        actor: RecordedActor,
        /// Actions still attached.
        remaining: u32,
    },
    /// A [`HierarchyEvent`].
    Hierarchy {
        /// The group.
        parent: RecordedActor,
        /// The child.
        child: RecordedActor,
        /// Attach or detach.
        change: HierarchyChange,
    },
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_u8(&mut self) -> Option<u8> {
        if self.remaining() < 1 {
            return None;
        }
        let v = self.data[self.pos];
        self.pos += 1;
        Some(v)
    }

    fn read_u32(&mut self) -> Option<u32> {
        if self.remaining() < 4 {
            return None;
        }
        let v = u32::from_le_bytes(self.data[self.pos..self.pos + 4].try_into().ok()?);
        self.pos += 4;
        Some(v)
    }

    fn read_actor(&mut self) -> Option<RecordedActor> {
        Some(RecordedActor {
            index: self.read_u32()?,
            generation: self.read_u32()?,
        })
    }

    fn decode_fire(&mut self) -> Option<RecordedEvent> {
        let target = self.read_actor()?;
        let ascendants = self.read_u32()?;
        let flags = self.read_u8()?;
        Some(RecordedEvent::Fire {
            target,
            ascendants,
            handled: flags & FLAG_HANDLED != 0,
            stopped: flags & FLAG_STOPPED != 0,
            cancelled: flags & FLAG_CANCELLED != 0,
        })
    }

    fn decode_notify(&mut self) -> Option<RecordedEvent> {
        let actor = self.read_actor()?;
        let listeners = self.read_u32()?;
        let flags = self.read_u8()?;
        Some(RecordedEvent::Notify {
            actor,
            capture: flags & FLAG_CAPTURE != 0,
            listeners,
            handled: flags & FLAG_HANDLED != 0,
        })
    }

    fn decode_action_complete(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::ActionComplete {
            actor: self.read_actor()?,
            remaining: self.read_u32()?,
        })
    }

    fn decode_hierarchy(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Hierarchy {
            parent: self.read_actor()?,
            child: self.read_actor()?,
            change: match self.read_u8()? {
                0 => HierarchyChange::Added,
                _ => HierarchyChange::Removed,
            },
        })
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_FIRE => self.decode_fire(),
            TAG_NOTIFY => self.decode_notify(),
            TAG_ACTION_COMPLETE => self.decode_action_complete(),
            TAG_HIERARCHY => self.decode_hierarchy(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
