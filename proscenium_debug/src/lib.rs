// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and tree dumps for proscenium diagnostics.
//!
//! This crate provides [`TraceSink`](proscenium_core::trace::TraceSink)
//! implementations and scene inspection helpers for development:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`] — compact binary recording with
//!   [`recorder::decode`] for playback.
//! - [`tree`] — indented text and JSON snapshots of an actor tree.

pub mod pretty;
pub mod recorder;
pub mod tree;
