// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene-graph core for 2D user interfaces and games.
//!
//! `proscenium_core` provides a retained tree of actors with hierarchical
//! transforms, hit testing, two-phase event dispatch and frame-driven
//! actions. Rendering and input are supplied by the embedder through the
//! [`Stage`](stage::Stage) and [`render`] traits.
//!
//! # Architecture
//!
//! ```text
//!   input ──► Scene::hit() ──► Scene::fire() ──► capture ▼ / bubble ▲
//!                                                      │
//!   frame ──► Scene::act() ──► Action::act()           │
//!                 │                                    ▼
//!                 └──────► Scene::take_changes() ──► Scene::draw()
//! ```
//!
//! **[`actor`]** — The [`Scene`](actor::Scene) arena with generational
//! handles: hierarchy, geometry, coordinate conversion, hit testing,
//! dispatch, acting and drawing.
//!
//! **[`event`]** — [`Event`](event::Event) state and the
//! [`EventListener`](event::EventListener) trait.
//!
//! **[`action`]** — The [`Action`](action::Action) trait, shared
//! [`ActionHandle`](action::ActionHandle)s, pools and the built-in action
//! families. [`actions`] has constructor functions for them.
//!
//! **[`pool`]** / **[`delayed`]** — Object pooling and a vector that defers
//! removals while it is being iterated.
//!
//! **[`dirty`]** — Change-notification channels drained by
//! [`Scene::take_changes`](actor::Scene::take_changes).
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) and event types for
//! dispatch and hierarchy instrumentation.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod action;
pub mod actions;
pub mod actor;
pub mod align;
pub mod color;
pub mod delayed;
pub mod dirty;
pub mod error;
pub mod event;
pub mod pool;
pub mod render;
pub mod stage;
pub mod trace;

#[cfg(test)]
mod testing;

pub use error::{BoxError, Error, Result};
