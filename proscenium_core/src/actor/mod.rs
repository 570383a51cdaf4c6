// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Actor tree data model.
//!
//! An *actor* is a node in a 2D scene graph. Actors live in a [`Scene`]
//! arena and are addressed by generational [`ActorId`] handles, which become
//! stale when the actor is destroyed. A *group* is an actor that also owns an
//! ordered list of children.
//!
//! Each actor has:
//!
//! - **Geometry** in its parent's space: a bottom-left anchored position and
//!   size, plus scale and rotation (degrees, counterclockwise) about an
//!   origin relative to the bottom-left corner.
//! - **Paint state**: tint [`Color`](crate::color::Color), visibility,
//!   [`Touchable`] mode, a debug flag and an optional
//!   [`Drawable`](crate::render::Drawable).
//! - **Behavior**: capture and bubble
//!   [listeners](crate::event::EventListener) and attached
//!   [actions](crate::action).
//!
//! # Frame
//!
//! A frame is [`act`](Scene::act), then optionally
//! [`take_changes`](Scene::take_changes) for layout or incremental backends,
//! then [`draw`](Scene::draw). Input is routed through [`hit`](Scene::hit)
//! and [`fire`](Scene::fire).
//!
//! # Change tracking
//!
//! Geometry and hierarchy mutations mark [`dirty`](crate::dirty) channels.
//! A setter that writes the value already stored marks nothing.

mod act;
mod changes;
mod coords;
mod dispatch;
mod draw;
mod hit;
mod id;
mod store;
mod topology;
mod traverse;

pub use changes::SceneChanges;
pub use id::{ActorId, Touchable};
pub use store::Scene;
pub use traverse::Children;
