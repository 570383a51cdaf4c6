// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change-tracking channel constants.
//!
//! Geometry and hierarchy mutations on a [`Scene`](crate::actor::Scene) mark
//! channels in an [`understory_dirty`] tracker instead of invoking overridable
//! hooks. Each channel corresponds to one of the classic change hooks.
//!
//! # Propagation semantics
//!
//! - **Local-only** — [`POSITION`], [`SIZE`], [`SCALE`], [`ROTATION`] and
//!   [`CHILDREN`] only report the actor that was mutated. A setter marks its
//!   channel only when the value actually changed.
//!
//! - **Propagating** — [`TRANSFORM`] uses
//!   [`EagerPolicy`](understory_dirty::EagerPolicy) along child→parent
//!   dependency edges, so moving, scaling or rotating a group reports every
//!   descendant whose stage-space placement changed. Reparenting marks the
//!   moved subtree as well.
//!
//! # Consumption
//!
//! [`Scene::take_changes`](crate::actor::Scene::take_changes) drains all
//! channels and surfaces the results as
//! [`SceneChanges`](crate::actor::SceneChanges).

use understory_dirty::Channel;

/// Position changed (`x` or `y`).
pub const POSITION: Channel = Channel::new(0);

/// Size changed (`width` or `height`).
pub const SIZE: Channel = Channel::new(1);

/// Scale changed (`scale_x` or `scale_y`).
pub const SCALE: Channel = Channel::new(2);

/// Rotation changed.
pub const ROTATION: Channel = Channel::new(3);

/// A group's child list changed (add, remove, reorder).
pub const CHILDREN: Channel = Channel::new(4);

/// Stage-space placement changed; propagates to descendants.
pub const TRANSFORM: Channel = Channel::new(5);
