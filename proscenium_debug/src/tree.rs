// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Actor tree snapshots.
//!
//! [`dump_text`] renders one line per actor with its geometry and paint
//! state, indented by depth. [`dump_json`] produces the same information as
//! a nested [`serde_json::Value`], suitable for diffing in tests or saving
//! alongside a bug report.

use std::fmt::Write as _;
use std::io;

use kurbo::Point;
use proscenium_core::actor::{ActorId, Scene, Touchable};
use serde_json::{Value, json};

fn label(scene: &Scene, id: ActorId) -> String {
    match scene.name(id) {
        Some(name) => name.to_owned(),
        None if scene.is_group(id) => format!("Group#{}", id.index()),
        None => format!("Actor#{}", id.index()),
    }
}

fn touchable_name(touchable: Touchable) -> &'static str {
    match touchable {
        Touchable::Enabled => "enabled",
        Touchable::Disabled => "disabled",
        Touchable::ChildrenOnly => "children-only",
    }
}

/// Renders `root` and its descendants as indented text.
///
/// Each line reads `label (x, y) widthxheight`, followed by the stage-space
/// position of the bottom-left corner and any non-default state.
#[must_use]
pub fn dump_text(scene: &Scene, root: ActorId) -> String {
    let mut out = String::new();
    write_text(scene, root, 0, &mut out);
    out
}

fn write_text(scene: &Scene, id: ActorId, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    let stage = scene.local_to_stage(id, Point::ZERO);
    let _ = write!(
        out,
        "{} ({}, {}) {}x{} @stage({:.1}, {:.1})",
        label(scene, id),
        scene.x(id),
        scene.y(id),
        scene.width(id),
        scene.height(id),
        stage.x,
        stage.y,
    );
    if scene.rotation(id) != 0.0 {
        let _ = write!(out, " rot={}", scene.rotation(id));
    }
    if scene.scale_x(id) != 1.0 || scene.scale_y(id) != 1.0 {
        let _ = write!(out, " scale=({}, {})", scene.scale_x(id), scene.scale_y(id));
    }
    if !scene.is_visible(id) {
        out.push_str(" hidden");
    }
    if scene.touchable(id) != Touchable::Enabled {
        let _ = write!(out, " touch={}", touchable_name(scene.touchable(id)));
    }
    if scene.is_group(id) && !scene.is_transform_enabled(id) {
        out.push_str(" untransformed");
    }
    out.push('\n');
    if scene.is_group(id) {
        for child in scene.children(id) {
            write_text(scene, child, depth + 1, out);
        }
    }
}

/// Snapshots `root` and its descendants as JSON.
#[must_use]
pub fn dump_json(scene: &Scene, root: ActorId) -> Value {
    let color = scene.color(root);
    let mut node = json!({
        "id": root.index(),
        "generation": root.generation(),
        "label": label(scene, root),
        "group": scene.is_group(root),
        "x": scene.x(root),
        "y": scene.y(root),
        "width": scene.width(root),
        "height": scene.height(root),
        "origin": [scene.origin_x(root), scene.origin_y(root)],
        "scale": [scene.scale_x(root), scene.scale_y(root)],
        "rotation": scene.rotation(root),
        "color": [color.r, color.g, color.b, color.a],
        "visible": scene.is_visible(root),
        "touchable": touchable_name(scene.touchable(root)),
        "actions": scene.actions(root).len(),
        "listeners": scene.listeners(root).len() + scene.capture_listeners(root).len(),
    });
    if scene.is_group(root) {
        let children: Vec<Value> = scene
            .children(root)
            .map(|child| dump_json(scene, child))
            .collect();
        node["transform"] = Value::Bool(scene.is_transform_enabled(root));
        node["children"] = Value::Array(children);
    }
    node
}

/// Writes [`dump_json`] output, pretty-printed, to `writer`.
///
/// # Errors
///
/// Returns any I/O error from `writer`.
pub fn write_json<W: io::Write>(scene: &Scene, root: ActorId, writer: W) -> io::Result<()> {
    serde_json::to_writer_pretty(writer, &dump_json(scene, root))?;
    Ok(())
}
