// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use proscenium_core::trace::{
    ActionEvent, FireEvent, HierarchyChange, HierarchyEvent, NotifyEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn flags(handled: bool, stopped: bool, cancelled: bool) -> String {
    let mut out = String::new();
    for (set, name) in [
        (handled, "handled"),
        (stopped, "stopped"),
        (cancelled, "cancelled"),
    ] {
        if set {
            if !out.is_empty() {
                out.push('|');
            }
            out.push_str(name);
        }
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_fire(&mut self, e: &FireEvent) {
        let _ = writeln!(
            self.writer,
            "[fire] target={:?} ascendants={} flags={}",
            e.target,
            e.ascendants,
            flags(e.handled, e.stopped, e.cancelled),
        );
    }

    fn on_notify(&mut self, e: &NotifyEvent) {
        let phase = if e.capture { "capture" } else { "bubble" };
        let _ = writeln!(
            self.writer,
            "[notify:{phase}] actor={:?} listeners={} handled={}",
            e.actor, e.listeners, e.handled,
        );
    }

    fn on_action_complete(&mut self, e: &ActionEvent) {
        let _ = writeln!(
            self.writer,
            "[action:done] actor={:?} remaining={}",
            e.actor, e.remaining,
        );
    }

    fn on_hierarchy(&mut self, e: &HierarchyEvent) {
        let verb = match e.change {
            HierarchyChange::Added => "add",
            HierarchyChange::Removed => "remove",
        };
        let _ = writeln!(
            self.writer,
            "[hierarchy:{verb}] parent={:?} child={:?}",
            e.parent, e.child,
        );
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use proscenium_core::actor::Scene;
    use proscenium_core::event::{Event, listener_fn};

    use super::*;

    fn lines(sink: &Rc<RefCell<PrettyPrintSink<Vec<u8>>>>) -> Vec<String> {
        let bytes = sink.borrow().writer.clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn flags_are_joined() {
        assert_eq!(flags(false, false, false), "-");
        assert_eq!(flags(true, false, false), "handled");
        assert_eq!(flags(true, true, true), "handled|stopped|cancelled");
    }

    #[test]
    fn scene_activity_is_printed() {
        let sink = Rc::new(RefCell::new(PrettyPrintSink::with_writer(Vec::new())));
        let mut scene = Scene::new();
        scene.set_trace_sink(Box::new(sink.clone()));

        let root = scene.create_group();
        let button = scene.create_actor();
        scene.add_actor(root, button);
        scene.add_listener(button, listener_fn(|_, _| true));
        scene.fire(button, &mut Event::new()).unwrap();

        let lines = lines(&sink);
        // Actors without listeners are not reported.
        assert_eq!(lines.len(), 3, "{lines:#?}");
        assert_eq!(
            lines[0],
            format!("[hierarchy:add] parent={root:?} child={button:?}")
        );
        assert_eq!(
            lines[1],
            format!("[notify:bubble] actor={button:?} listeners=1 handled=true")
        );
        assert_eq!(
            lines[2],
            format!("[fire] target={button:?} ascendants=1 flags=handled")
        );
    }
}
