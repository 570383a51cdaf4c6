// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while dispatching events and running actions.
//!
//! Precondition violations (stale handles, non-group actors used as groups,
//! firing an event without a target) panic instead; see the `# Panics`
//! sections on [`Scene`](crate::actor::Scene) methods.

/// Type-erased error returned by listeners and actions.
pub type BoxError = Box<dyn std::error::Error + 'static>;

/// Alias for `Result<T, proscenium_core::Error>`.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Maximum number of characters of actor context attached to an error.
pub const CONTEXT_LIMIT: usize = 128;

/// A failure raised by user code, annotated with the actor it ran on.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An [`EventListener`](crate::event::EventListener) returned an error.
    #[error("listener failed on actor: {actor}")]
    Listener {
        /// Description of the notified actor, at most [`CONTEXT_LIMIT`] characters.
        actor: String,
        /// The listener's error.
        #[source]
        source: BoxError,
    },

    /// An [`Action`](crate::action::Action) returned an error.
    #[error("action failed on actor: {actor}")]
    Action {
        /// Description of the acting actor, at most [`CONTEXT_LIMIT`] characters.
        actor: String,
        /// The action's error.
        #[source]
        source: BoxError,
    },
}

impl Error {
    /// Returns the actor context attached to this error.
    #[must_use]
    pub fn actor(&self) -> &str {
        match self {
            Self::Listener { actor, .. } | Self::Action { actor, .. } => actor,
        }
    }
}

/// Truncates `context` to at most [`CONTEXT_LIMIT`] characters.
pub(crate) fn truncate_context(mut context: String) -> String {
    if let Some((byte_idx, _)) = context.char_indices().nth(CONTEXT_LIMIT) {
        context.truncate(byte_idx);
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_context_is_kept() {
        assert_eq!(truncate_context("Group#1".to_string()), "Group#1");
    }

    #[test]
    fn long_context_is_truncated_on_char_boundary() {
        let long: String = std::iter::repeat_n('é', 300).collect();
        let truncated = truncate_context(long);
        assert_eq!(truncated.chars().count(), CONTEXT_LIMIT);
    }

    #[test]
    fn error_exposes_actor() {
        let err = Error::Action {
            actor: "hero".to_string(),
            source: "boom".into(),
        };
        assert_eq!(err.actor(), "hero");
        assert_eq!(err.to_string(), "action failed on actor: hero");
    }
}
