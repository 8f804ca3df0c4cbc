//! # recall-engine
//!
//! Deterministic temporal reference extraction for AI agents.
//!
//! Free text captured from a conversation often embeds the *when* inside the
//! words: "I met Sarah 3 weeks ago", "we spoke last Tuesday". Before such
//! text is stored as a long-lived memory, the embedded reference should be
//! resolved to an absolute calendar date and stripped from the text, so the
//! stored fact carries a date that stays correct instead of a phrase that
//! decays.
//!
//! All functions take explicit inputs (no system clock access) — the caller
//! provides the reference date a phrase is resolved against, keeping these
//! functions deterministic and testable.
//!
//! ## Modules
//!
//! - [`pattern`] — ordered recognizer rules: free text → [`RecognizedPattern`]
//! - [`calendar`] — recognized pattern + reference date → absolute date
//! - [`extract`] — the public entry points: resolve and strip in one call
//! - [`error`] — error types

pub mod calendar;
pub mod error;
pub mod extract;
pub mod pattern;

pub use calendar::resolve_pattern;
pub use error::{RecallError, Result};
pub use extract::{
    resolve_temporal_reference, resolve_temporal_reference_str, ResolutionResult,
};
pub use pattern::{classify, OffsetUnit, RecognizedPattern};
