//! JSON-facing run description.
//!
//! An [`animation::Animation`] pairs per-run render settings with one built-in curve family. It is
//! validated once and resolved into the immutable plan a `RenderSession` executes.

/// `Animation` boundary object (JSON load/save).
pub mod animation;
/// Per-run render settings and their resolution.
pub mod config;
