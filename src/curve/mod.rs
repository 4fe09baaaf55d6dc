//! Curve evaluation boundary.
//!
//! The renderer only ever sees [`Curve::sample`]; which family produced a point is opaque to it.

/// Built-in parametric curve families.
pub mod family;
/// The sampling contract shared by built-in families and user plug-ins.
pub mod sample;
/// Frame-index to curve-parameter mappings.
pub mod time;
