//! Mediatrace is a diagnostic helper for media applications: it walks a
//! format description (an ordered collection of identifier/value attribute
//! pairs) and prints each attribute's symbolic name and value to a trace
//! sink, for inspecting format negotiation while debugging.
//!
//! The [`trace_media_type!`] macro is the usual entry point; it compiles to
//! nothing when the `log-trace` cargo feature is disabled.

/// 128-bit opaque identifiers in the classic GUID layout.
pub mod guid;
/// Leveled log sinks and feature-gated logging macros.
pub mod log;
/// Media format attributes: well-known identifiers, typed values, and the dumper.
pub mod media_type;
