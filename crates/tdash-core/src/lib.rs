#![forbid(unsafe_code)]

//! Core: geometry, input vocabulary, style tokens, and logging.
//!
//! # Role in tdash
//! `tdash-core` is the shared vocabulary of the container toolkit. It owns the
//! rectangle type every layout computation works in, the pure shrink helpers
//! used for margins and padding, the key and mouse event types the focus model
//! matches against, and the color / line-style tokens stored in container
//! configuration.
//!
//! # How it fits in the system
//! `tdash-layout` builds the container tree on top of these types. Terminal
//! I/O and rendering live outside this workspace and only exchange these
//! values with the layout core.

pub mod event;
pub mod geometry;
pub mod logging;
pub mod style;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, trace, trace_span, warn};
