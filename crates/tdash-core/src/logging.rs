//! Logging facade.
//!
//! With the `tracing` feature the `tracing` macros are re-exported here for
//! applications that log next to the toolkit without a direct `tracing`
//! dependency. `tdash-layout` depends on `tracing` itself; its `tracing`
//! feature turns this one on so both crates agree on one `tracing` version.
//! Without the feature, call sites are gated on `#[cfg(feature = "tracing")]`
//! and compile away entirely.
//!
//! The `tracing-json` feature adds [`init_json_logging`], which installs a
//! JSON subscriber filtered by `RUST_LOG`.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, error, info, trace, trace_span, warn};

/// Install a global JSON subscriber honoring `RUST_LOG`.
///
/// Fails if a global subscriber is already set.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
}
