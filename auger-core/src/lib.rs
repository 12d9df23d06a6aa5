//! Core abstractions for the Auger design toolkit.
//!
//! The design calculations in Auger are expressed as [`Component`]s:
//! pure, deterministic units that map an input to an output or a typed
//! error. Keeping the computation surface behind this seam lets any
//! shell (CLI, service, UI) drive the same pipeline.

mod component;

pub use component::Component;
