//! Vermilion engine crate.
//!
//! This crate owns the platform + OpenGL ES runtime pieces used by the demo
//! binary: window/event-loop runtime, context bootstrap, shader pipeline
//! setup, geometry upload and the per-frame draw path.

pub mod context;
pub mod core;
pub mod render;
pub mod window;

pub mod logging;
