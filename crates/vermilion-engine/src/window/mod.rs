//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the GL context
//! provider and the application contract.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
