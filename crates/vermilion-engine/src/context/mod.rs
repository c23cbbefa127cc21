//! OpenGL ES context bootstrap.
//!
//! This module is responsible for:
//! - creating the window together with a GL display/config/context/surface
//! - classifying creation failures into a small, loggable taxonomy
//! - presenting frames and resizing the surface behind one trait seam
//!
//! Everything above this module is written against [`ContextProvider`] and
//! never learns which context-creation API was used.

mod error;
mod glutin;
mod provider;

pub use error::{ContextError, ContextOp};
pub use glutin::GlutinProvider;
pub use provider::{Backend, ContextProvider};
