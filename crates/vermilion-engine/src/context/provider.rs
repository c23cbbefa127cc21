use std::ffi::{CStr, c_void};

use winit::dpi::PhysicalSize;

use super::ContextError;

/// Context-creation backend, selected once at startup.
///
/// The frame loop and shader setup never see which one was chosen; the
/// preference only steers how the display is brought up.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Backend {
    /// Platform-native context-creation API, with EGL as fallback.
    #[default]
    Native,
    /// Prefer EGL (the ANGLE/EGL path).
    Egl,
}

/// The seam between the runtime and a live OpenGL ES context.
///
/// Exactly one production implementation exists (`GlutinProvider`); the
/// trait keeps the rest of the engine written against a single interface
/// regardless of how the context was created.
pub trait ContextProvider {
    /// Presents the back buffer.
    fn swap_buffers(&self) -> Result<(), ContextError>;

    /// Resizes the underlying surface.
    ///
    /// Required on EGL-like platforms; a no-op elsewhere. Zero-sized
    /// requests are ignored.
    fn resize(&self, size: PhysicalSize<u32>);

    /// Resolves a GL entry point; null if unavailable.
    fn get_proc_address(&self, symbol: &CStr) -> *const c_void;

    /// One-line description of the context for the startup log.
    fn describe(&self) -> String;

    /// Builds a [`glow::Context`] over this provider's symbol loader.
    ///
    /// The provider's context must be current on the calling thread and stay
    /// current for as long as the returned functions are used.
    fn load_gl(&self) -> glow::Context {
        unsafe { glow::Context::from_loader_function_cstr(|symbol| self.get_proc_address(symbol)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_backend_is_native() {
        assert_eq!(Backend::default(), Backend::Native);
    }
}
