//! OpenGL ES rendering subsystem.
//!
//! Convention:
//! - CPU geometry is in normalized device coordinates; the vertex stage
//!   passes positions through untouched.
//! - Every GL entry point takes the `glow` context explicitly. No handle is
//!   stored globally; renderers own their GPU resources as fields.

pub mod geometry;
pub mod shader;

mod circle;

pub use circle::CircleRenderer;

use glow::HasContext;

/// Drains the GL error queue, logging every pending code by name.
///
/// Returns the number of codes drained. Per-frame driver errors are observed
/// and reported but never interrupt the frame loop.
pub fn drain_gl_errors(gl: &glow::Context) -> usize {
    let mut drained = 0;
    loop {
        let code = unsafe { gl.get_error() };
        if code == glow::NO_ERROR {
            return drained;
        }
        drained += 1;
        log::error!("OpenGL error: {} (0x{code:04x})", gl_error_name(code));
    }
}

/// Symbolic name of a GL error code.
pub fn gl_error_name(code: u32) -> &'static str {
    match code {
        glow::INVALID_ENUM => "GL_INVALID_ENUM",
        glow::INVALID_VALUE => "GL_INVALID_VALUE",
        glow::INVALID_OPERATION => "GL_INVALID_OPERATION",
        glow::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        glow::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        _ => "unknown GL error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_names_cover_the_es_codes() {
        assert_eq!(gl_error_name(glow::INVALID_ENUM), "GL_INVALID_ENUM");
        assert_eq!(gl_error_name(glow::INVALID_VALUE), "GL_INVALID_VALUE");
        assert_eq!(gl_error_name(glow::INVALID_OPERATION), "GL_INVALID_OPERATION");
        assert_eq!(gl_error_name(glow::OUT_OF_MEMORY), "GL_OUT_OF_MEMORY");
    }

    #[test]
    fn unknown_codes_do_not_panic() {
        assert_eq!(gl_error_name(0xDEAD), "unknown GL error");
    }
}
