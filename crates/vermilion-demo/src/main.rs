//! "Red Circle" — OpenGL ES rendering-pipeline smoke test.
//!
//! Opens an 800×600 window, compiles the vertex/fragment shader pair read
//! from the working directory, and renders one static triangle-fan circle
//! per frame until the window is closed. Exits 0 on clean shutdown and
//! non-zero on any initialization failure.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use winit::dpi::LogicalSize;

use vermilion_engine::context::Backend;
use vermilion_engine::core::{App, AppControl, FrameCtx};
use vermilion_engine::logging::{LoggingConfig, init_logging};
use vermilion_engine::render::{CircleRenderer, shader};
use vermilion_engine::window::{Runtime, RuntimeConfig};

const WINDOW_TITLE: &str = "Red Circle";
const WINDOW_WIDTH: f64 = 800.0;
const WINDOW_HEIGHT: f64 = 600.0;

/// The one scene this program has.
struct RedCircle {
    vertex_path: PathBuf,
    fragment_path: PathBuf,
    renderer: Option<CircleRenderer>,
}

impl RedCircle {
    fn new() -> Self {
        // Shader sources are resolved against the working directory.
        Self {
            vertex_path: PathBuf::from("vertex_shader.glsl"),
            fragment_path: PathBuf::from("fragment_shader.glsl"),
            renderer: None,
        }
    }
}

impl App for RedCircle {
    fn setup(&mut self, gl: &glow::Context) -> Result<()> {
        // Both sources are loaded before either stage is compiled; a missing
        // file never reaches the compiler.
        let vertex_src = shader::load_source(&self.vertex_path)?;
        let fragment_src = shader::load_source(&self.fragment_path)?;

        self.renderer = Some(CircleRenderer::new(gl, &vertex_src, &fragment_src)?);
        Ok(())
    }

    fn frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if let Some(renderer) = &self.renderer {
            renderer.draw(ctx.gl);
        }
        AppControl::Continue
    }

    fn teardown(&mut self, gl: &glow::Context) {
        if let Some(renderer) = self.renderer.take() {
            renderer.destroy(gl);
        }
    }
}

fn backend() -> Backend {
    if cfg!(feature = "egl") {
        Backend::Egl
    } else {
        Backend::Native
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: WINDOW_TITLE.to_string(),
        initial_size: LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        backend: backend(),
    };

    log::info!(
        "starting {WINDOW_TITLE} ({}x{}, backend {:?})",
        WINDOW_WIDTH as u32,
        WINDOW_HEIGHT as u32,
        config.backend
    );

    Runtime::run(config, RedCircle::new()).context("red circle demo failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_paths_are_relative_to_the_working_directory() {
        let app = RedCircle::new();
        assert!(app.vertex_path.is_relative());
        assert!(app.fragment_path.is_relative());
        assert_eq!(app.vertex_path, PathBuf::from("vertex_shader.glsl"));
        assert_eq!(app.fragment_path, PathBuf::from("fragment_shader.glsl"));
    }

    #[cfg(not(feature = "egl"))]
    #[test]
    fn default_backend_is_native() {
        assert_eq!(backend(), Backend::Native);
    }

    #[cfg(feature = "egl")]
    #[test]
    fn egl_feature_selects_egl_backend() {
        assert_eq!(backend(), Backend::Egl);
    }
}
