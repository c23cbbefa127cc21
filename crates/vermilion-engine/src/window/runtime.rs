use anyhow::{Context as _, Result};
use glow::HasContext;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::context::{Backend, ContextProvider, GlutinProvider};
use crate::core::{App, AppControl, FrameCtx};
use crate::render;

/// Window/runtime configuration.
///
/// Exists for wiring and tests; nothing here is an external user surface.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub backend: Backend,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "vermilion".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            backend: Backend::default(),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, brings up the GL context and drives `app` until the
    /// window is closed or startup fails.
    ///
    /// Startup failures (window/context creation, function-pointer loading,
    /// `App::setup`) are returned to the caller; per-frame driver errors are
    /// logged and the loop continues.
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        if let Some(err) = state.fatal.take() {
            return Err(err);
        }
        Ok(())
    }
}

/// Live graphics objects for the single window.
///
/// Field order matters: the provider (surface + context) must drop before
/// the window it was created from.
struct Gfx {
    provider: Box<dyn ContextProvider>,
    gl: glow::Context,
    window: Window,
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    app: A,

    gfx: Option<Gfx>,
    fatal: Option<anyhow::Error>,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, app: A) -> Self {
        Self {
            config,
            app,
            gfx: None,
            fatal: None,
            exit_requested: false,
        }
    }

    fn bootstrap(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let (window, provider) =
            GlutinProvider::bootstrap(event_loop, attrs, self.config.backend)
                .context("failed to create window and OpenGL ES context")?;
        let provider: Box<dyn ContextProvider> = Box::new(provider);

        // The loader must resolve core entry points before any GL call is
        // issued through it.
        if provider.get_proc_address(c"glGetString").is_null() {
            anyhow::bail!("failed to load OpenGL ES function pointers");
        }
        let gl = provider.load_gl();

        log::info!("{}", provider.describe());
        unsafe {
            log::info!("GL_VERSION:  {}", gl.get_parameter_string(glow::VERSION));
            log::info!("GL_VENDOR:   {}", gl.get_parameter_string(glow::VENDOR));
            log::info!("GL_RENDERER: {}", gl.get_parameter_string(glow::RENDERER));
            log::info!(
                "GLSL:        {}",
                gl.get_parameter_string(glow::SHADING_LANGUAGE_VERSION)
            );
        }

        let size = window.inner_size();
        unsafe { gl.viewport(0, 0, size.width as i32, size.height as i32) };

        self.app
            .setup(&gl)
            .context("failed to initialize rendering")?;

        self.gfx = Some(Gfx {
            provider,
            gl,
            window,
        });
        Ok(())
    }

    /// Runs `App::teardown` once and releases the graphics objects.
    fn teardown(&mut self) {
        if let Some(gfx) = self.gfx.take() {
            self.app.teardown(&gfx.gl);
            // Dropping `gfx` releases surface + context, then the window.
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gfx.is_some() {
            return;
        }

        if let Err(e) = self.bootstrap(event_loop) {
            log::error!("startup failed: {e:#}");
            self.fatal = Some(e);
            self.request_exit(event_loop);
            return;
        }

        if let Some(gfx) = &self.gfx {
            gfx.window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: every frame renders the same static shape.
        if let Some(gfx) = &self.gfx {
            gfx.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.teardown();
                self.request_exit(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                if let Some(gfx) = &self.gfx {
                    gfx.provider.resize(new_size);
                    unsafe {
                        gfx.gl
                            .viewport(0, 0, new_size.width as i32, new_size.height as i32)
                    };
                    gfx.window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                let mut control = AppControl::Continue;

                if let Some(gfx) = &self.gfx {
                    let size = gfx.window.inner_size();

                    {
                        let mut ctx = FrameCtx { gl: &gfx.gl, size };
                        control = self.app.frame(&mut ctx);
                    }

                    // Per-frame driver errors are logged, never fatal.
                    render::drain_gl_errors(&gfx.gl);

                    gfx.window.pre_present_notify();
                    if let Err(e) = gfx.provider.swap_buffers() {
                        log::error!("buffer swap failed: {e}");
                    }
                }

                if control == AppControl::Exit {
                    self.teardown();
                    self.request_exit(event_loop);
                }
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = RuntimeConfig::default();
        assert_eq!(cfg.initial_size, LogicalSize::new(800.0, 600.0));
        assert_eq!(cfg.backend, Backend::Native);
    }
}
