use std::ffi::{CStr, c_void};
use std::num::NonZeroU32;

use glutin::config::{Api, Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentGlContext, PossiblyCurrentContext, Version,
};
use glutin::display::{Display, GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{ApiPreference, DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use super::error::{ContextError, ContextOp};
use super::provider::{Backend, ContextProvider};

/// Context provider backed by glutin.
///
/// Owns the display, the current context and the window surface. The window
/// itself is handed back to the runtime, which must keep it alive for as
/// long as this provider exists.
pub struct GlutinProvider {
    display: Display,
    context: PossiblyCurrentContext,
    surface: Surface<WindowSurface>,
    backend: Backend,
}

impl GlutinProvider {
    /// Creates the window and a current OpenGL ES 3.0 context for it.
    ///
    /// Failure is classified into [`ContextError`] and is always fatal to
    /// startup; there is no retry and no fallback version.
    pub fn bootstrap(
        event_loop: &ActiveEventLoop,
        attrs: WindowAttributes,
        backend: Backend,
    ) -> Result<(Window, Self), ContextError> {
        let template = ConfigTemplateBuilder::new().with_api(Api::GLES3);

        let preference = match backend {
            Backend::Native => ApiPreference::FallbackEgl,
            Backend::Egl => ApiPreference::PreferEgl,
        };

        let (window, gl_config) = DisplayBuilder::new()
            .with_preference(preference)
            .with_window_attributes(Some(attrs))
            .build(event_loop, template, pick_config)
            .map_err(|e| ContextError::Platform(format!("window/display creation failed: {e}")))?;

        let window = window
            .ok_or_else(|| ContextError::Platform("display builder produced no window".into()))?;

        let raw_window_handle = window
            .window_handle()
            .map_err(|e| ContextError::Platform(format!("window handle unavailable: {e}")))?
            .as_raw();

        let gl_display = gl_config.display();

        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::Gles(Some(Version::new(3, 0))))
            .build(Some(raw_window_handle));

        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes) }
            .map_err(|e| ContextError::classify(ContextOp::CreateContext, &e))?;

        let surface_attributes = window
            .build_surface_attributes(Default::default())
            .map_err(|e| ContextError::Platform(format!("surface attributes unavailable: {e}")))?;

        let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes) }
            .map_err(|e| ContextError::classify(ContextOp::CreateSurface, &e))?;

        let context = not_current
            .make_current(&surface)
            .map_err(|e| ContextError::classify(ContextOp::MakeCurrent, &e))?;

        // Swap interval 1 ties presentation to the display refresh. Some
        // drivers refuse, which is survivable.
        if let Err(e) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
            log::warn!("could not enable vsync: {e}");
        }

        log::debug!(
            "GL config selected: {} samples, {:?} preference",
            gl_config.num_samples(),
            preference
        );

        Ok((
            window,
            Self {
                display: gl_display,
                context,
                surface,
                backend,
            },
        ))
    }
}

impl ContextProvider for GlutinProvider {
    fn swap_buffers(&self) -> Result<(), ContextError> {
        self.surface
            .swap_buffers(&self.context)
            .map_err(|e| ContextError::classify(ContextOp::SwapBuffers, &e))
    }

    fn resize(&self, size: PhysicalSize<u32>) {
        let (Some(width), Some(height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };
        self.surface.resize(&self.context, width, height);
    }

    fn get_proc_address(&self, symbol: &CStr) -> *const c_void {
        self.display.get_proc_address(symbol)
    }

    fn describe(&self) -> String {
        format!(
            "OpenGL ES 3.0 context via glutin (backend preference: {:?})",
            self.backend
        )
    }
}

fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    // Fewest samples wins: one opaque shape has no use for multisampling.
    configs
        .reduce(|best, candidate| {
            if candidate.num_samples() < best.num_samples() {
                candidate
            } else {
                best
            }
        })
        .expect("glutin offered no matching GL configs")
}
