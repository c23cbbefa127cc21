use winit::dpi::PhysicalSize;

/// Per-frame context passed to [`crate::core::App::frame`].
pub struct FrameCtx<'a> {
    /// The live GL context. Valid for the duration of the callback.
    pub gl: &'a glow::Context,

    /// Current drawable size in physical pixels.
    pub size: PhysicalSize<u32>,
}
