use anyhow::Result;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the binary.
///
/// The runtime guarantees the call order: `setup` once with a live, current
/// GL context, then `frame` once per redraw, then `teardown` exactly once at
/// shutdown while the context is still current.
pub trait App {
    /// Called once after the GL context is live, before the first frame.
    ///
    /// A returned error aborts startup; the window never shows a frame.
    fn setup(&mut self, gl: &glow::Context) -> Result<()>;

    /// Called once per rendered frame.
    fn frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Called once at shutdown. GPU handles must be released here.
    fn teardown(&mut self, gl: &glow::Context);
}
