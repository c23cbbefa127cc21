use glutin::error::ErrorKind;
use thiserror::Error;

/// Which context operation a driver error interrupted.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ContextOp {
    CreateContext,
    CreateSurface,
    MakeCurrent,
    SwapBuffers,
}

/// Context bootstrap / presentation failures, classified.
///
/// Every variant is fatal during startup: the caller logs the diagnostic and
/// terminates without retrying. Only the swap path surfaces these after
/// startup, where they are logged and the loop continues.
#[derive(Debug, Error)]
pub enum ContextError {
    /// The display library was not initialized or the display is gone.
    #[error("display system is not initialized: {0}")]
    NotInitialized(String),

    /// An attribute combination the platform rejects.
    #[error("invalid context configuration: {0}")]
    InvalidConfig(String),

    /// The requested client API (OpenGL ES) is not available at all.
    #[error("requested OpenGL ES API is unavailable: {0}")]
    ApiUnavailable(String),

    /// The client API exists, but not at the requested version.
    #[error("requested OpenGL ES 3.0 context is unavailable: {0}")]
    VersionUnavailable(String),

    /// Anything platform-specific that fits no category above.
    #[error("platform error: {0}")]
    Platform(String),
}

impl ContextError {
    /// Classifies a glutin error by its kind and the operation it
    /// interrupted.
    pub(crate) fn classify(op: ContextOp, err: &glutin::error::Error) -> Self {
        classify_kind(op, err.error_kind(), err.to_string())
    }
}

fn classify_kind(op: ContextOp, kind: ErrorKind, detail: String) -> ContextError {
    match kind {
        ErrorKind::InitializationFailed | ErrorKind::BadDisplay => {
            ContextError::NotInitialized(detail)
        }

        // A version request the driver cannot satisfy surfaces as a match or
        // attribute failure while the context itself is created.
        ErrorKind::BadMatch | ErrorKind::BadAttribute if op == ContextOp::CreateContext => {
            ContextError::VersionUnavailable(detail)
        }

        ErrorKind::NotSupported(_) => ContextError::ApiUnavailable(detail),

        ErrorKind::BadMatch | ErrorKind::BadAttribute | ErrorKind::BadParameter => {
            ContextError::InvalidConfig(detail)
        }

        _ => ContextError::Platform(detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(op: ContextOp, kind: ErrorKind) -> ContextError {
        classify_kind(op, kind, "detail".to_string())
    }

    #[test]
    fn uninitialized_display() {
        assert!(matches!(
            kind(ContextOp::CreateContext, ErrorKind::InitializationFailed),
            ContextError::NotInitialized(_)
        ));
        assert!(matches!(
            kind(ContextOp::CreateSurface, ErrorKind::BadDisplay),
            ContextError::NotInitialized(_)
        ));
    }

    #[test]
    fn version_mismatch_only_during_context_creation() {
        assert!(matches!(
            kind(ContextOp::CreateContext, ErrorKind::BadMatch),
            ContextError::VersionUnavailable(_)
        ));
        assert!(matches!(
            kind(ContextOp::CreateContext, ErrorKind::BadAttribute),
            ContextError::VersionUnavailable(_)
        ));

        // The same kinds outside context creation are configuration errors.
        assert!(matches!(
            kind(ContextOp::CreateSurface, ErrorKind::BadMatch),
            ContextError::InvalidConfig(_)
        ));
        assert!(matches!(
            kind(ContextOp::MakeCurrent, ErrorKind::BadAttribute),
            ContextError::InvalidConfig(_)
        ));
    }

    #[test]
    fn unsupported_api_is_api_unavailable() {
        assert!(matches!(
            kind(ContextOp::CreateContext, ErrorKind::NotSupported("egl")),
            ContextError::ApiUnavailable(_)
        ));
        assert!(matches!(
            kind(ContextOp::SwapBuffers, ErrorKind::NotSupported("egl")),
            ContextError::ApiUnavailable(_)
        ));
    }

    #[test]
    fn everything_else_is_platform() {
        assert!(matches!(
            kind(ContextOp::MakeCurrent, ErrorKind::BadAccess),
            ContextError::Platform(_)
        ));
    }

    #[test]
    fn detail_is_preserved_in_display() {
        let err = kind(ContextOp::CreateContext, ErrorKind::InitializationFailed);
        assert!(err.to_string().contains("detail"));
    }
}
