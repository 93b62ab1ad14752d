use lumen_config::brightness::BrightnessConfig;

/// The hosted document viewer the popup and slider are attached to
pub trait ViewerSurface: Send {
    /// Start forwarding pointer-release and touch-release selections
    fn attach_selection_listener(&mut self) -> Result<(), SurfaceError>;

    /// Add the brightness slider to the viewer toolbar
    fn inject_brightness_control(&mut self, config: &BrightnessConfig) -> Result<(), SurfaceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("Viewer document unreachable: {0}")]
    Unreachable(String),

    #[error("Viewer toolbar not found")]
    ToolbarMissing,
}
