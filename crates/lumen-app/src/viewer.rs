use lumen_config::brightness::BrightnessConfig;
use lumen_config::viewer::ViewerConfig;
use lumen_core::{SurfaceError, ViewerSurface};

/// Viewer driven by the line script on stdin
pub struct ScriptedViewer {
    config: ViewerConfig,
}

impl ScriptedViewer {
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }

    fn document(&self) -> Result<(), SurfaceError> {
        if self.config.same_origin {
            Ok(())
        } else {
            Err(SurfaceError::Unreachable(
                "viewer frame is cross-origin".to_string(),
            ))
        }
    }
}

impl ViewerSurface for ScriptedViewer {
    fn attach_selection_listener(&mut self) -> Result<(), SurfaceError> {
        self.document()?;
        tracing::info!("Text selection listeners attached");
        Ok(())
    }

    fn inject_brightness_control(&mut self, config: &BrightnessConfig) -> Result<(), SurfaceError> {
        self.document()?;
        if !self.config.has_toolbar {
            return Err(SurfaceError::ToolbarMissing);
        }

        tracing::info!(
            "Brightness control injected ({}-{}%, step {})",
            config.min,
            config.max,
            config.step
        );
        Ok(())
    }
}
