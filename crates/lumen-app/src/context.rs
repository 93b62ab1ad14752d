use std::sync::Arc;

use kanal::AsyncSender;
use lumen_core::{BrightnessOverlay, PopupCommand, ViewerSurface};

use crate::state::AppState;

/// Collaborators the app event loop dispatches to
pub struct ViewerContext {
    pub state: Arc<AppState>,
    pub popup_tx: AsyncSender<PopupCommand>,
    pub viewer: Box<dyn ViewerSurface>,
    pub overlay: Box<dyn BrightnessOverlay>,
    /// Set once the selection listener is attached
    pub selection_enabled: bool,
    /// Set once the brightness slider is in the toolbar
    pub brightness_enabled: bool,
}

impl ViewerContext {
    pub fn new(
        state: Arc<AppState>,
        popup_tx: AsyncSender<PopupCommand>,
        viewer: Box<dyn ViewerSurface>,
        overlay: Box<dyn BrightnessOverlay>,
    ) -> Self {
        Self {
            state,
            popup_tx,
            viewer,
            overlay,
            selection_enabled: false,
            brightness_enabled: false,
        }
    }
}
