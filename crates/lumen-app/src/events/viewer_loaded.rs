use lumen_core::BrightnessLevel;

use crate::context::ViewerContext;

/// Attach to the freshly loaded viewer; failures only disable the feature
pub async fn handle_viewer_loaded(ctx: &mut ViewerContext) {
    let brightness = {
        let config = ctx.state.config.read().await;
        config.brightness.clone()
    };

    match ctx.viewer.attach_selection_listener() {
        Ok(()) => ctx.selection_enabled = true,
        Err(e) => {
            ctx.selection_enabled = false;
            tracing::error!("Error setting up text selection: {}", e);
        }
    }

    match ctx.viewer.inject_brightness_control(&brightness) {
        Ok(()) => {
            ctx.brightness_enabled = true;
            let level = BrightnessLevel::from_slider(brightness.initial, &brightness);
            ctx.overlay.apply(level);
        }
        Err(e) => {
            ctx.brightness_enabled = false;
            tracing::error!("Error injecting brightness control: {}", e);
        }
    }
}
