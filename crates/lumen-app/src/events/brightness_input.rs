use lumen_core::BrightnessLevel;

use crate::context::ViewerContext;

pub async fn handle_brightness_input(ctx: &mut ViewerContext, raw: u8) {
    if !ctx.brightness_enabled {
        tracing::debug!("Brightness control not injected, ignoring input {}", raw);
        return;
    }

    let level = {
        let config = ctx.state.config.read().await;
        BrightnessLevel::from_slider(raw, &config.brightness)
    };

    tracing::debug!("Brightness set to {}", level.label());
    ctx.overlay.apply(level);
}
