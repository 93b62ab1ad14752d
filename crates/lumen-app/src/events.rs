use kanal::AsyncReceiver;
use lumen_core::PopupCommand;
use lumen_types::AppEvent;
use tokio_util::sync::CancellationToken;

pub mod brightness_input;
pub mod viewer_loaded;

use brightness_input::handle_brightness_input;
use viewer_loaded::handle_viewer_loaded;

use crate::context::ViewerContext;

/// App's main loop, returns on `Quit`, cancellation or a closed channel
pub async fn event_loop(
    mut ctx: ViewerContext,
    event_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            event = event_rx.recv() => event?,
        };

        if !handle_event(&mut ctx, event).await? {
            tracing::info!("[EVENT_LOOP] Quit requested");
            return Ok(());
        }
    }
}

/// Returns `false` once the app should stop
async fn handle_event(ctx: &mut ViewerContext, event: AppEvent) -> anyhow::Result<bool> {
    match event {
        AppEvent::ViewerLoaded => {
            tracing::info!("PDF viewer loaded");
            handle_viewer_loaded(ctx).await;
        }
        AppEvent::SelectionChanged(selection) => {
            if ctx.selection_enabled {
                ctx.popup_tx
                    .send(PopupCommand::SelectionChanged(selection))
                    .await?;
            } else {
                tracing::debug!("Selection listener not attached, dropping selection");
            }
        }
        AppEvent::PointerClick(point) => {
            ctx.popup_tx.send(PopupCommand::PointerClick(point)).await?;
        }
        AppEvent::BrightnessInput(raw) => {
            handle_brightness_input(ctx, raw).await;
        }
        AppEvent::Quit => return Ok(false),
    }

    Ok(true)
}
