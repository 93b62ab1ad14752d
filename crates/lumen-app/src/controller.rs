use std::io::BufRead;
use std::sync::Arc;
use std::thread::JoinHandle;

use kanal::{AsyncReceiver, AsyncSender};
use lumen_core::{BrightnessOverlay, PopupCommand, PopupController, PopupView, ViewerSurface};
use lumen_translator::Translator;
use lumen_types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::context::ViewerContext;
use crate::events::event_loop;
use crate::io::spawn_script_reader;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub app_events: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub popup: (AsyncSender<PopupCommand>, AsyncReceiver<PopupCommand>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            app_events: kanal::bounded_async(capacity),
            popup: kanal::bounded_async(capacity),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub async fn new(state: Arc<AppState>) -> Self {
        let capacity = state.config.read().await.channel_capacity.max(1);

        Self {
            channels: ChannelSet::new(capacity),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub async fn spawn_tasks<V>(
        &self,
        view: V,
        viewer: Box<dyn ViewerSurface>,
        overlay: Box<dyn BrightnessOverlay>,
        translator: Arc<dyn Translator>,
    ) -> JoinSet<anyhow::Result<()>>
    where
        V: PopupView + 'static,
    {
        let mut tasks = JoinSet::new();

        let popup = {
            let config = self.state.config.read().await;
            PopupController::new(view, translator, &config, self.channels.popup.0.clone())
        };

        // Popup controller
        let popup_rx = self.channels.popup.1.clone();
        let popup_cancel = self.cancel_token.child_token();
        tasks.spawn(async move {
            popup.run(popup_rx, popup_cancel).await;
            Ok(())
        });

        // Event loop
        let ctx = ViewerContext::new(
            self.state.clone(),
            self.channels.popup.0.clone(),
            viewer,
            overlay,
        );
        tasks.spawn(event_loop(
            ctx,
            self.channels.app_events.1.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    /// Feed viewer script lines from `reader` into the event loop
    pub async fn spawn_script_reader<R>(&self, reader: R) -> JoinHandle<()>
    where
        R: BufRead + Send + 'static,
    {
        let viewer = self.state.config.read().await.viewer.clone();
        spawn_script_reader(reader, viewer, self.channels.app_events.0.clone_sync())
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
