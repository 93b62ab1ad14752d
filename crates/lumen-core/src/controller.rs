use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use lumen_config::Config;
use lumen_config::popup::PopupConfig;
use lumen_translator::{LanguageCode, TranslateError, Translation, Translator};
use lumen_types::{Point, Selection};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::placement::place;
use crate::popup::{PopupBody, PopupPhase, PopupState, PopupView};

#[derive(Debug)]
pub enum PopupCommand {
    SelectionChanged(Selection),
    PointerClick(Point),
    TranslationSettled {
        generation: u64,
        result: Result<Translation, TranslateError>,
    },
    DismissElapsed {
        timer: u64,
    },
}

struct DismissTimer {
    id: u64,
    handle: JoinHandle<()>,
}

/// Sole owner of the popup state.
///
/// Commands are handled one at a time; translation requests and the
/// auto-dismiss timer run as separate tasks that report back through the
/// command channel.
pub struct PopupController<V: PopupView> {
    view: V,
    translator: Arc<dyn Translator>,
    config: PopupConfig,
    from_lang: LanguageCode,
    to_lang: LanguageCode,
    state: PopupState,
    dismiss: Option<DismissTimer>,
    next_timer: u64,
    commands: AsyncSender<PopupCommand>,
}

impl<V: PopupView> PopupController<V> {
    pub fn new(
        view: V,
        translator: Arc<dyn Translator>,
        config: &Config,
        commands: AsyncSender<PopupCommand>,
    ) -> Self {
        Self {
            view,
            translator,
            config: config.popup.clone(),
            from_lang: config.translator.from_lang.clone(),
            to_lang: config.translator.to_lang.clone(),
            state: PopupState::default(),
            dismiss: None,
            next_timer: 0,
            commands,
        }
    }

    pub fn state(&self) -> &PopupState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Process commands until cancelled or the channel closes
    pub async fn run(mut self, commands: AsyncReceiver<PopupCommand>, cancel: CancellationToken) {
        tracing::info!("[POPUP] Controller started");
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                command = commands.recv() => match command {
                    Ok(command) => self.handle(command),
                    Err(e) => {
                        tracing::warn!("[POPUP] Command channel closed: {}", e);
                        break;
                    }
                },
            }
        }

        self.cancel_dismiss();
        tracing::info!("[POPUP] Controller stopped");
    }

    pub fn handle(&mut self, command: PopupCommand) {
        match command {
            PopupCommand::SelectionChanged(selection) => self.on_selection(selection),
            PopupCommand::PointerClick(point) => self.on_click(point),
            PopupCommand::TranslationSettled { generation, result } => {
                self.on_settled(generation, result)
            }
            PopupCommand::DismissElapsed { timer } => self.on_dismiss_elapsed(timer),
        }
    }

    fn on_selection(&mut self, selection: Selection) {
        let text = selection.text.trim();

        if text.is_empty() {
            self.hide();
            return;
        }

        let chars = text.chars().count();
        if chars > self.config.max_selection_chars {
            tracing::debug!("[POPUP] Selection too long ({} chars), skipping", chars);
            return;
        }

        let anchor = selection.anchor(self.config.anchor_offset);
        self.show(text.to_string(), anchor);
    }

    fn show(&mut self, text: String, anchor: Point) {
        self.cancel_dismiss();

        self.state.generation += 1;
        self.state.phase = PopupPhase::Loading;
        self.state.original_text = text.clone();
        self.state.body = PopupBody::Translating;
        self.state.anchor = anchor;
        self.layout();

        tracing::debug!(
            "[POPUP] Showing #{} at ({}, {})",
            self.state.generation,
            self.state.position.x,
            self.state.position.y
        );

        let generation = self.state.generation;
        let translator = Arc::clone(&self.translator);
        let from = self.from_lang.clone();
        let to = self.to_lang.clone();
        let commands = self.commands.clone();

        tokio::spawn(async move {
            let result = translator.translate(&text, from, to).await;
            if commands
                .send(PopupCommand::TranslationSettled { generation, result })
                .await
                .is_err()
            {
                tracing::debug!("[POPUP] Controller gone, dropping translation #{}", generation);
            }
        });
    }

    fn on_settled(&mut self, generation: u64, result: Result<Translation, TranslateError>) {
        if generation != self.state.generation {
            tracing::debug!(
                "[POPUP] Discarding stale translation #{} (current #{})",
                generation,
                self.state.generation
            );
            return;
        }

        if !self.state.is_visible() {
            tracing::debug!("[POPUP] Popup hidden, discarding translation #{}", generation);
            return;
        }

        self.state.phase = PopupPhase::Resolved;
        match result {
            Ok(translation) => {
                tracing::info!("Translated via {}", translation.provider);
                self.state.body = PopupBody::Translated(translation.text);
                self.layout();
            }
            Err(e) => {
                tracing::error!("Translation error: {}", e);
                self.state.body = PopupBody::Failed(self.config.failure_message.clone());
                self.state.size = self.view.render(&self.state);
            }
        }

        self.arm_dismiss();
    }

    fn on_click(&mut self, point: Point) {
        if self.state.is_visible() && !self.state.bounds().contains(point) {
            self.hide();
        }
    }

    fn on_dismiss_elapsed(&mut self, timer: u64) {
        if self.dismiss.as_ref().is_some_and(|t| t.id == timer) {
            self.dismiss = None;
            tracing::debug!("[POPUP] Auto-dismiss");
            self.hide();
        }
    }

    /// Render, measure, place, then move
    fn layout(&mut self) {
        self.state.size = self.view.render(&self.state);
        self.state.position = place(
            self.state.size,
            self.state.anchor,
            self.view.viewport(),
            self.config.margin,
        );
        self.view.move_to(self.state.position);
    }

    fn hide(&mut self) {
        self.cancel_dismiss();
        if self.state.is_visible() {
            self.state.phase = PopupPhase::Hidden;
            self.view.hide();
        }
    }

    fn arm_dismiss(&mut self) {
        self.cancel_dismiss();

        self.next_timer += 1;
        let id = self.next_timer;
        let delay = Duration::from_millis(self.config.auto_dismiss_ms);
        let commands = self.commands.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = commands.send(PopupCommand::DismissElapsed { timer: id }).await;
        });

        self.dismiss = Some(DismissTimer { id, handle });
    }

    fn cancel_dismiss(&mut self) {
        if let Some(timer) = self.dismiss.take() {
            timer.handle.abort();
        }
    }
}
