//! Script in, popup and overlay output out

use std::io::{Cursor, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use lumen_config::Config;
use lumen_translator::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};
use lumen_types::Size;
use tokio::time::timeout;

use crate::controller::AppController;
use crate::state::AppState;
use crate::view::{TerminalOverlay, TerminalPopupView};
use crate::viewer::ScriptedViewer;

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[derive(Default)]
struct BracketTranslator {
    calls: AtomicUsize,
}

#[async_trait]
impl Translator for BracketTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Translation {
            text: format!("[{}]", text),
            from,
            to,
            provider: "bracket".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "bracket".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

async fn run_script(config: Config, script: &str, translator: Arc<BracketTranslator>) -> String {
    let out = SharedBuf::default();
    let viewport = Size::new(config.viewer.viewport_width, config.viewer.viewport_height);
    let view = TerminalPopupView::new(out.clone(), viewport, config.popup.loading_text.clone());
    let viewer = ScriptedViewer::new(config.viewer.clone());
    let overlay = TerminalOverlay::new(out.clone());

    let controller = AppController::new(Arc::new(AppState::new(config))).await;
    let mut tasks = controller
        .spawn_tasks(view, Box::new(viewer), Box::new(overlay), translator)
        .await;
    controller
        .spawn_script_reader(Cursor::new(script.to_string()))
        .await;

    let finished = timeout(Duration::from_secs(5), tasks.join_next())
        .await
        .expect("script did not finish");
    assert!(matches!(finished, Some(Ok(Ok(())))));

    controller.shutdown();
    timeout(Duration::from_secs(1), async {
        while tasks.join_next().await.is_some() {}
    })
    .await
    .expect("tasks did not stop");

    out.contents()
}

#[tokio::test]
async fn selection_translates_and_click_dismisses() {
    let translator = Arc::new(BracketTranslator::default());
    let script = "\
        load\n\
        brightness 37\n\
        select 100 100 60 16 Bonjour\n\
        wait 100\n\
        click 5 790\n\
        wait 50\n\
        quit\n";

    let output = run_script(Config::default(), script, translator.clone()).await;

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "[overlay] rgba(0, 0, 0, 0) (0%)",
            "[overlay] rgba(0, 0, 0, 0.35) (35%)",
            "[popup #1] Bonjour => Translating...",
            "[popup] at (100, 121)",
            "[popup #1] Bonjour => [Bonjour]",
            "[popup] at (100, 121)",
            "[popup] hidden",
        ]
    );
    assert_eq!(translator.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unreachable_viewer_disables_features() {
    let translator = Arc::new(BracketTranslator::default());
    let mut config = Config::default();
    config.viewer.same_origin = false;
    let script = "\
        load\n\
        select 100 100 60 16 Bonjour\n\
        brightness 40\n\
        wait 50\n";

    let output = run_script(config, script, translator.clone()).await;

    assert!(output.is_empty(), "unexpected output: {}", output);
    assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn selections_before_load_are_dropped() {
    let translator = Arc::new(BracketTranslator::default());
    let script = "select 100 100 60 16 Bonjour\nwait 50\nquit\n";

    let output = run_script(Config::default(), script, translator.clone()).await;

    assert!(output.is_empty());
    assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
}
