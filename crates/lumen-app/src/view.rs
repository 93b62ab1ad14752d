use std::io::Write;

use lumen_core::{BrightnessLevel, BrightnessOverlay, PopupState, PopupView};
use lumen_types::{Point, Size};

const CHAR_WIDTH: f64 = 7.0;
const LINE_HEIGHT: f64 = 18.0;
const PADDING: f64 = 24.0;
const MIN_WIDTH: f64 = 160.0;
const MAX_WIDTH: f64 = 400.0;

/// Approximate rendered size of a popup showing `original` over `status`
pub fn measure(original: &str, status: &str) -> Size {
    let longest = original
        .chars()
        .count()
        .max(status.chars().count()) as f64;
    let width = (longest * CHAR_WIDTH + PADDING).clamp(MIN_WIDTH, MAX_WIDTH);

    let per_line = ((width - PADDING) / CHAR_WIDTH).floor().max(1.0);
    let lines = |text: &str| (text.chars().count() as f64 / per_line).ceil().max(1.0);
    let height = (lines(original) + lines(status)) * LINE_HEIGHT + PADDING;

    Size::new(width, height)
}

/// Prints the popup as text
pub struct TerminalPopupView<W: Write + Send> {
    out: W,
    viewport: Size,
    loading_text: String,
}

impl<W: Write + Send> TerminalPopupView<W> {
    pub fn new(out: W, viewport: Size, loading_text: String) -> Self {
        Self {
            out,
            viewport,
            loading_text,
        }
    }

    fn emit(&mut self, line: String) {
        if let Err(e) = writeln!(self.out, "{}", line).and_then(|_| self.out.flush()) {
            tracing::warn!("Failed to write popup output: {}", e);
        }
    }
}

impl<W: Write + Send> PopupView for TerminalPopupView<W> {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn render(&mut self, state: &PopupState) -> Size {
        let status = state.status_text(&self.loading_text).to_string();
        let size = measure(&state.original_text, &status);

        self.emit(format!(
            "[popup #{}] {} => {}",
            state.generation, state.original_text, status
        ));
        size
    }

    fn move_to(&mut self, position: Point) {
        self.emit(format!("[popup] at ({}, {})", position.x, position.y));
    }

    fn hide(&mut self) {
        self.emit("[popup] hidden".to_string());
    }
}

pub struct TerminalOverlay<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> TerminalOverlay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write + Send> BrightnessOverlay for TerminalOverlay<W> {
    fn apply(&mut self, level: BrightnessLevel) {
        let result = writeln!(
            self.out,
            "[overlay] {} ({})",
            level.overlay_color(),
            level.label()
        );
        if let Err(e) = result {
            tracing::warn!("Failed to write overlay output: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use lumen_config::brightness::BrightnessConfig;
    use lumen_core::PopupBody;

    use super::*;

    #[test]
    fn measure_grows_with_text() {
        let short = measure("Oui", "Yes");
        let long = measure(&"mot ".repeat(60), &"word ".repeat(60));

        assert_eq!(short.width, MIN_WIDTH);
        assert_eq!(long.width, MAX_WIDTH);
        assert!(long.height > short.height);
        assert_eq!(short.height, 2.0 * LINE_HEIGHT + PADDING);
    }

    #[test]
    fn renders_loading_text_then_translation() {
        let mut view = TerminalPopupView::new(
            Vec::new(),
            Size::new(800.0, 600.0),
            "Translating...".to_string(),
        );
        let mut state = PopupState {
            original_text: "Bonjour".to_string(),
            generation: 3,
            ..PopupState::default()
        };

        view.render(&state);
        state.body = PopupBody::Translated("Hello".to_string());
        view.render(&state);
        view.move_to(Point::new(10.0, 20.5));
        view.hide();

        let output = String::from_utf8(view.out).unwrap();
        assert_eq!(
            output,
            "[popup #3] Bonjour => Translating...\n\
             [popup #3] Bonjour => Hello\n\
             [popup] at (10, 20.5)\n\
             [popup] hidden\n"
        );
    }

    #[test]
    fn overlay_prints_color_and_label() {
        let mut overlay = TerminalOverlay::new(Vec::new());

        overlay.apply(BrightnessLevel::from_slider(40, &BrightnessConfig::default()));

        assert_eq!(
            String::from_utf8(overlay.out).unwrap(),
            "[overlay] rgba(0, 0, 0, 0.4) (40%)\n"
        );
    }
}
