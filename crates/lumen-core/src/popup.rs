use lumen_types::{Point, Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupPhase {
    #[default]
    Hidden,
    Loading,
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupBody {
    #[default]
    Translating,
    Translated(String),
    Failed(String),
}

/// Everything a view needs to draw the translation popup
#[derive(Debug, Clone, Default)]
pub struct PopupState {
    pub phase: PopupPhase,
    pub original_text: String,
    pub body: PopupBody,
    pub anchor: Point,
    pub position: Point,
    /// Last size reported by the view
    pub size: Size,
    /// Id of the show sequence this state belongs to
    pub generation: u64,
}

impl PopupState {
    pub fn is_visible(&self) -> bool {
        self.phase != PopupPhase::Hidden
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin(self.position, self.size)
    }

    /// Text shown under the original, `loading_text` while translating
    pub fn status_text<'a>(&'a self, loading_text: &'a str) -> &'a str {
        match &self.body {
            PopupBody::Translating => loading_text,
            PopupBody::Translated(text) | PopupBody::Failed(text) => text,
        }
    }
}

/// Rendering side of the popup.
///
/// Implementations draw the given state and report their measured size, so
/// placement always works from the size of the content actually shown.
pub trait PopupView: Send {
    fn viewport(&self) -> Size;

    /// Draw `state` and return the popup's measured size
    fn render(&mut self, state: &PopupState) -> Size;

    fn move_to(&mut self, position: Point);

    fn hide(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_hidden() {
        let state = PopupState::default();

        assert!(!state.is_visible());
        assert_eq!(state.generation, 0);
    }

    #[test]
    fn status_text_follows_body() {
        let mut state = PopupState::default();
        assert_eq!(state.status_text("Translating..."), "Translating...");

        state.body = PopupBody::Translated("Hello".to_string());
        assert_eq!(state.status_text("Translating..."), "Hello");

        state.body = PopupBody::Failed("Translation failed".to_string());
        assert_eq!(state.status_text("Translating..."), "Translation failed");
    }
}
