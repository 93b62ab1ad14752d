pub mod brightness;
pub mod controller;
pub mod placement;
pub mod popup;
pub mod viewer;

pub use brightness::{BrightnessLevel, BrightnessOverlay};
pub use controller::{PopupCommand, PopupController};
pub use placement::place;
pub use popup::{PopupBody, PopupPhase, PopupState, PopupView};
pub use viewer::{SurfaceError, ViewerSurface};
