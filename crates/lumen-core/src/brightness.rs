use lumen_config::brightness::BrightnessConfig;

/// Darkening level of the page overlay, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrightnessLevel(u8);

impl BrightnessLevel {
    /// Snap `raw` to the nearest slider step and clamp it to the configured range.
    ///
    /// An inverted range (`min > max`) is treated as its reordered bounds.
    pub fn from_slider(raw: u8, config: &BrightnessConfig) -> Self {
        let step = config.step.max(1) as u16;
        let snapped = ((raw as u16 + step / 2) / step) * step;
        let (lo, hi) = (config.min.min(config.max), config.min.max(config.max));
        let clamped = snapped.clamp(lo as u16, hi as u16);

        Self(clamped as u8)
    }

    pub fn percent(&self) -> u8 {
        self.0
    }

    pub fn opacity(&self) -> f32 {
        self.0 as f32 / 100.0
    }

    /// CSS background for the overlay element
    pub fn overlay_color(&self) -> String {
        format!("rgba(0, 0, 0, {})", self.opacity())
    }

    pub fn label(&self) -> String {
        format!("{}%", self.0)
    }
}

/// Full-page overlay darkened by the toolbar slider
pub trait BrightnessOverlay: Send {
    fn apply(&mut self, level: BrightnessLevel);
}
