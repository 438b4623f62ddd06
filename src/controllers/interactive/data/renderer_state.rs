use crate::controllers::interactive::data::display_mode::DisplayMode;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::zoom::animator::ZoomAnimator;
use crate::core::zoom::config::ZoomConfig;

/// Everything that changes while exploring, owned by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererState {
    pub viewport: Viewport,
    pub animator: ZoomAnimator,
    pub display_mode: DisplayMode,
    /// Complex coordinate of the last pixel the most recent pass visited.
    pub last_complex: Complex,
}

impl RendererState {
    #[must_use]
    pub fn new(zoom: ZoomConfig) -> Self {
        Self {
            viewport: Viewport::default(),
            animator: ZoomAnimator::new(zoom),
            display_mode: DisplayMode::default(),
            last_complex: Complex::ZERO,
        }
    }
}

impl Default for RendererState {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}
