use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::zoom::config::ZoomConfig;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExplorerConfig {
    pub render: MandelbrotConfig,
    pub zoom: ZoomConfig,
}
