use crate::controllers::interactive::data::display_mode::DisplayMode;
use crate::controllers::interactive::data::explorer_config::ExplorerConfig;
use crate::controllers::interactive::data::renderer_state::RendererState;
use crate::controllers::interactive::events::input::{
    ButtonAction, InputEvent, KeyCode, MouseButton, MouseEvent,
};
use crate::controllers::interactive::ports::clock::Clock;
use crate::controllers::interactive::ports::scheduler::TickScheduler;
use crate::core::actions::render_fractal::ports::frame_sink::FrameSink;
use crate::core::actions::render_fractal::renderer::FractalRenderer;
use crate::core::actions::render_guide::render_guide;
use crate::core::data::complex::Complex;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::data::viewport::Viewport;
use crate::core::zoom::animator::{ZoomRequestOutcome, ZoomTickOutcome};
use crate::core::zoom::target::{ZoomDirection, zoom_target};
use log::{debug, info, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputOutcome {
    Ignored,
    EnteredFractal,
    ZoomStarted { target: Viewport },
    ZoomRetargeted { target: Viewport },
    ZoomRejected,
}

/// Single-threaded orchestrator for the explorer.
///
/// Input events start or retarget zoom animations, [`tick`](Self::tick)
/// advances them, and [`redraw`](Self::redraw) renders the current view.
/// Time and wake-ups come from the host through the [`Clock`] and
/// [`TickScheduler`] ports.
#[derive(Debug, Clone)]
pub struct InteractiveController {
    config: ExplorerConfig,
    renderer: FractalRenderer,
    state: RendererState,
}

impl InteractiveController {
    #[must_use]
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            config,
            renderer: FractalRenderer::new(config.render),
            state: RendererState::new(config.zoom),
        }
    }

    #[must_use]
    pub fn config(&self) -> ExplorerConfig {
        self.config
    }

    #[must_use]
    pub fn state(&self) -> &RendererState {
        &self.state
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.state.viewport
    }

    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.state.display_mode
    }

    #[must_use]
    pub fn last_complex(&self) -> Complex {
        self.state.last_complex
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.state.animator.is_animating()
    }

    pub fn handle_input<C, S>(
        &mut self,
        event: InputEvent,
        surface: SurfaceSize,
        clock: &C,
        scheduler: &mut S,
    ) -> InputOutcome
    where
        C: Clock + ?Sized,
        S: TickScheduler + ?Sized,
    {
        match event {
            InputEvent::Key(key) => self.handle_key(key, scheduler),
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse, surface, clock, scheduler),
        }
    }

    pub fn tick<C, S>(&mut self, clock: &C, scheduler: &mut S) -> ZoomTickOutcome
    where
        C: Clock + ?Sized,
        S: TickScheduler + ?Sized,
    {
        let now_ms = clock.now_ms();
        let outcome = self.state.animator.tick(&mut self.state.viewport, now_ms);

        match outcome {
            ZoomTickOutcome::Advanced { progress } => {
                trace!("zoom tick at {now_ms}ms, progress {progress:.3}");
                scheduler.request_redraw();
                scheduler.schedule_tick(self.config.zoom.tick_interval);
            }
            ZoomTickOutcome::Finished => {
                debug!("zoom finished at {:?}", self.state.viewport);
            }
            ZoomTickOutcome::Idle => {}
        }

        outcome
    }

    pub fn redraw<S: FrameSink + ?Sized>(&mut self, surface: SurfaceSize, sink: &mut S) {
        match self.state.display_mode {
            DisplayMode::Guide => render_guide(sink),
            DisplayMode::Fractal => {
                self.state.last_complex = self.renderer.render(&self.state.viewport, surface, sink);
            }
        }
    }

    fn handle_key<S: TickScheduler + ?Sized>(
        &mut self,
        key: KeyCode,
        scheduler: &mut S,
    ) -> InputOutcome {
        if key != KeyCode::Enter || self.state.display_mode != DisplayMode::Guide {
            return InputOutcome::Ignored;
        }

        self.state.display_mode = self.state.display_mode.confirmed();
        info!("switched to {} mode", self.state.display_mode);
        scheduler.request_redraw();

        InputOutcome::EnteredFractal
    }

    fn handle_mouse<C, S>(
        &mut self,
        mouse: MouseEvent,
        surface: SurfaceSize,
        clock: &C,
        scheduler: &mut S,
    ) -> InputOutcome
    where
        C: Clock + ?Sized,
        S: TickScheduler + ?Sized,
    {
        if self.state.display_mode != DisplayMode::Fractal || mouse.action != ButtonAction::Down {
            return InputOutcome::Ignored;
        }

        let direction = match mouse.button {
            MouseButton::Left => ZoomDirection::In,
            MouseButton::Right => ZoomDirection::Out,
            MouseButton::Other => return InputOutcome::Ignored,
        };

        let target = match zoom_target(&self.state.viewport, mouse.position, surface, direction) {
            Ok(target) => target,
            Err(err) => {
                warn!("ignoring zoom {direction:?} at {:?}: {err}", mouse.position);
                return InputOutcome::ZoomRejected;
            }
        };

        let now_ms = clock.now_ms();
        debug!(
            "zoom {direction:?} at ({}, {}) towards {target:?}",
            mouse.position.x, mouse.position.y
        );

        let current = self.state.viewport;
        match self.state.animator.request(current, target, now_ms) {
            ZoomRequestOutcome::Started => {
                scheduler.schedule_tick(self.config.zoom.tick_interval);
                InputOutcome::ZoomStarted { target }
            }
            ZoomRequestOutcome::Retargeted => InputOutcome::ZoomRetargeted { target },
        }
    }
}

impl Default for InteractiveController {
    fn default() -> Self {
        Self::new(ExplorerConfig::default())
    }
}
