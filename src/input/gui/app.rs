//! Main GUI application loop.

use crate::controllers::interactive::InteractiveController;
use crate::controllers::interactive::data::explorer_config::ExplorerConfig;
use crate::controllers::interactive::events::InputEvent;
use crate::controllers::interactive::ports::clock::MonotonicClock;
use crate::input::gui::errors::GuiError;
use crate::input::gui::input_mapping::{CursorTracker, key_input};
use crate::input::gui::scheduler::WinitScheduler;
use crate::presenters::pixels::PixelsPresenter;
use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{debug, error, info, trace};
use std::time::Instant;
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::{Window, WindowBuilder},
};

const WINDOW_TITLE: &str = "Mandelbrot Fractals";
const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;
const MIN_WINDOW_SIZE: u32 = 200;

struct App {
    window: &'static Window,
    presenter: PixelsPresenter,
    controller: InteractiveController,
    clock: MonotonicClock,
    scheduler: WinitScheduler,
    cursor: CursorTracker,
    egui_ctx: Context,
    egui_state: EguiWinitState,
    /// Set when the controller's view changed since the frame was last drawn.
    needs_render: bool,
}

impl App {
    fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        config: ExplorerConfig,
    ) -> Result<Self, GuiError> {
        let presenter = PixelsPresenter::new(window)?;

        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Ok(Self {
            window,
            presenter,
            controller: InteractiveController::new(config),
            clock: MonotonicClock::new(),
            scheduler: WinitScheduler::new(),
            cursor: CursorTracker::new(),
            egui_ctx,
            egui_state,
            needs_render: true,
        })
    }

    fn handle_event(
        &mut self,
        event: Event<()>,
        elwt: &EventLoopWindowTarget<()>,
    ) -> Result<(), GuiError> {
        match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == self.window.id() => self.handle_window_event(event, elwt)?,
            Event::AboutToWait => self.about_to_wait(elwt),
            _ => {}
        }

        Ok(())
    }

    fn handle_window_event(
        &mut self,
        event: &WindowEvent,
        elwt: &EventLoopWindowTarget<()>,
    ) -> Result<(), GuiError> {
        let egui_consumed = self.egui_state.on_window_event(self.window, event).consumed;

        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::RedrawRequested => self.redraw()?,
            WindowEvent::Resized(size) => self.resize(*size)?,
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                let size = self.window.inner_size();
                self.resize(size)?;
            }
            WindowEvent::CursorMoved { position, .. } => self.cursor.moved(*position),
            WindowEvent::MouseInput { state, button, .. } if !egui_consumed => {
                let input = self.cursor.mouse_input(*button, *state);
                self.dispatch(input);
            }
            WindowEvent::KeyboardInput { event: key, .. } if !egui_consumed => {
                if let Some(input) = key_input(key.physical_key, key.state) {
                    self.dispatch(input);
                }
            }
            _ => {}
        }

        Ok(())
    }

    fn dispatch(&mut self, input: InputEvent) {
        let outcome = self.controller.handle_input(
            input,
            self.presenter.surface(),
            &self.clock,
            &mut self.scheduler,
        );
        trace!("{input:?} -> {outcome:?}");
    }

    fn resize(&mut self, size: PhysicalSize<u32>) -> Result<(), GuiError> {
        if self.presenter.resize(size.width, size.height)? {
            debug!("resized to {}x{}", size.width, size.height);
            self.needs_render = true;
            self.window.request_redraw();
        }

        Ok(())
    }

    fn redraw(&mut self) -> Result<(), GuiError> {
        if self.needs_render {
            let surface = self.presenter.surface();
            self.controller.redraw(surface, self.presenter.frame_mut());
            self.needs_render = false;
        }

        let raw_input = self.egui_state.take_egui_input(self.window);
        let presenter = &self.presenter;
        let paint = |ctx: &Context| presenter.paint_overlays(ctx);
        let egui_output = self.egui_ctx.run(raw_input, paint);

        self.egui_state
            .handle_platform_output(self.window, egui_output.platform_output.clone());

        self.presenter.render(egui_output, &self.egui_ctx)?;

        Ok(())
    }

    fn about_to_wait(&mut self, elwt: &EventLoopWindowTarget<()>) {
        if self.scheduler.take_due_tick(Instant::now()) {
            self.controller.tick(&self.clock, &mut self.scheduler);
        }

        if self.scheduler.take_redraw() {
            self.needs_render = true;
            self.window.request_redraw();
        }

        match self.scheduler.next_tick() {
            Some(deadline) => elwt.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => elwt.set_control_flow(ControlFlow::Wait),
        }
    }
}

/// Runs the explorer window with default settings.
///
/// This function does not return until the window is closed.
pub fn run_gui() -> Result<(), GuiError> {
    run_gui_with(ExplorerConfig::default())
}

pub fn run_gui_with(config: ExplorerConfig) -> Result<(), GuiError> {
    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_min_inner_size(PhysicalSize::new(MIN_WINDOW_SIZE, MIN_WINDOW_SIZE))
            .build(&event_loop)?,
    ));

    let mut app = App::new(window, &event_loop, config)?;
    let mut failure = None;

    info!("opened {WINDOW_WIDTH}x{WINDOW_HEIGHT} explorer window");
    window.request_redraw();

    event_loop.run(|event, elwt| {
        if let Err(err) = app.handle_event(event, elwt) {
            error!("stopping: {err}");
            failure = Some(err);
            elwt.exit();
        }
    })?;

    failure.map_or(Ok(()), Err)
}
