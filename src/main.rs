use fractal_zoom::{
    Clock, InputEvent, InteractiveController, KeyCode, ManualClock, ManualScheduler, MouseButton,
    PixelBuffer, SurfaceSize,
};
use log::info;

const HEADLESS_WIDTH: u32 = 160;
const HEADLESS_HEIGHT: u32 = 120;

/// Plays one scripted session without a window: confirm the guide, then
/// zoom in at the centre and let the animation run out.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::builder().is_test(cfg!(test)).try_init();

    let surface = SurfaceSize::new(HEADLESS_WIDTH, HEADLESS_HEIGHT)?;
    let mut frame = PixelBuffer::new(surface);
    let mut controller = InteractiveController::default();
    let clock = ManualClock::new(0);
    let mut scheduler = ManualScheduler::new();

    controller.redraw(surface, &mut frame);

    let enter = InputEvent::Key(KeyCode::Enter);
    controller.handle_input(enter, surface, &clock, &mut scheduler);
    if scheduler.take_redraw() {
        controller.redraw(surface, &mut frame);
    }

    let (centre_x, centre_y) = (surface.width() / 2, surface.height() / 2);
    let centre = InputEvent::mouse_down(MouseButton::Left, centre_x, centre_y);
    controller.handle_input(centre, surface, &clock, &mut scheduler);

    while let Some(delay) = scheduler.take_tick() {
        clock.advance(delay);
        controller.tick(&clock, &mut scheduler);
        if scheduler.take_redraw() {
            controller.redraw(surface, &mut frame);
        }
    }

    info!(
        "settled at {:?} after {}ms and {} frames",
        controller.viewport(),
        clock.now_ms(),
        frame.presented_frames()
    );
    if let Some(readout) = frame.texts().first() {
        info!("{}", readout.text);
    }

    Ok(())
}
