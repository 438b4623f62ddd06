use crate::core::actions::render_fractal::ports::frame_sink::FrameSink;
use crate::core::data::point::Point;

pub const GUIDE_LINES: [&str; 4] = [
    "Welcome to Mandelbrot Fractals Viewer!",
    "Instructions:",
    " - Left-click: Zoom In",
    " - Right-click: Zoom Out",
];

pub const GUIDE_PROMPT: &str = "Press 'Enter' to start exploring the Mandelbrot set!";

const GUIDE_LEFT: u32 = 50;
const GUIDE_FIRST_LINE_Y: u32 = 300;
const GUIDE_LINE_SPACING: u32 = 40;
const GUIDE_PROMPT_Y: u32 = 500;

/// Draws the instructions page shown before exploration starts.
pub fn render_guide<S: FrameSink + ?Sized>(sink: &mut S) {
    sink.clear();

    let mut y = GUIDE_FIRST_LINE_Y;
    for line in GUIDE_LINES {
        sink.put_text(Point { x: GUIDE_LEFT, y }, line);
        y += GUIDE_LINE_SPACING;
    }

    sink.put_text(
        Point {
            x: GUIDE_LEFT,
            y: GUIDE_PROMPT_Y,
        },
        GUIDE_PROMPT,
    );
    sink.present();
}
