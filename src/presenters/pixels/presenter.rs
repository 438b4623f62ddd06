use crate::adapters::pixel_format::{PixelFormatError, copy_frame_into_rgba};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::surface_size::{SurfaceSize, SurfaceSizeError};
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use std::error::Error;
use std::fmt;
use winit::window::Window;

const OVERLAY_FONT_SIZE: f32 = 18.0;

#[derive(Debug)]
pub enum PresenterError {
    Pixels(pixels::Error),
    Texture(pixels::TextureError),
    Surface(SurfaceSizeError),
    Frame(PixelFormatError),
}

impl fmt::Display for PresenterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(err) => write!(f, "pixels surface error: {}", err),
            Self::Texture(err) => write!(f, "pixels texture error: {}", err),
            Self::Surface(err) => write!(f, "window surface error: {}", err),
            Self::Frame(err) => write!(f, "frame copy error: {}", err),
        }
    }
}

impl Error for PresenterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Pixels(err) => Some(err),
            Self::Texture(err) => Some(err),
            Self::Surface(err) => Some(err),
            Self::Frame(err) => Some(err),
        }
    }
}

impl From<pixels::Error> for PresenterError {
    fn from(err: pixels::Error) -> Self {
        Self::Pixels(err)
    }
}

impl From<pixels::TextureError> for PresenterError {
    fn from(err: pixels::TextureError) -> Self {
        Self::Texture(err)
    }
}

impl From<SurfaceSizeError> for PresenterError {
    fn from(err: SurfaceSizeError) -> Self {
        Self::Surface(err)
    }
}

impl From<PixelFormatError> for PresenterError {
    fn from(err: PixelFormatError) -> Self {
        Self::Frame(err)
    }
}

/// Shows a [`PixelBuffer`] in a window, with its text overlays drawn by egui.
///
/// The controller renders into [`frame_mut`](Self::frame_mut); the presenter
/// owns the GPU side and only copies the frame out when presenting.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    frame: PixelBuffer,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, PresenterError> {
        let size = window.inner_size();
        let surface = SurfaceSize::new(size.width, size.height)?;
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            frame: PixelBuffer::new(surface),
        })
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceSize {
        self.frame.surface()
    }

    pub fn frame_mut(&mut self) -> &mut PixelBuffer {
        &mut self.frame
    }

    /// Queues the frame's text overlays on egui's foreground layer.
    ///
    /// Overlay positions are in frame pixels and mark the text baseline.
    pub fn paint_overlays(&self, ctx: &EguiContext) {
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("frame_overlays"),
        ));
        let pixels_per_point = ctx.pixels_per_point();

        for overlay in self.frame.texts() {
            let position = egui::pos2(
                overlay.position.x as f32 / pixels_per_point,
                overlay.position.y as f32 / pixels_per_point,
            );

            painter.text(
                position,
                egui::Align2::LEFT_BOTTOM,
                &overlay.text,
                egui::FontId::proportional(OVERLAY_FONT_SIZE / pixels_per_point),
                egui::Color32::WHITE,
            );
        }
    }

    pub fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), PresenterError> {
        copy_frame_into_rgba(&self.frame, self.pixels.frame_mut())?;

        let surface = self.frame.surface();
        let clipped_primitives =
            egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [surface.width(), surface.height()],
            pixels_per_point: egui_ctx.pixels_per_point(),
        };

        let textures_delta = egui_output.textures_delta;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            // Text goes over the fractal, so keep what the scaling pass drew.
            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })?;

        Ok(())
    }

    /// Resizes the GPU surface and replaces the frame with a blank one.
    ///
    /// Returns `false` without changing anything for a zero-sized window,
    /// which is what a minimised window reports.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<bool, PresenterError> {
        let Ok(surface) = SurfaceSize::new(width, height) else {
            return Ok(false);
        };

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;
        self.frame = PixelBuffer::new(surface);

        Ok(true)
    }
}
