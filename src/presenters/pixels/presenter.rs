use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::ports::render_engine::RenderEnginePort;
use crate::core::data::viewport_extent::ViewportExtent;
use crate::core::viewport::ViewState;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use crate::presenters::checkerboard::draw_checkerboard;

pub struct PixelsPresenter {
    window: &'static Window,
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    extent: ViewportExtent,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(window: &'static Window) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            window,
            pixels,
            egui_renderer,
            extent: ViewportExtent::new(size.width, size.height),
        })
    }

    fn present(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error> {
        // Skip rendering for invalid size (e.g., minimized window)
        if self.extent.is_degenerate() {
            return Ok(());
        }

        let size_in_pixels = [self.extent.width, self.extent.height];

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives = egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels,
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

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

            // Overlay on top of the viewport frame
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

                self.egui_renderer
                    .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }
}

impl RenderEnginePort for PixelsPresenter {
    fn render_frame(&mut self, view: &ViewState) -> Result<(), RenderError> {
        if view.extent != self.extent {
            return Err(RenderError::Present(format!(
                "view extent {}x{} does not match surface {}x{}",
                view.extent.width, view.extent.height, self.extent.width, self.extent.height
            )));
        }

        draw_checkerboard(self.pixels.frame_mut(), view)
    }

    fn notify_resize(&mut self) -> Result<ViewportExtent, RenderError> {
        let size = self.window.inner_size();
        let (width, height) = (size.width, size.height);

        if width == 0 || height == 0 {
            return Err(RenderError::SurfaceUnavailable);
        }

        let resize_error = |err: pixels::TextureError| RenderError::Resize {
            width,
            height,
            message: err.to_string(),
        };

        self.pixels.resize_surface(width, height).map_err(resize_error)?;
        self.pixels.resize_buffer(width, height).map_err(resize_error)?;
        self.extent = ViewportExtent::new(width, height);

        Ok(self.extent)
    }
}
