use anyhow::{Result, bail};

use crate::device::{Gpu, SurfaceErrorAction};
use crate::scene::DrawList;
use crate::text::FontSystem;

use super::shapes::rect::RectRenderer;
use super::shapes::text::TextRenderer;
use super::{RenderCtx, RenderTarget};

/// Draws a whole `DrawList` into the next swapchain image and presents it.
///
/// Pass order: clear, rectangles, text. Text therefore always paints over
/// rectangles regardless of recording order.
#[derive(Default)]
pub struct FrameRenderer {
    rects: RectRenderer,
    text: TextRenderer,
}

impl FrameRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders and presents one frame.
    ///
    /// Returns `Ok(false)` when the frame was skipped (surface lost, outdated
    /// or timed out); the next call will try again. Out-of-memory is an error.
    pub fn draw(&mut self, gpu: &mut Gpu, fonts: &FontSystem, list: &DrawList) -> Result<bool> {
        let mut frame = match gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let action = gpu.handle_surface_error(err);
                if action == SurfaceErrorAction::Fatal {
                    bail!("surface is out of memory");
                }
                return Ok(false);
            }
        };

        // Clear pass; dropped before the encoder is reused below.
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("bouncer clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(list.clear_color().to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        let rctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format());

        // RenderTarget borrows frame.encoder; dropped before present() takes frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            self.rects.render(&rctx, &mut target, list);
            self.text.render(&rctx, &mut target, list, fonts);
        }

        gpu.present(frame);
        Ok(true)
    }
}
