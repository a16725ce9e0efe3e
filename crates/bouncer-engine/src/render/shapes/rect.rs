use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawItem, DrawList};

use super::common::{InstanceBuffer, QuadBuffers, projection_attrs, quad_pipeline};

/// Solid rectangle renderer.
///
/// Geometry is in the item's projection space; the vertex shader maps it to
/// NDC with the per-instance projection transform.
/// Color is expected to be premultiplied RGBA (`paint::Color`).
#[derive(Default)]
pub struct RectRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    quad: Option<QuadBuffers>,
    instances: InstanceBuffer,
}

impl RectRenderer {
    /// Renders every `DrawCmd::Rect` in `draw_list`, in recording order.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, draw_list: &DrawList) {
        let instances = collect_instances(draw_list.items());
        if instances.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        if self.quad.is_none() {
            self.quad = Some(QuadBuffers::new(ctx, "bouncer rect"));
        }

        let Some(instance_vbo) = self.instances.upload(ctx, "bouncer rect", &instances) else { return };
        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(quad) = self.quad.as_ref() else { return };

        let mut rpass = target.load_pass("bouncer rect pass");
        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, quad.vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(quad.ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..6, 0, 0..instances.len() as u32);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("bouncer rect shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/rect.wgsl").into()),
        });

        self.pipeline = Some(quad_pipeline(ctx, "bouncer rect", &shader, &[], RectInstance::layout()));
        self.pipeline_format = Some(ctx.surface_format);
    }
}

fn collect_instances(items: &[DrawItem]) -> Vec<RectInstance> {
    items
        .iter()
        .filter_map(|item| {
            let DrawCmd::Rect(cmd) = &item.cmd else { return None };
            let r = cmd.rect.normalized();
            if r.is_empty() {
                return None;
            }
            let (ndc_scale, ndc_offset) = projection_attrs(item.projection);
            Some(RectInstance {
                origin: r.origin.to_array(),
                size: r.size.to_array(),
                color: cmd.color.to_array(),
                ndc_scale,
                ndc_offset,
            })
        })
        .collect()
}

/// Instance data layout (48 bytes):
///
///  offset  0  origin      [f32; 2]   loc 1
///  offset  8  size        [f32; 2]   loc 2
///  offset 16  color       [f32; 4]   loc 3
///  offset 32  ndc_scale   [f32; 2]   loc 4
///  offset 40  ndc_offset  [f32; 2]   loc 5
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct RectInstance {
    origin: [f32; 2],
    size: [f32; 2],
    color: [f32; 4],
    ndc_scale: [f32; 2],
    ndc_offset: [f32; 2],
}

impl RectInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2, // origin
        2 => Float32x2, // size
        3 => Float32x4, // color
        4 => Float32x2, // ndc_scale
        5 => Float32x2  // ndc_offset
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<RectInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
