use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};
use crate::text::{FontId, FontSystem};

use super::common::{InstanceBuffer, QuadBuffers, projection_attrs, quad_pipeline};

// ── atlas constants ────────────────────────────────────────────────────────

const ATLAS_SIZE: u32 = 512;
const GLYPH_PADDING: u32 = 1; // pixels between glyphs in the atlas

// ── cached glyph ──────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
struct GlyphKey {
    font: FontId,
    ch: char,
    size_bits: u32,
}

#[derive(Debug, Copy, Clone)]
struct CachedGlyph {
    metrics: fontdue::Metrics,
    /// `None` for glyphs without coverage (spaces).
    uv: Option<([f32; 2], [f32; 2])>,
}

// ── renderer ──────────────────────────────────────────────────────────────

/// Renderer for `DrawCmd::Text`.
///
/// Lays out a single line per command starting at the baseline origin,
/// advancing the pen by each glyph's advance width. Glyphs are rasterized on
/// first use via fontdue into a 512 × 512 R8Unorm atlas and cached for the
/// renderer's lifetime.
///
/// Assumes the command's projection has +Y up (bitmap rows are flipped
/// accordingly).
pub struct TextRenderer {
    // pipeline
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,

    // atlas
    atlas_texture: Option<wgpu::Texture>,
    packer: ShelfPacker,

    glyph_cache: HashMap<GlyphKey, CachedGlyph>,

    // geometry
    quad: Option<QuadBuffers>,
    instances: InstanceBuffer,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            atlas_texture: None,
            packer: ShelfPacker::new(ATLAS_SIZE),
            glyph_cache: HashMap::new(),
            quad: None,
            instances: InstanceBuffer::default(),
        }
    }
}

impl TextRenderer {
    /// Renders all `DrawCmd::Text` entries in `draw_list`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &DrawList,
        fonts: &FontSystem,
    ) {
        if !draw_list.items().iter().any(|i| matches!(i.cmd, DrawCmd::Text(_))) {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_atlas(ctx);
        if self.quad.is_none() {
            self.quad = Some(QuadBuffers::new(ctx, "bouncer text"));
        }

        // ── build glyph instance list ──────────────────────────────────────
        let mut instances: Vec<GlyphInstance> = Vec::new();

        for item in draw_list.items() {
            let DrawCmd::Text(cmd) = &item.cmd else { continue };
            let Some(font) = fonts.get(cmd.font) else {
                log::warn!("TextRenderer: unknown FontId {:?}, skipping", cmd.font);
                continue;
            };

            let color = cmd.color.to_array();
            let (ndc_scale, ndc_offset) = projection_attrs(item.projection);
            let mut pen_x = cmd.baseline_origin.x;

            for ch in cmd.text.chars() {
                let key = GlyphKey { font: cmd.font, ch, size_bits: cmd.size.to_bits() };
                if !self.glyph_cache.contains_key(&key) {
                    let (metrics, bitmap) = font.rasterize(ch, cmd.size);
                    let uv = self.try_place_glyph(ctx, &bitmap, metrics.width as u32, metrics.height as u32);
                    // Misses are cached too; the atlas is never evicted.
                    self.glyph_cache.insert(key, CachedGlyph { metrics, uv });
                }
                let Some(glyph) = self.glyph_cache.get(&key).copied() else { continue };

                if let Some((uv_min, uv_max)) = glyph.uv {
                    let (dst_min, dst_max) =
                        glyph_quad(Vec2::new(pen_x, cmd.baseline_origin.y), &glyph.metrics);
                    instances.push(GlyphInstance {
                        dst_min,
                        dst_max,
                        uv_min,
                        uv_max,
                        color,
                        ndc_scale,
                        ndc_offset,
                    });
                }

                pen_x += glyph.metrics.advance_width;
            }
        }

        if instances.is_empty() {
            return;
        }

        self.ensure_bindings(ctx);

        let Some(instance_vbo) = self.instances.upload(ctx, "bouncer text", &instances) else { return };
        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(quad) = self.quad.as_ref() else { return };

        let mut rpass = target.load_pass("bouncer text pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad.vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(quad.ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..6, 0, 0..instances.len() as u32);
    }

    // ── atlas helpers ──────────────────────────────────────────────────────

    /// Copies a glyph bitmap into the atlas and returns its UV box
    /// (`uv_min` = top-left texel, `uv_max` = bottom-right).
    fn try_place_glyph(
        &mut self,
        ctx: &RenderCtx<'_>,
        bitmap: &[u8],
        w: u32,
        h: u32,
    ) -> Option<([f32; 2], [f32; 2])> {
        if w == 0 || h == 0 {
            return None;
        }
        let was_full = self.packer.is_full();
        let Some([gx, gy]) = self.packer.allocate(w, h) else {
            if !was_full {
                log::warn!(
                    "TextRenderer: glyph atlas is full ({ATLAS_SIZE}×{ATLAS_SIZE}); \
                     some glyphs will not be rendered"
                );
            }
            return None;
        };

        let atlas = self.atlas_texture.as_ref()?;

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: atlas,
                mip_level: 0,
                origin: wgpu::Origin3d { x: gx, y: gy, z: 0 },
                aspect: wgpu::TextureAspect::All,
            },
            bitmap,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(w),
                rows_per_image: Some(h),
            },
            wgpu::Extent3d { width: w, height: h, depth_or_array_layers: 1 },
        );

        let atlas_f = ATLAS_SIZE as f32;
        Some((
            [gx as f32 / atlas_f, gy as f32 / atlas_f],
            [(gx + w) as f32 / atlas_f, (gy + h) as f32 / atlas_f],
        ))
    }

    // ── lazy-init helpers ──────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("bouncer text shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/text.wgsl").into()),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bouncer text bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        self.pipeline = Some(quad_pipeline(ctx, "bouncer text", &shader, &[&bgl], GlyphInstance::layout()));
        self.pipeline_format = Some(ctx.surface_format);
        self.bind_group_layout = Some(bgl);
        self.bind_group = None;
    }

    fn ensure_atlas(&mut self, ctx: &RenderCtx<'_>) {
        if self.atlas_texture.is_some() {
            return;
        }

        self.atlas_texture = Some(ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("bouncer glyph atlas"),
            size: wgpu::Extent3d { width: ATLAS_SIZE, height: ATLAS_SIZE, depth_or_array_layers: 1 },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        }));
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };
        let Some(atlas) = self.atlas_texture.as_ref() else { return };

        let view = atlas.create_view(&wgpu::TextureViewDescriptor::default());
        // Nearest keeps the small bitmap-style glyphs crisp.
        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("bouncer text sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        self.bind_group = Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bouncer text bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        }));
    }
}

/// Row-based ("shelf") allocator for a square atlas.
///
/// Glyphs fill a row left to right; a glyph that does not fit starts a new row
/// below the tallest glyph of the current one. After the first failed
/// allocation the packer stays full.
#[derive(Debug, Clone)]
struct ShelfPacker {
    size: u32,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    full: bool,
}

impl ShelfPacker {
    fn new(size: u32) -> Self {
        Self {
            size,
            cursor_x: GLYPH_PADDING,
            cursor_y: GLYPH_PADDING,
            row_height: 0,
            full: false,
        }
    }

    fn is_full(&self) -> bool {
        self.full
    }

    /// Reserves a `w × h` box and returns its top-left texel.
    fn allocate(&mut self, w: u32, h: u32) -> Option<[u32; 2]> {
        if self.full {
            return None;
        }

        if self.cursor_x + w + GLYPH_PADDING > self.size {
            self.cursor_y += self.row_height + GLYPH_PADDING;
            self.cursor_x = GLYPH_PADDING;
            self.row_height = 0;
        }

        if self.cursor_x + w + GLYPH_PADDING > self.size || self.cursor_y + h + GLYPH_PADDING > self.size {
            self.full = true;
            return None;
        }

        let pos = [self.cursor_x, self.cursor_y];
        self.cursor_x += w + GLYPH_PADDING;
        self.row_height = self.row_height.max(h);
        Some(pos)
    }
}

/// Destination box of a glyph bitmap for a pen at `pen` (baseline, +Y up).
///
/// `ymin` is the offset of the bitmap's bottom edge from the baseline, so
/// descenders land below it. The box is snapped to whole pixels.
fn glyph_quad(pen: Vec2, m: &fontdue::Metrics) -> ([f32; 2], [f32; 2]) {
    let x0 = (pen.x + m.xmin as f32).round();
    let y0 = (pen.y + m.ymin as f32).round();
    ([x0, y0], [x0 + m.width as f32, y0 + m.height as f32])
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (64 bytes):
///
///  offset  0  dst_min     [f32; 2]   loc 1
///  offset  8  dst_max     [f32; 2]   loc 2
///  offset 16  uv_min      [f32; 2]   loc 3
///  offset 24  uv_max      [f32; 2]   loc 4
///  offset 32  color       [f32; 4]   loc 5
///  offset 48  ndc_scale   [f32; 2]   loc 6
///  offset 56  ndc_offset  [f32; 2]   loc 7
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct GlyphInstance {
    dst_min: [f32; 2],
    dst_max: [f32; 2],
    uv_min: [f32; 2],
    uv_max: [f32; 2],
    color: [f32; 4],
    ndc_scale: [f32; 2],
    ndc_offset: [f32; 2],
}

impl GlyphInstance {
    const ATTRS: [wgpu::VertexAttribute; 7] = wgpu::vertex_attr_array![
        1 => Float32x2, // dst_min
        2 => Float32x2, // dst_max
        3 => Float32x2, // uv_min
        4 => Float32x2, // uv_max
        5 => Float32x4, // color
        6 => Float32x2, // ndc_scale
        7 => Float32x2  // ndc_offset
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GlyphInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(xmin: i32, ymin: i32, width: usize, height: usize) -> fontdue::Metrics {
        fontdue::Metrics {
            xmin,
            ymin,
            width,
            height,
            advance_width: 9.0,
            advance_height: 0.0,
            bounds: fontdue::OutlineBounds::default(),
        }
    }

    // ── atlas packing ─────────────────────────────────────────────────────

    #[test]
    fn packer_fills_rows_left_to_right() {
        let mut p = ShelfPacker::new(32);
        assert_eq!(p.allocate(10, 8), Some([1, 1]));
        assert_eq!(p.allocate(10, 12), Some([12, 1]));
        // 23 + 10 + 1 > 32: next row starts below the tallest glyph.
        assert_eq!(p.allocate(10, 5), Some([1, 14]));
    }

    #[test]
    fn packer_stays_full_after_running_out() {
        let mut p = ShelfPacker::new(16);
        assert_eq!(p.allocate(14, 14), Some([1, 1]));
        assert_eq!(p.allocate(2, 2), None);
        assert!(p.is_full());
        assert_eq!(p.allocate(1, 1), None);
    }

    #[test]
    fn packer_rejects_glyph_wider_than_atlas() {
        let mut p = ShelfPacker::new(16);
        assert_eq!(p.allocate(20, 4), None);
        assert!(p.is_full());
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn instance_is_64_bytes() {
        assert_eq!(std::mem::size_of::<GlyphInstance>(), 64);
    }

    #[test]
    fn glyph_sits_on_baseline() {
        let (min, max) = glyph_quad(Vec2::new(10.0, 180.0), &metrics(1, 0, 7, 10));
        assert_eq!(min, [11.0, 180.0]);
        assert_eq!(max, [18.0, 190.0]);
    }

    #[test]
    fn descender_extends_below_baseline() {
        let (min, max) = glyph_quad(Vec2::new(0.0, 100.0), &metrics(0, -3, 6, 11));
        assert_eq!(min[1], 97.0);
        assert_eq!(max[1], 108.0);
    }

    #[test]
    fn fractional_pen_snaps_to_pixels() {
        let (min, _) = glyph_quad(Vec2::new(10.4, 50.6), &metrics(0, 0, 1, 1));
        assert_eq!(min, [10.0, 51.0]);
    }
}
