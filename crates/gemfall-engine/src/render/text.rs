use std::collections::HashMap;

use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};

use crate::scene::{DrawCmd, DrawList};
use crate::text::FontSystem;

use super::quad::{QuadInstance, QuadPipeline, Run};
use super::{RenderCtx, RenderTarget};

const SHADER: &str = include_str!("shaders/text.wgsl");

const ATLAS_SIZE: u32 = 1024;
const GLYPH_PADDING: u32 = 1;

/// Shelf allocator for a square atlas.
///
/// Rectangles are placed left to right; when a row is full a new shelf opens
/// below the tallest rectangle of the current one.
#[derive(Debug)]
struct ShelfPacker {
    size: u32,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    full: bool,
    full_reported: bool,
}

impl ShelfPacker {
    fn new(size: u32) -> Self {
        Self {
            size,
            cursor_x: GLYPH_PADDING,
            cursor_y: GLYPH_PADDING,
            row_height: 0,
            full: false,
            full_reported: false,
        }
    }

    /// Top-left of a free `w` x `h` area, or `None` once the atlas is full.
    fn place(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        if self.full {
            return None;
        }
        if self.cursor_x + w + GLYPH_PADDING > self.size {
            self.cursor_y += self.row_height + GLYPH_PADDING;
            self.cursor_x = GLYPH_PADDING;
            self.row_height = 0;
        }
        if self.cursor_x + w + GLYPH_PADDING > self.size
            || self.cursor_y + h + GLYPH_PADDING > self.size
        {
            self.full = true;
            return None;
        }

        let at = (self.cursor_x, self.cursor_y);
        self.cursor_x += w + GLYPH_PADDING;
        self.row_height = self.row_height.max(h);
        Some(at)
    }

    /// True the first time it is called after the atlas filled up.
    fn first_full_report(&mut self) -> bool {
        let first = self.full && !self.full_reported;
        self.full_reported |= self.full;
        first
    }
}

#[derive(Debug, Copy, Clone)]
struct CachedGlyph {
    uv_min: [f32; 2],
    uv_max: [f32; 2],
}

struct Atlas {
    texture: wgpu::Texture,
    group: wgpu::BindGroup,
}

/// Draws `DrawCmd::Text` items.
///
/// Glyphs are rasterized with fontdue on first use and cached in an R8 atlas
/// for the renderer's lifetime, keyed by font, glyph and pixel size.
pub struct TextRenderer {
    quad: Option<QuadPipeline>,
    atlas: Option<Atlas>,
    packer: ShelfPacker,
    glyphs: HashMap<GlyphRasterConfig, CachedGlyph>,
    instances: Vec<QuadInstance>,
    layout: Layout<()>,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            quad: None,
            atlas: None,
            packer: ShelfPacker::new(ATLAS_SIZE),
            glyphs: HashMap::new(),
            instances: Vec::new(),
            layout: Layout::new(CoordinateSystem::PositiveYDown),
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
        fonts: &FontSystem,
    ) {
        self.instances.clear();
        let mut any_text = false;

        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Text(cmd) = &item.cmd else { continue };
            let Some(font) = fonts.get(cmd.font) else {
                log::warn!("text references unknown font {:?}", cmd.font);
                continue;
            };
            if !any_text {
                self.ensure_resources(ctx);
                any_text = true;
            }

            self.layout.reset(&LayoutSettings {
                x: cmd.origin.x,
                y: cmd.origin.y,
                max_width: cmd.max_width,
                ..LayoutSettings::default()
            });
            self.layout.append(&[font], &TextStyle::new(&cmd.text, cmd.size, 0));

            for g in self.layout.glyphs() {
                if !g.char_data.rasterize() || g.width == 0 || g.height == 0 {
                    continue;
                }

                let cached = match self.glyphs.get(&g.key) {
                    Some(c) => *c,
                    None => {
                        let (metrics, bitmap) = font.rasterize_config(g.key);
                        let (w, h) = (metrics.width as u32, metrics.height as u32);
                        let Some((x, y)) = self.packer.place(w, h) else {
                            if self.packer.first_full_report() {
                                log::warn!("glyph atlas is full; text will be incomplete");
                            }
                            continue;
                        };
                        let Some(atlas) = self.atlas.as_ref() else { continue };
                        write_glyph(ctx, &atlas.texture, &bitmap, x, y, w, h);

                        let s = self.packer.size as f32;
                        let c = CachedGlyph {
                            uv_min: [x as f32 / s, y as f32 / s],
                            uv_max: [(x + w) as f32 / s, (y + h) as f32 / s],
                        };
                        self.glyphs.insert(g.key, c);
                        c
                    }
                };

                self.instances.push(QuadInstance {
                    dst_min: [g.x, g.y],
                    dst_max: [g.x + g.width as f32, g.y + g.height as f32],
                    uv_min: cached.uv_min,
                    uv_max: cached.uv_max,
                    color: cmd.color.to_array(),
                });
            }
        }

        if self.instances.is_empty() {
            return;
        }
        let (Some(quad), Some(atlas)) = (self.quad.as_mut(), self.atlas.as_ref()) else {
            return;
        };

        quad.upload(ctx, &self.instances);
        quad.draw(target, &[Run {
            group: &atlas.group,
            instances: 0..self.instances.len() as u32,
        }]);
    }

    fn ensure_resources(&mut self, ctx: &RenderCtx<'_>) {
        if !self.quad.as_ref().is_some_and(|q| q.matches(ctx)) {
            self.quad = Some(QuadPipeline::new(ctx, "gemfall text", SHADER));
            // Rebind the atlas against the new layout; glyphs stay valid.
            if let (Some(quad), Some(atlas)) = (self.quad.as_ref(), self.atlas.as_mut()) {
                let view = atlas.texture.create_view(&wgpu::TextureViewDescriptor::default());
                atlas.group = quad.texture_group(ctx, &view);
            }
        }

        if self.atlas.is_none() {
            let Some(quad) = self.quad.as_ref() else { return };
            let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
                label: Some("gemfall glyph atlas"),
                size: wgpu::Extent3d {
                    width: ATLAS_SIZE,
                    height: ATLAS_SIZE,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::R8Unorm,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            });
            let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
            let group = quad.texture_group(ctx, &view);
            self.atlas = Some(Atlas { texture, group });
        }
    }
}

fn write_glyph(ctx: &RenderCtx<'_>, atlas: &wgpu::Texture, bitmap: &[u8], x: u32, y: u32, w: u32, h: u32) {
    ctx.queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: atlas,
            mip_level: 0,
            origin: wgpu::Origin3d { x, y, z: 0 },
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packer_fills_rows_left_to_right() {
        let mut p = ShelfPacker::new(32);
        assert_eq!(p.place(10, 4), Some((1, 1)));
        assert_eq!(p.place(10, 6), Some((12, 1)));
    }

    #[test]
    fn packer_opens_shelf_below_tallest() {
        let mut p = ShelfPacker::new(32);
        p.place(10, 4);
        p.place(10, 6);
        // 23 + 10 + 1 > 32: next shelf at y = 1 + 6 + 1.
        assert_eq!(p.place(10, 3), Some((1, 8)));
    }

    #[test]
    fn packer_reports_full_and_stays_full() {
        let mut p = ShelfPacker::new(16);
        assert_eq!(p.place(14, 14), Some((1, 1)));
        assert_eq!(p.place(2, 2), None);
        assert_eq!(p.place(1, 1), None);
    }

    #[test]
    fn full_atlas_is_reported_once() {
        let mut p = ShelfPacker::new(16);
        assert!(!p.first_full_report());
        p.place(14, 14);
        for _ in 0..3 {
            assert_eq!(p.place(2, 2), None);
        }
        assert!(p.first_full_report());
        assert!(!p.first_full_report());
    }

    #[test]
    fn packer_rejects_oversized() {
        let mut p = ShelfPacker::new(16);
        assert_eq!(p.place(40, 2), None);
    }
}
