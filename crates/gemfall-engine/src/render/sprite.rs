use crate::scene::{DrawCmd, DrawList, SpriteCmd};

use super::quad::{self, QuadInstance, QuadPipeline, Run};
use super::texture::{TextureId, TextureImage};
use super::{RenderCtx, RenderTarget};

const SHADER: &str = include_str!("shaders/sprite.wgsl");

struct TextureSlot {
    label: String,
    image: TextureImage,
    texture: Option<wgpu::Texture>,
    group: Option<wgpu::BindGroup>,
}

/// Draws `DrawCmd::Sprite` items as instanced textured quads.
///
/// Textures are registered up front with [`SpriteRenderer::add_texture`]
/// and uploaded on first use. Consecutive sprites sharing a texture are
/// drawn with a single call.
#[derive(Default)]
pub struct SpriteRenderer {
    quad: Option<QuadPipeline>,
    textures: Vec<TextureSlot>,

    instances: Vec<QuadInstance>,
    keys: Vec<u32>,
}

impl SpriteRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_texture(&mut self, label: impl Into<String>, image: TextureImage) -> TextureId {
        let id = TextureId(self.textures.len() as u32);
        self.textures.push(TextureSlot {
            label: label.into(),
            image,
            texture: None,
            group: None,
        });
        id
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, draw_list: &mut DrawList) {
        self.instances.clear();
        self.keys.clear();

        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Sprite(cmd) = &item.cmd else { continue };
            if (cmd.texture.0 as usize) >= self.textures.len() {
                log::warn!("sprite references unknown texture {:?}", cmd.texture);
                continue;
            }
            if let Some(inst) = sprite_instance(cmd) {
                self.instances.push(inst);
                self.keys.push(cmd.texture.0);
            }
        }

        if self.instances.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        let Some(quad) = self.quad.as_mut() else { return };

        for &key in &self.keys {
            let slot = &mut self.textures[key as usize];
            if slot.group.is_none() {
                let texture = slot
                    .texture
                    .get_or_insert_with(|| slot.image.upload(ctx.device, ctx.queue, &slot.label));
                let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
                slot.group = Some(quad.texture_group(ctx, &view));
            }
        }

        quad.upload(ctx, &self.instances);

        let runs: Vec<Run<'_>> = quad::runs_by_key(&self.keys)
            .into_iter()
            .filter_map(|(key, instances)| {
                let group = self.textures[key as usize].group.as_ref()?;
                Some(Run { group, instances })
            })
            .collect();

        quad.draw(target, &runs);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad.as_ref().is_some_and(|q| q.matches(ctx)) {
            return;
        }
        // Bind groups belong to the old layout.
        for slot in &mut self.textures {
            slot.group = None;
        }
        self.quad = Some(QuadPipeline::new(ctx, "gemfall sprites", SHADER));
    }
}

/// Full-texture quad for `cmd`, or `None` when it would not be visible.
fn sprite_instance(cmd: &SpriteCmd) -> Option<QuadInstance> {
    if cmd.dst.is_empty() || cmd.tint.a <= 0.0 || !cmd.tint.is_finite() {
        return None;
    }
    let (min, max) = (cmd.dst.min(), cmd.dst.max());
    Some(QuadInstance {
        dst_min: [min.x, min.y],
        dst_max: [max.x, max.y],
        uv_min: [0.0, 0.0],
        uv_max: [1.0, 1.0],
        color: cmd.tint.to_array(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::Color;

    fn cmd(dst: Rect, tint: Color) -> SpriteCmd {
        SpriteCmd { texture: TextureId(0), dst, tint }
    }

    #[test]
    fn instance_spans_destination() {
        let inst = sprite_instance(&cmd(Rect::new(10.0, 20.0, 30.0, 40.0), Color::WHITE)).unwrap();
        assert_eq!(inst.dst_min, [10.0, 20.0]);
        assert_eq!(inst.dst_max, [40.0, 60.0]);
        assert_eq!(inst.uv_max, [1.0, 1.0]);
        assert_eq!(inst.color, [1.0; 4]);
    }

    #[test]
    fn invisible_sprites_are_skipped() {
        assert!(sprite_instance(&cmd(Rect::new(0.0, 0.0, 0.0, 5.0), Color::WHITE)).is_none());
        assert!(sprite_instance(&cmd(Rect::new(0.0, 0.0, 5.0, 5.0), Color::transparent())).is_none());
    }

    #[test]
    fn texture_ids_follow_registration_order() {
        let mut sprites = SpriteRenderer::new();
        let a = sprites.add_texture("a", TextureImage::from_rgba(4, 2, vec![0; 32]).unwrap());
        let b = sprites.add_texture("b", TextureImage::from_rgba(1, 1, vec![0; 4]).unwrap());
        assert_eq!((a, b), (TextureId(0), TextureId(1)));
    }
}
