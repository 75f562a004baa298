//! Per-frame sprite geometry
//!
//! A [`SpriteBatch`] collects one textured quad per sprite copy, in screen pixels, and
//! groups consecutive quads that use the same texture into a single [`DrawCall`].

use bounce2d_math::Rect;

use crate::pipeline::SpriteVertex;

/// Identifies a texture registered with the renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

/// A contiguous index range drawn with one texture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawCall {
    pub texture: TextureId,
    pub index_start: u32,
    pub index_count: u32,
}

/// Quads queued for the current frame
#[derive(Default)]
pub struct SpriteBatch {
    pub vertices: Vec<SpriteVertex>,
    pub indices: Vec<u32>,
    draw_calls: Vec<DrawCall>,
}

impl SpriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything queued so far
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.draw_calls.clear();
    }

    /// Queue a copy of `src` (pixels within a `texture_size` texture) to `dst` (screen pixels)
    pub fn push(&mut self, texture: TextureId, texture_size: (u32, u32), src: Rect, dst: Rect) {
        if dst.is_empty() {
            return;
        }

        let [u0, v0, u1, v1] = src.normalized(texture_size.0, texture_size.1);
        let (x0, y0) = (dst.x as f32, dst.y as f32);
        let (x1, y1) = (dst.right() as f32, dst.bottom() as f32);
        let base = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&[
            SpriteVertex::new([x0, y0], [u0, v0]),
            SpriteVertex::new([x1, y0], [u1, v0]),
            SpriteVertex::new([x1, y1], [u1, v1]),
            SpriteVertex::new([x0, y1], [u0, v1]),
        ]);

        let index_start = self.indices.len() as u32;
        self.indices.extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);

        self.push_draw_call(texture, index_start, 6);
    }

    fn push_draw_call(&mut self, texture: TextureId, index_start: u32, index_count: u32) {
        if let Some(last) = self.draw_calls.last_mut() {
            if last.texture == texture && last.index_start + last.index_count == index_start {
                last.index_count += index_count;
                return;
            }
        }
        self.draw_calls.push(DrawCall {
            texture,
            index_start,
            index_count,
        });
    }

    pub fn draw_calls(&self) -> &[DrawCall] {
        &self.draw_calls
    }

    /// Number of queued quads
    #[inline]
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 4
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: TextureId = TextureId(0);

    #[test]
    fn test_quad_covers_destination() {
        let mut batch = SpriteBatch::new();
        batch.push(SHEET, (512, 512), Rect::new(0, 0, 512, 512), Rect::new(288, 88, 512, 512));

        assert_eq!(batch.quad_count(), 1);
        assert_eq!(batch.indices.len(), 6);
        assert_eq!(batch.vertices[0].position, [288.0, 88.0]);
        assert_eq!(batch.vertices[2].position, [800.0, 600.0]);
        assert_eq!(batch.vertices[0].tex_coords, [0.0, 0.0]);
        assert_eq!(batch.vertices[2].tex_coords, [1.0, 1.0]);
    }

    #[test]
    fn test_partial_clip_uvs() {
        let mut batch = SpriteBatch::new();
        batch.push(SHEET, (1024, 512), Rect::new(512, 0, 512, 512), Rect::new(0, 0, 64, 64));

        assert_eq!(batch.vertices[0].tex_coords, [0.5, 0.0]);
        assert_eq!(batch.vertices[1].tex_coords, [1.0, 0.0]);
    }

    #[test]
    fn test_same_texture_merges_draw_calls() {
        let mut batch = SpriteBatch::new();
        for i in 0..3 {
            batch.push(SHEET, (64, 64), Rect::new(0, 0, 64, 64), Rect::new(i * 10, 0, 64, 64));
        }

        assert_eq!(batch.draw_calls().len(), 1);
        assert_eq!(batch.draw_calls()[0].index_count, 18);
    }

    #[test]
    fn test_texture_change_splits_draw_calls() {
        let mut batch = SpriteBatch::new();
        batch.push(TextureId(0), (64, 64), Rect::new(0, 0, 64, 64), Rect::new(0, 0, 64, 64));
        batch.push(TextureId(1), (64, 64), Rect::new(0, 0, 64, 64), Rect::new(0, 0, 64, 64));

        assert_eq!(batch.draw_calls().len(), 2);
        assert_eq!(batch.draw_calls()[1].index_start, 6);
    }

    #[test]
    fn test_empty_destination_is_skipped() {
        let mut batch = SpriteBatch::new();
        batch.push(SHEET, (64, 64), Rect::new(0, 0, 64, 64), Rect::new(0, 0, 0, 64));
        assert!(batch.is_empty());
        assert!(batch.draw_calls().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut batch = SpriteBatch::new();
        batch.push(SHEET, (64, 64), Rect::new(0, 0, 64, 64), Rect::new(0, 0, 64, 64));
        batch.clear();
        assert!(batch.is_empty());
        assert!(batch.indices.is_empty());
        assert!(batch.draw_calls().is_empty());
    }
}
