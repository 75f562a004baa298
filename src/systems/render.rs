//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Sprite pipeline and per-frame batch
//! - Texture registration and release
//!
//! The frame loop draws through the [`Canvas`] trait: clear, copy clips of a texture to
//! screen rectangles, then present.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use winit::window::Window;

use bounce2d_core::Rect;
use bounce2d_render::{
    pipeline::SpritePipeline, ContextError, RenderContext, SpriteBatch, Texture, TextureError,
    TextureId,
};

use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost or outdated and must be reconfigured
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// A render target that draws clipped regions of a texture
pub trait Canvas {
    /// Texture handle accepted by [`Canvas::copy`]
    type Texture;

    /// Start a new frame on a cleared back buffer
    fn clear(&mut self);

    /// Copy `src` (texture pixels) of `texture` to `dst` (screen pixels)
    fn copy(&mut self, texture: &Self::Texture, src: Rect, dst: Rect);

    /// Show the back buffer
    fn present(&mut self) -> Result<(), RenderError>;
}

/// A texture registered with a [`RenderSystem`]
///
/// Released by passing it back to [`RenderSystem::release_texture`], which consumes it.
pub struct SpriteTexture {
    id: TextureId,
    texture: Texture,
}

impl SpriteTexture {
    /// Size in pixels as `(width, height)`
    pub fn size(&self) -> (u32, u32) {
        self.texture.size()
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: SpritePipeline,
    batch: SpriteBatch,
    bind_groups: HashMap<TextureId, wgpu::BindGroup>,
    next_texture_id: u32,
    clear_color: wgpu::Color,
}

impl RenderSystem {
    /// Create render system for a window
    ///
    /// `screen_size` is the logical size sprite rectangles are expressed in.
    pub fn new(
        window: Arc<Window>,
        screen_size: (u32, u32),
        vsync: bool,
    ) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::new(window, vsync))?;
        let pipeline = SpritePipeline::new(&context.device, context.config.format);
        pipeline.update_screen(&context.queue, screen_size.0, screen_size.1);

        log::info!(
            "Render context ready ({}x{}, {:?}, vsync: {})",
            context.size.width,
            context.size.height,
            context.config.format,
            vsync
        );

        Ok(Self {
            context,
            pipeline,
            batch: SpriteBatch::new(),
            bind_groups: HashMap::new(),
            next_texture_id: 0,
            clear_color: wgpu::Color::BLACK,
        })
    }

    /// Set the color the back buffer is cleared to
    pub fn set_clear_color(&mut self, config: &RenderingConfig) {
        let [r, g, b, a] = config.clear_color;
        self.clear_color = wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        };
    }

    /// Load an image and register it for drawing
    pub fn load_texture(&mut self, path: impl AsRef<Path>) -> Result<SpriteTexture, TextureError> {
        let texture = Texture::load(&self.context.device, &self.context.queue, path)?;
        let bind_group = self
            .pipeline
            .create_texture_bind_group(&self.context.device, &texture);

        let id = TextureId(self.next_texture_id);
        self.next_texture_id += 1;
        self.bind_groups.insert(id, bind_group);

        Ok(SpriteTexture { id, texture })
    }

    /// Unregister and free a texture
    pub fn release_texture(&mut self, sprite: SpriteTexture) {
        self.bind_groups.remove(&sprite.id);
        log::debug!("Released texture {:?}", sprite.id);
    }

    /// Reconfigure the surface after it was lost
    pub fn reconfigure(&mut self) {
        self.context.reconfigure();
    }
}

impl Canvas for RenderSystem {
    type Texture = SpriteTexture;

    /// The clear itself is the load op of the render pass issued by `present`
    fn clear(&mut self) {
        self.batch.clear();
    }

    fn copy(&mut self, texture: &SpriteTexture, src: Rect, dst: Rect) {
        self.batch.push(texture.id, texture.size(), src, dst);
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.pipeline
            .upload(&self.context.device, &self.context.queue, &self.batch);

        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let bind_groups = &self.bind_groups;
        self.pipeline.render(
            &mut encoder,
            &view,
            self.batch.draw_calls(),
            |id| bind_groups.get(&id),
            self.clear_color,
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }
}
