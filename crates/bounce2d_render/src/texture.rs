//! Sprite textures
//!
//! Loading is split in two so each failure is reported separately:
//! [`decode_image`] reads and decodes the file on the CPU, and
//! [`Texture::from_image`] binds the pixels to the render context.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use image::RgbaImage;

/// Error type for texture loading
#[derive(Debug)]
pub enum TextureError {
    /// The file could not be read (missing, permission denied, ...)
    Read { path: PathBuf, source: io::Error },
    /// The file was read but is not a decodable image
    Decode { path: PathBuf, source: image::ImageError },
    /// The decoded image could not be bound to the render context
    Bind { path: PathBuf, message: String },
}

impl TextureError {
    /// Path of the asset that failed
    pub fn path(&self) -> &Path {
        match self {
            TextureError::Read { path, .. }
            | TextureError::Decode { path, .. }
            | TextureError::Bind { path, .. } => path,
        }
    }
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureError::Read { path, source } => {
                write!(f, "Unable to load image {}: {}", path.display(), source)
            }
            TextureError::Decode { path, source } => {
                write!(f, "Unable to decode image {}: {}", path.display(), source)
            }
            TextureError::Bind { path, message } => {
                write!(f, "Unable to create texture from {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TextureError::Read { source, .. } => Some(source),
            TextureError::Decode { source, .. } => Some(source),
            TextureError::Bind { .. } => None,
        }
    }
}

/// Whether this build can decode PNG files
pub fn png_decoding_available() -> bool {
    image::ImageFormat::Png.reading_enabled()
}

/// Read and decode an image file into RGBA8 pixels
pub fn decode_image(path: impl AsRef<Path>) -> Result<RgbaImage, TextureError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| TextureError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let image = image::load_from_memory(&bytes).map_err(|source| TextureError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_rgba8())
}

/// A GPU texture with its view and sampler
///
/// GPU memory is released when this value is dropped.
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    width: u32,
    height: u32,
}

impl Texture {
    /// Decode `path` and upload it. Failures are logged and returned, never fatal here.
    pub fn load(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: impl AsRef<Path>,
    ) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let result = decode_image(path)
            .and_then(|image| Self::from_image(device, queue, &image, path));

        match &result {
            Ok(texture) => log::info!(
                "Loaded texture {} ({}x{})",
                path.display(),
                texture.width,
                texture.height
            ),
            Err(e) => log::error!("{}", e),
        }
        result
    }

    /// Upload decoded pixels to the device
    ///
    /// Validation errors raised by wgpu while creating or filling the texture are captured
    /// with an error scope and returned as [`TextureError::Bind`].
    pub fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &RgbaImage,
        path: &Path,
    ) -> Result<Self, TextureError> {
        let (width, height) = image.dimensions();
        let bind_error = |message: String| TextureError::Bind {
            path: path.to_path_buf(),
            message,
        };

        if width == 0 || height == 0 {
            return Err(bind_error(format!("image has zero size ({}x{})", width, height)));
        }
        let max = device.limits().max_texture_dimension_2d;
        if width > max || height > max {
            return Err(bind_error(format!(
                "{}x{} exceeds the device limit of {}",
                width, height, max
            )));
        }

        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let label = path.to_string_lossy();

        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(&*label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            image.as_raw(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        if let Some(error) = pollster::block_on(device.pop_error_scope()) {
            return Err(bind_error(error.to_string()));
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Sprite Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Ok(Self {
            texture,
            view,
            sampler,
            width,
            height,
        })
    }

    /// Size as `(width, height)`
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
