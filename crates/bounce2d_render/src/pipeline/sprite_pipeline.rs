//! Render pipeline for textured sprite quads
//!
//! Vertices arrive in screen pixels; the shader maps them to clip space using the
//! screen size uniform. Each texture gets its own bind group (group 1).

use wgpu::util::DeviceExt;

use super::types::{ScreenUniforms, SpriteVertex};
use crate::renderable::{DrawCall, SpriteBatch, TextureId};
use crate::texture::Texture;

/// Initial vertex/index buffer capacity, in quads
const INITIAL_QUAD_CAPACITY: usize = 16;

/// Render pipeline for sprite quads
pub struct SpritePipeline {
    /// The render pipeline
    pipeline: wgpu::RenderPipeline,
    /// Bind group layout for textures + sampler
    texture_bind_group_layout: wgpu::BindGroupLayout,
    /// Screen size uniform buffer
    uniform_buffer: wgpu::Buffer,
    /// Bind group for the screen uniform
    screen_bind_group: wgpu::BindGroup,
    /// Vertex buffer, grown on demand
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    /// Index buffer, grown on demand
    index_buffer: wgpu::Buffer,
    index_capacity: usize,
}

impl SpritePipeline {
    /// Create a new sprite pipeline
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let screen_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Screen Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let texture_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Sprite Texture Bind Group Layout"),
                entries: &[
                    // Spritesheet texture
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            multisampled: false,
                            view_dimension: wgpu::TextureViewDimension::D2,
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        },
                        count: None,
                    },
                    // Sampler
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sprite Pipeline Layout"),
            bind_group_layouts: &[&screen_bind_group_layout, &texture_bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader_source = include_str!("../shaders/sprite.wgsl");
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sprite Shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Sprite Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Self::vertex_buffer_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Screen Uniform Buffer"),
            contents: bytemuck::bytes_of(&ScreenUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let screen_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Screen Bind Group"),
            layout: &screen_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let vertex_capacity = INITIAL_QUAD_CAPACITY * 4;
        let index_capacity = INITIAL_QUAD_CAPACITY * 6;

        Self {
            pipeline,
            texture_bind_group_layout,
            uniform_buffer,
            screen_bind_group,
            vertex_buffer: create_vertex_buffer(device, vertex_capacity),
            vertex_capacity,
            index_buffer: create_index_buffer(device, index_capacity),
            index_capacity,
        }
    }

    /// Get the vertex buffer layout for SpriteVertex
    fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position: vec2<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                },
                // tex_coords: vec2<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 8,
                    shader_location: 1,
                },
            ],
        }
    }

    /// Create the group 1 bind group for a texture
    pub fn create_texture_bind_group(
        &self,
        device: &wgpu::Device,
        texture: &Texture,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Sprite Texture Bind Group"),
            layout: &self.texture_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
            ],
        })
    }

    /// Set the logical screen size quads are positioned in
    pub fn update_screen(&self, queue: &wgpu::Queue, width: u32, height: u32) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&ScreenUniforms::new(width, height)),
        );
    }

    /// Copy the batch geometry to the GPU, growing buffers when needed
    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, batch: &SpriteBatch) {
        if batch.is_empty() {
            return;
        }

        if batch.vertices.len() > self.vertex_capacity {
            self.vertex_capacity = batch.vertices.len().next_power_of_two();
            self.vertex_buffer = create_vertex_buffer(device, self.vertex_capacity);
            log::debug!("Grew sprite vertex buffer to {} vertices", self.vertex_capacity);
        }
        if batch.indices.len() > self.index_capacity {
            self.index_capacity = batch.indices.len().next_power_of_two();
            self.index_buffer = create_index_buffer(device, self.index_capacity);
        }

        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&batch.vertices));
        queue.write_buffer(&self.index_buffer, 0, bytemuck::cast_slice(&batch.indices));
    }

    /// Clear the target and draw the uploaded batch
    ///
    /// The clear happens even when `draw_calls` is empty. Draw calls whose texture has
    /// no bind group are skipped.
    pub fn render<'a, F>(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        draw_calls: &[DrawCall],
        bind_group_for: F,
        clear_color: wgpu::Color,
    ) where
        F: Fn(TextureId) -> Option<&'a wgpu::BindGroup>,
    {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Sprite Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if draw_calls.is_empty() {
            return;
        }

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.screen_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);

        for draw in draw_calls {
            match bind_group_for(draw.texture) {
                Some(bind_group) => {
                    render_pass.set_bind_group(1, bind_group, &[]);
                    render_pass.draw_indexed(
                        draw.index_start..draw.index_start + draw.index_count,
                        0,
                        0..1,
                    );
                }
                None => log::trace!("Skipping draw with unregistered texture {:?}", draw.texture),
            }
        }
    }
}

fn create_vertex_buffer(device: &wgpu::Device, vertex_capacity: usize) -> wgpu::Buffer {
    let byte_len = (vertex_capacity * std::mem::size_of::<SpriteVertex>()).max(4) as u64;
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Sprite Vertex Buffer"),
        size: byte_len,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_index_buffer(device: &wgpu::Device, index_capacity: usize) -> wgpu::Buffer {
    let byte_len = (index_capacity * std::mem::size_of::<u32>()).max(4) as u64;
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Sprite Index Buffer"),
        size: byte_len,
        usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_buffer_layout_stride() {
        let layout = SpritePipeline::vertex_buffer_layout();
        assert_eq!(layout.array_stride, std::mem::size_of::<SpriteVertex>() as u64);
        assert_eq!(layout.attributes.len(), 2);
    }

    #[test]
    fn test_uv_attribute_follows_position() {
        let layout = SpritePipeline::vertex_buffer_layout();
        assert_eq!(layout.attributes[1].offset, std::mem::size_of::<[f32; 2]>() as u64);
    }
}
