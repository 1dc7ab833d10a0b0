//! Wireframe pipeline for polytope edges
//!
//! Draws each recorded command as a line list. Frame uniforms live in one
//! small buffer; per-draw uniforms are packed at [`MODEL_UNIFORM_STRIDE`]
//! into a second buffer and selected with a dynamic offset.

use wgpu::util::DeviceExt;

use super::types::{FrameUniforms, ModelUniforms, Vertex4D, MODEL_UNIFORM_STRIDE};
use crate::mesh::PolytopeMeshes;
use crate::recorder::DrawCommand;

/// Model uniform slots allocated up front
const INITIAL_MODEL_CAPACITY: usize = 16;

/// Render pipeline for polytope wireframes
pub struct WireframePipeline {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    frame_buffer: wgpu::Buffer,
    model_buffer: wgpu::Buffer,
    model_capacity: usize,
    bind_group: wgpu::BindGroup,
}

impl WireframePipeline {
    /// Create a new wireframe pipeline
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Wireframe Bind Group Layout"),
            entries: &[
                // Frame uniforms
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                // Model uniforms, one slot per draw
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<ModelUniforms>() as u64),
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Wireframe Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Wireframe Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/wireframe.wgsl").into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Wireframe Pipeline"),
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
                topology: wgpu::PrimitiveTopology::LineList,
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

        let frame_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Frame Uniform Buffer"),
            contents: bytemuck::bytes_of(&FrameUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let model_buffer = Self::create_model_buffer(device, INITIAL_MODEL_CAPACITY);
        let bind_group = Self::create_bind_group(device, &bind_group_layout, &frame_buffer, &model_buffer);

        Self {
            pipeline,
            bind_group_layout,
            frame_buffer,
            model_buffer,
            model_capacity: INITIAL_MODEL_CAPACITY,
            bind_group,
        }
    }

    /// Get the vertex buffer layout for Vertex4D
    fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex4D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position: vec4<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 0,
                    shader_location: 0,
                },
            ],
        }
    }

    fn create_model_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Model Uniform Buffer"),
            size: capacity as u64 * MODEL_UNIFORM_STRIDE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn create_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        frame_buffer: &wgpu::Buffer,
        model_buffer: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Wireframe Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: frame_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                        buffer: model_buffer,
                        offset: 0,
                        size: wgpu::BufferSize::new(std::mem::size_of::<ModelUniforms>() as u64),
                    }),
                },
            ],
        })
    }

    /// Grow the model buffer so `count` draws fit
    fn ensure_model_capacity(&mut self, device: &wgpu::Device, count: usize) {
        if count <= self.model_capacity {
            return;
        }

        let capacity = count.next_power_of_two();
        self.model_buffer = Self::create_model_buffer(device, capacity);
        self.bind_group = Self::create_bind_group(device, &self.bind_group_layout, &self.frame_buffer, &self.model_buffer);
        self.model_capacity = capacity;
        log::debug!("Grew model uniform buffer to {} slots", capacity);
    }

    /// Upload this frame's uniforms
    pub fn update_uniforms(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        frame: &FrameUniforms,
        commands: &[DrawCommand],
    ) {
        queue.write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(frame));

        if commands.is_empty() {
            return;
        }
        self.ensure_model_capacity(device, commands.len());
        queue.write_buffer(&self.model_buffer, 0, &pack_model_uniforms(commands));
    }

    /// Clear `view` and draw every command
    ///
    /// Uniforms must have been uploaded with [`WireframePipeline::update_uniforms`].
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        meshes: &PolytopeMeshes,
        commands: &[DrawCommand],
        clear_color: wgpu::Color,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Wireframe Pass"),
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

        render_pass.set_pipeline(&self.pipeline);

        for (slot, command) in commands.iter().enumerate() {
            let Some(mesh) = meshes.get(command.polytope) else {
                log::warn!("No mesh uploaded for {:?}", command.polytope);
                continue;
            };

            let offset = (slot as u64 * MODEL_UNIFORM_STRIDE) as u32;
            render_pass.set_bind_group(0, &self.bind_group, &[offset]);
            render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            render_pass.draw_indexed(0..command.index_count.min(mesh.index_count), 0, 0..1);
        }
    }
}

/// Per-draw uniforms laid out at [`MODEL_UNIFORM_STRIDE`]
fn pack_model_uniforms(commands: &[DrawCommand]) -> Vec<u8> {
    let stride = MODEL_UNIFORM_STRIDE as usize;
    let mut bytes = vec![0u8; commands.len() * stride];
    for (chunk, command) in bytes.chunks_exact_mut(stride).zip(commands) {
        let data = bytemuck::bytes_of(&command.uniforms);
        chunk[..data.len()].copy_from_slice(data);
    }
    bytes
}
