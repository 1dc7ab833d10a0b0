//! GPU buffers for the polytope wireframes
//!
//! Every polytope is uploaded once at unit half-size; per-shape size comes
//! from the drawable's local transform.

use std::collections::HashMap;

use orbit4d_core::Polytope;
use wgpu::util::DeviceExt;

use crate::pipeline::Vertex4D;

/// Full side length of the uploaded meshes
pub const MESH_SIZE: f32 = 2.0;

/// CPU-side line-list data for one polytope
pub fn mesh_data(polytope: Polytope) -> (Vec<Vertex4D>, Vec<u16>) {
    let vertices = polytope
        .vertices(MESH_SIZE)
        .into_iter()
        .map(|v| Vertex4D::new(v.to_array()))
        .collect();
    (vertices, polytope.indices())
}

/// One polytope's vertex and index buffers
pub struct PolytopeMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl PolytopeMesh {
    pub fn new(device: &wgpu::Device, polytope: Polytope) -> Self {
        let (vertices, indices) = mesh_data(polytope);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Polytope Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Polytope Index Buffer"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}

/// Meshes for every [`Polytope`]
pub struct PolytopeMeshes {
    meshes: HashMap<Polytope, PolytopeMesh>,
}

impl PolytopeMeshes {
    pub fn new(device: &wgpu::Device) -> Self {
        let meshes = Polytope::ALL
            .into_iter()
            .map(|polytope| (polytope, PolytopeMesh::new(device, polytope)))
            .collect();

        log::info!("Uploaded meshes for {} polytopes", Polytope::ALL.len());
        Self { meshes }
    }

    pub fn get(&self, polytope: Polytope) -> Option<&PolytopeMesh> {
        self.meshes.get(&polytope)
    }
}
