//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND_TOP: [f32; 4] = [0.016, 0.078, 0.149, 1.0];
    pub const BACKGROUND_BOTTOM: [f32; 4] = [0.0, 0.071, 0.102, 1.0];
    pub const TITLE_BACKDROP: [f32; 4] = [0.012, 0.075, 0.133, 1.0];
    pub const PADDLE_BODY: [f32; 4] = [0.169, 0.561, 0.839, 1.0];
    pub const PADDLE_STRIPE: [f32; 4] = [0.031, 0.220, 0.310, 1.0];
    pub const STAR: [f32; 4] = [1.0, 0.820, 0.4, 1.0];
    pub const PAUSE_OVERLAY: [f32; 4] = [0.008, 0.024, 0.047, 0.48];
}
