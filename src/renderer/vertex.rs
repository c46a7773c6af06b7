//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
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

/// 8-bit RGB + alpha to normalized color
pub const fn rgba8(r: u8, g: u8, b: u8, a: f32) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a]
}

/// Colors for game elements
pub mod colors {
    use super::rgba8;

    pub const SKY: [f32; 4] = rgba8(0x70, 0xC5, 0xCE, 1.0);
    pub const OBSTACLE: [f32; 4] = rgba8(0x00, 0x80, 0x60, 1.0);
    pub const OBSTACLE_BORDER: [f32; 4] = rgba8(0x00, 0x54, 0x2C, 1.0);
    pub const GROUND: [f32; 4] = rgba8(0x5E, 0x8E, 0x3E, 1.0);
    pub const GROUND_BORDER: [f32; 4] = rgba8(0x3A, 0x5B, 0x22, 1.0);
    pub const AVATAR: [f32; 4] = rgba8(0x95, 0xBF, 0x47, 1.0);
    pub const AVATAR_OUTLINE: [f32; 4] = rgba8(0x5E, 0x8E, 0x3E, 1.0);
    pub const AVATAR_SHADOW: [f32; 4] = rgba8(0x22, 0x22, 0x22, 0.18);
}
