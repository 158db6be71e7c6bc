//! GPU-side shader source and uniform layout for the circle pipeline.

use bytemuck::{Pod, Zeroable};

pub const CIRCLE_SHADER: &str = include_str!("circle.wgsl");

/// Matches `Uniforms` in `circle.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    pub screen_size: [f32; 2],
    pub _padding: [f32; 2],
}

impl Uniforms {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            screen_size: [width, height],
            _padding: [0.0; 2],
        }
    }
}
