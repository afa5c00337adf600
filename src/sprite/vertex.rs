use bytemuck::{Pod, Zeroable};

use crate::{color::Color, math::Point};

/// A single corner of a quad, laid out for direct upload to a vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// The position on the render target.
    pub position: [f32; 2],
    /// The texture coordinate, in texels.
    pub uv: [f32; 2],
    /// The color multiplied with the texture sample.
    pub color: [f32; 4],
}

impl Vertex {
    /// Returns a new vertex.
    #[must_use]
    pub fn new(position: Point<f32>, uv: [f32; 2], color: Color) -> Self {
        Self {
            position: position.to_array(),
            uv,
            color: color.rgba(),
        }
    }

    /// Returns the position as a point.
    #[must_use]
    pub fn point(&self) -> Point<f32> {
        Point::from(self.position)
    }
}
