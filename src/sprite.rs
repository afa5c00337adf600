mod batch;
mod quad;
mod source;
mod vertex;

pub use self::{
    batch::{BatchRun, DrawCall, SpriteBatch},
    quad::compute_quad,
    source::{FlipFlags, SourceRect, SpriteTransform},
    vertex::Vertex,
};

/// The number of vertices that make up one quad.
pub const VERTICES_PER_QUAD: usize = 4;
