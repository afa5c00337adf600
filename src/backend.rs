use std::{convert::Infallible, fmt::Display};

use crate::{sprite::Vertex, texture::TextureId};

/// A rendering backend that draws the runs of a finished
/// [`SpriteBatch`](crate::sprite::SpriteBatch).
///
/// The batch calls [`Backend::draw_quads`] once per run, in order. `vertices`
/// is always a whole number of quads, each four vertices wound clockwise from
/// the top left, so a backend can index them as two triangles per quad:
/// `0, 1, 2` and `0, 2, 3`.
pub trait Backend {
    /// The error a draw call can fail with.
    type Error: Display;

    /// Draws `vertices` with `texture` bound.
    fn draw_quads(&mut self, texture: TextureId, vertices: &[Vertex]) -> Result<(), Self::Error>;
}

impl<B: Backend + ?Sized> Backend for &mut B {
    type Error = B::Error;

    fn draw_quads(&mut self, texture: TextureId, vertices: &[Vertex]) -> Result<(), Self::Error> {
        (**self).draw_quads(texture, vertices)
    }
}

/// A draw call captured by [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// The texture that was bound.
    pub texture: TextureId,
    /// A copy of the vertices that were drawn.
    pub vertices: Vec<Vertex>,
}

impl RecordedCall {
    /// The number of quads drawn by this call.
    #[must_use]
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / crate::sprite::VERTICES_PER_QUAD
    }
}

/// A backend that keeps every draw call in memory instead of rendering it.
/// Useful for offscreen inspection of what a frame would draw.
#[derive(Debug, Default, Clone)]
pub struct RecordingBackend {
    calls: Vec<RecordedCall>,
}

impl RecordingBackend {
    /// Returns an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The calls recorded so far, in submission order.
    #[must_use]
    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }

    /// Removes and returns the recorded calls.
    pub fn take_calls(&mut self) -> Vec<RecordedCall> {
        std::mem::take(&mut self.calls)
    }

    /// Forgets all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Backend for RecordingBackend {
    type Error = Infallible;

    fn draw_quads(&mut self, texture: TextureId, vertices: &[Vertex]) -> Result<(), Self::Error> {
        self.calls.push(RecordedCall {
            texture,
            vertices: vertices.to_vec(),
        });
        Ok(())
    }
}
