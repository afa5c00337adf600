use tracing::instrument;

use crate::{
    backend::Backend,
    color::Color,
    config::BatchConfig,
    math::{Angle, Point, Unknown, Vector},
    sprite::{compute_quad, FlipFlags, SourceRect, SpriteTransform, Vertex, VERTICES_PER_QUAD},
    texture::TextureId,
    Error,
};

/// A contiguous range of the vertex buffer drawn with one texture bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchRun {
    /// The texture to bind.
    pub texture: TextureId,
    /// The number of vertices in the run. Always a multiple of four.
    pub vertex_count: usize,
}

/// One draw call for a backend: the vertices
/// `vertex_offset..vertex_offset + vertex_count` drawn with `texture` bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    /// The texture to bind.
    pub texture: TextureId,
    /// The index of the first vertex.
    pub vertex_offset: usize,
    /// The number of vertices to draw.
    pub vertex_count: usize,
}

/// Accumulates textured quads for one render target and groups consecutive
/// quads sharing a texture into [`BatchRun`]s.
///
/// Each frame follows `begin`, any number of `draw`s, then `end`. Runs are
/// never reordered or merged across a texture change, so the order of draw
/// calls is the order sprites were drawn in. The vertex buffer is allocated
/// once and only grows.
#[derive(Debug)]
pub struct SpriteBatch {
    vertices: Vec<Vertex>,
    runs: Vec<BatchRun>,
    active: bool,
    active_texture: Option<TextureId>,
    queued_vertices: usize,
    quad_count: usize,
    max_capacity: usize,
}

impl Default for SpriteBatch {
    fn default() -> Self {
        Self::new(BatchConfig::default())
    }
}

impl SpriteBatch {
    /// Returns a new batch with room for `config.initial_capacity()` quads.
    #[must_use]
    pub fn new(config: BatchConfig) -> Self {
        let config = config.normalized();
        Self {
            vertices: vec![Vertex::default(); config.initial_capacity() * VERTICES_PER_QUAD],
            runs: Vec::new(),
            active: false,
            active_texture: None,
            queued_vertices: 0,
            quad_count: 0,
            max_capacity: config.max_capacity(),
        }
    }

    /// Starts a new cycle, discarding the quads and runs of the previous one.
    /// The vertex buffer keeps its size.
    pub fn begin(&mut self) -> crate::Result<()> {
        if self.active {
            return Err(Error::AlreadyActive);
        }

        self.quad_count = 0;
        self.queued_vertices = 0;
        self.active_texture = None;
        self.runs.clear();
        self.active = true;
        Ok(())
    }

    /// Draws the `source` region of `texture` placed by `transform`.
    #[instrument(
        name = "SpriteBatch::draw_sprite",
        level = "trace",
        skip(self, transform, source, color)
    )]
    pub fn draw_sprite(
        &mut self,
        texture: TextureId,
        transform: &SpriteTransform,
        source: SourceRect,
        color: Color,
        flip: FlipFlags,
    ) -> crate::Result<()> {
        if !self.active {
            return Err(Error::NotActive);
        }
        self.reserve_quad()?;

        if self.active_texture != Some(texture) {
            self.flush_run();
            self.active_texture = Some(texture);
        }

        let quad = compute_quad(transform, &source, color, flip);
        self.write_quad(&quad);
        self.queued_vertices += VERTICES_PER_QUAD;
        Ok(())
    }

    /// Draws the `source` region of `texture` with each part of the transform
    /// passed separately. `rotation_degrees` is clockwise in screen space.
    pub fn draw(
        &mut self,
        texture: TextureId,
        position: Point<f32>,
        source: SourceRect,
        color: Color,
        scale: Vector<f32, Unknown>,
        origin: Point<f32, Unknown>,
        rotation_degrees: f32,
        flip: FlipFlags,
    ) -> crate::Result<()> {
        let transform = SpriteTransform {
            position,
            origin,
            scale,
            rotation: Angle::degrees(rotation_degrees),
        };
        self.draw_sprite(texture, &transform, source, color, flip)
    }

    /// Finishes the cycle. The runs are available through
    /// [`SpriteBatch::runs`] and [`SpriteBatch::draw_calls`] until the next
    /// `begin`.
    pub fn end(&mut self) -> crate::Result<()> {
        if !self.active {
            return Err(Error::NotActive);
        }

        self.flush_run();
        self.active = false;
        tracing::trace!(
            quads = self.quad_count,
            runs = self.runs.len(),
            "sprite batch ended"
        );
        Ok(())
    }

    /// Issues one backend call per run, in order. Fails if the batch is still
    /// recording.
    #[instrument(name = "SpriteBatch::submit", level = "trace", skip(self, backend))]
    pub fn submit<B: Backend>(&self, backend: &mut B) -> crate::Result<()> {
        if self.active {
            return Err(Error::AlreadyActive);
        }

        for call in self.draw_calls() {
            let vertices = &self.vertices[call.vertex_offset..call.vertex_offset + call.vertex_count];
            backend
                .draw_quads(call.texture, vertices)
                .map_err(|err| Error::Backend(err.to_string()))?;
        }
        Ok(())
    }

    /// Returns true between `begin` and `end`.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// The number of quads written this cycle.
    #[must_use]
    pub const fn quad_count(&self) -> usize {
        self.quad_count
    }

    /// The number of quads the vertex buffer currently holds room for.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.vertices.len() / VERTICES_PER_QUAD
    }

    /// The number of quads the vertex buffer may grow to.
    #[must_use]
    pub const fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// The runs committed so far this cycle. After `end`, their vertex counts
    /// sum to four times [`SpriteBatch::quad_count`].
    #[must_use]
    pub fn runs(&self) -> &[BatchRun] {
        &self.runs
    }

    /// The vertices written this cycle. Stale data past the written range is
    /// never exposed.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices[..self.quad_count * VERTICES_PER_QUAD]
    }

    /// The vertices written this cycle as raw bytes, ready for upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices())
    }

    /// Returns the committed runs as draw calls with absolute vertex offsets.
    pub fn draw_calls(&self) -> impl Iterator<Item = DrawCall> + '_ {
        self.runs.iter().scan(0, |offset, run| {
            let call = DrawCall {
                texture: run.texture,
                vertex_offset: *offset,
                vertex_count: run.vertex_count,
            };
            *offset += run.vertex_count;
            Some(call)
        })
    }

    fn flush_run(&mut self) {
        if let Some(texture) = self.active_texture {
            if self.queued_vertices > 0 {
                self.runs.push(BatchRun {
                    texture,
                    vertex_count: self.queued_vertices,
                });
            }
        }
        self.queued_vertices = 0;
    }

    fn reserve_quad(&mut self) -> crate::Result<()> {
        let capacity = self.capacity();
        if self.quad_count < capacity {
            return Ok(());
        }

        if capacity >= self.max_capacity {
            return Err(Error::CapacityExceeded {
                max_quads: self.max_capacity,
            });
        }

        let new_capacity = capacity.saturating_mul(2).min(self.max_capacity);
        tracing::debug!(
            from = capacity,
            to = new_capacity,
            "growing sprite batch"
        );
        // Resizing preserves every vertex already written.
        self.vertices
            .resize(new_capacity * VERTICES_PER_QUAD, Vertex::default());
        Ok(())
    }

    fn write_quad(&mut self, quad: &[Vertex; VERTICES_PER_QUAD]) {
        let start = self.quad_count * VERTICES_PER_QUAD;
        self.vertices[start..start + VERTICES_PER_QUAD].copy_from_slice(quad);
        self.quad_count += 1;
    }
}
