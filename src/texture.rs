use std::sync::atomic::{AtomicU64, Ordering};

use crate::math::Size;

static NEXT_TEXTURE_ID: AtomicU64 = AtomicU64::new(1);

/// An opaque handle identifying a texture that the rendering backend has
/// already resolved. The batch only compares handles; it never looks inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u64);

/// A texture known to the batch: its handle and its dimensions in texels.
/// Cheap to copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Texture {
    id: TextureId,
    size: Size<u32>,
}

impl Texture {
    /// Registers a new texture of `size`. The id depends on registration order
    /// and is not related to the image data in any way.
    #[must_use]
    pub fn new(size: Size<u32>) -> Self {
        let id = NEXT_TEXTURE_ID.fetch_add(1, Ordering::SeqCst);
        Self::with_id(TextureId(id), size)
    }

    /// Wraps a handle that was allocated by the backend.
    #[must_use]
    pub const fn with_id(id: TextureId, size: Size<u32>) -> Self {
        Self { id, size }
    }

    /// The unique ID of this texture.
    #[must_use]
    pub const fn id(&self) -> TextureId {
        self.id
    }

    /// Returns the size of the texture.
    #[must_use]
    pub const fn size(&self) -> Size<u32> {
        self.size
    }
}

impl From<Texture> for TextureId {
    fn from(texture: Texture) -> Self {
        texture.id
    }
}

impl From<&Texture> for TextureId {
    fn from(texture: &Texture) -> Self {
        texture.id
    }
}
