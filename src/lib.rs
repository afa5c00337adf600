//! Sprite batching and scene stacking for 2d games.
//!
//! A [`SpriteBatch`](sprite::SpriteBatch) collects textured quads between
//! `begin` and `end`, grouping consecutive draws that share a texture into
//! [`BatchRun`](sprite::BatchRun)s. Once ended, the runs are handed to a
//! [`Backend`] one draw call at a time. The batch never talks to the GPU
//! itself.

#![forbid(unsafe_code)]
#![warn(
    clippy::cargo,
    missing_docs,
    clippy::nursery,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms,
)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::too_many_arguments,
)]

/// Backends that consume finished batches.
pub mod backend;
mod color;
/// Construction-time configuration for [`SpriteBatch`](sprite::SpriteBatch).
pub mod config;
mod error;
/// Input events delivered to scenes.
pub mod event;
/// Math types for 2d geometry.
pub mod math;
/// The [`Scene`](scene::Scene) capability trait and the stack that drives it.
pub mod scene;
/// Types for batching sprites.
pub mod sprite;
/// Types for identifying textures.
pub mod texture;

pub use self::{
    backend::{Backend, RecordingBackend},
    color::Color,
    config::BatchConfig,
    error::Error,
};

/// A collection of commonly used exports provided by this crate.
pub mod prelude {
    pub use super::{
        backend::{Backend, RecordedCall, RecordingBackend},
        config::BatchConfig,
        event::{ElementState, Event, EventStatus, InputEvent, MouseButton},
        math::{Angle, Point, Raw, Size, Unknown, Vector},
        scene::{Frame, Scene, SceneStack, SceneTransition},
        sprite::{BatchRun, DrawCall, FlipFlags, SourceRect, SpriteBatch, SpriteTransform, Vertex},
        texture::{Texture, TextureId},
        Color, Error,
    };
}

/// Alias for [`std::result::Result`] where the error type is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
