use std::{fmt, time::Duration};

use tracing::instrument;

use crate::{
    backend::Backend,
    color::Color,
    event::{EventStatus, InputEvent},
    math::{Angle, Point, Unknown, Vector},
    sprite::{FlipFlags, SourceRect, SpriteBatch, SpriteTransform},
    texture::TextureId,
    Error,
};

/// What the [`SceneStack`] should do after a scene updates.
pub enum SceneTransition {
    /// Keep the stack as it is.
    None,
    /// Place a new scene on top of the current one.
    Push(Box<dyn Scene>),
    /// Remove the current scene.
    Pop,
    /// Swap the current scene for a new one.
    Replace(Box<dyn Scene>),
}

impl Default for SceneTransition {
    fn default() -> Self {
        Self::None
    }
}

impl fmt::Debug for SceneTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Push(_) => f.write_str("Push(..)"),
            Self::Pop => f.write_str("Pop"),
            Self::Replace(_) => f.write_str("Replace(..)"),
        }
    }
}

/// A screen of the game: a title menu, the playing field, a pause overlay.
///
/// Every method has a default that does nothing, so a scene only implements
/// the capabilities it needs.
pub trait Scene {
    /// Advances the scene by `elapsed`. Only the top scene is updated.
    fn update(&mut self, _elapsed: Duration) -> crate::Result<SceneTransition> {
        Ok(SceneTransition::None)
    }

    /// Draws the scene into `frame`. Every scene in the stack is drawn,
    /// bottom first.
    fn draw(&mut self, _frame: &mut Frame<'_>) -> crate::Result<()> {
        Ok(())
    }

    /// Offers an input event to the scene. Returning
    /// [`EventStatus::Processed`] stops the event from reaching the scenes
    /// below.
    fn handle_input(&mut self, _input: &InputEvent) -> crate::Result<EventStatus> {
        Ok(EventStatus::Ignored)
    }
}

/// The recording [`SpriteBatch`] of one [`SceneStack::render`], shared by
/// every scene in the stack.
///
/// When the batch is full, the quads drawn so far are submitted and a new
/// cycle begins before drawing continues, so scenes may draw more quads than
/// the batch's maximum capacity in a single frame.
pub struct Frame<'a> {
    batch: &'a mut SpriteBatch,
    submit: &'a mut dyn FnMut(&SpriteBatch) -> crate::Result<()>,
}

impl<'a> fmt::Debug for Frame<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("batch", &self.batch)
            .finish_non_exhaustive()
    }
}

impl<'a> Frame<'a> {
    /// Draws the `source` region of `texture` placed by `transform`.
    pub fn draw_sprite(
        &mut self,
        texture: TextureId,
        transform: &SpriteTransform,
        source: SourceRect,
        color: Color,
        flip: FlipFlags,
    ) -> crate::Result<()> {
        match self
            .batch
            .draw_sprite(texture, transform, source, color, flip)
        {
            Err(Error::CapacityExceeded { max_quads }) if self.batch.quad_count() > 0 => {
                tracing::debug!(max_quads, "sprite batch full, submitting mid-frame");
                self.flush()?;
                self.batch
                    .draw_sprite(texture, transform, source, color, flip)
            }
            other => other,
        }
    }

    /// Draws the `source` region of `texture` with each part of the transform
    /// passed separately, like [`SpriteBatch::draw`].
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

    /// Ends the current cycle, submits it, and begins the next one.
    pub fn flush(&mut self) -> crate::Result<()> {
        self.batch.end()?;
        (self.submit)(&*self.batch)?;
        self.batch.begin()
    }

    /// The batch being recorded.
    #[must_use]
    pub fn batch(&self) -> &SpriteBatch {
        &*self.batch
    }
}

/// A stack of [`Scene`]s. The top scene receives updates and input first;
/// all scenes are drawn so overlays paint over what lies beneath them.
#[derive(Default)]
pub struct SceneStack {
    scenes: Vec<Box<dyn Scene>>,
}

impl fmt::Debug for SceneStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneStack")
            .field("depth", &self.scenes.len())
            .finish()
    }
}

impl SceneStack {
    /// Returns an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `scene` on top of the stack.
    pub fn push<S: Scene + 'static>(&mut self, scene: S) {
        self.scenes.push(Box::new(scene));
    }

    /// Removes and returns the top scene.
    pub fn pop(&mut self) -> Option<Box<dyn Scene>> {
        self.scenes.pop()
    }

    /// The number of scenes on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Returns true if there are no scenes left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Updates the top scene and applies the transition it asks for.
    #[instrument(name = "SceneStack::update", level = "trace", skip(self))]
    pub fn update(&mut self, elapsed: Duration) -> crate::Result<()> {
        let transition = match self.scenes.last_mut() {
            Some(scene) => scene.update(elapsed)?,
            None => return Ok(()),
        };
        self.apply(transition);
        Ok(())
    }

    /// Offers `input` to each scene from the top down until one processes it.
    pub fn handle_input(&mut self, input: &InputEvent) -> crate::Result<EventStatus> {
        for scene in self.scenes.iter_mut().rev() {
            if scene.handle_input(input)? == EventStatus::Processed {
                return Ok(EventStatus::Processed);
            }
        }
        Ok(EventStatus::Ignored)
    }

    /// Renders one frame: begins `batch`, draws every scene bottom to top,
    /// ends the batch, and submits its runs to `backend`. Cycles that filled
    /// up while drawing have already been submitted by then.
    ///
    /// If a scene fails to draw, the batch is still ended so the next frame
    /// can begin, and the unfinished cycle is not submitted.
    #[instrument(name = "SceneStack::render", level = "trace", skip(self, batch, backend))]
    pub fn render<B: Backend>(
        &mut self,
        batch: &mut SpriteBatch,
        backend: &mut B,
    ) -> crate::Result<()> {
        batch.begin()?;
        let mut submit = |batch: &SpriteBatch| batch.submit(&mut *backend);
        let drawn = {
            let mut frame = Frame {
                batch: &mut *batch,
                submit: &mut submit,
            };
            self.scenes
                .iter_mut()
                .try_for_each(|scene| scene.draw(&mut frame))
        };
        if batch.is_active() {
            batch.end()?;
        }
        drawn?;
        batch.submit(backend)
    }

    fn apply(&mut self, transition: SceneTransition) {
        match transition {
            SceneTransition::None => {}
            SceneTransition::Push(scene) => self.scenes.push(scene),
            SceneTransition::Pop => {
                self.scenes.pop();
            }
            SceneTransition::Replace(scene) => {
                self.scenes.pop();
                self.scenes.push(scene);
            }
        }
        tracing::trace!(depth = self.scenes.len(), "scene stack changed");
    }
}
