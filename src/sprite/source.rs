use bitflags::bitflags;
#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::{
    math::{Angle, Point, Size, Unknown, Vector},
    texture::Texture,
};

bitflags! {
    /// Mirrors a sprite along one or both axes. Flipping is applied to the
    /// geometry by inverting the sign of the scale; texture coordinates are
    /// left untouched.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
    pub struct FlipFlags: u8 {
        /// Mirror across the vertical axis through the origin.
        const HORIZONTAL = 0b01;
        /// Mirror across the horizontal axis through the origin.
        const VERTICAL = 0b10;
        /// Mirror across both axes.
        const BOTH = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

impl FlipFlags {
    /// Applies the flip to `scale` by negating the flipped components.
    #[must_use]
    pub fn apply(self, scale: Vector<f32, Unknown>) -> Vector<f32, Unknown> {
        let mut scale = scale;
        if self.contains(Self::HORIZONTAL) {
            scale.x = -scale.x;
        }
        if self.contains(Self::VERTICAL) {
            scale.y = -scale.y;
        }
        scale
    }
}

/// The region of a texture to draw, in texels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SourceRect {
    /// The left edge.
    pub x: f32,
    /// The top edge.
    pub y: f32,
    /// The width.
    pub width: f32,
    /// The height.
    pub height: f32,
}

impl SourceRect {
    /// Returns a new source rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns a rectangle covering all of `texture`.
    #[must_use]
    pub fn entire(texture: &Texture) -> Self {
        let size = texture.size();
        Self::new(0., 0., size.width as f32, size.height as f32)
    }

    /// Returns the top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point<f32, Unknown> {
        Point::new(self.x, self.y)
    }

    /// Returns the width and height.
    #[must_use]
    pub fn size(&self) -> Size<f32, Unknown> {
        Size::new(self.width, self.height)
    }

    /// Returns the four corners clockwise from the top left.
    #[must_use]
    pub fn corners(&self) -> [[f32; 2]; 4] {
        let right = self.x + self.width;
        let bottom = self.y + self.height;
        [
            [self.x, self.y],
            [right, self.y],
            [right, bottom],
            [self.x, bottom],
        ]
    }
}

/// Where and how a sprite is placed on the render target.
///
/// The `origin` is the pivot, in source-rectangle-local texels, that lands on
/// `position` and about which `scale` and `rotation` are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SpriteTransform {
    /// The destination of the origin.
    pub position: Point<f32>,
    /// The pivot, relative to the top-left of the source rectangle.
    pub origin: Point<f32, Unknown>,
    /// Per-axis scale factors.
    pub scale: Vector<f32, Unknown>,
    /// Clockwise rotation (in screen space, where y points down).
    pub rotation: Angle,
}

impl Default for SpriteTransform {
    fn default() -> Self {
        Self {
            position: Point::zero(),
            origin: Point::zero(),
            scale: Vector::new(1., 1.),
            rotation: Angle::zero(),
        }
    }
}

impl SpriteTransform {
    /// Returns an unscaled, unrotated transform placing the top-left of the
    /// sprite at `position`.
    #[must_use]
    pub fn at(position: Point<f32>) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Sets the pivot point.
    #[must_use]
    pub const fn with_origin(mut self, origin: Point<f32, Unknown>) -> Self {
        self.origin = origin;
        self
    }

    /// Sets the scale.
    #[must_use]
    pub const fn with_scale(mut self, scale: Vector<f32, Unknown>) -> Self {
        self.scale = scale;
        self
    }

    /// Sets a uniform scale on both axes.
    #[must_use]
    pub fn with_uniform_scale(self, scale: f32) -> Self {
        self.with_scale(Vector::new(scale, scale))
    }

    /// Sets the rotation.
    #[must_use]
    pub const fn with_rotation(mut self, rotation: Angle) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the rotation, in degrees.
    #[must_use]
    pub fn with_rotation_degrees(self, degrees: f32) -> Self {
        self.with_rotation(Angle::degrees(degrees))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_negates_scale_components() {
        let scale = Vector::new(2., 3.);
        assert_eq!(FlipFlags::empty().apply(scale), Vector::new(2., 3.));
        assert_eq!(FlipFlags::HORIZONTAL.apply(scale), Vector::new(-2., 3.));
        assert_eq!(FlipFlags::VERTICAL.apply(scale), Vector::new(2., -3.));
        assert_eq!(FlipFlags::BOTH.apply(scale), Vector::new(-2., -3.));
    }

    #[test]
    fn flipping_a_negative_scale_restores_it() {
        let scale = Vector::new(-1., 1.);
        assert_eq!(FlipFlags::HORIZONTAL.apply(scale), Vector::new(1., 1.));
    }

    #[test]
    fn source_corners_are_clockwise() {
        let source = SourceRect::new(8., 16., 32., 64.);
        assert_eq!(
            source.corners(),
            [[8., 16.], [40., 16.], [40., 80.], [8., 80.]]
        );
    }

    #[test]
    fn entire_texture() {
        let texture = Texture::new(Size::new(128, 64));
        assert_eq!(
            SourceRect::entire(&texture),
            SourceRect::new(0., 0., 128., 64.)
        );
    }

    #[test]
    fn builder() {
        let transform = SpriteTransform::at(Point::new(4., 5.))
            .with_origin(Point::new(16., 16.))
            .with_uniform_scale(2.)
            .with_rotation_degrees(90.);
        assert_eq!(transform.position, Point::new(4., 5.));
        assert_eq!(transform.origin, Point::new(16., 16.));
        assert_eq!(transform.scale, Vector::new(2., 2.));
        assert_eq!(transform.rotation, Angle::degrees(90.));
    }
}
