#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// A type representing a width and height.
pub type Size<T = f32, Unit = Raw> = euclid::Size2D<T, Unit>;
/// A type representing an x and y coordinate.
pub type Point<T = f32, Unit = Raw> = euclid::Point2D<T, Unit>;
/// A type representing a vector with magnitudes x and y.
pub type Vector<T = f32, Unit = Raw> = euclid::Vector2D<T, Unit>;
/// A type representing a [`Point`] and [`Size`].
pub type Rect<T = f32, Unit = Raw> = euclid::Rect<T, Unit>;
/// A type representing an angle of measurement.
pub type Angle = euclid::Angle<f32>;

/// A unit representing physical pixels on a render target.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Raw;

/// A unit for unitless quantities such as scale factors.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Unknown;

/// Rotates `point` around the origin by the precomputed `sin` and `cos` of an
/// angle.
#[must_use]
pub fn rotate<U>(point: Point<f32, U>, sin: f32, cos: f32) -> Point<f32, U> {
    Point::new(
        point.x * cos - point.y * sin,
        point.x * sin + point.y * cos,
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn rotate_quarter_turn() {
        let (sin, cos) = Angle::degrees(90.).radians.sin_cos();
        let rotated = rotate(Point::<f32, Raw>::new(1., 0.), sin, cos);
        assert_relative_eq!(rotated.x, 0., epsilon = 1e-6);
        assert_relative_eq!(rotated.y, 1., epsilon = 1e-6);
    }

    #[test]
    fn rotate_zero_is_exact() {
        let (sin, cos) = Angle::degrees(0.).radians.sin_cos();
        let point = Point::<f32, Raw>::new(12.5, -3.25);
        assert_eq!(rotate(point, sin, cos), point);
    }
}
