use approx::relative_eq;
use palette::{rgb::Srgba, Component, Shade, Srgb};
#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// A RGBA color with f32 components.
#[derive(Default, Clone, Debug, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Color {
    red: f32,
    green: f32,
    blue: f32,
    alpha: f32,
}

impl<U: Component + palette::IntoComponent<f32>> From<Srgba<U>> for Color {
    fn from(color: Srgba<U>) -> Self {
        let color = color.into_format::<_, f32>();
        Self::new(
            color.color.red,
            color.color.green,
            color.color.blue,
            color.alpha,
        )
    }
}

impl<U: Component + palette::IntoComponent<f32>> From<Srgb<U>> for Color {
    fn from(color: Srgb<U>) -> Self {
        let color = color.into_format::<f32>();
        Self::new(color.red, color.green, color.blue, 1.)
    }
}

impl From<Color> for Srgba {
    fn from(color: Color) -> Self {
        Self::new(color.red, color.green, color.blue, color.alpha)
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        color.rgba()
    }
}

impl From<[f32; 4]> for Color {
    fn from([red, green, blue, alpha]: [f32; 4]) -> Self {
        Self::new(red, green, blue, alpha)
    }
}

impl Color {
    /// Returns a new color from its components, each in the range `0.0..=1.0`.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Lightens the color by `amount`.
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        let color: Srgba = self.into();
        let linear = color.into_linear();
        Srgba::from_linear(linear.lighten(amount)).into()
    }

    /// Darkens the color by `amount`.
    #[must_use]
    pub fn darken(self, amount: f32) -> Self {
        let color: Srgba = self.into();
        let linear = color.into_linear();
        Srgba::from_linear(linear.darken(amount)).into()
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> f32 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> f32 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> f32 {
        self.blue
    }

    /// Returns the alpha component.
    #[must_use]
    pub const fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Returns the color as an f32 array.
    #[must_use]
    pub const fn rgba(&self) -> [f32; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Returns if the color has a non-zero alpha value.
    #[must_use]
    pub fn visible(&self) -> bool {
        !relative_eq!(self.alpha, 0.)
    }

    /// Returns a new color using red, green, and blue from `self` and the
    /// parameter `alpha`.
    #[must_use]
    pub const fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0., 0., 0., 1.);
    /// Opaque pure blue.
    pub const BLUE: Self = Self::new(0., 0., 1., 1.);
    /// Fully transparent black.
    pub const CLEAR_BLACK: Self = Self::new(0., 0., 0., 0.);
    /// Fully transparent white.
    pub const CLEAR_WHITE: Self = Self::new(1., 1., 1., 0.);
    /// Opaque cornflower blue, the traditional clear color.
    pub const CORNFLOWERBLUE: Self = Self::new(100. / 255., 149. / 255., 237. / 255., 1.);
    /// Opaque mid gray.
    pub const GRAY: Self = Self::new(128. / 255., 128. / 255., 128. / 255., 1.);
    /// Opaque pure green.
    pub const LIME: Self = Self::new(0., 1., 0., 1.);
    /// Opaque pure red.
    pub const RED: Self = Self::new(1., 0., 0., 1.);
    /// Opaque white. Drawing with white leaves the texture's colors unchanged.
    pub const WHITE: Self = Self::new(1., 1., 1., 1.);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::new(1., 1., 0., 1.);
}
