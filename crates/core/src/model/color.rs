use serde::{Serialize, Serializer};
use std::fmt;

/// 24-bit RGB color, rendered as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb(u32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x000000);
    pub const WHITE: Rgb = Rgb(0xffffff);

    /// Creates a color from a `0xRRGGBB` literal. Bits above 24 are dropped.
    #[must_use]
    pub const fn new(hex: u32) -> Self {
        Self(hex & 0x00ff_ffff)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    #[must_use]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    /// Channels as floats in `[0, 1]`.
    #[must_use]
    pub fn to_unit(self) -> [f32; 3] {
        [
            f32::from(self.r()) / 255.0,
            f32::from(self.g()) / 255.0,
            f32::from(self.b()) / 255.0,
        ]
    }

    /// Builds a color from unit channels, clamping each to `[0, 1]`.
    #[must_use]
    pub fn from_unit(channels: [f32; 3]) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        Self::new((quantize(channels[0]) << 16) | (quantize(channels[1]) << 8) | quantize(channels[2]))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
