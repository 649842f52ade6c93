//! RGB pixel values and their foreground/background classification.
use serde::{Deserialize, Serialize};

/// 8-bit RGB colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack `0x00RRGGBB` (any alpha byte is ignored).
    pub const fn from_rgb(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    /// Pack into `0x00RRGGBB`.
    pub const fn to_rgb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn is_black(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }

    pub const fn is_white(self) -> bool {
        self.r == 255 && self.g == 255 && self.b == 255
    }

    /// Rec. 601 luma, rounded.
    pub fn luma(self) -> u8 {
        let y = 0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32;
        y.round().clamp(0.0, 255.0) as u8
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PixelClass {
    Foreground,
    Background,
}

/// How a raw colour is turned into a foreground flag.
///
/// - `ExactBlack`: only pure black `(0, 0, 0)` is foreground.
/// - `LumaBelow(t)`: pixels with luma strictly below `t` are foreground, which
///   tolerates scanned or lossy-compressed drawings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", content = "threshold", rename_all = "snake_case")]
pub enum ForegroundRule {
    #[default]
    ExactBlack,
    LumaBelow(u8),
}

impl ForegroundRule {
    pub fn classify(self, pixel: Pixel) -> PixelClass {
        if self.is_foreground(pixel) {
            PixelClass::Foreground
        } else {
            PixelClass::Background
        }
    }

    #[inline]
    pub fn is_foreground(self, pixel: Pixel) -> bool {
        match self {
            ForegroundRule::ExactBlack => pixel.is_black(),
            ForegroundRule::LumaBelow(t) => pixel.luma() < t,
        }
    }
}
