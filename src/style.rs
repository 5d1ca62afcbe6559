//! Colors and the fixed palette of the bottle chart.
//!
//! Values follow the usual sketching conventions: gray levels and alpha are
//! 0..=255, so `Rgba::gray_a(255, 170)` is a translucent white.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Opaque gray level.
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v, 255)
    }

    /// Gray level with alpha.
    pub const fn gray_a(v: u8, a: u8) -> Self {
        Self::new(v, v, v, a)
    }

    /// Alpha as a 0..=1 fraction.
    pub fn alpha_f64(&self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

pub const BACKGROUND: Rgba = Rgba::gray(245);
pub const HEADER_TEXT: Rgba = Rgba::gray(0);
pub const CAP: Rgba = Rgba::rgb(30, 120, 200);
pub const NECK: Rgba = Rgba::gray(220);
pub const WATER: Rgba = Rgba::new(70, 150, 220, 220);
pub const OUTLINE: Rgba = Rgba::gray(50);
pub const BAND_FILL: Rgba = Rgba::gray_a(255, 170);
pub const BAND_STROKE: Rgba = Rgba::gray_a(140, 180);
pub const BAND_SHADE: Rgba = Rgba::new(0, 0, 0, 20);
pub const VALUE_TEXT: Rgba = Rgba::gray(30);
pub const PERIOD_ACTIVE: Rgba = Rgba::gray(20);
pub const PERIOD_IDLE: Rgba = Rgba::gray(90);
