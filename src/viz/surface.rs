//! The drawing capability the renderer paints through.
//!
//! Style is stateful in the manner of a sketching canvas: set fill/stroke/weight,
//! then issue shapes. Text is painted with the current fill.

use anyhow::Result;

use crate::layout::{Point, Rect};
use crate::style::Rgba;

/// Per-corner radii: top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    pub tl: f64,
    pub tr: f64,
    pub br: f64,
    pub bl: f64,
}

impl CornerRadii {
    pub const SQUARE: CornerRadii = CornerRadii::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(tl: f64, tr: f64, br: f64, bl: f64) -> Self {
        Self { tl, tr, br, bl }
    }

    pub const fn uniform(r: f64) -> Self {
        Self::new(r, r, r, r)
    }

    /// Radii limited to half the shorter side of a `w` x `h` rectangle, never negative.
    pub fn clamped(&self, w: f64, h: f64) -> Self {
        let max = (w.abs().min(h.abs()) / 2.0).max(0.0);
        let c = |r: f64| r.clamp(0.0, max);
        Self::new(c(self.tl), c(self.tr), c(self.br), c(self.bl))
    }

    pub fn is_square(&self) -> bool {
        self.tl <= 0.0 && self.tr <= 0.0 && self.br <= 0.0 && self.bl <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Baseline,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextAlign {
    pub h: HAlign,
    pub v: VAlign,
}

impl TextAlign {
    pub const LEFT_BASELINE: TextAlign = TextAlign::new(HAlign::Left, VAlign::Baseline);
    pub const LEFT_TOP: TextAlign = TextAlign::new(HAlign::Left, VAlign::Top);
    pub const CENTER_TOP: TextAlign = TextAlign::new(HAlign::Center, VAlign::Top);
    pub const CENTER: TextAlign = TextAlign::new(HAlign::Center, VAlign::Center);

    pub const fn new(h: HAlign, v: VAlign) -> Self {
        Self { h, v }
    }
}

/// Current paint state. `None` disables fill or stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawStyle {
    pub fill: Option<Rgba>,
    pub stroke: Option<Rgba>,
    pub stroke_weight: f64,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            fill: Some(Rgba::gray(255)),
            stroke: Some(Rgba::gray(0)),
            stroke_weight: 1.0,
        }
    }
}

pub trait Surface {
    /// Logical size `(width, height)`.
    fn size(&self) -> (f64, f64);

    fn style(&self) -> DrawStyle;

    fn set_style(&mut self, style: DrawStyle);

    /// Clear the whole surface to `color`.
    fn background(&mut self, color: Rgba) -> Result<()>;

    /// Rectangle with the current fill and stroke.
    fn rect(&mut self, rect: Rect, radii: CornerRadii) -> Result<()>;

    /// One line of text in the current fill color at `size` units.
    fn text(&mut self, text: &str, at: Point, size: f64, align: TextAlign) -> Result<()>;

    fn fill(&mut self, color: Rgba) {
        let mut s = self.style();
        s.fill = Some(color);
        self.set_style(s);
    }

    fn no_fill(&mut self) {
        let mut s = self.style();
        s.fill = None;
        self.set_style(s);
    }

    fn stroke(&mut self, color: Rgba) {
        let mut s = self.style();
        s.stroke = Some(color);
        self.set_style(s);
    }

    fn no_stroke(&mut self) {
        let mut s = self.style();
        s.stroke = None;
        self.set_style(s);
    }

    fn stroke_weight(&mut self, weight: f64) {
        let mut s = self.style();
        s.stroke_weight = weight;
        self.set_style(s);
    }
}

/// Outline of a rounded rectangle as a closed polygon (first point not repeated).
///
/// Each rounded corner is approximated with `segments` straight pieces; square
/// corners contribute a single point.
pub fn rounded_rect_path(rect: Rect, radii: CornerRadii, segments: usize) -> Vec<Point> {
    use std::f64::consts::{FRAC_PI_2, PI};

    let r = radii.clamped(rect.w, rect.h);
    let segments = segments.max(1);
    let mut pts = Vec::with_capacity(4 * (segments + 1));

    // (corner radius, arc centre, start angle); angles in screen space (y down).
    let corners = [
        (r.tl, Point::new(rect.x + r.tl, rect.y + r.tl), PI),
        (r.tr, Point::new(rect.right() - r.tr, rect.y + r.tr), PI + FRAC_PI_2),
        (r.br, Point::new(rect.right() - r.br, rect.bottom() - r.br), 0.0),
        (r.bl, Point::new(rect.x + r.bl, rect.bottom() - r.bl), FRAC_PI_2),
    ];
    for (radius, c, start) in corners {
        if radius <= 0.0 {
            pts.push(c);
            continue;
        }
        for i in 0..=segments {
            let a = start + FRAC_PI_2 * (i as f64 / segments as f64);
            pts.push(Point::new(c.x + radius * a.cos(), c.y + radius * a.sin()));
        }
    }
    pts
}
