//! [`Surface`] implementation on a plotters drawing area (SVG or bitmap backends).

use anyhow::{Result, anyhow};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};

use super::surface::{CornerRadii, DrawStyle, HAlign, Surface, TextAlign, VAlign, rounded_rect_path};
use crate::layout::{Point, Rect};
use crate::style::Rgba;

/// Straight pieces per rounded corner.
const ARC_SEGMENTS: usize = 8;

pub fn rgba_color(c: Rgba) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, c.alpha_f64())
}

/// Filled style for shapes.
pub fn fill_style(c: Rgba) -> ShapeStyle {
    rgba_color(c).filled()
}

/// Stroke style; plotters only takes whole-pixel widths.
pub fn line_style(c: Rgba, weight: f64) -> ShapeStyle {
    rgba_color(c).stroke_width(weight.round().max(1.0) as u32)
}

fn anchor(align: TextAlign) -> Pos {
    let h = match align.h {
        HAlign::Left => HPos::Left,
        HAlign::Center => HPos::Center,
        HAlign::Right => HPos::Right,
    };
    let v = match align.v {
        VAlign::Top => VPos::Top,
        VAlign::Center => VPos::Center,
        VAlign::Baseline | VAlign::Bottom => VPos::Bottom,
    };
    Pos::new(h, v)
}

fn px(p: Point) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

pub struct PlottersSurface<'a, DB: DrawingBackend> {
    area: &'a DrawingArea<DB, Shift>,
    style: DrawStyle,
}

impl<'a, DB: DrawingBackend> PlottersSurface<'a, DB> {
    pub fn new(area: &'a DrawingArea<DB, Shift>) -> Self {
        Self {
            area,
            style: DrawStyle::default(),
        }
    }
}

impl<DB: DrawingBackend> Surface for PlottersSurface<'_, DB> {
    fn size(&self) -> (f64, f64) {
        let (w, h) = self.area.dim_in_pixel();
        (f64::from(w), f64::from(h))
    }

    fn style(&self) -> DrawStyle {
        self.style
    }

    fn set_style(&mut self, style: DrawStyle) {
        self.style = style;
    }

    fn background(&mut self, color: Rgba) -> Result<()> {
        self.area
            .fill(&rgba_color(color))
            .map_err(|e| anyhow!("{:?}", e))
    }

    fn rect(&mut self, rect: Rect, radii: CornerRadii) -> Result<()> {
        let outline: Vec<(i32, i32)> = rounded_rect_path(rect, radii, ARC_SEGMENTS)
            .into_iter()
            .map(px)
            .collect();

        if let Some(fill) = self.style.fill {
            self.area
                .draw(&Polygon::new(outline.clone(), fill_style(fill)))
                .map_err(|e| anyhow!("{:?}", e))?;
        }
        if let Some(stroke) = self.style.stroke
            && self.style.stroke_weight > 0.0
        {
            let mut closed = outline;
            if let Some(first) = closed.first().copied() {
                closed.push(first);
            }
            self.area
                .draw(&PathElement::new(closed, line_style(stroke, self.style.stroke_weight)))
                .map_err(|e| anyhow!("{:?}", e))?;
        }
        Ok(())
    }

    fn text(&mut self, text: &str, at: Point, size: f64, align: TextAlign) -> Result<()> {
        let Some(color) = self.style.fill else {
            return Ok(());
        };
        if text.is_empty() {
            return Ok(());
        }
        let color = rgba_color(color);
        let font = FontDesc::new(FontFamily::SansSerif, size, FontStyle::Normal);
        let style = font.color(&color).pos(anchor(align));
        self.area
            .draw(&Text::new(text.to_string(), px(at), style))
            .map_err(|e| anyhow!("{:?}", e))
    }
}
