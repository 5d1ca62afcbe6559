//! Headless surface that records drawing calls instead of painting pixels.

use anyhow::Result;

use super::surface::{CornerRadii, DrawStyle, Surface, TextAlign};
use crate::layout::{Point, Rect};
use crate::style::Rgba;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Background(Rgba),
    Rect {
        rect: Rect,
        radii: CornerRadii,
        style: DrawStyle,
    },
    Text {
        text: String,
        at: Point,
        size: f64,
        align: TextAlign,
        color: Option<Rgba>,
    },
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    style: DrawStyle,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            style: DrawStyle::default(),
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }

    /// Recorded rectangles in drawing order.
    pub fn rects(&self) -> impl Iterator<Item = (&Rect, &CornerRadii, &DrawStyle)> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Rect { rect, radii, style } => Some((rect, radii, style)),
            _ => None,
        })
    }

    /// Recorded text runs in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point, f64, Option<Rgba>)> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text {
                text,
                at,
                size,
                color,
                ..
            } => Some((text.as_str(), *at, *size, *color)),
            _ => None,
        })
    }
}

/// Issue `calls` again on `target`, restoring the style each call was recorded with.
pub fn replay<S: Surface + ?Sized>(calls: &[DrawCall], target: &mut S) -> Result<()> {
    for call in calls {
        match call {
            DrawCall::Background(color) => target.background(*color)?,
            DrawCall::Rect { rect, radii, style } => {
                target.set_style(*style);
                target.rect(*rect, *radii)?;
            }
            DrawCall::Text {
                text,
                at,
                size,
                align,
                color,
            } => {
                let mut style = target.style();
                style.fill = *color;
                target.set_style(style);
                target.text(text, *at, *size, *align)?;
            }
        }
    }
    Ok(())
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn style(&self) -> DrawStyle {
        self.style
    }

    fn set_style(&mut self, style: DrawStyle) {
        self.style = style;
    }

    fn background(&mut self, color: Rgba) -> Result<()> {
        self.calls.push(DrawCall::Background(color));
        Ok(())
    }

    fn rect(&mut self, rect: Rect, radii: CornerRadii) -> Result<()> {
        self.calls.push(DrawCall::Rect {
            rect,
            radii,
            style: self.style,
        });
        Ok(())
    }

    fn text(&mut self, text: &str, at: Point, size: f64, align: TextAlign) -> Result<()> {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            at,
            size,
            align,
            color: self.style.fill,
        });
        Ok(())
    }
}
