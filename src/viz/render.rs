//! Paints the chart onto any [`Surface`].
//!
//! Rendering is a pure read of the chart: calling [`render_chart`] twice on the
//! same state issues the same drawing calls.

use anyhow::Result;

use super::surface::{CornerRadii, Surface, TextAlign};
use super::text::{line_height, wrap_text_to_width};
use crate::chart::BottleChart;
use crate::config::ChartConfig;
use crate::layout::{Cell, Point, Rect};
use crate::models::{BottleSlot, Period};
use crate::scale::ratio;
use crate::style;

const CAP_RADII: CornerRadii = CornerRadii::new(6.0, 6.0, 2.0, 2.0);
const BODY_RADIUS: f64 = 18.0;
const SHADE_WIDTH: f64 = 6.0;

const HEADER_X: f64 = 55.0;
const HEADER_WRAP: f64 = 700.0;

/// Part rectangles of one bottle, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BottleShape {
    pub cap: Rect,
    pub neck: Rect,
    pub body: Rect,
    /// `None` when the bottle is empty.
    pub water: Option<Rect>,
    pub band: Rect,
    pub shades: [Rect; 2],
}

impl BottleShape {
    /// Lay out a bottle of `width` x `height` centred on `center`, filled to `fill_ratio`.
    pub fn new(center: Point, width: f64, height: f64, fill_ratio: f64) -> Self {
        let body_w = width * 0.75;
        let neck_w = body_w * 0.4;
        let cap_h = height * 0.06;
        let neck_h = height * 0.12;
        let body_h = height - neck_h - cap_h;
        let y_top = center.y - height / 2.0;
        let body_x = center.x - body_w / 2.0;
        let body_y = y_top + cap_h + neck_h;

        let water_h = body_h * fill_ratio.clamp(0.0, 1.0);
        let water = (water_h > 0.0)
            .then(|| Rect::new(body_x, body_y + body_h - water_h, body_w, water_h));

        let band_h = body_h * 0.34;
        let band_y = body_y + body_h * 0.45 - band_h / 2.0;

        Self {
            cap: Rect::new(center.x - neck_w / 2.0, y_top, neck_w, cap_h),
            neck: Rect::new(center.x - neck_w / 2.0, y_top + cap_h, neck_w, neck_h),
            body: Rect::new(body_x, body_y, body_w, body_h),
            water,
            band: Rect::new(body_x, band_y, body_w, band_h),
            shades: [
                Rect::new(body_x, band_y, SHADE_WIDTH, band_h),
                Rect::new(body_x + body_w - SHADE_WIDTH, band_y, SHADE_WIDTH, band_h),
            ],
        }
    }
}

/// Draw one bottle glyph.
///
/// Water goes down before the outline so the stroke sits on top of it.
pub fn render_glyph<S: Surface + ?Sized>(
    surface: &mut S,
    center: Point,
    width: f64,
    height: f64,
    fill_ratio: f64,
) -> Result<()> {
    let shape = BottleShape::new(center, width, height, fill_ratio);

    surface.no_stroke();
    surface.fill(style::CAP);
    surface.rect(shape.cap, CAP_RADII)?;

    surface.fill(style::NECK);
    surface.rect(shape.neck, CornerRadii::SQUARE)?;

    if let Some(water) = shape.water {
        surface.no_stroke();
        surface.fill(style::WATER);
        surface.rect(water, CornerRadii::new(0.0, 0.0, BODY_RADIUS, BODY_RADIUS))?;
    }

    surface.no_fill();
    surface.stroke(style::OUTLINE);
    surface.stroke_weight(2.0);
    surface.rect(shape.body, CornerRadii::uniform(BODY_RADIUS))?;

    surface.fill(style::BAND_FILL);
    surface.stroke(style::BAND_STROKE);
    surface.stroke_weight(1.5);
    surface.rect(shape.band, CornerRadii::SQUARE)?;

    surface.no_stroke();
    surface.fill(style::BAND_SHADE);
    for shade in shape.shades {
        surface.rect(shade, CornerRadii::SQUARE)?;
    }
    Ok(())
}

/// Country name and rounded millimetres under the bottle in `cell`.
pub fn render_label<S: Surface + ?Sized>(surface: &mut S, cell: &Cell, slot: &BottleSlot) -> Result<()> {
    const SIZE: f64 = 12.0;
    let y = cell.center.y + cell.glyph_height / 2.0 + 8.0;

    surface.no_stroke();
    surface.fill(style::VALUE_TEXT);
    surface.text(&slot.country, Point::new(cell.center.x, y), SIZE, TextAlign::CENTER_TOP)?;
    if slot.fill_mm.is_finite() {
        let mm = format!("{} mm", slot.fill_mm.round() as i64);
        surface.text(&mm, Point::new(cell.center.x, y + 14.0), SIZE, TextAlign::CENTER_TOP)?;
    }
    Ok(())
}

/// Horizontal position of label `i` of `count` across `[left, right]`.
pub fn strip_position(i: usize, count: usize, left: f64, right: f64) -> f64 {
    let t = if count <= 1 {
        0.5
    } else {
        i as f64 / (count - 1) as f64
    };
    left + t * (right - left)
}

/// Period labels evenly spaced across the grid width; the selected one is larger and darker.
pub fn render_period_strip<S: Surface + ?Sized>(
    surface: &mut S,
    selected_index: usize,
    margin: f64,
) -> Result<()> {
    let (w, h) = surface.size();
    let y = h - 24.0;
    let (left, right) = (margin, w - margin);

    surface.no_stroke();
    for (i, period) in Period::ALL.iter().enumerate() {
        let active = i == selected_index;
        surface.fill(if active {
            style::PERIOD_ACTIVE
        } else {
            style::PERIOD_IDLE
        });
        let size = if active { 14.0 } else { 12.0 };
        let x = strip_position(i, Period::ALL.len(), left, right);
        surface.text(period.label(), Point::new(x, y), size, TextAlign::CENTER)?;
    }
    Ok(())
}

/// Title, wrapped subtitle and the scale note.
pub fn render_header<S: Surface + ?Sized>(surface: &mut S, config: &ChartConfig) -> Result<()> {
    surface.no_stroke();
    surface.fill(style::HEADER_TEXT);
    surface.text(&config.title, Point::new(HEADER_X, 50.0), 32.0, TextAlign::LEFT_BASELINE)?;

    let mut y = 70.0;
    for line in wrap_text_to_width(&config.subtitle, 20.0, HEADER_WRAP) {
        surface.text(&line, Point::new(HEADER_X, y), 20.0, TextAlign::LEFT_TOP)?;
        y += line_height(20.0);
    }

    let mut y = 130.0;
    for line in wrap_text_to_width(&config.capacity_text(), 15.0, HEADER_WRAP) {
        surface.text(&line, Point::new(HEADER_X, y), 15.0, TextAlign::LEFT_TOP)?;
        y += line_height(15.0);
    }
    Ok(())
}

/// Draw the whole chart from its current state.
pub fn render_chart<S: Surface + ?Sized>(surface: &mut S, chart: &BottleChart) -> Result<()> {
    let config = chart.config();
    surface.background(style::BACKGROUND)?;
    render_header(surface, config)?;

    let scale_max = chart.scale_max();
    for (cell, slot) in chart.cells().iter().zip(chart.bottles()) {
        let fill_ratio = ratio(slot.fill_mm, scale_max);
        render_glyph(surface, cell.center, cell.glyph_width, cell.glyph_height, fill_ratio)?;
        if config.show_values {
            render_label(surface, cell, slot)?;
        }
    }

    render_period_strip(surface, chart.state().selector.selected_index(), config.grid.margin)
}
