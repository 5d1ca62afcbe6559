//! Grid layout: where each bottle sits on the canvas.

use crate::models::SLOT_COUNT;
use serde::{Deserialize, Serialize};

/// Grid shape and the padding around it, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    pub cols: usize,
    pub rows: usize,
    pub margin: f64,
    /// Space above the grid, below the top margin (header text lives here).
    pub top_pad: f64,
    /// Space below the grid (value labels and the period strip).
    pub bottom_pad: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            cols: 5,
            rows: 2,
            margin: 40.0,
            top_pad: 120.0,
            bottom_pad: 110.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// True when the interiors intersect; shared edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        const EPS: f64 = 1e-9;
        self.x < other.right() - EPS
            && other.x < self.right() - EPS
            && self.y < other.bottom() - EPS
            && other.y < self.bottom() - EPS
    }
}

/// Geometry of one grid cell and the bottle drawn in it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub slot: usize,
    pub col: usize,
    pub row: usize,
    pub bounds: Rect,
    pub center: Point,
    pub glyph_width: f64,
    pub glyph_height: f64,
}

/// Region the whole grid occupies.
pub fn grid_area(canvas_w: f64, canvas_h: f64, grid: &GridSpec) -> Rect {
    Rect::new(
        grid.margin,
        grid.margin + grid.top_pad,
        canvas_w - grid.margin * 2.0,
        canvas_h - grid.bottom_pad - grid.margin - grid.top_pad,
    )
}

/// Cells for every slot, row-major: slot `i` sits at `(i % cols, i / cols)`.
///
/// Returns `SLOT_COUNT` cells when the grid has room for them, fewer otherwise.
/// A zero-column or zero-row grid yields no cells.
pub fn cell_geometry(canvas_w: f64, canvas_h: f64, grid: &GridSpec) -> Vec<Cell> {
    if grid.cols == 0 || grid.rows == 0 {
        return Vec::new();
    }
    let area = grid_area(canvas_w, canvas_h, grid);
    let cell_w = area.w / grid.cols as f64;
    let cell_h = area.h / grid.rows as f64;
    let count = SLOT_COUNT.min(grid.cols * grid.rows);

    (0..count)
        .map(|slot| {
            let col = slot % grid.cols;
            let row = slot / grid.cols;
            let bounds = Rect::new(
                area.x + col as f64 * cell_w,
                area.y + row as f64 * cell_h,
                cell_w,
                cell_h,
            );
            Cell {
                slot,
                col,
                row,
                bounds,
                center: bounds.center(),
                glyph_width: cell_w * 0.9,
                glyph_height: cell_h * 0.8,
            }
        })
        .collect()
}
