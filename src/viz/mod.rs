//! Visualization: render the bottle chart to **SVG** or **PNG**, or onto any [`Surface`].
//!
//! - [`render`]: the glyph, label, header and period-strip painters
//! - [`surface`]: the drawing capability the painters depend on
//! - [`recording`]: a headless surface for tests
//! - [`plotters_adapter`]: the surface over plotters drawing areas

pub mod plotters_adapter;
pub mod recording;
pub mod render;
pub mod surface;
pub mod text;

pub use recording::{DrawCall, RecordingSurface, replay};
pub use render::{render_chart, render_glyph, render_label, render_period_strip};
pub use surface::{CornerRadii, DrawStyle, HAlign, Surface, TextAlign, VAlign};

use crate::chart::BottleChart;
use anyhow::{Context, Result, anyhow, bail};
use log::{debug, info};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use plotters_adapter::PlottersSurface;

/// Fonts tried for bitmap text when no font is configured.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Path of the font registered for "sans-serif", if any. Registration runs once.
static REGISTERED_FONT: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Register a "sans-serif" font for the `ab_glyph` text path, which doesn't discover OS fonts.
///
/// `preferred` is tried first, then the system candidates. Only the first call
/// has any effect. Returns the font in use.
pub fn ensure_fonts_registered(preferred: Option<&Path>) -> Option<&'static Path> {
    REGISTERED_FONT
        .get_or_init(|| {
            let candidates = preferred
                .map(Path::to_path_buf)
                .into_iter()
                .chain(SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from));
            for path in candidates {
                let Ok(bytes) = std::fs::read(&path) else {
                    continue;
                };
                // plotters keeps font data for the life of the process.
                let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
                if plotters::style::register_font("sans-serif", plotters::style::FontStyle::Normal, bytes).is_ok() {
                    info!("registered font {}", path.display());
                    return Some(path);
                }
                debug!("{} is not a usable font", path.display());
            }
            None
        })
        .as_deref()
}

/// Render the chart's current state to `out_path`: `.svg` as SVG, anything else as PNG.
pub fn render_to_file<P: AsRef<Path>>(chart: &BottleChart, out_path: P) -> Result<()> {
    let out_path = out_path.as_ref();
    let config = chart.config();
    let size = (config.width, config.height);
    let font = ensure_fonts_registered(config.font_path.as_deref());

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(out_path, size).into_drawing_area();
        draw_on(&root, chart)?;
    } else {
        if font.is_none() {
            bail!("no font available for bitmap text; set `font_path` in the config");
        }
        let root = BitMapBackend::new(out_path, size).into_drawing_area();
        draw_on(&root, chart)?;
    }
    info!(
        "rendered {} to {}",
        chart.selected_period(),
        out_path.display()
    );
    Ok(())
}

/// Render the chart's current state to an in-memory SVG document.
pub fn render_to_svg_string(chart: &BottleChart) -> Result<String> {
    let config = chart.config();
    ensure_fonts_registered(config.font_path.as_deref());
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (config.width, config.height))
            .into_drawing_area();
        draw_on(&root, chart)?;
    }
    Ok(buf)
}

/// Helper that draws to any Plotters backend.
fn draw_on<DB>(root: &DrawingArea<DB, Shift>, chart: &BottleChart) -> Result<()>
where
    DB: DrawingBackend,
{
    let mut surface = PlottersSurface::new(root);
    render_chart(&mut surface, chart).context("drawing chart")?;
    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
