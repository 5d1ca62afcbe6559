/*!
 * Desktop viewer for rain-bottles.
 *
 * Shows the bottle chart on a fixed 800x900 canvas with a six-step period
 * slider beneath it. Usage: `bottles-gui [config.json]`.
 *
 * Platform support: Windows, macOS, Linux
 */

use anyhow::Result;
use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Rounding, Stroke, Vec2};
use log::{error, info};
use std::path::PathBuf;

use rain_bottles::layout::{Point, Rect};
use rain_bottles::style::Rgba;
use rain_bottles::viz::{
    self, CornerRadii, DrawCall, DrawStyle, HAlign, RecordingSurface, Surface, TextAlign, VAlign,
};
use rain_bottles::{BottleChart, ChartConfig, Period, storage};

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let app = BottlesApp::new(config_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([840.0, 1000.0])
            .with_min_inner_size([400.0, 300.0])
            .with_title("Rain bottles"),
        ..Default::default()
    };

    eframe::run_native(
        "Rain bottles",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}

/// Main application state
struct BottlesApp {
    chart: Option<BottleChart>,
    /// Drawing calls of the last render, replayed every frame.
    frame_calls: Vec<DrawCall>,
    last_screen: Option<Vec2>,
    status_message: String,
    error_message: String,
}

impl BottlesApp {
    fn new(config_path: Option<PathBuf>) -> Self {
        match load_chart(config_path) {
            Ok(chart) => Self {
                chart: Some(chart),
                frame_calls: Vec::new(),
                last_screen: None,
                status_message: String::new(),
                error_message: String::new(),
            },
            Err(err) => {
                error!("{err:#}");
                Self {
                    chart: None,
                    frame_calls: Vec::new(),
                    last_screen: None,
                    status_message: String::new(),
                    error_message: format!("Failed to load data: {err:#}"),
                }
            }
        }
    }

    /// Re-render into the cache when the chart asked for it.
    fn refresh(&mut self) {
        let Some(chart) = self.chart.as_mut() else {
            return;
        };
        if !chart.take_redraw() {
            return;
        }
        let cfg = chart.config();
        let mut recorder = RecordingSurface::new(f64::from(cfg.width), f64::from(cfg.height));
        match viz::render_chart(&mut recorder, chart) {
            Ok(()) => self.frame_calls = recorder.into_calls(),
            Err(err) => self.error_message = format!("Render failed: {err:#}"),
        }
    }

    fn save_image(&mut self) {
        let Some(chart) = self.chart.as_ref() else {
            return;
        };
        let Some(path) = rfd::FileDialog::new()
            .set_directory(dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .set_file_name(format!("bottles_{}.svg", chart.selected_period().file_stem()))
            .add_filter("SVG", &["svg"])
            .add_filter("PNG", &["png"])
            .save_file()
        else {
            return;
        };
        match viz::render_to_file(chart, &path) {
            Ok(()) => {
                self.status_message = format!("Saved {}", path.display());
                self.error_message.clear();
            }
            Err(err) => {
                self.error_message = format!("Failed to save image: {err:#}");
                self.status_message.clear();
            }
        }
    }
}

fn load_chart(config_path: Option<PathBuf>) -> Result<BottleChart> {
    let config = match config_path {
        Some(path) => ChartConfig::from_json_file(path)?,
        None => ChartConfig::default(),
    };
    let store = storage::load_all(&config)?;
    info!("loaded {} periods", Period::ALL.len());
    Ok(BottleChart::new(store, config))
}

impl eframe::App for BottlesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let screen = ctx.screen_rect().size();
        if self.last_screen.is_some_and(|s| s != screen)
            && let Some(chart) = self.chart.as_mut()
        {
            let _ = chart.on_resize();
        }
        self.last_screen = Some(screen);
        self.refresh();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                let Some(chart) = self.chart.as_mut() else {
                    ui.colored_label(Color32::RED, &self.error_message);
                    return;
                };
                let (w, h) = (chart.config().width as f32, chart.config().height as f32);
                let margin = chart.config().grid.margin as f32;

                let (response, painter) =
                    ui.allocate_painter(Vec2::new(w, h), egui::Sense::hover());
                let mut surface = EguiSurface::new(&painter, response.rect.min, (w, h));
                if let Err(err) = viz::replay(&self.frame_calls, &mut surface) {
                    self.error_message = format!("Render failed: {err:#}");
                }

                // Slider directly beneath the canvas, spanning the grid margins.
                let mut selected = chart.state().selector.selected_index();
                let last = Period::ALL.len() - 1;
                let mut changed = false;
                ui.horizontal(|ui| {
                    ui.add_space(margin);
                    ui.spacing_mut().slider_width = w - 2.0 * margin;
                    changed = ui
                        .add(
                            egui::Slider::new(&mut selected, 0..=last)
                                .step_by(1.0)
                                .show_value(false),
                        )
                        .on_hover_text(
                            Period::from_index(selected)
                                .map(Period::label)
                                .unwrap_or_default(),
                        )
                        .changed();
                });
                if changed && chart.select_period(selected).is_requested() {
                    ctx.request_repaint();
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.add_space(margin);
                    if ui.button("Save image…").clicked() {
                        self.save_image();
                    }
                    if !self.status_message.is_empty() {
                        ui.colored_label(Color32::DARK_GREEN, &self.status_message);
                    }
                    if !self.error_message.is_empty() {
                        ui.colored_label(Color32::RED, &self.error_message);
                    }
                });
            });
        });
    }
}

/// [`Surface`] over an egui painter, offset to the allocated canvas.
struct EguiSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    size: (f32, f32),
    style: DrawStyle,
}

impl<'a> EguiSurface<'a> {
    fn new(painter: &'a Painter, origin: Pos2, size: (f32, f32)) -> Self {
        Self {
            painter,
            origin,
            size,
            style: DrawStyle::default(),
        }
    }

    fn pos(&self, p: Point) -> Pos2 {
        self.origin + Vec2::new(p.x as f32, p.y as f32)
    }

    fn rect_of(&self, r: Rect) -> egui::Rect {
        egui::Rect::from_min_size(
            self.pos(Point::new(r.x, r.y)),
            Vec2::new(r.w as f32, r.h as f32),
        )
    }
}

fn color32(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

fn rounding(r: CornerRadii) -> Rounding {
    Rounding {
        nw: r.tl as f32,
        ne: r.tr as f32,
        se: r.br as f32,
        sw: r.bl as f32,
    }
}

fn align2(a: TextAlign) -> Align2 {
    match (a.h, a.v) {
        (HAlign::Left, VAlign::Top) => Align2::LEFT_TOP,
        (HAlign::Left, VAlign::Center) => Align2::LEFT_CENTER,
        (HAlign::Left, VAlign::Baseline | VAlign::Bottom) => Align2::LEFT_BOTTOM,
        (HAlign::Center, VAlign::Top) => Align2::CENTER_TOP,
        (HAlign::Center, VAlign::Center) => Align2::CENTER_CENTER,
        (HAlign::Center, VAlign::Baseline | VAlign::Bottom) => Align2::CENTER_BOTTOM,
        (HAlign::Right, VAlign::Top) => Align2::RIGHT_TOP,
        (HAlign::Right, VAlign::Center) => Align2::RIGHT_CENTER,
        (HAlign::Right, VAlign::Baseline | VAlign::Bottom) => Align2::RIGHT_BOTTOM,
    }
}

impl Surface for EguiSurface<'_> {
    fn size(&self) -> (f64, f64) {
        (f64::from(self.size.0), f64::from(self.size.1))
    }

    fn style(&self) -> DrawStyle {
        self.style
    }

    fn set_style(&mut self, style: DrawStyle) {
        self.style = style;
    }

    fn background(&mut self, color: Rgba) -> Result<()> {
        let full = egui::Rect::from_min_size(self.origin, Vec2::new(self.size.0, self.size.1));
        self.painter.rect_filled(full, 0.0, color32(color));
        Ok(())
    }

    fn rect(&mut self, rect: Rect, radii: CornerRadii) -> Result<()> {
        let r = self.rect_of(rect);
        let corners = rounding(radii.clamped(rect.w, rect.h));
        if let Some(fill) = self.style.fill {
            self.painter.rect_filled(r, corners, color32(fill));
        }
        if let Some(stroke) = self.style.stroke
            && self.style.stroke_weight > 0.0
        {
            self.painter.rect_stroke(
                r,
                corners,
                Stroke::new(self.style.stroke_weight as f32, color32(stroke)),
            );
        }
        Ok(())
    }

    fn text(&mut self, text: &str, at: Point, size: f64, align: TextAlign) -> Result<()> {
        if let Some(fill) = self.style.fill {
            self.painter.text(
                self.pos(at),
                align2(align),
                text,
                FontId::proportional(size as f32),
                color32(fill),
            );
        }
        Ok(())
    }
}
