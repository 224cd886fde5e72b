// File: crates/dash-render/src/chart.rs
// Summary: Chart geometry built from derived chart data and headless PNG rendering
//          using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;

use dash_core::{ChartData, ChartSelection, TimeSeries};

use crate::bins::bin_values;
use crate::grid::{linspace, tick_label};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::Axis;

/// Most date labels drawn under a line chart.
const MAX_DATE_LABELS: usize = 6;
/// Fraction of a slot a monthly bar occupies.
const BAR_WIDTH: f64 = 0.8;
const DOT_RADIUS: f32 = 3.5;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text is platform-font dependent; snapshot tests turn it off.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
        }
    }
}

/// Filled bar from the zero baseline to `height`, spanning [x0, x1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarMark {
    pub x0: f64,
    pub x1: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Marks {
    Polyline(Vec<(f64, f64)>),
    Bars(Vec<BarMark>),
    Dots(Vec<(f64, f64)>),
}

impl Marks {
    fn is_empty(&self) -> bool {
        match self {
            Marks::Polyline(p) | Marks::Dots(p) => p.is_empty(),
            Marks::Bars(b) => b.is_empty(),
        }
    }
}

pub struct Chart {
    pub kind: ChartSelection,
    pub title: String,
    pub marks: Marks,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Categorical labels along X (dates, months). Numeric ticks are used when empty.
    pub x_labels: Vec<(f64, String)>,
}

impl Chart {
    /// Lay out marks for `data` and fit the axes to them.
    pub fn from_data(data: &ChartData) -> Self {
        let mut chart = match data {
            ChartData::Line(series) => Self::line(series),
            ChartData::Bar(buckets) => {
                let half = BAR_WIDTH * 0.5;
                let bars = buckets
                    .iter()
                    .enumerate()
                    .map(|(i, b)| BarMark { x0: i as f64 - half, x1: i as f64 + half, height: b.mean })
                    .collect();
                let labels = buckets
                    .iter()
                    .enumerate()
                    .map(|(i, b)| (i as f64, b.month_end.format("%Y-%m").to_string()))
                    .collect();
                Self::with_marks(ChartSelection::Bar, Marks::Bars(bars), "Month", "Mean value", labels)
            }
            ChartData::Scatter(pairs) => {
                let dots = pairs.iter().map(|p| (p.lag, p.value)).collect();
                Self::with_marks(ChartSelection::Scatter, Marks::Dots(dots), "Value (t-1)", "Value (t)", Vec::new())
            }
            ChartData::Histogram(h) => {
                let bars = bin_values(&h.values, h.bins)
                    .into_iter()
                    .map(|b| BarMark { x0: b.lo, x1: b.hi, height: b.count as f64 })
                    .collect();
                Self::with_marks(ChartSelection::Histogram, Marks::Bars(bars), "Value", "Count", Vec::new())
            }
        };
        chart.title = data.title().to_string();
        chart.autoscale_axes(0.02);
        chart
    }

    fn with_marks(
        kind: ChartSelection,
        marks: Marks,
        x_label: &str,
        y_label: &str,
        x_labels: Vec<(f64, String)>,
    ) -> Self {
        Self {
            kind,
            title: String::new(),
            marks,
            x_axis: Axis::new(x_label, 0.0, 1.0),
            y_axis: Axis::new(y_label, 0.0, 1.0),
            x_labels,
        }
    }

    /// X is days since the first date.
    fn line(series: &TimeSeries) -> Self {
        let points = series.points();
        let Some(&(origin, _)) = points.first() else {
            return Self::with_marks(ChartSelection::Line, Marks::Polyline(Vec::new()), "Date", "Value", Vec::new());
        };
        let xy: Vec<(f64, f64)> = points
            .iter()
            .map(|&(d, v)| ((d - origin).num_days() as f64, v))
            .collect();

        let step = points.len().div_ceil(MAX_DATE_LABELS).max(1);
        let labels = points
            .iter()
            .zip(&xy)
            .step_by(step)
            .map(|(&(d, _), &(x, _))| (x, d.format("%Y-%m-%d").to_string()))
            .collect();
        Self::with_marks(ChartSelection::Line, Marks::Polyline(xy), "Date", "Value", labels)
    }

    /// Fit both axes to the marks, padding Y by `y_margin` of its span.
    /// Bars always keep the zero baseline in view.
    pub fn autoscale_axes(&mut self, y_margin: f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut grow = |x: f64, y: f64| {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        };
        match &self.marks {
            Marks::Polyline(p) | Marks::Dots(p) => p.iter().for_each(|&(x, y)| grow(x, y)),
            Marks::Bars(bars) => {
                for b in bars {
                    grow(b.x0, 0.0);
                    grow(b.x1, b.height);
                }
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            (x_min, x_max, y_min, y_max) = (0.0, 1.0, 0.0, 1.0);
        }
        if (x_max - x_min).abs() < 1e-9 { x_min -= 0.5; x_max += 0.5; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }

        let ym = (y_max - y_min) * y_margin;
        let bars = matches!(self.marks, Marks::Bars(_));
        self.x_axis.min = x_min;
        self.x_axis.max = x_max;
        self.y_axis.min = if bars && y_min >= 0.0 { 0.0 } else { y_min - ym };
        self.y_axis.max = if bars && y_max <= 0.0 { 0.0 } else { y_max + ym };
    }

    /// Render the chart to PNG-encoded bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
        let canvas = surface.canvas();
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = PlotRect {
            l: opts.insets.left as f32,
            t: opts.insets.top as f32,
            r: (opts.width - opts.insets.right as i32) as f32,
            b: (opts.height - opts.insets.bottom as i32) as f32,
        };

        draw_grid(canvas, &plot, theme);
        match &self.marks {
            Marks::Polyline(p) => draw_polyline(canvas, &plot, &self.x_axis, &self.y_axis, p, theme),
            Marks::Bars(bars) => {
                let fill = match self.kind {
                    ChartSelection::Histogram => theme.histogram,
                    _ => theme.bar_fill,
                };
                draw_bars(canvas, &plot, &self.x_axis, &self.y_axis, bars, fill);
            }
            Marks::Dots(p) => draw_dots(canvas, &plot, &self.x_axis, &self.y_axis, p, theme),
        }
        draw_axes(canvas, &plot, theme);
        if opts.draw_labels {
            draw_labels(canvas, &plot, self, theme);
        }
        if self.marks.is_empty() {
            log::debug!("rendering '{}' with no marks", self.title);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {}", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

struct PlotRect {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
}

impl PlotRect {
    fn sx(&self, axis: &Axis, x: f64) -> f32 { axis.to_px(x, self.l, self.r) }
    fn sy(&self, axis: &Axis, y: f64) -> f32 { axis.to_px(y, self.b, self.t) }
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn draw_grid(canvas: &skia::Canvas, p: &PlotRect, theme: &Theme) {
    let paint = stroke_paint(theme.grid, 1.0);
    for x in linspace(p.l as f64, p.r as f64, 10) {
        canvas.draw_line((x as f32, p.t), (x as f32, p.b), &paint);
    }
    for y in linspace(p.t as f64, p.b as f64, 6) {
        canvas.draw_line((p.l, y as f32), (p.r, y as f32), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, p: &PlotRect, theme: &Theme) {
    let paint = stroke_paint(theme.axis_line, 1.5);
    canvas.draw_line((p.l, p.b), (p.r, p.b), &paint);
    canvas.draw_line((p.l, p.t), (p.l, p.b), &paint);
}

fn draw_labels(canvas: &skia::Canvas, p: &PlotRect, chart: &Chart, theme: &Theme) {
    let text = fill_paint(theme.axis_label);
    let mut font = skia::Font::default();
    font.set_size(12.0);

    // Y ticks
    for v in linspace(chart.y_axis.min, chart.y_axis.max, 6) {
        let y = p.sy(&chart.y_axis, v);
        canvas.draw_str(tick_label(v), (p.l - 60.0, y + 4.0), &font, &text);
    }
    // X ticks: categorical labels when present, numbers otherwise
    if chart.x_labels.is_empty() {
        for v in linspace(chart.x_axis.min, chart.x_axis.max, 6) {
            let x = p.sx(&chart.x_axis, v);
            canvas.draw_str(tick_label(v), (x - 14.0, p.b + 18.0), &font, &text);
        }
    } else {
        for (v, label) in &chart.x_labels {
            let x = p.sx(&chart.x_axis, *v);
            canvas.draw_str(label, (x - 28.0, p.b + 18.0), &font, &text);
        }
    }

    font.set_size(14.0);
    canvas.draw_str(&chart.x_axis.label, (p.r - 100.0, p.b + 42.0), &font, &text);
    canvas.draw_str(&chart.y_axis.label, (p.l - 64.0, p.t - 10.0), &font, &text);

    let title = fill_paint(theme.title);
    font.set_size(18.0);
    canvas.draw_str(&chart.title, (p.l + 8.0, p.t - 20.0), &font, &title);
}

fn draw_polyline(canvas: &skia::Canvas, p: &PlotRect, x_axis: &Axis, y_axis: &Axis, data: &[(f64, f64)], theme: &Theme) {
    if data.len() < 2 {
        return;
    }
    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((p.sx(x_axis, x0), p.sy(y_axis, y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((p.sx(x_axis, x), p.sy(y_axis, y)));
    }
    canvas.draw_path(&path, &stroke_paint(theme.line_stroke, 2.0));
}

fn draw_bars(canvas: &skia::Canvas, p: &PlotRect, x_axis: &Axis, y_axis: &Axis, bars: &[BarMark], color: skia::Color) {
    let body = fill_paint(color);
    let base = p.sy(y_axis, 0.0f64.clamp(y_axis.min, y_axis.max));
    for bar in bars {
        let xa = p.sx(x_axis, bar.x0);
        let xb = p.sx(x_axis, bar.x1);
        let y = p.sy(y_axis, bar.height);
        let (top, bottom) = (y.min(base), y.max(base));
        // histogram bins touch; leave a hairline between them
        let rect = skia::Rect::from_ltrb(xa.min(xb) + 0.5, top, xa.max(xb) - 0.5, bottom.max(top + 1.0));
        canvas.draw_rect(rect, &body);
    }
}

fn draw_dots(canvas: &skia::Canvas, p: &PlotRect, x_axis: &Axis, y_axis: &Axis, data: &[(f64, f64)], theme: &Theme) {
    let dot = fill_paint(theme.scatter_dot);
    for &(x, y) in data {
        canvas.draw_circle((p.sx(x_axis, x), p.sy(y_axis, y)), DOT_RADIUS, &dot);
    }
}
