// File: crates/dash-render/tests/rgba.rs
// Purpose: Validate rendered pixels at known mark positions, independent of golden files.

use chrono::NaiveDate;
use dash_core::{ChartData, HistogramData, MonthlyBucket};
use dash_render::{Chart, Insets, RenderOptions, Theme};

fn rgba(color: skia_safe::Color) -> [u8; 4] {
    [color.r(), color.g(), color.b(), color.a()]
}

fn render(chart: &Chart) -> (image::RgbaImage, RenderOptions) {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width() as i32, img.height() as i32), (opts.width, opts.height));
    (img, opts)
}

/// Pixel in the middle of a bar spanning [x0, x1] from zero up to `height`.
fn bar_centre(chart: &Chart, opts: &RenderOptions, x0: f64, x1: f64, height: f64) -> (u32, u32) {
    let Insets { left, right, top, bottom } = opts.insets;
    let (l, r) = (left as f32, (opts.width - right as i32) as f32);
    let (t, b) = (top as f32, (opts.height - bottom as i32) as f32);
    let x = chart.x_axis.to_px((x0 + x1) * 0.5, l, r);
    let y = chart.y_axis.to_px(height * 0.5, b, t);
    (x.round() as u32, y.round() as u32)
}

#[test]
fn monthly_bars_use_bar_fill() {
    let month = |m| NaiveDate::from_ymd_opt(2023, m, 28).unwrap();
    let chart = Chart::from_data(&ChartData::Bar(vec![
        MonthlyBucket { month_end: month(1), mean: 2.0, count: 31 },
        MonthlyBucket { month_end: month(2), mean: 4.0, count: 28 },
    ]));
    let (img, opts) = render(&chart);
    let theme = Theme::dark();

    for (i, h) in [(0.0, 2.0), (1.0, 4.0)] {
        let (x, y) = bar_centre(&chart, &opts, i - 0.4, i + 0.4, h);
        assert_eq!(img.get_pixel(x, y).0, rgba(theme.bar_fill), "bar {i} at ({x}, {y})");
    }
    // the gap between bars is background or grid, never bar fill
    let (gx, gy) = bar_centre(&chart, &opts, 0.5, 0.5, 1.0);
    assert_ne!(img.get_pixel(gx, gy).0, rgba(theme.bar_fill));
}

#[test]
fn histogram_bins_use_histogram_colour() {
    // two bins: [1, 1.5) holds three values, [1.5, 2] holds one
    let chart = Chart::from_data(&ChartData::Histogram(HistogramData { values: vec![1.0, 1.0, 1.0, 2.0], bins: 2 }));
    let (img, opts) = render(&chart);
    let (x, y) = bar_centre(&chart, &opts, 1.0, 1.5, 3.0);
    assert_eq!(img.get_pixel(x, y).0, rgba(Theme::dark().histogram));
    // above the short bin is empty plot area
    let (x, y) = bar_centre(&chart, &opts, 1.5, 2.0, 5.0);
    assert_ne!(img.get_pixel(x, y).0, rgba(Theme::dark().histogram));
}

#[test]
fn background_fills_the_margins() {
    let chart = Chart::from_data(&ChartData::Bar(Vec::new()));
    let (img, _) = render(&chart);
    assert_eq!(img.get_pixel(0, 0).0, rgba(Theme::dark().background));
    assert_eq!(img.get_pixel(img.width() - 1, img.height() - 1).0, rgba(Theme::dark().background));
}
