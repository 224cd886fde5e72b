// File: crates/dashboard/src/main.rs
// Summary: Generates the seeded sample series, prints preview and statistics, and renders the
//          selected chart kind to a PNG.

mod config;
mod report;

use anyhow::{Context, Result};
use dash_core::{derive_chart_data, summarize};
use dash_render::{theme, Chart, RenderOptions};

use config::{Command, DashboardConfig, USAGE};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match Command::from_env()? {
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
        Command::Run(cfg) => run(&cfg),
    }
}

fn run(cfg: &DashboardConfig) -> Result<()> {
    log::debug!("config: {cfg:?}");
    println!("{}", report::banner());

    let series = cfg.params.generate().context("failed to generate sample series")?;
    println!("{}", report::preview_table(&series));

    let stats = summarize(&series).context("failed to summarize series")?;
    println!("{}\n", report::stats_panel(&stats));

    let data = derive_chart_data(&series, cfg.kind)
        .with_context(|| format!("failed to derive {} chart data", cfg.kind))?;
    let chart = Chart::from_data(&data);

    let mut opts = RenderOptions::default();
    opts.theme = theme::find(&cfg.theme);
    opts.draw_labels = cfg.draw_labels;
    chart
        .render_to_png(&opts, &cfg.out)
        .with_context(|| format!("failed to render {}", cfg.out.display()))?;

    println!("Chart: {} [{}]", data.title(), cfg.kind);
    println!("Wrote {}", cfg.out.display());
    Ok(())
}
