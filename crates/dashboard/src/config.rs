// File: crates/dashboard/src/config.rs
// Summary: Command-line and environment configuration for the dashboard binary.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use dash_core::{ChartSelection, GeneratorParams};

pub const USAGE: &str = "\
usage: dashboard [CHART_KIND] [options]

CHART_KIND   line | bar | scatter | histogram (default: line)

options:
  --seed N          generator seed (default 42)
  --periods N       number of daily points (default 100)
  --start DATE      first date, YYYY-MM-DD (default 2023-01-01)
  --out PATH        output PNG (default $DASHBOARD_OUT_DIR/dashboard_<kind>.png)
  --theme NAME      dark | light (default dark)
  --no-labels       skip text rendering
  -h, --help        print this help";

/// Output directory used when neither --out nor DASHBOARD_OUT_DIR is given.
const DEFAULT_OUT_DIR: &str = "target/out";

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    pub kind: ChartSelection,
    pub params: GeneratorParams,
    pub out: PathBuf,
    pub theme: String,
    pub draw_labels: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Run(DashboardConfig),
    Help,
}

impl Command {
    /// Parse the process arguments, honouring DASHBOARD_OUT_DIR.
    pub fn from_env() -> Result<Self> {
        let out_dir = std::env::var_os("DASHBOARD_OUT_DIR").map(PathBuf::from);
        Self::parse(std::env::args().skip(1), out_dir)
    }

    pub fn parse<I>(args: I, out_dir: Option<PathBuf>) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut kind: Option<ChartSelection> = None;
        let mut params = GeneratorParams::default();
        let mut out: Option<PathBuf> = None;
        let mut theme = "dark".to_string();
        let mut draw_labels = true;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let mut value = |flag: &str| args.next().with_context(|| format!("{flag} needs a value"));
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--seed" => {
                    let v = value("--seed")?;
                    params.seed = v.parse().with_context(|| format!("invalid seed {v:?}"))?;
                }
                "--periods" => {
                    let v = value("--periods")?;
                    params.periods = v.parse().with_context(|| format!("invalid periods {v:?}"))?;
                }
                "--start" => {
                    let v = value("--start")?;
                    params.start = NaiveDate::parse_from_str(&v, "%Y-%m-%d")
                        .with_context(|| format!("invalid start date {v:?}, expected YYYY-MM-DD"))?;
                }
                "--out" => out = Some(PathBuf::from(value("--out")?)),
                "--theme" => theme = value("--theme")?,
                "--no-labels" => draw_labels = false,
                flag if flag.starts_with("--") => bail!("unknown option {flag}\n\n{USAGE}"),
                label => {
                    if kind.is_some() {
                        bail!("chart kind given twice (second: {label:?})");
                    }
                    kind = Some(label.parse()?);
                }
            }
        }

        let kind = kind.unwrap_or(ChartSelection::Line);
        let out = out.unwrap_or_else(|| {
            out_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
                .join(format!("dashboard_{}.png", kind.label()))
        });
        Ok(Command::Run(DashboardConfig { kind, params, out, theme, draw_labels }))
    }
}
