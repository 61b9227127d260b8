// File: crates/likeplot-cli/src/main.rs
// Summary: Loads the likes CSVs and renders boxplot, grouped bar and line charts to PNGs.
// Pipeline per chart: load -> (rollup) -> build scene -> render.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use likeplot_core::{loader, rollup, BoxplotChart, Chart, GroupedBarChart, LineChart, RenderOptions, Scene, Theme};
use likeplot_render_skia::SkiaRenderer;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Render social media like statistics as PNG charts
#[derive(Parser)]
#[command(name = "likeplot")]
#[command(version)]
#[command(about = "Render social media like statistics as PNG charts", long_about = None)]
struct Cli {
    /// CSV with AgeGroup,Likes columns (boxplot)
    #[arg(long, default_value = "socialMedia.csv")]
    likes: PathBuf,

    /// CSV with Platform,PostType,AvgLikes columns (grouped bar chart)
    #[arg(long, default_value = "SocialMediaAvg.csv")]
    averages: PathBuf,

    /// CSV with Date,AvgLikes columns (line chart)
    #[arg(long, default_value = "SocialMediaTime.csv")]
    daily: PathBuf,

    /// Directory for the PNG outputs
    #[arg(short, long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Color theme
    #[arg(long, value_enum, default_value_t = ThemeChoice::Light)]
    theme: ThemeChoice,

    /// Leave out axis titles
    #[arg(long)]
    no_labels: bool,

    /// Log filter used when RUST_LOG is not set (e.g. info, debug, likeplot_core=trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeChoice {
    Light,
    Dark,
}

impl ThemeChoice {
    fn theme(self) -> Theme {
        match self {
            ThemeChoice::Light => Theme::light(),
            ThemeChoice::Dark => Theme::dark(),
        }
    }
}

enum Outcome {
    Rendered(PathBuf),
    Skipped,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let theme = cli.theme.theme();
    let opts = RenderOptions { draw_labels: !cli.no_labels, ..RenderOptions::default() };
    let renderer = SkiaRenderer::new();
    info!(theme = theme.name, out_dir = %cli.out_dir.display(), "likeplot v{}", env!("CARGO_PKG_VERSION"));

    let results = [
        run_chart("boxplot", &cli.likes, &cli.out_dir, &renderer, &opts, |path| {
            let records = loader::load_likes(path)?;
            let summaries = rollup(&records)?;
            for (group, s) in summaries.iter() {
                info!(
                    group = %group,
                    min = s.min, q1 = s.q1, median = s.median, q3 = s.q3, max = s.max, iqr = s.iqr,
                    "group summary"
                );
            }
            Ok(BoxplotChart::default().build_from_rollup(&summaries, &theme)?)
        }),
        run_chart("grouped_bar", &cli.averages, &cli.out_dir, &renderer, &opts, |path| {
            let rows = loader::load_platform_averages(path)?;
            Ok(GroupedBarChart::default().build(&rows, &theme)?)
        }),
        run_chart("line", &cli.daily, &cli.out_dir, &renderer, &opts, |path| {
            let points = loader::load_daily_averages(path)?;
            Ok(LineChart::default().build(&points, &theme)?)
        }),
    ];

    let mut failed = 0usize;
    for (name, result) in ["boxplot", "grouped_bar", "line"].iter().zip(results) {
        match result {
            Ok(Outcome::Rendered(out)) => info!(chart = name, path = %out.display(), "wrote chart"),
            Ok(Outcome::Skipped) => {}
            Err(e) => {
                error!(chart = name, "{:#}", e);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        anyhow::bail!("{} chart(s) failed", failed);
    }
    Ok(())
}

fn init_tracing(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Build one chart from `input` and write it as `<out_dir>/<name>.png`.
/// A missing input file skips the chart instead of failing the run.
fn run_chart<F>(
    name: &str,
    input: &Path,
    out_dir: &Path,
    renderer: &SkiaRenderer,
    opts: &RenderOptions,
    build: F,
) -> Result<Outcome>
where
    F: FnOnce(&Path) -> Result<Scene>,
{
    if !input.exists() {
        warn!(chart = name, path = %input.display(), "input not found; skipping");
        return Ok(Outcome::Skipped);
    }
    info!(chart = name, path = %input.display(), "using input file");

    let scene = build(input).with_context(|| format!("failed to build {} from '{}'", name, input.display()))?;
    let out = out_dir.join(format!("{}.png", name));
    renderer
        .render_to_png(&scene, opts, &out)
        .with_context(|| format!("failed to render {}", out.display()))?;
    Ok(Outcome::Rendered(out))
}
