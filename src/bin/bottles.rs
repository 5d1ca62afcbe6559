use anyhow::{Result, anyhow, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use rain_bottles::format::{format_mm, map_locale};
use rain_bottles::scale::DEFAULT_CAPACITY_MM;
use rain_bottles::{BottleChart, ChartConfig, Period, ScalePolicy};
use rain_bottles::{stats, storage, viz};

#[derive(Parser, Debug)]
#[command(
    name = "bottles",
    version,
    about = "Render annual precipitation as a grid of water bottles"
)]
struct Cli {
    #[command(flatten)]
    data: DataArgs,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the chart for one period (or every period) to SVG or PNG.
    Render(RenderArgs),
    /// Print per-period statistics.
    Summary(SummaryArgs),
    /// Save the bottle table for a period as CSV or JSON.
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct DataArgs {
    /// JSON config file; flags below override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Directory holding the six period CSV files.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ScaleArg {
    Fixed,
    Adaptive,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Period label or slider index (average, 2020..2024, 0..5).
    #[arg(short, long, default_value = "average")]
    period: String,
    /// Output file (.svg or .png). With --all-periods, a directory.
    #[arg(short, long)]
    out: PathBuf,
    /// Write one file per period into --out.
    #[arg(long, default_value_t = false)]
    all_periods: bool,
    /// Image format used with --all-periods.
    #[arg(long, default_value = "svg")]
    ext: String,
    /// Scale policy for bottle fill.
    #[arg(long, value_enum)]
    scale: Option<ScaleArg>,
    /// Capacity (fixed) or floor (adaptive) in mm.
    #[arg(long)]
    capacity: Option<f64>,
    /// Hide country names and values under the bottles.
    #[arg(long, default_value_t = false)]
    no_values: bool,
    /// TrueType font for PNG text.
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SummaryArgs {
    /// Locale for thousands separators (en, de, fr, ...).
    #[arg(long, default_value = "en")]
    locale: String,
    /// Print JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Period label or slider index.
    #[arg(short, long, default_value = "average")]
    period: String,
    /// Output file (format inferred by --format or extension).
    #[arg(short, long)]
    out: PathBuf,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(&cli.data)?;
    match cli.cmd {
        Command::Render(args) => cmd_render(config, args),
        Command::Summary(args) => cmd_summary(config, args),
        Command::Export(args) => cmd_export(config, args),
    }
}

fn load_config(args: &DataArgs) -> Result<ChartConfig> {
    let mut config = match &args.config {
        Some(path) => ChartConfig::from_json_file(path)?,
        None => ChartConfig::default(),
    };
    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }
    Ok(config)
}

fn parse_period(s: &str) -> Result<Period> {
    Period::parse(s).ok_or_else(|| {
        anyhow!("invalid period {s:?}, expected average, 2020..2024 or an index 0..5")
    })
}

/// Apply `--scale` / `--capacity` on top of the configured policy.
///
/// Switching kinds without `--capacity` falls back to that kind's default
/// (4000 mm capacity, no floor) instead of reusing the other kind's number.
fn scale_policy(current: ScalePolicy, scale: Option<ScaleArg>, capacity: Option<f64>) -> ScalePolicy {
    let fixed = match (scale, current) {
        (Some(ScaleArg::Fixed), _) | (None, ScalePolicy::Fixed { .. }) => true,
        (Some(ScaleArg::Adaptive), _) | (None, ScalePolicy::Adaptive { .. }) => false,
    };
    match (fixed, current) {
        (true, ScalePolicy::Fixed { capacity_mm }) => ScalePolicy::Fixed {
            capacity_mm: capacity.unwrap_or(capacity_mm),
        },
        (true, ScalePolicy::Adaptive { .. }) => ScalePolicy::Fixed {
            capacity_mm: capacity.unwrap_or(DEFAULT_CAPACITY_MM),
        },
        (false, ScalePolicy::Adaptive { floor_mm }) => ScalePolicy::Adaptive {
            floor_mm: capacity.unwrap_or(floor_mm),
        },
        (false, ScalePolicy::Fixed { .. }) => ScalePolicy::Adaptive {
            floor_mm: capacity.unwrap_or(0.0),
        },
    }
}

fn cmd_render(mut config: ChartConfig, args: RenderArgs) -> Result<()> {
    config.scale = scale_policy(config.scale, args.scale, args.capacity);
    if args.no_values {
        config.show_values = false;
    }
    if args.font.is_some() {
        config.font_path = args.font.clone();
    }

    let store = storage::load_all(&config)?;
    let mut chart = BottleChart::new(store, config);

    if args.all_periods {
        std::fs::create_dir_all(&args.out)?;
        for period in Period::ALL {
            let _ = chart.select_period(period.index());
            let path = args
                .out
                .join(format!("bottles_{}.{}", period.file_stem(), args.ext));
            viz::render_to_file(&chart, &path)?;
            eprintln!("Wrote {} to {}", period, path.display());
        }
        return Ok(());
    }

    let period = parse_period(&args.period)?;
    let _ = chart.select_period(period.index());
    viz::render_to_file(&chart, &args.out)?;
    eprintln!("Wrote {} to {}", period, args.out.display());
    Ok(())
}

fn cmd_summary(config: ChartConfig, args: SummaryArgs) -> Result<()> {
    let store = storage::load_all(&config)?;
    let summaries = stats::period_summaries(&store);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    let locale = map_locale(&args.locale);
    for s in summaries {
        println!(
            "{:<8} count={} missing={}  min={} max={} mean={} median={}  wettest={} driest={}",
            s.period.label(),
            s.count,
            s.missing,
            format_mm(s.min, locale),
            format_mm(s.max, locale),
            format_mm(s.mean, locale),
            format_mm(s.median, locale),
            s.wettest.as_deref().unwrap_or("NA"),
            s.driest.as_deref().unwrap_or("NA"),
        );
    }
    Ok(())
}

fn cmd_export(config: ChartConfig, args: ExportArgs) -> Result<()> {
    let period = parse_period(&args.period)?;
    let store = storage::load_all(&config)?;
    let mut chart = BottleChart::new(store, config);
    let _ = chart.select_period(period.index());

    let fmt = match args.format {
        Some(OutFormat::Csv) => "csv",
        Some(OutFormat::Json) => "json",
        None => args
            .out
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("csv"),
    }
    .to_ascii_lowercase();
    match fmt.as_str() {
        "csv" => storage::save_csv(chart.bottles(), chart.scale_max(), &args.out)?,
        "json" => storage::save_json(chart.bottles(), chart.scale_max(), &args.out)?,
        other => bail!("unsupported format: {}", other),
    }
    eprintln!(
        "Saved {} bottles for {} to {}",
        chart.bottles().len(),
        period,
        args.out.display()
    );
    Ok(())
}
