use anyhow::Result;
use census_scatter::{dataset, stats, viz};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cscat",
    version,
    about = "Render a state census CSV as an age vs. smoking-rate scatter chart"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a dataset and render the chart (and optionally print stats).
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Path to the CSV dataset (columns: state, abbr, age, smokes).
    #[arg(short, long, default_value = "assets/data.csv")]
    data: PathBuf,
    /// Output chart path (.svg or .png).
    #[arg(short, long, default_value = "chart.svg")]
    out: PathBuf,
    /// Width of the chart surface (default 960).
    #[arg(long, default_value_t = 960)]
    width: u32,
    /// Height of the chart surface (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Print column statistics to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 4 decimals, then trim trailing zeros and trailing dot.
            let s = format!("{:.4}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let records = match dataset::load_csv(&args.data) {
        Ok(r) => r,
        Err(err) => {
            // The single expected failure path: log and abort, no chart.
            log::error!("dataset load failed: {err}");
            anyhow::bail!("dataset load failed: {err}");
        }
    };

    viz::render_scatter(&records, &args.out, args.width, args.height)?;
    eprintln!(
        "Wrote chart for {} records to {}",
        records.len(),
        args.out.display()
    );

    if args.stats {
        for s in stats::column_summaries(&records) {
            println!(
                "{}  count={} missing={}  min={} max={} mean={} median={}",
                s.column,
                s.count,
                s.missing,
                fmt_opt(s.min),
                fmt_opt(s.max),
                fmt_opt(s.mean),
                fmt_opt(s.median)
            );
        }
    }

    Ok(())
}
