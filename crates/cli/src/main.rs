use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use figures::api::{run_figures, run_grid, DemoCfg, Grid};
use figures::Vec2;
use std::io::{self, Write};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Grid totals and plane-figure walkthroughs")]
struct Cmd {
    /// Log at DEBUG instead of INFO
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the total of a grid (default: the 3×3 sample grid)
    Grid {
        /// Rows separated by ';', entries by ',' (e.g. "1,2,3;4,5,6")
        #[arg(long)]
        rows: Option<String>,
    },
    /// Run the rectangle/triangle walkthrough
    Figures(FigureArgs),
    /// Print a JSON summary of the figures after the walkthrough mutations
    Report(FigureArgs),
}

#[derive(clap::Args, Debug)]
struct FigureArgs {
    #[arg(long, default_value_t = 4.0)]
    length: f64,
    #[arg(long, default_value_t = 2.0)]
    width: f64,
    #[arg(long, default_value_t = 3.0)]
    side: f64,
    /// Rectangle translation along x
    #[arg(long, default_value_t = 2.0, allow_hyphen_values = true)]
    dx: f64,
    /// Rectangle translation along y
    #[arg(long, default_value_t = 3.0, allow_hyphen_values = true)]
    dy: f64,
    /// Triangle area growth factor
    #[arg(long, default_value_t = 4.0, allow_hyphen_values = true)]
    area_factor: f64,
}

impl FigureArgs {
    fn to_cfg(&self) -> DemoCfg {
        DemoCfg {
            length: self.length,
            width: self.width,
            side: self.side,
            shift: Vec2::new(self.dx, self.dy),
            area_factor: self.area_factor,
            ..DemoCfg::default()
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    match cmd.action {
        Action::Grid { rows } => grid(rows),
        Action::Figures(args) => figures(&args),
        Action::Report(args) => report(&args),
    }
}

fn grid(rows: Option<String>) -> Result<()> {
    tracing::info!(rows = ?rows, "grid");
    let grid = match rows {
        Some(spec) => {
            let parsed = parse_rows(&spec)?;
            Grid::from_rows(&parsed).context("building grid from --rows")?
        }
        None => Grid::sample(),
    };
    tracing::debug!(nrows = grid.nrows(), ncols = grid.ncols(), "grid_shape");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_grid(&grid, &mut out)?;
    out.flush()?;
    Ok(())
}

fn figures(args: &FigureArgs) -> Result<()> {
    tracing::info!(?args, "figures");
    let cfg = args.to_cfg();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_figures(&cfg, &mut out).context("figure walkthrough")?;
    out.flush()?;
    Ok(())
}

fn report(args: &FigureArgs) -> Result<()> {
    tracing::info!(?args, "report");
    let doc = report::build(&args.to_cfg())?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

/// Parse `"1,2,3;4,5,6"` into rows. Empty input yields an empty grid.
fn parse_rows(spec: &str) -> Result<Vec<Vec<f64>>> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Ok(Vec::new());
    }
    spec.split(';')
        .enumerate()
        .map(|(i, row)| {
            let row = row.trim();
            if row.is_empty() {
                return Ok(Vec::new());
            }
            row.split(',')
                .map(|tok| {
                    tok.trim()
                        .parse::<f64>()
                        .with_context(|| format!("row {i}: cannot parse {tok:?} as a number"))
                })
                .collect()
        })
        .collect()
}
