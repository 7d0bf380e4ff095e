// Demo driver.
// • `functionality`: small frame, two draws (main thread, then 2 workers),
//   the frame printed after each one. Optional PNG snapshot / preview window.
// • `performance`: one large frame, the same large rect drawn with 1, 2, 4, 8
//   and 12 workers, after a plain allocate+memset baseline of the same size.
// • no subcommand: both, in that order.
//
// Traces and frames go to stdout, warnings and errors to stderr (RUST_LOG,
// default `info`).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use nosync_frame::report::{format_char_count, memset_baseline};
use nosync_frame::{DrawOptions, Frame, Rect, Result, hardware_concurrency};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "nosync-frame", about = "Lock-free parallel rectangle fills on one frame buffer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Small frame + small draws + printed frame
    Functionality(FunctionalityArgs),
    /// Large frame + large draw with different worker counts
    Performance(PerformanceArgs),
}

#[derive(Args, Default)]
struct FunctionalityArgs {
    /// Also write the final frame as a PNG
    #[arg(long)]
    png: Option<PathBuf>,
    /// Show the final frame in a window (needs `--features preview`)
    #[arg(long)]
    preview: bool,
}

#[derive(Args)]
struct PerformanceArgs {
    #[arg(long, default_value_t = 600_000)]
    rows: usize,
    #[arg(long, default_value_t = 2_000)]
    cols: usize,
    /// Rows of the drawn rect (starting at row 1)
    #[arg(long, default_value_t = 524_288)]
    draw_rows: usize,
    /// Columns of the drawn rect (starting at column 1)
    #[arg(long, default_value_t = 1_024)]
    draw_cols: usize,
    #[arg(long, value_delimiter = ',', default_values_t = [1, 2, 4, 8, 12])]
    workers: Vec<usize>,
}

impl Default for PerformanceArgs {
    fn default() -> Self {
        Self { rows: 600_000, cols: 2_000, draw_rows: 524_288, draw_cols: 1_024, workers: vec![1, 2, 4, 8, 12] }
    }
}

fn main() -> ExitCode {
    nosync_frame::logging::init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Some(Command::Functionality(args)) => functionality(&args),
        Some(Command::Performance(args)) => performance(&args),
        None => functionality(&FunctionalityArgs::default())
            .and_then(|()| performance(&PerformanceArgs::default())),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Let's visually confirm that it is functioning correctly.
fn functionality(args: &FunctionalityArgs) -> Result<()> {
    info!("**** test functionality: small frame + small draw + print frame ****");

    let mut frame = Frame::try_new(10, 15)?;
    let options = DrawOptions::from_env(1)?;

    frame.draw_with(Rect::new(1, 1, 3, 2), &options)?;
    frame.print_frame()?;

    frame.draw_with(Rect::new(5, 1, 8, 13), &DrawOptions { workers: 2, ..options })?;
    frame.print_frame()?;

    if let Some(path) = &args.png {
        nosync_frame::render::save_png(&frame, path)?;
    }
    if args.preview {
        show(&frame)?;
    }
    Ok(())
}

#[cfg(feature = "preview")]
fn show(frame: &Frame) -> Result<()> {
    nosync_frame::preview::Preview::new("nosync-frame", frame)?.run(frame)
}

#[cfg(not(feature = "preview"))]
fn show(_frame: &Frame) -> Result<()> {
    tracing::warn!("--preview needs a build with `--features preview`");
    Ok(())
}

/// Let's assess the performance on a very large frame with different worker counts.
fn performance(args: &PerformanceArgs) -> Result<()> {
    info!(
        "**** test performance (hardware concurrency: {}): large frame + large draw ****",
        hardware_concurrency()
    );

    let mut frame = Frame::try_new(args.rows, args.cols)?;

    let bytes = args.draw_rows.saturating_mul(args.draw_cols);
    info!("benchmark: memset of {bytes} bytes ({})", format_char_count(bytes as u64));
    let baseline = memset_baseline(bytes);
    info!("(execution time: {} milliseconds)", baseline.elapsed.as_millis());

    let rect = Rect::new(1, 1, args.draw_rows, args.draw_cols);
    for &workers in &args.workers {
        let report = frame.draw_with(rect, &DrawOptions::from_env(workers)?)?;
        info!(
            requested = workers,
            effective = report.workers,
            millis = report.elapsed.as_millis() as u64,
            "draw finished"
        );
    }
    Ok(())
}
