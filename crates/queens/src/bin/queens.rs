//! `queens` command line tool.
//!
//! Detects a Queens board in a screenshot (or reads it from a text file),
//! solves it, and prints the solution together with the screen positions a
//! clicker would use to fill it in.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use queens::board::ParseBoardError;
use queens::detect::{detect_and_solve, detect_file, Detected, PipelineError};
use queens::solver::SolveError;
use queens::{click_plan, parse_board, solve, Board, DetectParams, ScreenLayout};

#[derive(Parser, Debug)]
#[command(
    name = "queens",
    version,
    about = "Detect and solve Queens (Star Battle) boards from screenshots or text files"
)]
struct Cli {
    /// Screenshot to run board detection on.
    #[arg(long, value_name = "FILE", conflicts_with = "file")]
    image: Option<PathBuf>,

    /// Text board file (whitespace-separated group tokens).
    #[arg(long, short, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Sampling radius of the crossing pattern, in pixels.
    #[arg(long, default_value_t = 5)]
    crossing_offset: u32,

    /// Print the detected or parsed board without solving it.
    #[arg(long)]
    no_solve: bool,

    /// Screen offset of the captured window as `X,Y`; applied to the click
    /// positions.
    #[arg(long, value_name = "X,Y", value_parser = parse_offset)]
    window_offset: Option<(i32, i32)>,

    /// Emit the board as JSON instead of the ANSI rendering.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_offset(raw: &str) -> Result<(i32, i32), String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {raw:?}"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<i32>()
            .map_err(|e| format!("bad coordinate {v:?}: {e}"))
    };
    Ok((parse(x)?, parse(y)?))
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Parse(#[from] ParseBoardError),

    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("no board detected in the capture")]
    NotDetected,

    #[error("nothing to do: pass --image or --file")]
    NoInput,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = queens::core::init_with_level(level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    if let Some(path) = &cli.image {
        run_image(cli, path)
    } else if let Some(path) = &cli.file {
        run_file(cli, path)
    } else {
        Err(CliError::NoInput)
    }
}

fn run_image(cli: &Cli, path: &Path) -> Result<(), CliError> {
    let params = DetectParams {
        crossing_offset: cli.crossing_offset,
        ..DetectParams::default()
    };

    let detected: Option<Detected> = if cli.no_solve {
        detect_file(path, &params)?
    } else {
        detect_and_solve(path, &params)?
    };
    let detected = detected.ok_or(CliError::NotDetected)?;

    let mut layout = detected.layout;
    if let Some((dx, dy)) = cli.window_offset {
        layout = layout.translate(dx, dy);
    }

    print_board(cli, &detected.board)?;
    if !cli.no_solve {
        print_clicks(&detected.board, &layout);
    }
    Ok(())
}

fn run_file(cli: &Cli, path: &Path) -> Result<(), CliError> {
    let text = std::fs::read_to_string(path)?;
    let board = parse_board(&text)?;

    let board = if cli.no_solve { board } else { solve(&board)? };

    print_board(cli, &board)
}

fn print_board(cli: &Cli, board: &Board) -> Result<(), CliError> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(board)?);
    } else {
        println!("{board}");
    }
    Ok(())
}

fn print_clicks(board: &Board, layout: &ScreenLayout) {
    println!("click plan:");
    for (x, y) in click_plan(board, layout) {
        println!("  ({x}, {y})");
    }
}
