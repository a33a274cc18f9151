use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{ArgAction, Parser};
use log::{debug, info};

use bezier_surface::{parse_input, point_dimension, read_input_text, ParseError, Report};

/// Input file used when none is given on the command line.
const DEFAULT_INPUT: &str = "input_bezier.txt";

/// Highest point dimension the tool is compiled for.
const MAX_DIM: usize = 4;

/// Evaluates a point r(u0, v0) on a tensor-product Bézier surface with De Casteljau's algorithm.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Surface description: a line `n m`, (n+1)*(m+1) point lines in row-major order, a line `u0 v0`
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Coordinates per control point, taken from the first point line if omitted
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=MAX_DIM as i64))]
    dim: Option<u8>,

    /// Log more (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Parses `text` with `N`-dimensional points, evaluates it and renders the report.
fn evaluate<const N: usize>(text: &str) -> Result<String, ParseError> {
    let input = parse_input::<N>(text)?;
    let (n, m) = input.degrees();
    debug!("loaded {}x{} control grid of {}D points", n + 1, m + 1, N);

    let result = input.evaluate();
    info!("r({:?}, {:?}) = {}", input.u0, input.v0, result);
    Ok(Report::new(&input, result).to_string())
}

fn run(args: &Args) -> anyhow::Result<()> {
    let context = || format!("failed to load surface from {}", args.input.display());
    let text = read_input_text(&args.input).with_context(context)?;

    // without a point line the parser reports what is missing, the dimension is irrelevant then
    let dim = match args.dim {
        Some(dim) => usize::from(dim),
        None => point_dimension(&text).unwrap_or(3),
    };
    let report = match dim {
        1 => evaluate::<1>(&text),
        2 => evaluate::<2>(&text),
        3 => evaluate::<3>(&text),
        4 => evaluate::<4>(&text),
        _ => bail!(
            "{}: points with {} coordinates are not supported, at most {}",
            context(),
            dim,
            MAX_DIM
        ),
    }
    .with_context(context)?;

    println!("{}", report);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Default filter depends on -v, RUST_LOG overrides it.
    let default_filter = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_micros()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
