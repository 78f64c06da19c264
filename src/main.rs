use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};

use scenario_tiles::scenario::{load_scenario, to_json, write_json};
use scenario_tiles::{build, FlatMap, Scenario, ScenarioError};

#[derive(Parser, Debug)]
#[command(name = "scenario_tiles")]
#[command(about = "Flatten a scenario's door-linked map tiles into global hex coordinates")]
struct Args {
    /// Scenario JSON file ("-" reads stdin)
    input: PathBuf,

    /// Write the flattened map to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print a short summary instead of the flattened map
    #[arg(long)]
    summary: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "scenario_tiles failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), ScenarioError> {
    let scenario = if args.input.as_os_str() == "-" {
        Scenario::from_reader(io::stdin().lock())?
    } else {
        load_scenario(&args.input)?
    };
    info!(
        name = scenario.name.as_deref().unwrap_or("unnamed"),
        fragments = scenario.fragment_count(),
        "loaded scenario"
    );

    let map = build(&scenario);

    if args.summary {
        print_summary(&scenario, &map);
        return Ok(());
    }

    match &args.output {
        Some(path) => {
            write_json(&map, path, args.pretty)?;
            info!(path = %path.display(), "wrote flattened map");
        }
        None => println!("{}", to_json(&map, args.pretty)?),
    }

    Ok(())
}

fn print_summary(scenario: &Scenario, map: &FlatMap) {
    let bounds = map.bounds;
    println!("Scenario: {}", scenario.name.as_deref().unwrap_or("(unnamed)"));
    println!(
        "Fragments: {} (door depth {})",
        scenario.fragment_count(),
        scenario.max_depth()
    );
    println!(
        "Tiles: {} ({} unique cells)",
        map.tiles.len(),
        map.unique_cells().len()
    );
    println!("Overlays: {}", map.overlays.len());
    if map.is_empty() {
        println!("Bounds: empty");
    } else {
        println!(
            "Bounds: cols {}..={}, rows {}..={} ({}x{})",
            bounds.min_col,
            bounds.max_col,
            bounds.min_row,
            bounds.max_row,
            bounds.width(),
            bounds.height()
        );
    }
}
