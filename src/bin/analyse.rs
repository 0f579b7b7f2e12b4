use std::env;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use formguide::benchmark::Benchmarks;
use formguide::file::ReadJsonFile;
use formguide::print;
use formguide::report::{Analyser, Squad};

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// JSON file containing the squad and each player's season stats
    file: PathBuf,

    /// JSON file overriding the default radar benchmarks
    #[clap(short = 'b', long)]
    benchmarks: Option<PathBuf>,

    /// print the full report as JSON instead of tables
    #[clap(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    debug!("args: {args:?}");

    let benchmarks = match &args.benchmarks {
        None => Benchmarks::default(),
        Some(path) => {
            debug!("loading benchmarks from {}", path.display());
            Benchmarks::read_json_file(path)
                .with_context(|| format!("failed to read benchmarks from {}", path.display()))?
        }
    };
    let analyser = Analyser::try_from(benchmarks)?;
    debug!("benchmarks: {:?}", analyser.benchmarks());

    let squad = Squad::read_json_file(&args.file)
        .with_context(|| format!("failed to read squad from {}", args.file.display()))?;
    info!(
        "analysing {} players from {}",
        squad.players.len(),
        args.file.display()
    );
    let report = analyser.analyse_squad(&squad);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let console = Console::default();
    info!(
        "leaderboard:\n{}",
        console.render(&print::tabulate_leaderboard(&report))
    );
    info!(
        "radar:\n{}",
        console.render(&print::tabulate_radar(&report))
    );
    info!(
        "position averages:\n{}",
        console.render(&print::tabulate_position_averages(&report))
    );
    Ok(())
}
