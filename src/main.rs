// src/main.rs
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::info;

use wordcount::metrics::Metric;
use wordcount::reader::{self, Resource};
use wordcount::report::{self, FileStats, Summary};
use wordcount::{logging, success};

#[derive(Parser)]
#[command(name = "wordcount")]
#[command(
    about = "Counts bytes, lines, words and characters of files and finds their longest line.",
    long_about = None
)]
struct Cli {
    /// Raise the log level (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Paths {
    /// File to measure; repeat for several files.
    #[arg(short, long = "path", required = true)]
    paths: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Size of each file in bytes.
    Bytes(Paths),
    /// Number of line terminators in each file.
    Lines(Paths),
    /// Number of whitespace-separated words in each file.
    Words(Paths),
    /// Number of characters in each file.
    Chars(Paths),
    /// First longest line of each file.
    Longest(Paths),
    /// All of the above, with the longest line given as its length.
    Stats(Paths),
}

impl Commands {
    fn into_parts(self) -> (Option<Metric>, Vec<String>) {
        match self {
            Commands::Bytes(p) => (Some(Metric::Bytes), p.paths),
            Commands::Lines(p) => (Some(Metric::Lines), p.paths),
            Commands::Words(p) => (Some(Metric::Words), p.paths),
            Commands::Chars(p) => (Some(Metric::Chars), p.paths),
            Commands::Longest(p) => (Some(Metric::Longest), p.paths),
            Commands::Stats(p) => (None, p.paths),
        }
    }
}

fn print_stats(stats: &FileStats, metric: Option<Metric>) {
    match metric {
        Some(metric) => {
            let value = stats.get(metric);
            println!("{}", report::render_metric(stats.id.as_str(), &value));
        }
        None => println!("{stats}"),
    }
}

fn print_summary(total: &Summary, metric: Option<Metric>) {
    match metric {
        Some(metric) => println!("{}", report::render_metric("total", &total.get(metric))),
        None => println!("{total}"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let (metric, paths) = cli.command.into_parts();
    info!("Measuring {} file(s)", paths.len());
    let resources: Vec<Resource> = paths.into_iter().map(Resource::from_path).collect();

    let mut measured = Vec::new();
    let mut failed = 0usize;
    for (id, result) in reader::measure_all(resources).await {
        match result {
            Ok(stats) => {
                print_stats(&stats, metric);
                measured.push(stats);
            }
            Err(e) => {
                eprintln!("{id}: {e:#}");
                failed += 1;
            }
        }
    }

    if measured.len() > 1 {
        print_summary(&Summary::from_stats(&measured), metric);
    }

    if failed > 0 {
        anyhow::bail!(
            "{failed} of {} file(s) could not be measured",
            failed + measured.len()
        );
    }
    success!("Measured {} file(s)", measured.len());
    Ok(())
}
