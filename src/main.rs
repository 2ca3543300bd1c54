use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use sift::{
    find_all, levenshtein_distance, matches, rank, rank_all, sort_by_distance, Rank, Variant,
};

mod cli;
use cli::display::{dim, distance_badge, highlight};
use cli::{Cli, Commands, InputArgs};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for piping.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SIFT_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(command: Commands) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Match {
            query,
            candidate,
            variant,
        } => {
            writeln!(out, "{}", matches(&query, &candidate, variant.resolve()))?;
        }
        Commands::Rank {
            query,
            candidate,
            variant,
        } => {
            // -1 is the no-match sentinel on the command line
            let distance = rank(&query, &candidate, variant.resolve())
                .map_or(-1, |d| d as i64);
            writeln!(out, "{}", distance)?;
        }
        Commands::Distance { a, b } => {
            writeln!(out, "{}", levenshtein_distance(&a, &b))?;
        }
        Commands::Find {
            query,
            input,
            variant,
            json,
        } => {
            let variant = variant.resolve();
            let candidates = read_candidates(&input)?;
            let hits = find_all(&query, &candidates, variant);
            info!(matches = hits.len(), "find");

            if json {
                serde_json::to_writer(&mut out, &hits).context("failed to write JSON")?;
                writeln!(out)?;
            } else {
                for hit in hits {
                    writeln!(out, "{}", highlight(&query, hit, variant))?;
                }
            }
        }
        Commands::RankAll {
            query,
            input,
            variant,
            sort,
            limit,
            max_distance,
            json,
        } => {
            let variant = variant.resolve();
            let candidates = read_candidates(&input)?;
            let mut ranks = rank_all(&query, &candidates, variant);

            if let Some(max) = max_distance {
                ranks.retain(|r| r.distance <= max);
            }
            if sort {
                sort_by_distance(&mut ranks);
            }
            if let Some(limit) = limit {
                ranks.truncate(limit);
            }
            info!(matches = ranks.len(), "rank-all");

            if json {
                serde_json::to_writer(&mut out, &ranks).context("failed to write JSON")?;
                writeln!(out)?;
            } else {
                print_ranks(&mut out, &ranks, variant)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn print_ranks(out: &mut impl Write, ranks: &[Rank<'_, String>], variant: Variant) -> Result<()> {
    for rank in ranks {
        writeln!(
            out,
            "{} {} {}",
            distance_badge(rank.distance),
            dim(&format!("#{:<5}", rank.original_index)),
            highlight(rank.query, rank.candidate, variant)
        )?;
    }
    Ok(())
}

/// Load candidates, one per line, from `--file` or stdin.
///
/// Input must be UTF-8; anything else is rejected here rather than being
/// passed on to the matcher.
fn read_candidates(input: &InputArgs) -> Result<Vec<String>> {
    let (source, bytes) = match &input.file {
        Some(path) => (
            path.as_str(),
            fs::read(path).with_context(|| format!("failed to read {}", path))?,
        ),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            ("stdin", buf)
        }
    };

    let text = String::from_utf8(bytes)
        .with_context(|| format!("{} is not valid UTF-8", source))?;
    let candidates: Vec<String> = text.lines().map(str::to_string).collect();
    debug!(source, count = candidates.len(), "loaded candidates");

    Ok(candidates)
}
