use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use lexiscope::analysis::{analyze_entities, analyze_lexical, similarity_report};
use lexiscope::config::Config;
use lexiscope::engine::heuristic::HeuristicEngine;
use lexiscope::ingest::{gather_rows, group_topics, iter_sources};
use lexiscope::output::{export, terminal};

/// Lexiscope: batch lexical, entity, and similarity analytics.
///
/// Reads CSV sources of titled text passages, groups them into per-topic
/// corpora, and reports token statistics, named entities, and a pairwise
/// topic-similarity matrix.
#[derive(Parser)]
#[command(name = "lexiscope", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis pipeline over a directory of CSV sources
    Process {
        /// Input directory (overrides LEXISCOPE_INPUT_DIR)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output directory for the artifacts (overrides LEXISCOPE_OUTPUT_DIR)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Skip writing artifacts; only print reports to the terminal
        #[arg(long)]
        no_export: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lexiscope=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input,
            output,
            no_export,
        } => {
            let mut config = Config::load()?;
            if let Some(dir) = input {
                config.input_dir = dir;
            }
            if let Some(dir) = output {
                config.output_dir = dir;
            }
            config.require_input()?;

            // The engine is the one hard dependency of the run — if it
            // cannot come up, fail here before touching any source.
            let engine = HeuristicEngine::new()?;

            info!(input = %config.input_dir.display(), "Starting analysis run");

            let sources = iter_sources(&config.input_dir)?;
            let table = gather_rows(sources);
            let topics = group_topics(&table);

            println!(
                "Analyzing {} topics from {} rows...",
                topics.len(),
                table.len()
            );

            let lexical = analyze_lexical(&topics, &engine)?;
            let entities = analyze_entities(&topics, &engine)?;
            let similarity = similarity_report(&topics, &engine)?;

            terminal::display_lexical(&lexical);
            terminal::display_entities(&entities);
            terminal::display_similarity(&similarity);

            if no_export {
                println!("{}", "Artifact export skipped (--no-export).".dimmed());
            } else {
                let written =
                    export::write_artifacts(&config.output_dir, &lexical, &entities, &similarity)?;
                println!("{}", "Artifacts written:".bold());
                for path in written {
                    println!("  {}", path.display());
                }
            }
        }
    }

    Ok(())
}
