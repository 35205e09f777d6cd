//! Trellis CLI - Command line interface for the knowledge graph store

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod format;
mod output;
mod prompt;

use commands::{completions, entity, io, path, relation, show};
use output::OutputFormat;
use trellis_core::GraphStore;

#[derive(Parser)]
#[command(name = "trellis")]
#[command(author, version, about = "In-memory knowledge graph store with fuzzy lookup and BFS paths")]
pub struct Cli {
    /// Graph data file (pipe-delimited triples)
    #[arg(long, default_value = "relations.txt", global = true)]
    pub file: PathBuf,

    /// Output format: table, json
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,

    /// Pick the first fuzzy candidate instead of prompting
    #[arg(long, global = true)]
    pub first: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from(self.format.as_str())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage entities
    Entity(entity::EntityArgs),
    /// Manage relations
    Relation(relation::RelationArgs),
    /// Show connections of an entity (fuzzy lookup)
    Show(show::ShowArgs),
    /// Find the shortest connection path between two entities
    Path(path::PathArgs),
    /// Import pipe-delimited triples from a file
    Import(io::ImportArgs),
    /// Export the graph as pipe-delimited triples
    Export(io::ExportArgs),
    /// Export the graph as GraphViz DOT
    Dot(io::DotArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// One CLI invocation's graph session: load the data file, apply the
/// command, write back only if something changed.
pub struct Session {
    pub graph: GraphStore,
}

impl Session {
    pub fn open(cli: &Cli) -> anyhow::Result<Self> {
        let (graph, report) = format::read_graph(&cli.file)?;
        if report.skipped > 0 {
            tracing::warn!(
                "Data file {:?} had {} malformed line(s)",
                cli.file,
                report.skipped
            );
        }
        Ok(Self { graph })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting trellis CLI");

    if let Commands::Completions(args) = &cli.command {
        // Completions need no graph session
        return completions::run(args);
    }

    let mut session = Session::open(&cli)?;

    let mutated = match &cli.command {
        Commands::Completions(_) => false,
        Commands::Entity(args) => entity::run(args, &cli, &mut session)?,
        Commands::Relation(args) => relation::run(args, &cli, &mut session)?,
        Commands::Show(args) => show::run(args, &cli, &mut session)?,
        Commands::Path(args) => path::run(args, &cli, &mut session)?,
        Commands::Import(args) => io::run_import(args, &cli, &mut session)?,
        Commands::Export(args) => io::run_export(args, &cli, &session)?,
        Commands::Dot(args) => io::run_dot(args, &cli, &session)?,
    };

    if mutated {
        format::write_graph(&session.graph, &cli.file)?;
    }

    Ok(())
}
