//! Entity commands

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::output::{to_json, OutputFormat};
use crate::{Cli, Session};
use trellis_core::{limits, text};

#[derive(Args)]
pub struct EntityArgs {
    #[command(subcommand)]
    pub command: EntityCommands,
}

#[derive(Subcommand)]
pub enum EntityCommands {
    /// Add a new entity
    Add {
        /// Entity name
        name: String,
    },
    /// List all entities
    List,
}

#[derive(Serialize)]
struct EntityRow<'a> {
    name: &'a str,
    out_degree: usize,
}

pub fn run(args: &EntityArgs, cli: &Cli, session: &mut Session) -> anyhow::Result<bool> {
    match &args.command {
        EntityCommands::Add { name } => {
            // Mirror the store's normalization, truncation included, so
            // the duplicate check sees the name the store would keep
            let normalized =
                text::truncate_chars(&text::normalize(name), limits::MAX_ENTITY_NAME_LEN)
                    .to_string();
            if session.graph.find_exact(&normalized).is_some() {
                println!("Entity '{}' already exists", normalized);
                return Ok(false);
            }

            let entity = session.graph.get_or_create(name)?;
            tracing::info!("Created entity: {}", entity.name);
            println!("Added entity '{}'", entity.name);
            Ok(true)
        }
        EntityCommands::List => {
            let rows: Vec<EntityRow> = session
                .graph
                .entities()
                .map(|e| EntityRow {
                    name: &e.name,
                    out_degree: e.out_degree(),
                })
                .collect();

            if cli.output_format() == OutputFormat::Json {
                println!("{}", to_json(&rows));
                return Ok(false);
            }

            if rows.is_empty() {
                println!("No entities stored");
            } else {
                println!("Entities ({} found):", rows.len());
                for row in &rows {
                    println!("  {} ({} outgoing)", row.name, row.out_degree);
                }
            }
            Ok(false)
        }
    }
}
