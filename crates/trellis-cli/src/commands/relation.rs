//! Relation commands

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::output::{to_json, OutputFormat};
use crate::{Cli, Session};

#[derive(Args)]
pub struct RelationArgs {
    #[command(subcommand)]
    pub command: RelationCommands,
}

#[derive(Subcommand)]
pub enum RelationCommands {
    /// Add a new relation (endpoints are created if absent)
    Add {
        /// Source entity
        from: String,
        /// Target entity
        to: String,
        /// Relation label
        #[arg(short = 't', long = "type")]
        label: String,
    },
    /// List every stored relation
    List,
}

#[derive(Serialize)]
struct RelationRow<'a> {
    from: &'a str,
    label: &'a str,
    to: &'a str,
}

pub fn run(args: &RelationArgs, cli: &Cli, session: &mut Session) -> anyhow::Result<bool> {
    match &args.command {
        RelationCommands::Add { from, to, label } => {
            let relation = session.graph.add_relation(from, label, to)?;
            // Re-resolve the source to report its stored (normalized) name
            let source = session.graph.get_or_create(from)?.name.clone();

            tracing::info!("Created relation: {} -[{}]-> {}", source, relation.label, relation.target);
            println!(
                "Created relation: {} -[{}]-> {}",
                source, relation.label, relation.target
            );
            Ok(true)
        }
        RelationCommands::List => {
            let rows: Vec<RelationRow> = session
                .graph
                .entities()
                .flat_map(|e| {
                    e.relations.iter().map(move |r| RelationRow {
                        from: &e.name,
                        label: &r.label,
                        to: &r.target,
                    })
                })
                .collect();

            if cli.output_format() == OutputFormat::Json {
                println!("{}", to_json(&rows));
                return Ok(false);
            }

            if rows.is_empty() {
                println!("No relations stored");
            } else {
                println!("Relations ({} found):", rows.len());
                for row in &rows {
                    println!("  {} -[{}]-> {}", row.from, row.label, row.to);
                }
            }
            Ok(false)
        }
    }
}
