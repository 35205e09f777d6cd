//! Path finding command

use clap::Args;

use crate::commands::resolve_entity;
use crate::output::{to_json, OutputFormat};
use crate::{Cli, Session};
use trellis_core::PathFinder;

#[derive(Args)]
pub struct PathArgs {
    /// Starting entity (fuzzy unless --exact)
    pub from: String,

    /// Target entity (fuzzy unless --exact)
    pub to: String,

    /// Require exact name matches instead of fuzzy resolution
    #[arg(long)]
    pub exact: bool,
}

pub fn run(args: &PathArgs, cli: &Cli, session: &mut Session) -> anyhow::Result<bool> {
    let Some(source) = resolve_entity(cli, &session.graph, &args.from, args.exact) else {
        println!("Source entity not found: {}", args.from);
        return Ok(false);
    };
    let Some(target) = resolve_entity(cli, &session.graph, &args.to, args.exact) else {
        println!("Target entity not found: {}", args.to);
        return Ok(false);
    };

    tracing::info!("Finding path from '{}' to '{}'", source, target);
    let result = PathFinder::find_path(&session.graph, &source, &target)?;

    if cli.output_format() == OutputFormat::Json {
        println!("{}", to_json(&result));
        return Ok(false);
    }

    match &result.path {
        None => {
            println!("No path found from '{}' to '{}'", result.source, result.target);
            println!(
                "  (searched {} nodes, {} edges)",
                result.stats.nodes_visited, result.stats.edges_traversed
            );
        }
        Some(path) => {
            println!(
                "Path found from '{}' to '{}' ({} hops):",
                result.source, result.target, path.hops
            );
            println!("  Route: {}", path.nodes.join(" -> "));
            for edge in &path.edges {
                println!("    {} -[{}]-> {}", edge.from, edge.label, edge.to);
            }
            println!(
                "  Stats: visited {} nodes, traversed {} edges",
                result.stats.nodes_visited, result.stats.edges_traversed
            );
        }
    }
    Ok(false)
}
