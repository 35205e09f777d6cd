//! Show connections of an entity

use clap::Args;

use crate::commands::resolve_entity;
use crate::output::{to_json, OutputFormat};
use crate::{Cli, Session};

#[derive(Args)]
pub struct ShowArgs {
    /// Entity to look up (fuzzy unless --exact)
    pub query: String,

    /// Require an exact name match instead of fuzzy resolution
    #[arg(long)]
    pub exact: bool,
}

pub fn run(args: &ShowArgs, cli: &Cli, session: &mut Session) -> anyhow::Result<bool> {
    let Some(name) = resolve_entity(cli, &session.graph, &args.query, args.exact) else {
        println!("Entity not found: {}", args.query);
        return Ok(false);
    };

    // Resolution only returns names that exist in the store
    let entity = session
        .graph
        .find_exact(&name)
        .ok_or_else(|| anyhow::anyhow!("resolved entity '{}' vanished", name))?;

    if cli.output_format() == OutputFormat::Json {
        println!("{}", to_json(entity));
        return Ok(false);
    }

    println!("Connections of '{}':", entity.name);
    if entity.is_sink() {
        println!("  (no outgoing relationships)");
    } else {
        for relation in &entity.relations {
            println!("  {} -[{}]-> {}", entity.name, relation.label, relation.target);
        }
    }
    Ok(false)
}
