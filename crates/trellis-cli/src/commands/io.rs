//! Import/Export commands

use std::path::PathBuf;

use clap::Args;

use crate::format;
use crate::{Cli, Session};

#[derive(Args)]
pub struct ImportArgs {
    /// Input file (pipe-delimited triples), or "-" for stdin batch input
    // Distinct arg id so the global --file data flag does not capture it
    #[arg(id = "input", value_name = "INPUT")]
    pub input: PathBuf,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct DotArgs {
    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run_import(args: &ImportArgs, _cli: &Cli, session: &mut Session) -> anyhow::Result<bool> {
    tracing::info!("Importing from {:?}", args.input);

    let content = if args.input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&args.input)?
    };
    let report = format::load_into(&mut session.graph, &content);

    if report.nodes > 0 {
        println!(
            "Imported {} relations and {} entities from {:?} (skipped {})",
            report.loaded, report.nodes, args.input, report.skipped
        );
    } else {
        println!(
            "Imported {} relations from {:?} (skipped {})",
            report.loaded, args.input, report.skipped
        );
    }
    Ok(report.loaded > 0 || report.nodes > 0)
}

pub fn run_export(args: &ExportArgs, _cli: &Cli, session: &Session) -> anyhow::Result<bool> {
    let content = format::to_pipe(&session.graph);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &content)?;
            println!("Exported {} relations to {:?}", session.graph.relation_count(), path);
        }
        None => print!("{}", content),
    }
    Ok(false)
}

pub fn run_dot(args: &DotArgs, _cli: &Cli, session: &Session) -> anyhow::Result<bool> {
    let content = format::to_dot(&session.graph);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &content)?;
            println!("Exported DOT graph to {:?}", path);
            println!("Render with: dot -Tpng {} -o graph.png", path.display());
        }
        None => print!("{}", content),
    }
    Ok(false)
}
