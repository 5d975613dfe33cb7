use anyhow::Result;
use clap::Parser;
use std::io::{self, IsTerminal};

use jsonpick::config::Config;
use jsonpick::file::loader::{load_json_file, load_json_from_stdin};
use jsonpick::query::resolve;
use jsonpick::render;

/// jsonpick - point queries over JSON documents
#[derive(Parser)]
#[command(name = "jsonpick")]
#[command(version)]
#[command(about = "Load a JSON document and resolve path expressions against it", long_about = None)]
struct Cli {
    /// JSON file to load (omit to read from stdin if piped)
    file: Option<String>,

    /// Path expression to evaluate, e.g. details.age or numbers[3]; repeatable
    #[arg(short, long = "query")]
    query: Vec<String>,

    /// Decimal places for numbers (overrides config)
    #[arg(short, long)]
    precision: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load();
    let precision = cli.precision.unwrap_or(config.precision);

    // Read the document fully into memory before any query runs; the
    // parser itself never touches stdin or the filesystem.
    let tree = if let Some(file_path) = &cli.file {
        load_json_file(file_path)?
    } else if !io::stdin().is_terminal() {
        load_json_from_stdin()?
    } else {
        anyhow::bail!("No input: pass a file argument or pipe JSON on stdin");
    };

    if cli.query.is_empty() {
        eprintln!("Warning: no queries given; pass -q PATH to look up a value");
        println!("{}", render::describe_with_precision(tree.root(), precision));
        return Ok(());
    }

    for path in &cli.query {
        println!("Looking for {}:", path);
        let found = resolve(tree.root(), path);
        println!("{}", render::describe_lookup(found, precision));
    }

    Ok(())
}
