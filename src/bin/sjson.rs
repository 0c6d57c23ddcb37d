use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use is_terminal::IsTerminal;
use steadyjson::{from_value, Serializer, WriterSink};

/// Normalize JSON into deterministic, diffable form.
///
/// sjson reads JSON from stdin or files and rewrites it with a fixed
/// layout: two-space indentation, one object member per line, and simple
/// arrays kept on a single line. Feeding it the same document always
/// produces the same bytes, so its output diffs cleanly and works as
/// golden-test material.
#[derive(Parser, Debug)]
#[command(name = "sjson")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file(s), one JSON document each. If not specified, reads one
    /// document from stdin.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output file. If not specified, writes to stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("sjson: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.files.is_empty() && io::stdin().is_terminal() {
        return Err("no input files and stdin is a terminal (try `sjson --help`)".into());
    }

    // Read input, one document per file
    let documents = if args.files.is_empty() {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        vec![buffer]
    } else {
        let mut contents = Vec::with_capacity(args.files.len());
        for path in &args.files {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
            contents.push(content);
        }
        contents
    };

    // Parse everything up front so a bad document fails before any
    // output is written
    let mut values = Vec::with_capacity(documents.len());
    for document in &documents {
        let parsed: serde_json::Value = serde_json::from_str(document)?;
        values.push(from_value(&parsed)?);
    }

    // Write output
    if let Some(path) = args.output {
        let mut serializer = Serializer::new(String::new());
        for value in &values {
            serializer.serialize(value)?;
        }
        fs::write(&path, serializer.into_sink())
            .map_err(|e| format!("cannot write '{}': {}", path.display(), e))?;
    } else {
        let stdout = io::stdout();
        let mut serializer = Serializer::new(WriterSink::new(stdout.lock()));
        for value in &values {
            serializer.serialize(value)?;
        }
    }

    Ok(())
}
