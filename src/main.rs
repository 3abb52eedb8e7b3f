//! Mdlite - a compiler for a restricted Markdown dialect.
//!
//! This binary is the thin I/O wrapper around the library pipeline: it
//! acquires input text (files or stdin), runs tokenize → parse → generate,
//! and writes the result. Each document is compiled independently, so one
//! failing input does not stop the rest.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use mdlite_core::Result;
use mdlite_parser::{tokenize, Parser};
use mdlite_render::generate;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Set up logging
    setup_logging(&cli.log_level);
    info!("Mdlite v{}", env!("CARGO_PKG_VERSION"));

    // Run the main application
    match run(&cli) {
        Ok(0) => {}
        Ok(failed) => {
            error!("{} document(s) failed to compile", failed);
            std::process::exit(1);
        }
        Err(e) => {
            error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic. Returns the number of documents that failed;
/// their output is skipped, the rest compile normally.
fn run(cli: &Cli) -> io::Result<usize> {
    let mut outputs = Vec::new();
    let mut failed = 0;

    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        match compile(&text, &cli.emit) {
            Ok(out) => outputs.push(out),
            Err(e) => {
                error!("<stdin>: {}", e);
                failed += 1;
            }
        }
    } else {
        for path in &cli.files {
            info!("Processing file: {}", path.display());
            match compile_file(path, &cli.emit) {
                Ok(out) => outputs.push(out),
                Err(e) => {
                    error!("{}: {}", path.display(), e);
                    failed += 1;
                }
            }
        }
    }

    // Outputs of multiple documents are written in argument order,
    // newline-separated.
    let combined = outputs.join("\n");
    match &cli.output {
        Some(path) => fs::write(path, combined)?,
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(combined.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(failed)
}

/// Read one file and compile it.
fn compile_file(path: &Path, emit: &str) -> Result<String> {
    let text = fs::read_to_string(path)?;
    compile(&text, emit)
}

/// Run the pipeline over one document, stopping early when an intermediate
/// stage was requested with `--emit`.
fn compile(text: &str, emit: &str) -> Result<String> {
    let tokens = tokenize(text)?;
    debug!("Tokenized {} tokens", tokens.len());
    if emit == "tokens" {
        return dump_json(&tokens);
    }

    let blocks = Parser::new(tokens).parse()?;
    debug!("Parsed {} blocks", blocks.len());
    if emit == "ast" {
        return dump_json(&blocks);
    }

    Ok(generate(&blocks))
}

/// Pretty-print an intermediate stage as JSON.
fn dump_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value).map_err(io::Error::from)?)
}
