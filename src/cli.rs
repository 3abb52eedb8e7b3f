//! Command-line interface for mdlite.

use clap::Parser;
use std::path::PathBuf;

/// Mdlite - a compiler for a restricted Markdown dialect.
///
/// Converts documents through a tokenize / parse / generate pipeline and
/// writes the resulting HTML (or an intermediate stage as JSON).
#[derive(Parser, Debug)]
#[command(
    name = "mdl",
    author = "Mdlite Contributors",
    version,
    about = "Compile a restricted Markdown dialect to HTML",
    after_help = "Repository: https://github.com/mdlite/mdlite-rs\n\n\
                  Examples:\n  \
                  cat post.md | mdl\n  \
                  mdl post.md -o post.html\n  \
                  mdl --emit ast post.md"
)]
pub struct Cli {
    /// Input files to compile (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pipeline stage to emit: final HTML, or an intermediate stage as JSON
    #[arg(long = "emit", default_value = "html", value_parser = ["html", "tokens", "ast"])]
    pub emit: String,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}
