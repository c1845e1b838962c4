//! CLI argument definitions using clap.
//!
//! Sift is a single-operation tool: read sources, resolve directive blocks
//! against the assembled context, write the result. All knobs are flags on
//! one command.

use std::path::PathBuf;

use clap::Parser;

use crate::syntax::SourceType;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Input files; omit (or pass `-`) to read stdin
    pub files: Vec<PathBuf>,

    /// Bind NAME to true, or NAME=VALUE (bool, integer, float or string)
    #[arg(short = 'D', long = "define", value_name = "NAME[=VALUE]")]
    pub defines: Vec<String>,

    /// JSON object file of guard bindings; `-D` entries override it
    #[arg(short = 'c', long, value_name = "PATH", env = "SIFT_CONTEXT")]
    pub context_file: Option<PathBuf>,

    /// Comment syntax to apply
    #[arg(short = 't', long = "type", value_enum, default_value = "auto")]
    pub source_type: SourceType,

    /// Write the result to PATH instead of stdout (single input only)
    #[arg(short, long, value_name = "PATH", conflicts_with = "write")]
    pub output: Option<PathBuf>,

    /// Rewrite input files in place
    #[arg(short, long)]
    pub write: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
