//! Command-line interface: argument parsing, configuration, report lines.

use std::path::Path;

use clap::Parser;

use crate::convert::{sniff, ConvertConfig, Outcome};
use crate::error::{ConvertError, InvalidPattern};
use crate::walk::PatternSet;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "crlfix")]
#[command(about = "Find files with \\r\\n line endings and rewrite them to \\n")]
#[command(version)]
#[command(after_help = "\
Examples:
  crlfix '*.tmpl'          report files with \\r\\n endings in the current folder
  crlfix -r '*.tmpl'       report, descending into subfolders
  crlfix -w -r '*.tmpl'    rewrite in place, descending into subfolders")]
pub struct Args {
    /// File pattern or space-separated list of file patterns, e.g. *.tmpl
    #[arg()]
    pub patterns: Vec<String>,

    /// Visit folders recursively
    #[arg(short, long)]
    pub recursive: bool,

    /// Rewrite matching files in place (default: report only)
    #[arg(short, long)]
    pub write: bool,

    /// Report files skipped for not being text
    #[arg(short, long)]
    pub verbose: bool,
}

/// Configuration assembled once from the parsed arguments and passed down
/// into the traversal and the converter.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub patterns: PatternSet,
    pub recursive: bool,
    pub verbose: bool,
    pub convert: ConvertConfig,
}

impl CliConfig {
    pub fn from_args(args: &Args) -> Result<Self, Vec<InvalidPattern>> {
        let patterns = PatternSet::compile(&args.patterns)?;
        Ok(Self {
            patterns,
            recursive: args.recursive,
            verbose: args.verbose,
            convert: ConvertConfig::from_write_flag(args.write),
        })
    }
}

/// Print the per-file outcome line, if the outcome warrants one.
///
/// Column widths match across the prefixes so paths line up.
pub fn report_outcome(path: &Path, outcome: Outcome, verbose: bool) {
    match outcome {
        Outcome::Clean => {}
        Outcome::Found => println!("+ contains \\r\\n:     {}", path.display()),
        Outcome::Converted => println!("+ removed \\r\\n:      {}", path.display()),
        Outcome::NonText(kind) => {
            if verbose {
                println!(
                    "- wrong file type:   {} ({})",
                    path.display(),
                    sniff::describe(kind)
                );
            }
        }
    }
}

/// Print a per-file error. Processing continues with the next file.
pub fn report_error(err: &ConvertError) {
    eprintln!("- {err}");
}
