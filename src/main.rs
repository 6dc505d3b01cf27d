use std::path::Path;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use crlfix::cancel::CancelToken;
use crlfix::cli::{self, Args, CliConfig};
use crlfix::convert::Converter;
use crlfix::walk;

fn main() -> Result<()> {
    let args = Args::parse();

    // Bare invocation prints usage and exits clean, like --help.
    if args.patterns.is_empty() {
        Args::command().print_help()?;
        return Ok(());
    }

    let config = match CliConfig::from_args(&args) {
        Ok(config) => config,
        Err(errors) => {
            for err in &errors {
                eprintln!("{err}");
            }
            std::process::exit(1);
        }
    };

    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || handler_token.cancel())?;

    run(&config, &cancel);
    Ok(())
}

fn run(config: &CliConfig, cancel: &CancelToken) {
    let converter = Converter::new(config.convert.clone(), cancel.clone());

    for candidate in walk::candidate_files(Path::new("."), config.recursive, &config.patterns) {
        let path = match candidate {
            Ok(path) => path,
            Err(err) => {
                eprintln!("- {err}");
                continue;
            }
        };
        match converter.process(&path) {
            Ok(outcome) => cli::report_outcome(&path, outcome, config.verbose),
            Err(err) => {
                cli::report_error(&err);
                if err.is_canceled() {
                    break;
                }
            }
        }
    }
}
