//! certlint CLI entry point

use certlint::cli::common::EXIT_ERROR;
use certlint::cli::{Cli, Command};
use certlint::{default_registry, lints, logging};
use clap::Parser;
use std::process;

fn main() {
    logging::init_tracing();
    let cli = Cli::parse();

    // A registration failure means the lint set is broken; nothing can run.
    let registry = default_registry();
    if let Err(e) = lints::register_builtin_lints(&registry) {
        eprintln!("Error: {}", e);
        process::exit(EXIT_ERROR);
    }

    let config = cli.config.as_deref();
    let exit_code = match cli.command {
        Command::Lint(args) => certlint::cli::lint::run_lint(&registry, config, &args),
        Command::List { format, filter } => {
            certlint::cli::list::run_list(&registry, config, format, &filter)
        }
    };

    process::exit(exit_code);
}
