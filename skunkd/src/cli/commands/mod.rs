//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod catalog;
pub mod charts;
pub mod completions;
pub mod version;

use crate::cli::args::{CatalogSubcommand, ChartsSubcommand, Cli, Commands};
use crate::error::SkunkdError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), SkunkdError> {
    match cli.command {
        Commands::Catalog(cmd) => match cmd.subcommand {
            CatalogSubcommand::Build(args) => catalog::build(&args),
            CatalogSubcommand::Validate(args) => catalog::validate(&args),
            CatalogSubcommand::Query(args) => catalog::query(&args),
        },
        Commands::Charts(cmd) => match cmd.subcommand {
            ChartsSubcommand::Generate(args) => charts::generate(&args),
            ChartsSubcommand::List(args) => charts::list(&args),
        },
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}
