//! Chart command handlers
//!
//! Implements `charts generate` and `charts list`.

use skunkd_core::stats::TOTAL_HANDS;
use skunkd_docs::charts::{self, CHARTS, ChartOutcome};
use skunkd_docs::escape::group_thousands;

use crate::cli::args::{ChartsGenerateArgs, ChartsListArgs, OutputFormat};
use crate::error::SkunkdError;

/// Write the selected chart pages.
///
/// # Errors
///
/// Returns a usage error for an unknown `--only` name, an I/O error if
/// the output directory cannot be created, and `SkunkdError::ChartsFailed`
/// after the loop if any chart could not be written.
pub fn generate(args: &ChartsGenerateArgs) -> Result<(), SkunkdError> {
    let selected = charts::select_charts(&args.only)?;
    let total = selected.len();

    println!("Generating SKUNK'D scoring statistics charts...");
    println!("  Data: {} hand+starter combinations", group_thousands(TOTAL_HANDS));
    println!();

    let outcomes = charts::generate(
        &selected,
        &args.out_dir,
        &args.plotly_src,
        |i, outcome: &ChartOutcome| {
            if outcome.result.is_ok() {
                println!("  [{}/{total}] {}", i + 1, outcome.spec.file);
            }
        },
    )?;

    let mut failed = 0;
    for outcome in &outcomes {
        if let Err(e) = &outcome.result {
            eprintln!("  failed: {} ({e})", outcome.spec.file);
            failed += 1;
        }
    }
    if failed > 0 {
        return Err(SkunkdError::ChartsFailed { failed, total });
    }

    println!();
    println!("All charts saved to {}/", args.out_dir.display());
    println!("Open any .html file in a browser for interactive exploration.");
    Ok(())
}

/// Print the chart registry.
///
/// # Errors
///
/// Returns a JSON error if the registry cannot be serialized.
pub fn list(args: &ChartsListArgs) -> Result<(), SkunkdError> {
    match args.format {
        OutputFormat::Human => {
            let name_width = CHARTS.iter().map(|c| c.name.len()).max().unwrap_or(0);
            let file_width = CHARTS.iter().map(|c| c.file.len()).max().unwrap_or(0);
            for chart in &CHARTS {
                println!(
                    "{:<name_width$}  {:<file_width$}  {}",
                    chart.name, chart.file, chart.title
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&CHARTS)?);
        }
    }
    Ok(())
}
