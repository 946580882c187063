//! Batch statistics reporting.

use console::style;

use crate::download::BatchState;

/// Print statistics for the whole run.
pub fn print_batch_stats(state: &BatchState) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Batch Statistics:").bold());
    println!("  Tweets processed: {}", state.total_processed());
    println!("  Downloaded:       {}", state.downloaded_count);
    println!("  Skipped:          {} (already on disk)", state.skipped_count);
    if state.failed_count > 0 {
        println!("  Failed:           {}", style(state.failed_count).red());
    }
    println!("{}", style("═".repeat(50)).dim());
}
