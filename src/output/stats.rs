//! Statistics reporting.

use console::style;

use crate::sync::SyncReport;

/// Print the end-of-run summary.
pub fn print_sync_summary(report: &SyncReport) {
    let meta = &report.metadata;

    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Sync Summary:").bold());
    println!("  Pages fetched:  {}", meta.pages_fetched);
    println!("  Reported:       {}", meta.total_reported);
    println!("  Seen:           {}", meta.wallpapers_seen);
    println!("  Accepted:       {}", meta.wallpapers_unique);

    match &report.outcome {
        Some(outcome) => {
            println!("  Downloaded:     {}", style(outcome.downloaded).green());
            println!("  Skipped:        {} (already present)", style(outcome.skipped).yellow());
            if outcome.failed > 0 {
                println!("  Failed:         {}", style(outcome.failed).red());
            }
        }
        None => println!("  Downloads:      skipped (metadata only)"),
    }

    if let Some(pruned) = report.pruned {
        println!("  Pruned:         {}", pruned);
    }
    println!("{}", style("═".repeat(50)).dim());
}
