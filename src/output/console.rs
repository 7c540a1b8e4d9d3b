//! Console output utilities.

use console::style;

use crate::config::Config;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Wallhaven Sync                                    ║
║     Curated wallpaper sets from the Wallhaven API     ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(config: &Config) {
    let filters = &config.filters;

    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Query:     {}", config.search.query);
    println!(
        "  Purity:    {} (sorting {} {})",
        config.search.purity, config.search.sorting, config.search.order
    );
    println!(
        "  Filters:   min {}x{}, aspect {}..={}",
        filters.min_width, filters.min_height, filters.min_aspect, filters.max_aspect
    );
    if config.search.page_limit > 0 {
        println!("  Pages:     at most {}", config.search.page_limit);
    }
    println!("  Directory: {}", config.download.destination.display());
    println!();
}
