use std::path::Path;

use console::style;
use miette::{IntoDiagnostic, Result};

use beauti_tex::check::check_config;
use beauti_tex::config::resolve_config;

pub fn run(config_path: Option<String>, json: bool) -> Result<()> {
    let config = resolve_config(config_path.as_deref().map(Path::new))?;

    if json {
        let rendered = serde_json::to_string_pretty(&config).into_diagnostic()?;
        println!("{rendered}");
    } else {
        println!(
            "{} {}",
            style("Checking configuration with templates at").bold(),
            style(config.template_path().display()).cyan()
        );
        println!("  Class: {} ({}pt)", config.document_class(), config.size());
        println!("  Style: {}", config.style());
        println!("  Folders: {}", config.folders().join(", "));
        println!("  Chapters: {}", config.chapters().join(", "));
        println!("  Packages: {}", config.packages().len());
    }

    let result = check_config(&config);

    if !result.warnings.is_empty() {
        eprintln!("\n{}", style("Warnings:").yellow().bold());
        for w in &result.warnings {
            eprintln!("  {} {}", style("⚠").yellow(), w);
        }
    }

    if !result.is_valid() {
        eprintln!("\n{}", style("Errors:").red().bold());
        for e in &result.errors {
            eprintln!("  {} {}", style("✗").red(), e);
        }
        eprintln!(
            "\n{} Configuration has {} error(s)",
            style("✗").red().bold(),
            result.errors.len()
        );
        std::process::exit(1);
    } else if !json {
        println!("\n{} Configuration is valid!", style("✓").green().bold());
    }

    Ok(())
}
