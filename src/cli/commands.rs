use crate::assembler::{extract_with_progress, ExtractEvent};
use crate::config::ExtractConfig;
use crate::error::ExtractResult;
use crate::excel::Workbook;
use crate::types::ExtractionResult;
use crate::writer::write_document;
use colored::Colorize;

const RULE_WIDTH: usize = 60;

/// Execute the extraction: load, flatten every sheet, write JSON, report.
pub fn extract(config: &ExtractConfig, quiet: bool) -> ExtractResult<ExtractionResult> {
    if !quiet {
        println!(
            "{} {}",
            "📖 Loading workbook:".bold().green(),
            config.input.display()
        );
    }

    let mut workbook = Workbook::open(&config.input)?;
    let document = extract_with_progress(&mut workbook, |event| {
        if !quiet {
            print_event(&event);
        }
    })?;

    write_document(&document, &config.output)?;

    if !quiet {
        print_summary(&document, config);
    }
    Ok(document)
}

fn print_event(event: &ExtractEvent<'_>) {
    match event {
        ExtractEvent::WorkbookOpened { sheet_count } => {
            println!("   Found {} sheets", sheet_count);
        }
        ExtractEvent::SheetStarted { name } => {
            println!("\n{} {}", "Processing sheet:".cyan(), name.bright_blue());
        }
        ExtractEvent::SheetExtracted {
            rows, columns, ..
        } => {
            println!(
                "  {} Extracted {} rows × {} columns",
                "✓".green(),
                rows,
                columns
            );
        }
    }
}

fn print_summary(document: &ExtractionResult, config: &ExtractConfig) {
    let rule = "=".repeat(RULE_WIDTH);

    println!("\n{}", rule);
    println!(
        "{}",
        format!("✓ Data saved to: {}", config.output.display())
            .bold()
            .green()
    );
    println!("{}", rule);
    println!("\n{}", "SUMMARY:".bold());
    println!("  Total Sheets: {}", document.summary.total_sheets);
    println!("\n  Sheet Details:");
    for info in &document.summary.sheet_info {
        println!(
            "    • {}: {} rows × {} columns",
            info.name.bright_blue(),
            info.rows,
            info.columns
        );
    }
    println!("{}\n", rule);
}
