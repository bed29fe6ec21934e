use clap::Parser;
use std::path::PathBuf;
use workbook_extract::cli;
use workbook_extract::config::{ExtractConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
use workbook_extract::logging;

#[derive(Parser, Debug)]
#[command(name = "workbook-extract")]
#[command(version)]
#[command(about = "Extract every sheet of a spreadsheet workbook into a single JSON document")]
#[command(long_about = "Workbook Extract - spreadsheet to JSON

Reads every sheet of a workbook (xlsx, xlsm, xlsb, xls, ods) with formulas
resolved to their last computed values, and writes one JSON document:

  {
    \"sheets\":  [{\"name\", \"data\": [[...]], \"rows\", \"columns\"}, ...],
    \"summary\": {\"total_sheets\", \"sheet_info\": [{\"name\", \"rows\", \"columns\"}]}
  }

Cells become \"\" (blank), a JSON number, or a string. The output directory
is created when missing and an existing file is overwritten.

EXAMPLES:
  workbook-extract
  workbook-extract -i budget.xlsx -o out/budget.json
  WORKBOOK_EXTRACT_INPUT=model.ods workbook-extract --quiet")]
struct Cli {
    /// Workbook to read
    #[arg(short, long, default_value = DEFAULT_INPUT, env = "WORKBOOK_EXTRACT_INPUT")]
    input: PathBuf,

    /// JSON file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT, env = "WORKBOOK_EXTRACT_OUTPUT")]
    output: PathBuf,

    /// Suppress the progress report
    #[arg(short, long)]
    quiet: bool,

    /// Emit debug diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logging::init_logging(args.verbose);

    let config = ExtractConfig::new(args.input, args.output);
    cli::extract(&config, args.quiet)?;

    Ok(())
}
