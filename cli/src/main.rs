//! sheetload CLI - spreadsheet table loading and range extraction
//!
//! A command-line tool for loading header-mapped tables and raw cell
//! rectangles from spreadsheet files.

use clap::{Parser, Subcommand};
use colored::*;
use sheetload::{load_table, sheet_names, slice_range, CellValue, Table};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Load spreadsheet tables and cell ranges
#[derive(Parser)]
#[command(
    name = "sheetload",
    version,
    about = "Load spreadsheet tables and cell ranges",
    long_about = "sheetload - spreadsheet table loading and range extraction.\n\n\
                  Loads a sheet into a column-oriented table keyed by its header row,\n\
                  or reads a raw rectangle of cells by A1 address."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a sheet as a header-mapped table
    Table {
        /// Input file path
        input: PathBuf,

        /// Sheet index (0-based)
        #[arg(short, long, default_value = "0")]
        sheet: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Read a rectangle of cells between two A1 addresses
    Slice {
        /// Input file path
        input: PathBuf,

        /// Top-left cell address (inclusive), e.g. A1
        top_left: String,

        /// Bottom-right cell address (inclusive), e.g. C10
        bottom_right: String,

        /// Sheet index (0-based)
        #[arg(short, long, default_value = "0")]
        sheet: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show workbook information
    Info {
        /// Input file path
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Table {
            input,
            sheet,
            json,
            output,
        } => {
            let table = load_table(&input, sheet)?;

            match table {
                Some(table) => {
                    let rendered = if json {
                        serde_json::to_string_pretty(&table)?
                    } else {
                        render_table(&table)
                    };
                    write_output(output.as_ref(), &rendered)?;
                }
                None => {
                    println!(
                        "{} Sheet {} has no table (a header row and at least one data row are required)",
                        "!".yellow().bold(),
                        sheet
                    );
                }
            }
        }

        Commands::Slice {
            input,
            top_left,
            bottom_right,
            sheet,
            json,
            output,
        } => {
            let rect = slice_range(&input, sheet, &top_left, &bottom_right)?;

            let rendered = if json {
                serde_json::to_string_pretty(&rect)?
            } else {
                render_rect(&rect)
            };
            write_output(output.as_ref(), &rendered)?;
        }

        Commands::Info { input } => {
            let names = sheet_names(&input)?;

            println!("{}", "Workbook Information".cyan().bold());
            println!("{}", "─".repeat(40));
            println!(
                "{}: {}",
                "File".bold(),
                input.file_name().unwrap_or_default().to_string_lossy()
            );
            println!("{}: {}", "Sheets".bold(), names.len());

            for (index, name) in names.iter().enumerate() {
                match load_table(&input, index)? {
                    Some(table) => println!(
                        "  [{}] {} - {} rows x {} columns",
                        index,
                        name,
                        table.row_count(),
                        table.column_count()
                    ),
                    None => println!("  [{}] {} - no table", index, name),
                }
            }
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

/// Render a table as aligned text, header first.
fn render_table(table: &Table) -> String {
    let names = table.column_names();

    // Column width = widest of header and values
    let widths: Vec<usize> = names
        .iter()
        .map(|name| {
            let value_width = table
                .column(name)
                .into_iter()
                .flatten()
                .map(|v| v.len())
                .max()
                .unwrap_or(0);
            name.len().max(value_width)
        })
        .collect();

    let mut out = String::new();
    for (name, width) in names.iter().zip(&widths) {
        out.push_str(&format!("{:<1$}  ", name, *width));
    }
    out.push('\n');
    for width in &widths {
        out.push_str(&"─".repeat(*width));
        out.push_str("  ");
    }
    out.push('\n');

    for row in 0..table.row_count() {
        for (name, width) in names.iter().zip(&widths) {
            let value = table
                .column(name)
                .and_then(|values| values.get(row))
                .map(String::as_str)
                .unwrap_or("");
            out.push_str(&format!("{:<1$}  ", value, *width));
        }
        out.push('\n');
    }

    out
}

/// Render a sliced rectangle as tab-separated text, absent cells as "-".
fn render_rect(rect: &[Vec<CellValue>]) -> String {
    let mut out = String::new();
    for row in rect {
        let cells: Vec<&str> = row.iter().map(|c| c.as_str().unwrap_or("-")).collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    out
}

fn print_version() {
    println!("{} {}", "sheetload".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Spreadsheet table loading and range extraction");
    println!();
    println!("Supported formats: XLSX, XLS, XLSB, ODS (via calamine)");
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            println!("{} Written to {}", "✓".green().bold(), p.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}
