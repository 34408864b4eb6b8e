//! picklist - populate a sheet column and bind it as a dropdown list.

use anyhow::{Context, Result};
use picklist_core::{CellRef, GridSheet, ListPopulator, Sheet, Value, storage};
use std::env;
use std::path::PathBuf;

fn print_usage() {
    eprintln!("Usage: picklist [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FILE]                  CSV file to load as the starting sheet");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -v, --values <LIST>     Comma-separated dropdown values (default: 1-9)");
    eprintln!("  -a, --anchor <CELL>     Top cell of the list column (default: A1)");
    eprintln!("  -t, --target <CELL>     Cell to attach the dropdown rule to (default: B1)");
    eprintln!("  -o, --output <FILE>     Write the resulting sheet as CSV");
    eprintln!("  -h, --help              Print help");
}

fn parse_values(spec: &str) -> Vec<Value> {
    spec.split(',').map(Value::from_field).collect()
}

fn run(
    file_path: Option<PathBuf>,
    values: Option<Vec<Value>>,
    anchor: &str,
    target: &str,
    output: Option<PathBuf>,
) -> Result<()> {
    let anchor = CellRef::parse(anchor).with_context(|| format!("bad anchor cell {anchor:?}"))?;
    let target = CellRef::parse(target).with_context(|| format!("bad target cell {target:?}"))?;

    let values = values.unwrap_or_else(|| (1..=9i64).map(Value::from).collect());
    let populator = ListPopulator::new(values, anchor, target)?;

    let mut sheet = match &file_path {
        Some(path) => {
            storage::read_csv(path).with_context(|| format!("cannot read {}", path.display()))?
        }
        None => GridSheet::new(),
    };

    populator.populate(&mut sheet)?;

    let range = populator.source_range();
    let written: Vec<String> = populator.values().iter().map(|v| v.to_string()).collect();
    println!(
        "Wrote {} values to {}: {}",
        populator.values().len(),
        range,
        written.join(", ")
    );

    let rule = sheet
        .validation(&populator.target())
        .context("no rule attached after populate")?;
    let allowed: Vec<String> = rule.allowed().iter().map(|v| v.to_string()).collect();
    println!("{} accepts: {}", populator.target(), allowed.join(", "));

    if let Some(path) = output {
        storage::write_csv(&path, &sheet)
            .with_context(|| format!("cannot write {}", path.display()))?;
        println!("Sheet written to {}", path.display());
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut file_path: Option<PathBuf> = None;
    let mut values: Option<Vec<Value>> = None;
    let mut anchor = "A1".to_string();
    let mut target = "B1".to_string();
    let mut output: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-v" | "--values" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --values requires a comma-separated list");
                    std::process::exit(1);
                }
                values = Some(parse_values(&args[i]));
            }
            "-a" | "--anchor" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --anchor requires a cell reference");
                    std::process::exit(1);
                }
                anchor = args[i].to_string();
            }
            "-t" | "--target" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --target requires a cell reference");
                    std::process::exit(1);
                }
                target = args[i].to_string();
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires a file path");
                    std::process::exit(1);
                }
                output = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => {
                if file_path.is_none() {
                    file_path = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    if let Err(e) = run(file_path, values, &anchor, &target, output) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
