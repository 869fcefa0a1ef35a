use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use year_trade::analysis::MinimalLossFinder;
use year_trade::data::{DataLoader, PriceSeries};
use year_trade::error::Result;
use year_trade::report::LossReport;

fn read_series_from_stdin() -> Result<PriceSeries> {
    print!("enter number of years: ");
    io::stdout().flush()?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let count_line = lines.next().unwrap_or_else(|| Ok(String::new()))?;
    let prices_line = lines.next().unwrap_or_else(|| Ok(String::new()))?;

    DataLoader::parse_counted(&count_line, &prices_line)
}

fn run(file: Option<&str>, json: bool) -> Result<()> {
    let series = match file {
        Some(path) => DataLoader::from_csv(path)?,
        None => read_series_from_stdin()?,
    };

    let report = LossReport::new(MinimalLossFinder::find(&series));

    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report);
    }

    Ok(())
}

fn main() {
    let mut json = false;
    let mut file: Option<String> = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--help" | "-h" => {
                println!("Usage: minimal_loss [--json] [PRICES_CSV]");
                println!();
                println!("Reads yearly prices from PRICES_CSV, or interactively from stdin");
                println!("(a year count line followed by a line of prices), and reports the");
                println!("buy/sell year pair with the worst loss.");
                return;
            }
            other => file = Some(other.to_string()),
        }
    }

    if let Err(e) = run(file.as_deref(), json) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
