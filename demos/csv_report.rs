use std::fs::File;
use std::io::Write;

use year_trade::analysis::MinimalLossFinder;
use year_trade::data::DataLoader;
use year_trade::report::LossReport;
use year_trade::utils::generate_test_data;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate a random-walk series and write it out as CSV
    let series = generate_test_data(25, 100, 15);

    let csv_path = std::env::temp_dir().join("yearly_prices.csv");
    let mut file = File::create(&csv_path)?;
    writeln!(file, "year,price")?;
    for (i, price) in series.prices().iter().enumerate() {
        writeln!(file, "{},{}", i + 1, price)?;
    }

    println!("Wrote {} yearly prices to {}", series.len(), csv_path.display());

    // Load it back and report the worst trade window
    let loaded = DataLoader::from_csv(&csv_path)?;
    assert_eq!(loaded, series);

    let report = LossReport::new(MinimalLossFinder::find(&loaded));
    println!("{}", report);
    println!("{}", report.to_json()?);

    Ok(())
}
