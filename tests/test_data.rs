use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;
use year_trade::data::{DataLoader, PriceSeries};
use year_trade::error::AnalysisError;

#[test]
fn test_parse_prices() {
    let series = DataLoader::parse_prices("7 1 5 3 6 4").unwrap();
    assert_eq!(series, PriceSeries::new(vec![7, 1, 5, 3, 6, 4]));

    // Extra whitespace and negatives are fine
    let series = DataLoader::parse_prices("  -2\t10   3 ").unwrap();
    assert_eq!(series.prices(), &[-2, 10, 3]);

    // An empty line is an empty series
    let series = DataLoader::parse_prices("").unwrap();
    assert!(series.is_empty());
}

#[test]
fn test_parse_prices_rejects_bad_tokens() {
    let err = DataLoader::parse_prices("7 one 5").unwrap_err();
    assert!(matches!(err, AnalysisError::InputFormat(_)));
    assert!(err.to_string().contains("one"));
}

#[test]
fn test_parse_counted() {
    let series = DataLoader::parse_counted("6\n", "7 1 5 3 6 4").unwrap();
    assert_eq!(series.year_count(), 6);

    let err = DataLoader::parse_counted("3", "7 1").unwrap_err();
    assert!(matches!(err, AnalysisError::InputFormat(_)));

    let err = DataLoader::parse_counted("many", "7 1").unwrap_err();
    assert!(matches!(err, AnalysisError::InputFormat(_)));
}

#[test]
fn test_from_csv_detects_price_column() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "year,price").unwrap();
    writeln!(file, "1,7").unwrap();
    writeln!(file, "2,1").unwrap();
    writeln!(file, "3,5").unwrap();

    let series = DataLoader::from_csv(file.path()).unwrap();
    assert_eq!(series.prices(), &[7, 1, 5]);
}

#[test]
fn test_from_csv_accepts_close_column() {
    let data = "date,close,volume\n2020,10,100\n2021,4,200\n";
    let series = DataLoader::from_reader(data.as_bytes()).unwrap();
    assert_eq!(series.prices(), &[10, 4]);
}

#[test]
fn test_from_csv_falls_back_to_last_column() {
    let data = "a,b\n1,9\n2,8\n";
    let series = DataLoader::from_reader(data.as_bytes()).unwrap();
    assert_eq!(series.prices(), &[9, 8]);
}

#[test]
fn test_from_csv_rejects_non_integer_prices() {
    let data = "price\n10\nnot-a-number\n";
    let err = DataLoader::from_reader(data.as_bytes()).unwrap_err();
    assert!(matches!(err, AnalysisError::InputFormat(_)));
    assert!(err.to_string().contains("Row 2"));
}

#[test]
fn test_price_series_year_indexing() {
    let series = PriceSeries::new(vec![7, 1, 5]);

    assert_eq!(series.price(1), Some(7));
    assert_eq!(series.price(3), Some(5));
    assert_eq!(series.price(0), None);
    assert_eq!(series.price(4), None);
    assert_eq!(series.len(), 3);
    assert!(!series.is_empty());
}
