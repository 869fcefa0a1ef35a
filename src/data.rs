//! Yearly price series handling and data loading

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// An ordered sequence of yearly prices.
///
/// The position in the sequence denotes the year: 0-based internally,
/// 1-based in reports. The series is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSeries {
    prices: Vec<i64>,
}

/// Data loader for yearly price series
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a price series from a CSV file.
    ///
    /// Expects a headered CSV. The price column is detected by name
    /// ("price", then "close"); if neither matches, the last column is used.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<PriceSeries> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a price series from any CSV reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<PriceSeries> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let price_idx = Self::detect_price_column(&headers)?;

        let mut prices = Vec::new();
        for (row, record) in csv_reader.records().enumerate() {
            let record = record?;
            let cell = record.get(price_idx).ok_or_else(|| {
                AnalysisError::DataError(format!(
                    "Row {} has no value in price column {}",
                    row + 1,
                    price_idx + 1
                ))
            })?;

            let price = cell.trim().parse::<i64>().map_err(|_| {
                AnalysisError::InputFormat(format!(
                    "Row {}: '{}' is not an integer price",
                    row + 1,
                    cell
                ))
            })?;
            prices.push(price);
        }

        Ok(PriceSeries::new(prices))
    }

    /// Parse a whitespace-separated line of integer prices.
    pub fn parse_prices(text: &str) -> Result<PriceSeries> {
        let mut prices = Vec::new();
        for token in text.split_whitespace() {
            let price = token.parse::<i64>().map_err(|_| {
                AnalysisError::InputFormat(format!("'{}' is not an integer price", token))
            })?;
            prices.push(price);
        }

        Ok(PriceSeries::new(prices))
    }

    /// Parse the counted input protocol: a year count on one line, the
    /// prices on the next. The count must match the number of price tokens.
    pub fn parse_counted(count_line: &str, prices_line: &str) -> Result<PriceSeries> {
        let expected = count_line.trim().parse::<usize>().map_err(|_| {
            AnalysisError::InputFormat(format!(
                "'{}' is not a valid year count",
                count_line.trim()
            ))
        })?;

        let series = Self::parse_prices(prices_line)?;
        if series.len() != expected {
            return Err(AnalysisError::InputFormat(format!(
                "Expected {} prices, got {}",
                expected,
                series.len()
            )));
        }

        Ok(series)
    }

    /// Detect the price column in a CSV header row
    fn detect_price_column(headers: &csv::StringRecord) -> Result<usize> {
        if headers.is_empty() {
            return Err(AnalysisError::DataError(
                "CSV input has no columns".to_string(),
            ));
        }

        for keyword in ["price", "close"] {
            for (idx, name) in headers.iter().enumerate() {
                if name.to_lowercase().contains(keyword) {
                    return Ok(idx);
                }
            }
        }

        // Fall back to the last column
        Ok(headers.len() - 1)
    }
}

impl PriceSeries {
    /// Create a new price series from a vector of prices
    pub fn new(prices: Vec<i64>) -> Self {
        Self { prices }
    }

    /// Get the prices as a slice
    pub fn prices(&self) -> &[i64] {
        &self.prices
    }

    /// Get the price observed in the given year (1-based)
    pub fn price(&self, year: usize) -> Option<i64> {
        if year == 0 {
            return None;
        }
        self.prices.get(year - 1).copied()
    }

    /// Number of years covered by the series
    pub fn year_count(&self) -> usize {
        self.prices.len()
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Get the length of the series
    pub fn len(&self) -> usize {
        self.prices.len()
    }
}

impl From<Vec<i64>> for PriceSeries {
    fn from(prices: Vec<i64>) -> Self {
        Self::new(prices)
    }
}
