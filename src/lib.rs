//! # Year Trade
//!
//! A Rust library for analyzing yearly price series and finding the trade
//! window with the worst (minimal) loss.
//!
//! ## Features
//!
//! - Yearly price series handling with 1-based year indexing
//! - Minimal-loss window search (quadratic scan plus a linear equivalent)
//! - Data loading from CSV files and whitespace-separated text input
//! - Human-readable and JSON reporting
//!
//! ## Quick Start
//!
//! ```
//! use year_trade::analysis::MinimalLossFinder;
//! use year_trade::data::PriceSeries;
//! use year_trade::report::LossReport;
//!
//! // Prices indexed by year (year 1 first)
//! let series = PriceSeries::new(vec![7, 1, 5, 3, 6, 4]);
//!
//! // Find the buy/sell pair with the worst loss
//! let window = MinimalLossFinder::find(&series).expect("series has a losing pair");
//! assert_eq!(window.buy_year, 1);
//! assert_eq!(window.sell_year, 2);
//! assert_eq!(window.loss, -6);
//!
//! // Format the result
//! let report = LossReport::new(Some(window));
//! assert_eq!(
//!     report.to_string(),
//!     "Buy in year 1, sell in year 2, loss = -6"
//! );
//! ```

pub mod analysis;
pub mod data;
pub mod error;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use crate::analysis::{MinimalLossFinder, TradeWindow};
pub use crate::data::{DataLoader, PriceSeries};
pub use crate::error::AnalysisError;
pub use crate::report::LossReport;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
