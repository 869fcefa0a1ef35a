//! Utility functions for the year_trade crate

use crate::data::PriceSeries;
use rand::Rng;

/// Generate a random-walk price series for testing purposes
///
/// # Arguments
/// * `num_years` - Number of yearly prices to generate
/// * `starting_price` - Price for the first year
/// * `max_step` - Largest year-over-year move in either direction
///
/// # Returns
/// * A `PriceSeries` of `num_years` prices, floored at 1
pub fn generate_test_data(num_years: usize, starting_price: i64, max_step: i64) -> PriceSeries {
    let mut rng = rand::rng();
    let mut prices = Vec::with_capacity(num_years);
    let mut current = starting_price;

    for _ in 0..num_years {
        prices.push(current);

        let step = rng.random_range(-max_step..=max_step);
        current = (current + step).max(1);
    }

    PriceSeries::new(prices)
}
