//! Minimal-loss trade window search
//!
//! Finds the buy year / sell year pair with the worst loss in a yearly
//! price series. Only pairs where the later price is strictly lower than
//! the earlier price qualify; among those, the pair with the most negative
//! price difference wins, and ties go to the earliest pair in (buy, sell)
//! order.

use crate::data::PriceSeries;
use serde::{Deserialize, Serialize};

/// A buy/sell year pair and the loss realized by trading it.
///
/// Years are 1-based, `buy_year < sell_year`, and `loss` is the (negative)
/// difference between the sell-year price and the buy-year price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeWindow {
    /// Year the position is opened (1-based)
    pub buy_year: usize,
    /// Year the position is closed (1-based)
    pub sell_year: usize,
    /// Sell price minus buy price, always negative
    pub loss: i64,
}

/// Finder for the trade window with the minimal loss
#[derive(Debug)]
pub struct MinimalLossFinder;

impl MinimalLossFinder {
    /// Find the trade window with the minimal loss by scanning every pair.
    ///
    /// Checks all `(i, j)` index pairs with `i < j`. A pair qualifies only
    /// when the price at `j` is strictly lower than the price at `i`; the
    /// running best is replaced only on strict improvement, so the earliest
    /// qualifying pair wins when several share the minimal loss.
    ///
    /// Returns `None` when no qualifying pair exists, which covers series
    /// shorter than two years and series that never drop.
    ///
    /// Runs in O(n²) time and O(1) extra space.
    ///
    /// # Example
    ///
    /// ```
    /// use year_trade::analysis::MinimalLossFinder;
    /// use year_trade::data::PriceSeries;
    ///
    /// let series = PriceSeries::new(vec![3, 1]);
    /// let window = MinimalLossFinder::find(&series).unwrap();
    /// assert_eq!(window.buy_year, 1);
    /// assert_eq!(window.sell_year, 2);
    /// assert_eq!(window.loss, -2);
    ///
    /// // A series that never drops has no losing window
    /// let rising = PriceSeries::new(vec![1, 2, 3, 4]);
    /// assert!(MinimalLossFinder::find(&rising).is_none());
    /// ```
    pub fn find(series: &PriceSeries) -> Option<TradeWindow> {
        let prices = series.prices();
        let mut best: Option<TradeWindow> = None;

        for i in 0..prices.len() {
            for j in (i + 1)..prices.len() {
                if prices[j] < prices[i] {
                    let loss = prices[j] - prices[i];
                    if best.map_or(true, |b| loss < b.loss) {
                        best = Some(TradeWindow {
                            buy_year: i + 1,
                            sell_year: j + 1,
                            loss,
                        });
                    }
                }
            }
        }

        best
    }

    /// Linear-time equivalent of [`find`](Self::find).
    ///
    /// Tracks the running peak price while walking the series once. The
    /// candidate at each year is checked against the peak before the peak
    /// may advance, and both the peak and the best window update only on
    /// strict improvement, which reproduces the pair-scan tie-breaking
    /// exactly: the peak stays at its earliest occurrence, and the first
    /// year reaching the minimal loss keeps it.
    pub fn find_fast(series: &PriceSeries) -> Option<TradeWindow> {
        let prices = series.prices();
        let mut best: Option<TradeWindow> = None;
        let mut peak = 0;

        for j in 1..prices.len() {
            if prices[j] < prices[peak] {
                let loss = prices[j] - prices[peak];
                if best.map_or(true, |b| loss < b.loss) {
                    best = Some(TradeWindow {
                        buy_year: peak + 1,
                        sell_year: j + 1,
                        loss,
                    });
                }
            }

            if prices[j] > prices[peak] {
                peak = j;
            }
        }

        best
    }
}
