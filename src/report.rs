//! Report formatting for minimal-loss results

use crate::analysis::TradeWindow;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Report over an optional trade window.
///
/// Wraps the outcome of a minimal-loss search so that "no losing window"
/// renders as an explicit message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LossReport {
    window: Option<TradeWindow>,
}

impl LossReport {
    /// Create a report from a search result
    pub fn new(window: Option<TradeWindow>) -> Self {
        Self { window }
    }

    /// Get the trade window, if one was found
    pub fn window(&self) -> Option<&TradeWindow> {
        self.window.as_ref()
    }

    /// Serialize the report to a JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            crate::error::AnalysisError::DataError(format!("JSON serialization failed: {}", e))
        })
    }
}

impl std::fmt::Display for LossReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.window {
            Some(w) => write!(
                f,
                "Buy in year {}, sell in year {}, loss = {}",
                w.buy_year, w.sell_year, w.loss
            ),
            None => write!(f, "No losing trade window found"),
        }
    }
}
