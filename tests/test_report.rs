use pretty_assertions::assert_eq;
use year_trade::analysis::{MinimalLossFinder, TradeWindow};
use year_trade::data::PriceSeries;
use year_trade::report::LossReport;

#[test]
fn test_report_line_for_found_window() {
    let window = TradeWindow {
        buy_year: 1,
        sell_year: 2,
        loss: -6,
    };
    let report = LossReport::new(Some(window));

    assert_eq!(report.to_string(), "Buy in year 1, sell in year 2, loss = -6");
    assert_eq!(report.window(), Some(&window));
}

#[test]
fn test_report_line_when_no_window_exists() {
    let report = LossReport::new(None);

    assert_eq!(report.to_string(), "No losing trade window found");
    assert_eq!(report.window(), None);
}

#[test]
fn test_report_json_shape() {
    let series = PriceSeries::new(vec![7, 1, 5, 3, 6, 4]);
    let report = LossReport::new(MinimalLossFinder::find(&series));

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["window"]["buy_year"], 1);
    assert_eq!(json["window"]["sell_year"], 2);
    assert_eq!(json["window"]["loss"], -6);

    let empty = LossReport::new(None);
    let json: serde_json::Value = serde_json::from_str(&empty.to_json().unwrap()).unwrap();
    assert!(json["window"].is_null());
}

#[test]
fn test_report_from_end_to_end_search() {
    let series = PriceSeries::new(vec![1, 2, 3, 4]);
    let report = LossReport::new(MinimalLossFinder::find(&series));

    assert_eq!(report.to_string(), "No losing trade window found");
}
