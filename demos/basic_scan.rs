use year_trade::analysis::MinimalLossFinder;
use year_trade::data::PriceSeries;
use year_trade::report::LossReport;

fn main() {
    // Prices indexed by year, starting at year 1
    let series = PriceSeries::new(vec![7, 1, 5, 3, 6, 4]);

    println!("Yearly prices: {:?}", series.prices());

    // Quadratic pair scan and the linear equivalent agree on every input
    let window = MinimalLossFinder::find(&series);
    assert_eq!(window, MinimalLossFinder::find_fast(&series));

    println!("{}", LossReport::new(window));

    // A series that never drops has no losing window
    let rising = PriceSeries::new(vec![1, 2, 3, 4]);
    println!("{}", LossReport::new(MinimalLossFinder::find(&rising)));
}
