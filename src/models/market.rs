use serde::{Deserialize, Serialize};

/// One dated point of a commodity price series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
}

/// Historical price series for a commodity in a province.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PriceHistory {
    pub description: String,
    #[serde(default)]
    pub prices: Vec<PricePoint>,
}

/// Current inflation rate for a province, preformatted for display.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InflationRate {
    pub rate: String,
}

/// Predicted inflation rate for a province, preformatted for display.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InflationForecast {
    pub rate: String,
}

/// Most recent known price for a commodity in a province.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LastPrice {
    pub price: String,
}

/// A province offering a commodity.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Province {
    pub id: String,
    pub name: String,
}

/// Splits a price series into chart axes: date labels on x, prices on y.
///
/// Points keep their response order; the x index of a point is its position
/// in the series.
pub fn chart_series(points: &[PricePoint]) -> (Vec<String>, Vec<f64>) {
    let labels = points.iter().map(|p| p.date.clone()).collect();
    let values = points.iter().map(|p| p.price).collect();
    (labels, values)
}
