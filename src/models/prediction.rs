use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::market::PricePoint;
use super::time_range::TimeRange;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A prediction record, both as returned by the forecast endpoint and as
/// persisted by the bookmark store.
///
/// The (commodity name, province name) pair is the record's only identity.
/// A record stored without a series deserializes with an empty one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommodityPrediction {
    pub commodity_name: String,
    pub province_name: String,
    pub description: String,
    #[serde(default)]
    pub predictions: Vec<PricePoint>,
}

impl CommodityPrediction {
    /// Copy of this record with the prediction series cut down to the given
    /// window, measured from the first point's date.
    ///
    /// Points with unparsable dates are dropped; if the first date itself
    /// does not parse the series is returned unchanged.
    pub fn windowed(&self, range: TimeRange) -> Self {
        Self {
            predictions: window_points(&self.predictions, range.months()),
            ..self.clone()
        }
    }
}

fn window_points(points: &[PricePoint], months: u32) -> Vec<PricePoint> {
    let Some(first) = points.first() else {
        return Vec::new();
    };
    let Ok(start) = NaiveDate::parse_from_str(&first.date, DATE_FORMAT) else {
        return points.to_vec();
    };
    let Some(cutoff) = start.checked_add_months(Months::new(months)) else {
        return points.to_vec();
    };

    points
        .iter()
        .filter(|p| NaiveDate::parse_from_str(&p.date, DATE_FORMAT).is_ok_and(|date| date < cutoff))
        .cloned()
        .collect()
}
