use std::rc::Rc;
use yew::prelude::*;

use crate::models::market::PricePoint;
use crate::models::prediction::CommodityPrediction;
use crate::models::time_range::TimeRange;
use crate::services::store::PredictionStore;

/// Chart series for the saved-prediction screen.
///
/// Starts from the record's own series, then re-reads the store whenever
/// the range changes, addressing it with the bookmark encoding. A missing
/// record or an empty stored series leaves the current series untouched;
/// the miss is logged, never surfaced.
#[hook]
pub fn use_saved_series(
    record: Rc<CommodityPrediction>,
    range: TimeRange,
) -> UseStateHandle<Vec<PricePoint>> {
    let series = use_state(|| record.predictions.clone());

    {
        let series = series.clone();

        use_effect_with((record, range), move |(record, range)| {
            match PredictionStore::load_windowed(
                &record.commodity_name,
                &record.province_name,
                range.bookmark_code(),
            ) {
                Some(stored) if !stored.predictions.is_empty() => {
                    series.set(stored.predictions);
                }
                _ => {
                    gloo::console::debug!("no stored prediction series for range", range.label());
                }
            }
            || ()
        });
    }

    series
}
