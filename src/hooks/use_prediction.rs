use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::fetch_state::FetchState;
use crate::models::prediction::CommodityPrediction;
use crate::models::time_range::TimeRange;
use crate::services::api::fetch_prediction;

/// Loads the time-ranged prediction record for a commodity/province pair.
///
/// Keyed on the range as well, so selecting another window re-issues only
/// this fetch.
#[hook]
pub fn use_prediction(
    commodity_id: String,
    province_id: String,
    range: TimeRange,
) -> UseStateHandle<FetchState<CommodityPrediction>> {
    let state = use_state(FetchState::idle);

    {
        let state = state.clone();

        use_effect_with(
            (commodity_id, province_id, range),
            move |(commodity_id, province_id, range)| {
                let commodity_id = commodity_id.clone();
                let province_id = province_id.clone();
                let range = *range;
                let aborted = Rc::new(Cell::new(false));
                let aborted_check = aborted.clone();

                state.set(state.begin());

                spawn_local(async move {
                    let result = fetch_prediction(&commodity_id, &province_id, range).await;
                    if !aborted_check.get() {
                        state.set(state.resolve(result));
                    }
                });

                move || aborted.set(true)
            },
        );
    }

    state
}
