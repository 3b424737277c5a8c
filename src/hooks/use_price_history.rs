use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::fetch_state::FetchState;
use crate::models::market::PriceHistory;
use crate::services::api::fetch_price_history;

/// Loads the historical price series for a commodity in a province.
#[hook]
pub fn use_price_history(
    commodity_id: String,
    province_id: String,
) -> UseStateHandle<FetchState<PriceHistory>> {
    let state = use_state(FetchState::idle);

    {
        let state = state.clone();

        use_effect_with((commodity_id, province_id), move |(commodity_id, province_id)| {
            let commodity_id = commodity_id.clone();
            let province_id = province_id.clone();
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            state.set(state.begin());

            spawn_local(async move {
                let result = fetch_price_history(&commodity_id, &province_id).await;
                if !aborted_check.get() {
                    state.set(state.resolve(result));
                }
            });

            move || aborted.set(true)
        });
    }

    state
}
