use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::fetch_state::FetchState;
use crate::models::market::LastPrice;
use crate::services::api::fetch_last_price;

/// Loads the last known price for a commodity in a province.
#[hook]
pub fn use_last_price(
    province_id: String,
    commodity_id: String,
) -> UseStateHandle<FetchState<LastPrice>> {
    let state = use_state(FetchState::idle);

    {
        let state = state.clone();

        use_effect_with((province_id, commodity_id), move |(province_id, commodity_id)| {
            let province_id = province_id.clone();
            let commodity_id = commodity_id.clone();
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            state.set(state.begin());

            spawn_local(async move {
                let result = fetch_last_price(&province_id, &commodity_id).await;
                if !aborted_check.get() {
                    state.set(state.resolve(result));
                }
            });

            move || aborted.set(true)
        });
    }

    state
}
