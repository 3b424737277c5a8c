use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::fetch_state::FetchState;
use crate::models::market::{InflationForecast, InflationRate};
use crate::services::api::{fetch_current_inflation, fetch_inflation_forecast};

/// Loads the current inflation rate for a province.
#[hook]
pub fn use_current_inflation(province_id: String) -> UseStateHandle<FetchState<InflationRate>> {
    let state = use_state(FetchState::idle);

    {
        let state = state.clone();

        use_effect_with(province_id, move |province_id| {
            let province_id = province_id.clone();
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            state.set(state.begin());

            spawn_local(async move {
                let result = fetch_current_inflation(&province_id).await;
                if !aborted_check.get() {
                    state.set(state.resolve(result));
                }
            });

            move || aborted.set(true)
        });
    }

    state
}

/// Loads the predicted inflation rate for a province.
#[hook]
pub fn use_inflation_forecast(
    province_id: String,
) -> UseStateHandle<FetchState<InflationForecast>> {
    let state = use_state(FetchState::idle);

    {
        let state = state.clone();

        use_effect_with(province_id, move |province_id| {
            let province_id = province_id.clone();
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            state.set(state.begin());

            spawn_local(async move {
                let result = fetch_inflation_forecast(&province_id).await;
                if !aborted_check.get() {
                    state.set(state.resolve(result));
                }
            });

            move || aborted.set(true)
        });
    }

    state
}
