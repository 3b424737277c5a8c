use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::fetch_state::FetchState;
use crate::models::market::Province;
use crate::services::api::fetch_provinces;

/// Loads the provinces offering a commodity.
///
/// No retry on failure; changing the commodity key re-issues the lookup.
/// In-flight lookups are not deduplicated, so the last-completing response
/// wins.
#[hook]
pub fn use_provinces(commodity_id: String) -> UseStateHandle<FetchState<Vec<Province>>> {
    let state = use_state(FetchState::idle);

    {
        let state = state.clone();

        use_effect_with(commodity_id, move |commodity_id| {
            let commodity_id = commodity_id.clone();
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            state.set(state.begin());

            spawn_local(async move {
                let result = fetch_provinces(&commodity_id).await;
                if !aborted_check.get() {
                    state.set(state.resolve(result));
                }
            });

            move || aborted.set(true)
        });
    }

    state
}
