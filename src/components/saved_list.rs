use std::rc::Rc;
use yew::prelude::*;

use crate::models::prediction::CommodityPrediction;
use crate::services::store::PredictionStore;

#[derive(Properties, PartialEq)]
pub struct SavedListProps {
    pub on_open: Callback<Rc<CommodityPrediction>>,
}

/// List of saved predictions; clicking a card opens the saved screen.
#[function_component(SavedList)]
pub fn saved_list(props: &SavedListProps) -> Html {
    let records = use_memo((), |_| PredictionStore::list());

    if records.is_empty() {
        return html! {
            <div class="saved-list empty">
                <p>{"No saved predictions yet."}</p>
            </div>
        };
    }

    html! {
        <div class="saved-list">
            {
                records.iter().map(|record| {
                    let open = {
                        let on_open = props.on_open.clone();
                        let record = Rc::new(record.clone());
                        Callback::from(move |_| on_open.emit(record.clone()))
                    };
                    html! {
                        <button class="saved-card" onclick={open}>
                            <h3>{&record.commodity_name}</h3>
                            <p class="location">{&record.province_name}</p>
                        </button>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
