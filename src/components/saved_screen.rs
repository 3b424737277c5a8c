use std::rc::Rc;
use yew::prelude::*;

use crate::components::bookmark_button::BookmarkButton;
use crate::components::chart::PriceChart;
use crate::components::time_range_bar::TimeRangeBar;
use crate::components::toast::Toast;
use crate::hooks::use_saved_series::use_saved_series;
use crate::models::prediction::CommodityPrediction;
use crate::models::time_range::TimeRange;
use crate::services::store::PredictionStore;

#[derive(Properties, PartialEq)]
pub struct SavedScreenProps {
    /// The persisted record this screen displays. Authoritative for names,
    /// description and the full series; no network fetch happens here.
    pub record: Rc<CommodityPrediction>,
    #[prop_or_default]
    pub on_back: Callback<()>,
}

/// Saved prediction screen.
///
/// Unbookmarking deletes the record by its exact name pair; toggling back
/// only flips the local flag and does not re-add the record.
#[function_component(SavedScreen)]
pub fn saved_screen(props: &SavedScreenProps) -> Html {
    let bookmarked = use_state(|| true);
    let range = use_state(TimeRange::default);
    let notice = use_state(|| None::<String>);

    let series = use_saved_series(props.record.clone(), *range);

    let on_select = {
        let range = range.clone();
        Callback::from(move |value| range.set(value))
    };

    let on_toggle = {
        let record = props.record.clone();
        let bookmarked = bookmarked.clone();
        let notice = notice.clone();
        Callback::from(move |()| {
            if *bookmarked {
                PredictionStore::delete(&record.commodity_name, &record.province_name);
                notice.set(Some("Prediction removed from bookmarks".to_string()));
                bookmarked.set(false);
            } else {
                bookmarked.set(true);
            }
        })
    };

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_| on_back.emit(()))
    };

    html! {
        <div class="saved-screen">
            <button class="back-button" onclick={on_back}>{"← Back"}</button>

            <div class="saved-header">
                <div>
                    <h2>{&props.record.commodity_name}</h2>
                    <p class="location">{&props.record.province_name}</p>
                </div>
                <BookmarkButton bookmarked={*bookmarked} on_toggle={on_toggle} />
            </div>

            <p class="description">{&props.record.description}</p>

            <TimeRangeBar selected={*range} on_select={on_select} />
            <PriceChart
                id="saved-chart"
                title="Saved Prediction"
                points={(*series).clone()}
            />

            <Toast message={(*notice).clone()} />
        </div>
    }
}
