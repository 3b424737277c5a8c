use yew::prelude::*;

use crate::components::bookmark_button::BookmarkButton;
use crate::components::chart::PriceChart;
use crate::components::indicator_panel::IndicatorPanel;
use crate::components::status::LoadingIndicator;
use crate::components::time_range_bar::TimeRangeBar;
use crate::components::toast::Toast;
use crate::hooks::use_inflation::{use_current_inflation, use_inflation_forecast};
use crate::hooks::use_last_price::use_last_price;
use crate::hooks::use_prediction::use_prediction;
use crate::hooks::use_price_history::use_price_history;
use crate::models::time_range::TimeRange;
use crate::services::store::PredictionStore;

#[derive(Properties, PartialEq)]
pub struct PredictScreenProps {
    /// Missing navigation input degrades to an empty identifier, not a fault.
    #[prop_or_default]
    pub commodity_id: String,
    #[prop_or_default]
    pub province_id: String,
}

/// Live fetch & predict screen.
///
/// Issues the four independent fetches on mount plus the time-ranged
/// prediction fetch; only the latter is re-issued when a range button is
/// pressed. Every fetch updates its own state holder, so completion order
/// does not matter.
#[function_component(PredictScreen)]
pub fn predict_screen(props: &PredictScreenProps) -> Html {
    let range = use_state(TimeRange::default);
    let notice = use_state(|| None::<String>);
    let saved = use_state(|| false);

    let history = use_price_history(props.commodity_id.clone(), props.province_id.clone());
    let forecast = use_inflation_forecast(props.province_id.clone());
    let inflation = use_current_inflation(props.province_id.clone());
    let last_price = use_last_price(props.province_id.clone(), props.commodity_id.clone());
    let prediction = use_prediction(
        props.commodity_id.clone(),
        props.province_id.clone(),
        *range,
    );

    // Refresh the bookmark flag whenever another prediction record arrives.
    {
        let saved = saved.clone();
        use_effect_with(prediction.data().cloned(), move |record| {
            if let Some(record) = record {
                saved.set(PredictionStore::is_saved(
                    &record.commodity_name,
                    &record.province_name,
                ));
            }
            || ()
        });
    }

    let loading = history.is_loading()
        || forecast.is_loading()
        || inflation.is_loading()
        || last_price.is_loading()
        || prediction.is_loading();

    let error = history
        .error()
        .or(forecast.error())
        .or(inflation.error())
        .or(last_price.error())
        .or(prediction.error())
        .map(str::to_string);

    let on_select = {
        let range = range.clone();
        Callback::from(move |value| range.set(value))
    };

    let on_toggle = {
        let prediction = prediction.clone();
        let saved = saved.clone();
        let notice = notice.clone();
        Callback::from(move |()| {
            let Some(record) = prediction.data().cloned() else {
                return;
            };
            if *saved {
                PredictionStore::delete(&record.commodity_name, &record.province_name);
                notice.set(Some("Prediction removed from bookmarks".to_string()));
                saved.set(false);
            } else {
                match PredictionStore::save(&record) {
                    Ok(()) => {
                        notice.set(Some("Prediction saved to bookmarks".to_string()));
                        saved.set(true);
                    }
                    Err(e) => notice.set(Some(format!("Failed to save prediction: {e}"))),
                }
            }
        })
    };

    html! {
        <div class="predict-screen">
            <LoadingIndicator {loading} />

            <section class="history-section">
                <h2>{"Price History"}</h2>
                if let Some(history) = history.data() {
                    <p class="description">{&history.description}</p>
                    <PriceChart
                        id="history-chart"
                        title="Commodity Prices"
                        points={history.prices.clone()}
                    />
                }
            </section>

            <section class="indicator-section">
                <h2>{"Inflation Indicators"}</h2>
                <IndicatorPanel
                    forecast={forecast.data().map(|f| f.rate.clone())}
                    inflation={inflation.data().map(|i| i.rate.clone())}
                    last_price={last_price.data().map(|p| p.price.clone())}
                />
            </section>

            <section class="forecast-section">
                <h2>{"Price Forecast"}</h2>
                <TimeRangeBar selected={*range} on_select={on_select} />
                if let Some(record) = prediction.data() {
                    <div class="forecast-header">
                        <span class="location">{&record.province_name}</span>
                        <BookmarkButton bookmarked={*saved} on_toggle={on_toggle.clone()} />
                    </div>
                    <PriceChart
                        id="forecast-chart"
                        title="Predicted Prices"
                        points={record.predictions.clone()}
                    />
                }
            </section>

            <Toast message={error} />
            <Toast message={(*notice).clone()} />
        </div>
    }
}
