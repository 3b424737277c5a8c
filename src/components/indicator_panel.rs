use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IndicatorPanelProps {
    #[prop_or_default]
    pub forecast: Option<String>,
    #[prop_or_default]
    pub inflation: Option<String>,
    #[prop_or_default]
    pub last_price: Option<String>,
}

/// Text indicators for a commodity/province pair. Each value keeps its last
/// displayed state until a fresh fetch replaces it.
#[function_component(IndicatorPanel)]
pub fn indicator_panel(props: &IndicatorPanelProps) -> Html {
    html! {
        <div class="summary-grid">
            <div class="summary-item">
                <h3>{"Predicted Inflation"}</h3>
                <p class="summary-value">{props.forecast.as_deref().unwrap_or("—")}</p>
            </div>
            <div class="summary-item">
                <h3>{"Current Inflation"}</h3>
                <p class="summary-value">{props.inflation.as_deref().unwrap_or("—")}</p>
            </div>
            <div class="summary-item">
                <h3>{"Last Price"}</h3>
                <p class="summary-value">{props.last_price.as_deref().unwrap_or("—")}</p>
            </div>
        </div>
    }
}
