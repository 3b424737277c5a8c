use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingIndicatorProps {
    pub loading: bool,
}

/// Shared loading indicator, visible while any fetch is in flight.
#[function_component(LoadingIndicator)]
pub fn loading_indicator(props: &LoadingIndicatorProps) -> Html {
    if !props.loading {
        return Html::default();
    }

    html! {
        <div class="status loading">
            <div class="spinner"></div>
            <p>{"Loading data..."}</p>
        </div>
    }
}
