use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::Config;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    #[prop_or_default]
    pub message: Option<String>,
}

/// Transient notification. Appears when the message changes and hides
/// itself after `Config::TOAST_DURATION_MS`.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();

        use_effect_with(props.message.clone(), move |message| {
            let timeout = message.is_some().then(|| {
                visible.set(true);
                let visible = visible.clone();
                Timeout::new(Config::TOAST_DURATION_MS, move || visible.set(false))
            });

            move || drop(timeout)
        });
    }

    match (&props.message, *visible) {
        (Some(message), true) => html! {
            <div class="toast" role="status">{message}</div>
        },
        _ => Html::default(),
    }
}
