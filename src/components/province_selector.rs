use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::market::Province;

#[derive(Properties, PartialEq)]
pub struct ProvinceSelectorProps {
    pub provinces: Vec<Province>,
    #[prop_or_default]
    pub selected: String,
    pub on_change: Callback<String>,
}

/// Province selector dropdown component
#[function_component(ProvinceSelector)]
pub fn province_selector(props: &ProvinceSelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            callback.emit(target.value());
        })
    };

    html! {
        <select
            class="province-selector"
            onchange={on_change}
            aria-label="Select province"
            title="Select province"
        >
            <option value="" disabled={true} selected={props.selected.is_empty()}>
                {"Select a province"}
            </option>
            {
                props.provinces.iter().map(|province| {
                    let selected = province.id == props.selected;
                    html! {
                        <option value={province.id.clone()} {selected}>{&province.name}</option>
                    }
                }).collect::<Html>()
            }
        </select>
    }
}
