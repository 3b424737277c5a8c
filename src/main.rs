use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use inflation_dashboard::components::province_selector::ProvinceSelector;
use inflation_dashboard::components::{PredictScreen, SavedList, SavedScreen};
use inflation_dashboard::hooks::use_provinces::use_provinces;
use inflation_dashboard::models::prediction::CommodityPrediction;

#[derive(Clone, PartialEq)]
enum View {
    Live,
    Bookmarks,
    Saved(Rc<CommodityPrediction>),
}

#[function_component(App)]
fn app() -> Html {
    let commodity_id = use_state(String::new);
    let province_id = use_state(String::new);
    let view = use_state(|| View::Live);

    let provinces = use_provinces((*commodity_id).clone());

    let on_commodity_input = {
        let commodity_id = commodity_id.clone();
        let province_id = province_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            commodity_id.set(input.value());
            province_id.set(String::new());
        })
    };

    let on_province_change = {
        let province_id = province_id.clone();
        Callback::from(move |value| province_id.set(value))
    };

    let open_saved = {
        let view = view.clone();
        Callback::from(move |record| view.set(View::Saved(record)))
    };

    let back_to_bookmarks = {
        let view = view.clone();
        Callback::from(move |()| view.set(View::Bookmarks))
    };

    let show_live = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Live))
    };

    let show_bookmarks = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Bookmarks))
    };

    let live_active = matches!(&*view, View::Live);

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Commodity Inflation Dashboard"}</h1>
                <nav class="app-nav">
                    <button
                        class={classes!("nav-button", live_active.then_some("active"))}
                        onclick={show_live}
                    >
                        {"Live"}
                    </button>
                    <button
                        class={classes!("nav-button", (!live_active).then_some("active"))}
                        onclick={show_bookmarks}
                    >
                        {"Bookmarks"}
                    </button>
                </nav>
            </header>

            <main class="app-main">
            {
                match &*view {
                    View::Live => html! {
                        <>
                            <section class="controls-section">
                                <input
                                    class="commodity-input"
                                    type="text"
                                    placeholder="Commodity id"
                                    value={(*commodity_id).clone()}
                                    oninput={on_commodity_input}
                                />
                                <ProvinceSelector
                                    provinces={provinces.data().map_or_else(Vec::new, |list| (**list).clone())}
                                    selected={(*province_id).clone()}
                                    on_change={on_province_change}
                                />
                                if provinces.is_loading() {
                                    <span class="hint">{"Loading provinces..."}</span>
                                }
                                if let Some(message) = provinces.error() {
                                    <span class="hint error">{message}</span>
                                }
                            </section>
                            <PredictScreen
                                commodity_id={(*commodity_id).clone()}
                                province_id={(*province_id).clone()}
                            />
                        </>
                    },
                    View::Bookmarks => html! {
                        <SavedList on_open={open_saved.clone()} />
                    },
                    View::Saved(record) => html! {
                        <SavedScreen record={record.clone()} on_back={back_to_bookmarks.clone()} />
                    },
                }
            }
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
