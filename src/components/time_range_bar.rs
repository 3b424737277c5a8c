use yew::prelude::*;

use crate::models::time_range::TimeRange;

#[derive(Properties, PartialEq)]
pub struct TimeRangeBarProps {
    pub selected: TimeRange,
    pub on_select: Callback<TimeRange>,
}

/// Row of the five range buttons.
#[function_component(TimeRangeBar)]
pub fn time_range_bar(props: &TimeRangeBarProps) -> Html {
    html! {
        <div class="time-range-bar" role="group" aria-label="Select time range">
            {
                TimeRange::all().iter().map(|range| {
                    let range = *range;
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_| on_select.emit(range))
                    };
                    let class = classes!(
                        "range-button",
                        (range == props.selected).then_some("active"),
                    );
                    html! {
                        <button {class} {onclick}>{range.label()}</button>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
