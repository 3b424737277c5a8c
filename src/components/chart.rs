use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title},
    element::{
        AreaStyle, AxisLabel, AxisType, LineStyle, LineStyleType, SplitLine, TextStyle, Tooltip,
        Trigger,
    },
    renderer::WasmRenderer,
    series::Line,
};
use gloo::events::EventListener;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::market::{PricePoint, chart_series};

#[derive(Properties, PartialEq)]
pub struct PriceChartProps {
    /// DOM id of the chart mount point; must be unique per rendered chart.
    pub id: AttrValue,
    pub title: AttrValue,
    pub points: Vec<PricePoint>,
}

#[function_component(PriceChart)]
pub fn price_chart(props: &PriceChartProps) -> Html {
    let container_ref = use_node_ref();
    let series = use_memo(props.points.clone(), |points| chart_series(points));

    {
        let container_ref = container_ref.clone();
        let id = props.id.to_string();
        let title = props.title.to_string();

        use_effect_with((series, container_ref), move |(series, container_ref)| {
            let listener = container_ref.cast::<HtmlElement>().map(|container| {
                render_chart(&container, &id, &title, series);

                let series = series.clone();
                EventListener::new(&web_sys::window().unwrap(), "resize", move |_| {
                    render_chart(&container, &id, &title, &series);
                })
            });

            move || drop(listener)
        });
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={props.id.clone()} />
        </div>
    }
}

fn render_chart(
    container: &HtmlElement,
    id: &str,
    title: &str,
    series: &(Vec<String>, Vec<f64>),
) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(title, series);
    if let Err(e) = WasmRenderer::new(width, height).render(id, &chart) {
        gloo::console::error!(format!("Render error: {e:?}"));
    }
}

fn build_chart(title: &str, series: &(Vec<String>, Vec<f64>)) -> CharmingChart {
    let (labels, values) = series;

    CharmingChart::new()
        .title(
            Title::new()
                .text(title)
                .left("center")
                .text_style(TextStyle::new().font_size(16).color("#1f2937")),
        )
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("18%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(labels.clone())
                .axis_label(AxisLabel::new().rotate(45).color("#6b7280")),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("price")
                .axis_label(AxisLabel::new().color("#6b7280"))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color("#e5e7eb")
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(
            Line::new()
                .data(values.clone())
                .show_symbol(true)
                .area_style(AreaStyle::new()),
        )
}
