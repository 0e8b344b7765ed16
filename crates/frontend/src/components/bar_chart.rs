//! Minimal horizontal bar chart for date-bucketed counts.

use roster_core::stats::DateBucket;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub title: String,
    pub buckets: Vec<DateBucket>,
}

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let max = props
        .buckets
        .iter()
        .map(|b| b.count)
        .max()
        .unwrap_or(0)
        .max(1);

    html! {
        <div class="bg-white shadow rounded-lg p-4">
            <h3 class="text-sm font-medium text-gray-700 mb-3">{props.title.clone()}</h3>
            if props.buckets.is_empty() {
                <p class="text-sm text-gray-400">{"No data"}</p>
            } else {
                <div class="space-y-2">
                    {props.buckets.iter().map(|bucket| {
                        let percent = bucket.count * 100 / max;
                        html! {
                            <div key={bucket.date.to_string()} class="flex items-center text-xs">
                                <span class="w-24 text-gray-500">
                                    {bucket.date.format("%d/%m/%Y").to_string()}
                                </span>
                                <div class="flex-1 bg-gray-100 rounded h-4 mx-2">
                                    <div
                                        class="bg-blue-500 h-4 rounded"
                                        style={format!("width: {percent}%")}
                                    ></div>
                                </div>
                                <span class="w-8 text-right text-gray-600">
                                    {bucket.count.to_string()}
                                </span>
                            </div>
                        }
                    }).collect::<Html>()}
                </div>
            }
        </div>
    }
}
