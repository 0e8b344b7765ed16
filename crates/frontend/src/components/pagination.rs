//! Pagination controls: range label, prev/next, page size select.

use roster_core::PAGE_SIZE_OPTIONS;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub range_label: String,
    pub can_prev: bool,
    pub can_next: bool,
    pub page_size: usize,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_page_size: Callback<usize>,
}

#[function_component(PaginationControls)]
pub fn pagination_controls(props: &PaginationProps) -> Html {
    let on_prev = {
        let cb = props.on_prev.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_next = {
        let cb = props.on_next.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_page_size = {
        let cb = props.on_page_size.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(size) = select.value().parse::<usize>() {
                cb.emit(size);
            }
        })
    };

    html! {
        <div class="flex items-center justify-between py-3 text-sm text-gray-600">
            <div class="flex items-center space-x-2">
                <span>{"Rows per page:"}</span>
                <select
                    class="border border-gray-300 rounded-md px-2 py-1"
                    onchange={on_page_size}
                    value={props.page_size.to_string()}
                >
                    {PAGE_SIZE_OPTIONS.iter().map(|size| html! {
                        <option
                            value={size.to_string()}
                            selected={*size == props.page_size}
                        >
                            {size.to_string()}
                        </option>
                    }).collect::<Html>()}
                </select>
            </div>
            <div class="flex items-center space-x-4">
                <span>{props.range_label.clone()}</span>
                <button
                    onclick={on_prev}
                    disabled={!props.can_prev}
                    class="px-2 py-1 border border-gray-300 rounded-md disabled:opacity-50"
                >
                    {"\u{2039}"}
                </button>
                <button
                    onclick={on_next}
                    disabled={!props.can_next}
                    class="px-2 py-1 border border-gray-300 rounded-md disabled:opacity-50"
                >
                    {"\u{203a}"}
                </button>
            </div>
        </div>
    }
}
