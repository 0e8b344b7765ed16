//! Debounce hook for the search box.

use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// Returns a copy of `value` that only settles `delay_ms` after the last
/// change. A new change cancels the pending timer, so a burst of keystrokes
/// produces a single settled value.
#[hook]
pub fn use_debounced_value(value: String, delay_ms: u32) -> String {
    let debounced = use_state(|| value.clone());

    {
        let debounced = debounced.clone();
        use_effect_with(value, move |value| {
            let value = value.clone();
            let timeout = Timeout::new(delay_ms, move || {
                debounced.set(value);
            });
            move || drop(timeout)
        });
    }

    (*debounced).clone()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;
    use wasm_bindgen_futures::spawn_local;
    use wasm_bindgen_test::*;
    use yew::platform::time::sleep;

    wasm_bindgen_test_configure!(run_in_browser);

    const DELAY_MS: u32 = 50;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        settled: Rc<RefCell<Vec<String>>>,
    }

    /// Types a burst of values through the hook faster than the delay and
    /// records every value that settles.
    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        let raw = use_state(String::new);
        let debounced = use_debounced_value((*raw).clone(), DELAY_MS);

        {
            let settled = props.settled.clone();
            use_effect_with(debounced, move |value| {
                settled.borrow_mut().push(value.clone());
                || ()
            });
        }

        {
            let raw = raw.clone();
            use_effect_with((), move |_| {
                spawn_local(async move {
                    for term in ["a", "ad", "ada"] {
                        raw.set(term.to_string());
                        sleep(Duration::from_millis(10)).await;
                    }
                });
                || ()
            });
        }

        html! {}
    }

    #[wasm_bindgen_test]
    async fn test_keystroke_burst_settles_once_to_final_value() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let settled = Rc::new(RefCell::new(Vec::new()));
        yew::Renderer::<Harness>::with_root_and_props(
            root,
            HarnessProps {
                settled: settled.clone(),
            },
        )
        .render();

        // Well past the burst (~30 ms) plus the debounce window
        sleep(Duration::from_millis(300)).await;

        // The initial value settles on mount; the burst settles exactly
        // once, with the last value typed
        assert_eq!(*settled.borrow(), vec!["".to_string(), "ada".to_string()]);
    }
}
