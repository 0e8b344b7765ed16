//! Signup form.

use roster_core::validate::validate_signup;
use roster_http::types::SignupRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::config::{SIGNUP_EMAIL_KEY, SIGNUP_PASSWORD_KEY};
use crate::services::AuthService;

/// Stashes the new credentials so the login form can prefill itself.
fn stash_signup_handoff(email: &str, password: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(SIGNUP_EMAIL_KEY, email);
        let _ = storage.set_item(SIGNUP_PASSWORD_KEY, password);
    }
}

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let navigator = use_navigator().expect("navigator not available");

    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let field_errors = use_state(roster_core::validate::FieldErrors::default);
    let server_error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_first_name = bind(&first_name);
    let on_last_name = bind(&last_name);
    let on_email = bind(&email);
    let on_password = bind(&password);

    let on_submit = {
        let navigator = navigator.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let password = password.clone();
        let field_errors = field_errors.clone();
        let server_error = server_error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let errors = validate_signup(&first_name, &last_name, &email, &password);
            if !errors.is_empty() {
                field_errors.set(errors);
                return;
            }
            field_errors.set(Default::default());
            server_error.set(None);
            submitting.set(true);

            let request = SignupRequest {
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let navigator = navigator.clone();
            let server_error = server_error.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                let result = match AuthService::new() {
                    Ok(service) => service.signup(&request).await,
                    Err(err) => Err(err),
                };
                submitting.set(false);
                match result {
                    Ok(()) => {
                        stash_signup_handoff(&request.email, &request.password);
                        navigator.push(&Route::Login);
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("Signup failed: {err}").into());
                        server_error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    let field = |label: &str,
                 input_type: &str,
                 value: &UseStateHandle<String>,
                 oninput: Callback<InputEvent>,
                 error: &Option<String>| {
        html! {
            <div>
                <label class="block text-sm text-gray-700 mb-1">{label}</label>
                <input
                    type={input_type.to_string()}
                    class="block w-full border border-gray-300 rounded-md px-3 py-2 text-sm"
                    value={(**value).clone()}
                    {oninput}
                />
                if let Some(error) = error {
                    <p class="text-red-600 text-xs mt-1">{error.clone()}</p>
                }
            </div>
        }
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <form onsubmit={on_submit} class="bg-white shadow rounded-lg p-8 w-full max-w-sm space-y-4">
                <h1 class="text-xl font-semibold text-center">{"Create account"}</h1>
                if let Some(error) = &*server_error {
                    <div class="bg-red-50 text-red-700 text-sm rounded p-3">{error.clone()}</div>
                }
                {field("First name", "text", &first_name, on_first_name, &field_errors.first_name)}
                {field("Last name", "text", &last_name, on_last_name, &field_errors.last_name)}
                {field("Email", "email", &email, on_email, &field_errors.email)}
                {field("Password", "password", &password, on_password, &field_errors.password)}
                <button
                    type="submit"
                    disabled={*submitting}
                    class="w-full bg-blue-600 hover:bg-blue-700 text-white rounded-md py-2 text-sm disabled:opacity-50"
                >
                    {if *submitting { "Creating..." } else { "Sign up" }}
                </button>
                <p class="text-center text-sm text-gray-500">
                    {"Already registered? "}
                    <Link<Route> to={Route::Login} classes="text-blue-600 hover:underline">
                        {"Sign in"}
                    </Link<Route>>
                </p>
            </form>
        </div>
    }
}
