//! Login form.

use roster_core::validate::validate_login;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::auth::{use_auth, AuthAction, AuthState};
use crate::config::{SIGNUP_EMAIL_KEY, SIGNUP_PASSWORD_KEY};
use crate::services::AuthService;

/// Takes the stashed signup credentials, if any, removing them so they are
/// only offered once.
fn take_signup_handoff() -> Option<(String, String)> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    let email = storage.get_item(SIGNUP_EMAIL_KEY).ok().flatten()?;
    let password = storage.get_item(SIGNUP_PASSWORD_KEY).ok().flatten()?;
    let _ = storage.remove_item(SIGNUP_EMAIL_KEY);
    let _ = storage.remove_item(SIGNUP_PASSWORD_KEY);
    Some((email, password))
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("navigator not available");

    let email = use_state(String::new);
    let password = use_state(String::new);
    let field_errors = use_state(roster_core::validate::FieldErrors::default);
    let server_error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    // Prefill from a just-completed signup
    {
        let email = email.clone();
        let password = password.clone();
        use_effect_with((), move |_| {
            if let Some((stored_email, stored_password)) = take_signup_handoff() {
                email.set(stored_email);
                password.set(stored_password);
            }
            || ()
        });
    }

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        let email = email.clone();
        let password = password.clone();
        let field_errors = field_errors.clone();
        let server_error = server_error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let errors = validate_login(&email, &password);
            if !errors.is_empty() {
                field_errors.set(errors);
                return;
            }
            field_errors.set(Default::default());
            server_error.set(None);
            submitting.set(true);

            let auth = auth.clone();
            let navigator = navigator.clone();
            let email_value = (*email).clone();
            let password_value = (*password).clone();
            let server_error = server_error.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                let result = match AuthService::new() {
                    Ok(service) => service.login(&email_value, &password_value).await,
                    Err(err) => Err(err),
                };
                submitting.set(false);
                match result {
                    Ok(response) => {
                        auth.dispatch(AuthAction::Login(AuthState {
                            user_id: response.id,
                            name: format!("{} {}", response.first_name, response.last_name),
                            email: response.email,
                            token: response.token,
                        }));
                        navigator.push(&Route::Users);
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("Login failed: {err}").into());
                        server_error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <form onsubmit={on_submit} class="bg-white shadow rounded-lg p-8 w-full max-w-sm space-y-4">
                <h1 class="text-xl font-semibold text-center">{"Sign in"}</h1>
                if let Some(error) = &*server_error {
                    <div class="bg-red-50 text-red-700 text-sm rounded p-3">{error.clone()}</div>
                }
                <div>
                    <label class="block text-sm text-gray-700 mb-1">{"Email"}</label>
                    <input
                        type="email"
                        class="block w-full border border-gray-300 rounded-md px-3 py-2 text-sm"
                        value={(*email).clone()}
                        oninput={on_email}
                    />
                    if let Some(error) = &field_errors.email {
                        <p class="text-red-600 text-xs mt-1">{error.clone()}</p>
                    }
                </div>
                <div>
                    <label class="block text-sm text-gray-700 mb-1">{"Password"}</label>
                    <input
                        type="password"
                        class="block w-full border border-gray-300 rounded-md px-3 py-2 text-sm"
                        value={(*password).clone()}
                        oninput={on_password}
                    />
                    if let Some(error) = &field_errors.password {
                        <p class="text-red-600 text-xs mt-1">{error.clone()}</p>
                    }
                </div>
                <button
                    type="submit"
                    disabled={*submitting}
                    class="w-full bg-blue-600 hover:bg-blue-700 text-white rounded-md py-2 text-sm disabled:opacity-50"
                >
                    {if *submitting { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="text-center text-sm text-gray-500">
                    {"No account? "}
                    <Link<Route> to={Route::Signup} classes="text-blue-600 hover:underline">
                        {"Sign up"}
                    </Link<Route>>
                </p>
            </form>
        </div>
    }
}
