//! Route guards.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use super::context::{use_auth, AuthAction};
use crate::app::Route;
use crate::components::LoadingSpinner;
use crate::services::UserService;

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    pub children: Children,
}

/// Wraps views that require a valid session. Without a token this redirects
/// to login straight away; with one it verifies the token against the
/// gateway once on mount and logs out on any failure.
#[function_component(RequireAuth)]
pub fn require_auth(props: &GuardProps) -> Html {
    let auth = use_auth();
    let verified = use_state(|| false);

    {
        let auth = auth.clone();
        let verified = verified.clone();
        let token = auth.auth_state.as_ref().map(|s| s.token.clone());
        use_effect_with(token, move |token| {
            if let Some(token) = token.clone() {
                spawn_local(async move {
                    match UserService::new(&token) {
                        Ok(service) => match service.verify().await {
                            Ok(()) => verified.set(true),
                            Err(err) => {
                                web_sys::console::error_1(&format!("Token verification failed: {err}").into());
                                auth.dispatch(AuthAction::Logout);
                            }
                        },
                        Err(err) => {
                            web_sys::console::error_1(&format!("Client setup failed: {err}").into());
                            auth.dispatch(AuthAction::Logout);
                        }
                    }
                });
            }
            || ()
        });
    }

    if auth.is_loading {
        return html! { <LoadingSpinner /> };
    }
    if auth.auth_state.is_none() {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }
    if !*verified {
        return html! { <LoadingSpinner /> };
    }
    html! { <>{props.children.clone()}</> }
}

/// Wraps login and signup: a logged-in operator is sent to the dashboard.
#[function_component(PublicOnly)]
pub fn public_only(props: &GuardProps) -> Html {
    let auth = use_auth();

    if auth.is_loading {
        return html! { <LoadingSpinner /> };
    }
    if auth.auth_state.is_some() {
        return html! { <Redirect<Route> to={Route::Dashboard} /> };
    }
    html! { <>{props.children.clone()}</> }
}
