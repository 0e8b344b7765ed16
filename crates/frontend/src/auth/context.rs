//! Global authentication context and provider.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use web_sys::Storage;
use yew::prelude::*;

use crate::config::AUTH_STATE_KEY;

/// The logged-in operator's session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthState {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub token: String,
}

/// Authentication context data.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthContextData {
    pub auth_state: Option<AuthState>,
    pub is_loading: bool,
}

pub enum AuthAction {
    Login(AuthState),
    Logout,
    SetLoading(bool),
}

pub type AuthContext = UseReducerHandle<AuthContextData>;

impl Default for AuthContextData {
    fn default() -> Self {
        Self {
            auth_state: None,
            // Start loading until sessionStorage has been checked
            is_loading: true,
        }
    }
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::Login(auth_state) => {
                if let Some(storage) = session_storage() {
                    if let Ok(serialized) = serde_json::to_string(&auth_state) {
                        let _ = storage.set_item(AUTH_STATE_KEY, &serialized);
                    }
                }
                Rc::new(Self {
                    auth_state: Some(auth_state),
                    is_loading: false,
                })
            }
            AuthAction::Logout => {
                if let Some(storage) = session_storage() {
                    let _ = storage.remove_item(AUTH_STATE_KEY);
                }
                Rc::new(Self {
                    auth_state: None,
                    is_loading: false,
                })
            }
            AuthAction::SetLoading(is_loading) => Rc::new(Self {
                is_loading,
                auth_state: self.auth_state.clone(),
            }),
        }
    }
}

fn session_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth_state = use_reducer(AuthContextData::default);

    // Restore a stored session on mount
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            if let Some(storage) = session_storage() {
                if let Ok(Some(stored)) = storage.get_item(AUTH_STATE_KEY) {
                    if let Ok(state) = serde_json::from_str::<AuthState>(&stored) {
                        auth_state.dispatch(AuthAction::Login(state));
                        return;
                    }
                }
            }
            auth_state.dispatch(AuthAction::SetLoading(false));
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth_state}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use the auth context.
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}
