//! Application shell and routing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::{use_auth, AuthAction, AuthProvider, PublicOnly, RequireAuth};
use crate::components::{Dashboard, LoadingSpinner, LoginPage, SignupPage, UsersPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/users")]
    Users,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomeRedirect /> },
        Route::Login => html! { <PublicOnly><LoginPage /></PublicOnly> },
        Route::Signup => html! { <PublicOnly><SignupPage /></PublicOnly> },
        Route::Users => html! { <RequireAuth><Shell><UsersPage /></Shell></RequireAuth> },
        Route::Dashboard => html! { <RequireAuth><Shell><Dashboard /></Shell></RequireAuth> },
        Route::NotFound => html! { <HomeRedirect /> },
    }
}

/// Sends `/` to the users list or the login form depending on auth state.
#[function_component(HomeRedirect)]
fn home_redirect() -> Html {
    let auth = use_auth();
    if auth.is_loading {
        return html! { <LoadingSpinner /> };
    }
    if auth.auth_state.is_some() {
        html! { <Redirect<Route> to={Route::Users} /> }
    } else {
        html! { <Redirect<Route> to={Route::Login} /> }
    }
}

#[derive(Properties, PartialEq)]
struct ShellProps {
    children: Children,
}

/// Navigation chrome around the guarded views.
#[function_component(Shell)]
fn shell(props: &ShellProps) -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("navigator not available");

    let operator = auth
        .auth_state
        .as_ref()
        .map(|s| s.name.clone())
        .unwrap_or_default();

    let on_logout = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            auth.dispatch(AuthAction::Logout);
            navigator.push(&Route::Login);
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <nav class="bg-white shadow px-6 py-3 flex items-center justify-between">
                <div class="flex items-center space-x-6">
                    <span class="font-semibold text-lg">{"Roster"}</span>
                    <Link<Route> to={Route::Users} classes="text-gray-600 hover:text-gray-900">
                        {"Users"}
                    </Link<Route>>
                    <Link<Route> to={Route::Dashboard} classes="text-gray-600 hover:text-gray-900">
                        {"Dashboard"}
                    </Link<Route>>
                </div>
                <div class="flex items-center space-x-4">
                    <span class="text-sm text-gray-500">{operator}</span>
                    <button onclick={on_logout} class="text-sm text-red-600 hover:text-red-800">
                        {"Logout"}
                    </button>
                </div>
            </nav>
            <main class="p-6">
                {props.children.clone()}
            </main>
        </div>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </AuthProvider>
    }
}
