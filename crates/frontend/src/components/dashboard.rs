//! Dashboard: aggregate counts, histograms and a filterable user table.
//!
//! Fetches the full collection once on mount. The three count buttons pick
//! which subset feeds the table and the charts.

use roster_core::sort::{SortColumn, SortState};
use roster_core::stats::{session_histogram, signup_histogram, UserStats};
use roster_core::User;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::auth::use_auth;
use crate::components::{BarChart, LoadingSpinner, UserTable};
use crate::services::UserService;
use crate::utils::confirm;

#[derive(Clone, Copy, PartialEq, Default)]
enum StatFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatFilter {
    fn matches(self, user: &User) -> bool {
        match self {
            Self::All => true,
            Self::Active => user.is_active(),
            Self::Inactive => !user.is_active(),
        }
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let auth = use_auth();
    let token = auth
        .auth_state
        .as_ref()
        .map(|s| s.token.clone())
        .unwrap_or_default();

    let users = use_state(Vec::<User>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let filter = use_state(StatFilter::default);
    let sort = use_state(SortState::default);

    {
        let users = users.clone();
        let loading = loading.clone();
        let error = error.clone();
        let token = token.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = match UserService::new(&token) {
                    Ok(service) => service.fetch_all("").await,
                    Err(err) => Err(err),
                };
                loading.set(false);
                match result {
                    Ok(fetched) => users.set(fetched),
                    Err(err) => {
                        web_sys::console::error_1(&format!("Failed to fetch users: {err}").into());
                        error.set(Some(err.to_string()));
                    }
                }
            });
            || ()
        });
    }

    let on_sort = {
        let sort = sort.clone();
        Callback::from(move |column: SortColumn| {
            let mut next = *sort;
            next.click(column);
            sort.set(next);
        })
    };

    let on_delete = {
        let users = users.clone();
        let error = error.clone();
        let token = token.clone();
        Callback::from(move |id: String| {
            if !confirm("Are you sure you want to delete this user?") {
                return;
            }
            let users = users.clone();
            let error = error.clone();
            let token = token.clone();
            spawn_local(async move {
                let result = match UserService::new(&token) {
                    Ok(service) => service.delete(&id).await,
                    Err(err) => Err(err),
                };
                match result {
                    Ok(()) => {
                        let remaining: Vec<User> =
                            users.iter().filter(|u| u.id != id).cloned().collect();
                        users.set(remaining);
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("Failed to delete user: {err}").into());
                        error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    if *loading {
        return html! { <LoadingSpinner /> };
    }

    let stats = UserStats::from_users(&users);
    let subset: Vec<User> = users.iter().filter(|u| filter.matches(u)).cloned().collect();

    let count_button = |label: &str, count: usize, value: StatFilter| {
        let filter_handle = filter.clone();
        let active = *filter == value;
        let onclick = Callback::from(move |_| filter_handle.set(value));
        let class = if active {
            "flex-1 bg-blue-600 text-white rounded-lg p-4 text-center"
        } else {
            "flex-1 bg-white shadow rounded-lg p-4 text-center hover:bg-gray-50"
        };
        html! {
            <button {onclick} class={class}>
                <div class="text-2xl font-semibold">{count.to_string()}</div>
                <div class="text-sm">{label.to_string()}</div>
            </button>
        }
    };

    html! {
        <div class="space-y-4">
            <h1 class="text-xl font-semibold">{"Dashboard"}</h1>
            if let Some(message) = &*error {
                <div class="bg-red-50 text-red-700 text-sm rounded p-3">{message.clone()}</div>
            }
            <div class="flex space-x-4">
                {count_button("Total Users", stats.total, StatFilter::All)}
                {count_button("Active Users", stats.active, StatFilter::Active)}
                {count_button("Inactive Users", stats.inactive, StatFilter::Inactive)}
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <BarChart title="Sessions per day" buckets={session_histogram(&subset)} />
                <BarChart title="Signups per day" buckets={signup_histogram(&subset)} />
            </div>
            <UserTable
                users={subset}
                sort={*sort}
                on_sort={on_sort}
                on_delete={on_delete}
                empty_message={"No users in this group".to_string()}
            />
        </div>
    }
}
