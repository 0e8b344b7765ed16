//! Users listing container.
//!
//! Owns the pager, the page store and the response guard. Every change to
//! the (page, size, search) query issues exactly one list call; resolutions
//! go through the guard so a slow stale response can never overwrite a
//! fresher page.

use std::rc::Rc;

use gloo::timers::callback::Timeout;
use roster_core::sort::{SortColumn, SortState};
use roster_core::{Pager, QueryState, ResponseGuard, User, UserStore};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::auth::use_auth;
use crate::components::user_form::{UserForm, UserFormValue};
use crate::components::{ExportButtons, LoadingSpinner, PaginationControls, UserTable};
use crate::config::{NOTIFICATION_MS, SEARCH_DEBOUNCE_MS};
use crate::hooks::use_debounced_value;
use crate::services::UserService;
use crate::utils::confirm;

#[derive(Clone, Default, PartialEq)]
struct StoreState {
    store: UserStore,
}

enum StoreAction {
    Loading(bool),
    Resolved {
        query: QueryState,
        users: Vec<User>,
        total_users: usize,
    },
    ServeCached(QueryState),
    ConfirmDelete(String),
    Invalidate,
}

impl Reducible for StoreState {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut store = self.store.clone();
        match action {
            StoreAction::Loading(loading) => store.set_loading(loading),
            StoreAction::Resolved {
                query,
                users,
                total_users,
            } => store.apply_page(query, users, total_users),
            StoreAction::ServeCached(query) => {
                store.apply_cached(&query);
            }
            StoreAction::ConfirmDelete(id) => store.confirm_delete(&id),
            StoreAction::Invalidate => store.invalidate_cache(),
        }
        Rc::new(Self { store })
    }
}

/// Which form, if any, is open.
#[derive(Clone, PartialEq)]
enum FormMode {
    Create,
    Edit(User),
}

#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let auth = use_auth();
    let token = auth
        .auth_state
        .as_ref()
        .map(|s| s.token.clone())
        .unwrap_or_default();

    let pager = use_state(Pager::new);
    let state = use_reducer(StoreState::default);
    let guard = use_mut_ref(ResponseGuard::new);

    let search_input = use_state(String::new);
    let debounced_search = use_debounced_value((*search_input).clone(), SEARCH_DEBOUNCE_MS);

    let sort = use_state(SortState::default);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    let form = use_state(|| None::<FormMode>);
    let form_error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    // Forces a refetch of the current query after a mutation
    let reload = use_state(|| 0u32);

    // Fold the stabilized search term into the pager
    {
        let pager = pager.clone();
        use_effect_with(debounced_search, move |term| {
            let mut next = (*pager).clone();
            if next.set_search(term.clone()) {
                pager.set(next);
            }
            || ()
        });
    }

    // One list call per query-state change; cache hits skip the network
    {
        let state = state.clone();
        let guard = guard.clone();
        let error = error.clone();
        let token = token.clone();
        let query = pager.query();
        use_effect_with((query, *reload), move |(query, _)| {
            if state.store.cached_page(query).is_some() {
                // Invalidate anything still in flight for an older query
                let seq = guard.borrow_mut().issue();
                guard.borrow_mut().admit(seq);
                state.dispatch(StoreAction::ServeCached(query.clone()));
                return;
            }
            let seq = guard.borrow_mut().issue();
            state.dispatch(StoreAction::Loading(true));
            let query = query.clone();
            spawn_local(async move {
                let result = match UserService::new(&token) {
                    Ok(service) => {
                        service
                            .list(query.page.gateway_page(), query.page.page_size, &query.search)
                            .await
                    }
                    Err(err) => Err(err),
                };
                if !guard.borrow_mut().admit(seq) {
                    return;
                }
                match result {
                    Ok(page) => {
                        error.set(None);
                        state.dispatch(StoreAction::Resolved {
                            query,
                            users: page.data,
                            total_users: page.total_users,
                        });
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("Failed to fetch users: {err}").into());
                        state.dispatch(StoreAction::Loading(false));
                        error.set(Some(err.to_string()));
                    }
                }
            });
        });
    }

    // Success notifications clear themselves
    {
        let success = success.clone();
        use_effect_with((*success).clone(), move |current| {
            let timeout = current.is_some().then(|| {
                Timeout::new(NOTIFICATION_MS, move || success.set(None))
            });
            move || drop(timeout)
        });
    }

    let on_search_input = {
        let search_input = search_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search_input.set(input.value());
        })
    };

    let total = state.store.total_users();

    let on_prev = {
        let pager = pager.clone();
        Callback::from(move |()| {
            let mut next = (*pager).clone();
            if next.prev_page() {
                pager.set(next);
            }
        })
    };
    let on_next = {
        let pager = pager.clone();
        Callback::from(move |()| {
            let mut next = (*pager).clone();
            if next.next_page(total) {
                pager.set(next);
            }
        })
    };
    let on_page_size = {
        let pager = pager.clone();
        Callback::from(move |size: usize| {
            let mut next = (*pager).clone();
            if next.set_page_size(size) {
                pager.set(next);
            }
        })
    };

    let on_sort = {
        let sort = sort.clone();
        Callback::from(move |column: SortColumn| {
            let mut next = *sort;
            next.click(column);
            sort.set(next);
        })
    };

    let on_delete = {
        let state = state.clone();
        let pager = pager.clone();
        let error = error.clone();
        let success = success.clone();
        let reload = reload.clone();
        let token = token.clone();
        Callback::from(move |id: String| {
            if !confirm("Are you sure you want to delete this user?") {
                return;
            }
            let state = state.clone();
            let pager = pager.clone();
            let error = error.clone();
            let success = success.clone();
            let reload = reload.clone();
            let token = token.clone();
            spawn_local(async move {
                let result = match UserService::new(&token) {
                    Ok(service) => service.delete(&id).await,
                    Err(err) => Err(err),
                };
                match result {
                    Ok(()) => {
                        let remaining = state.store.total_users().saturating_sub(1);
                        state.dispatch(StoreAction::ConfirmDelete(id));
                        success.set(Some("User deleted successfully".to_string()));
                        // Deleting the last row of the final page shrinks the
                        // page count; pull the window back before refetching
                        let mut next = (*pager).clone();
                        if next.clamp_to(remaining) {
                            pager.set(next);
                        } else {
                            reload.set(*reload + 1);
                        }
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("Failed to delete user: {err}").into());
                        error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    let on_open_create = {
        let form = form.clone();
        let form_error = form_error.clone();
        Callback::from(move |_| {
            form_error.set(None);
            form.set(Some(FormMode::Create));
        })
    };
    let on_open_edit = {
        let form = form.clone();
        let form_error = form_error.clone();
        Callback::from(move |user: User| {
            form_error.set(None);
            form.set(Some(FormMode::Edit(user)));
        })
    };
    let on_form_cancel = {
        let form = form.clone();
        Callback::from(move |()| form.set(None))
    };

    let on_form_save = {
        let state = state.clone();
        let form = form.clone();
        let form_error = form_error.clone();
        let saving = saving.clone();
        let success = success.clone();
        let reload = reload.clone();
        let token = token.clone();
        Callback::from(move |value: UserFormValue| {
            let state = state.clone();
            let form = form.clone();
            let form_error = form_error.clone();
            let saving = saving.clone();
            let success = success.clone();
            let reload = reload.clone();
            let token = token.clone();
            saving.set(true);
            spawn_local(async move {
                let result = match UserService::new(&token) {
                    Ok(service) => match &value {
                        UserFormValue::Create(new_user) => {
                            service.create(new_user).await.map(|_| "User created successfully")
                        }
                        UserFormValue::Update { id, update } => {
                            service.update(id, update).await.map(|_| "User updated successfully")
                        }
                    },
                    Err(err) => Err(err),
                };
                saving.set(false);
                match result {
                    Ok(message) => {
                        state.dispatch(StoreAction::Invalidate);
                        form.set(None);
                        success.set(Some(message.to_string()));
                        reload.set(*reload + 1);
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("Failed to save user: {err}").into());
                        form_error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    let on_export_error = {
        let error = error.clone();
        Callback::from(move |message: String| error.set(Some(message)))
    };

    html! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-xl font-semibold">{"Users"}</h1>
                <div class="flex items-center space-x-2">
                    <ExportButtons search={pager.search().to_string()} on_error={on_export_error} />
                    <button
                        onclick={on_open_create}
                        class="px-3 py-2 text-sm bg-blue-600 hover:bg-blue-700 text-white rounded-md"
                    >
                        {"New user"}
                    </button>
                </div>
            </div>

            if let Some(message) = &*success {
                <div class="bg-green-50 text-green-700 text-sm rounded p-3">{message.clone()}</div>
            }
            if let Some(message) = &*error {
                <div class="bg-red-50 text-red-700 text-sm rounded p-3">{message.clone()}</div>
            }

            <input
                type="text"
                class="block w-full border border-gray-300 rounded-md px-3 py-2 text-sm"
                placeholder="Search users..."
                value={(*search_input).clone()}
                oninput={on_search_input}
            />

            if state.store.is_loading() {
                <LoadingSpinner />
            } else {
                <UserTable
                    users={state.store.users().to_vec()}
                    sort={*sort}
                    on_sort={on_sort}
                    on_edit={Some(on_open_edit)}
                    on_delete={on_delete}
                    empty_message={if pager.search().is_empty() {
                        "No users have been created yet.".to_string()
                    } else {
                        format!("No users match '{}'", pager.search())
                    }}
                />
                <PaginationControls
                    range_label={pager.range_label(total)}
                    can_prev={pager.can_prev()}
                    can_next={pager.can_next(total)}
                    page_size={pager.page_size()}
                    on_prev={on_prev}
                    on_next={on_next}
                    on_page_size={on_page_size}
                />
            }

            if let Some(mode) = &*form {
                <UserForm
                    user={match mode {
                        FormMode::Create => None,
                        FormMode::Edit(user) => Some(user.clone()),
                    }}
                    on_save={on_form_save.clone()}
                    on_cancel={on_form_cancel.clone()}
                    submitting={*saving}
                    error={(*form_error).clone()}
                />
            }
        </div>
    }
}
