//! User listing table, shared by the users page and the dashboard.

use roster_core::export::{LAST_LOGIN_FORMAT, NO_DEVICE, NO_SESSION};
use roster_core::sort::{SortColumn, SortOrder, SortState};
use roster_core::User;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserTableProps {
    pub users: Vec<User>,
    pub sort: SortState,
    pub on_sort: Callback<SortColumn>,
    #[prop_or_default]
    pub on_edit: Option<Callback<User>>,
    pub on_delete: Callback<String>,
    /// Shown when the row set is empty.
    #[prop_or("No users found".to_string())]
    pub empty_message: String,
}

fn sort_indicator(sort: &SortState, column: SortColumn) -> &'static str {
    if sort.column == Some(column) {
        match sort.order {
            SortOrder::Asc => " \u{25b2}",
            SortOrder::Desc => " \u{25bc}",
        }
    } else {
        ""
    }
}

#[function_component(UserTable)]
pub fn user_table(props: &UserTableProps) -> Html {
    if props.users.is_empty() {
        return html! {
            <div class="bg-white shadow rounded-lg p-10 text-center text-gray-500">
                {props.empty_message.clone()}
            </div>
        };
    }

    let header = |label: &str, column: SortColumn| {
        let on_sort = props.on_sort.clone();
        let onclick = Callback::from(move |_| on_sort.emit(column));
        html! {
            <th
                scope="col"
                {onclick}
                class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider cursor-pointer select-none"
            >
                {format!("{label}{}", sort_indicator(&props.sort, column))}
            </th>
        }
    };

    let rows = props.sort.apply(&props.users);

    html! {
        <div class="bg-white shadow overflow-hidden rounded-lg">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        {header("Name", SortColumn::Name)}
                        {header("Email", SortColumn::Email)}
                        {header("Last Login", SortColumn::LoginTime)}
                        <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                            {"Last Device"}
                        </th>
                        <th scope="col" class="relative px-6 py-3">
                            <span class="sr-only">{"Actions"}</span>
                        </th>
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    {rows.iter().map(|user| {
                        let on_edit = props.on_edit.as_ref().map(|cb| {
                            let cb = cb.clone();
                            let user = user.clone();
                            Callback::from(move |_| cb.emit(user.clone()))
                        });
                        let on_delete = {
                            let user_id = user.id.clone();
                            let on_delete = props.on_delete.clone();
                            Callback::from(move |_| on_delete.emit(user_id.clone()))
                        };
                        let last_login = user.last_active_time().map_or_else(
                            || NO_SESSION.to_string(),
                            |t| t.format(LAST_LOGIN_FORMAT).to_string(),
                        );
                        let last_device = user.last_device().unwrap_or(NO_DEVICE).to_string();

                        html! {
                            <tr key={user.id.clone()}>
                                <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">
                                    {user.full_name()}
                                </td>
                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                    {user.email.clone()}
                                </td>
                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                    {last_login}
                                </td>
                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                    {last_device}
                                </td>
                                <td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium">
                                    <div class="flex items-center justify-end space-x-2">
                                        if let Some(on_edit) = on_edit {
                                            <button
                                                onclick={on_edit}
                                                class="text-blue-600 hover:text-blue-900"
                                            >
                                                {"Edit"}
                                            </button>
                                            <span class="text-gray-300">{"|"}</span>
                                        }
                                        <button
                                            onclick={on_delete}
                                            class="text-red-600 hover:text-red-900"
                                        >
                                            {"Delete"}
                                        </button>
                                    </div>
                                </td>
                            </tr>
                        }
                    }).collect::<Html>()}
                </tbody>
            </table>
        </div>
    }
}
