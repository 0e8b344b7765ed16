//! Create/edit user form, rendered as a modal over the listing.

use roster_core::validate::{validate_signup, FieldErrors};
use roster_core::{NewUser, User, UserUpdate};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// What the form hands back on save.
#[derive(Debug, Clone, PartialEq)]
pub enum UserFormValue {
    Create(NewUser),
    Update { id: String, update: UserUpdate },
}

#[derive(Properties, PartialEq)]
pub struct UserFormProps {
    /// `Some` switches the form into edit mode.
    #[prop_or_default]
    pub user: Option<User>,
    pub on_save: Callback<UserFormValue>,
    pub on_cancel: Callback<()>,
    #[prop_or_default]
    pub submitting: bool,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(UserForm)]
pub fn user_form(props: &UserFormProps) -> Html {
    let editing = props.user.clone();
    let first_name = use_state(|| {
        editing
            .as_ref()
            .map(|u| u.first_name.clone())
            .unwrap_or_default()
    });
    let last_name = use_state(|| {
        editing
            .as_ref()
            .map(|u| u.last_name.clone())
            .unwrap_or_default()
    });
    let email = use_state(|| editing.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let password = use_state(String::new);
    let field_errors = use_state(FieldErrors::default);

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
        let editing = editing.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let password = password.clone();
        let field_errors = field_errors.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // When editing, an empty password means "leave it unchanged"
            let mut errors = validate_signup(&first_name, &last_name, &email, &password);
            if editing.is_some() && password.is_empty() {
                errors.password = None;
            }
            if !errors.is_empty() {
                field_errors.set(errors);
                return;
            }
            field_errors.set(FieldErrors::default());

            let value = match &editing {
                Some(user) => UserFormValue::Update {
                    id: user.id.clone(),
                    update: UserUpdate {
                        first_name: Some((*first_name).clone()),
                        last_name: Some((*last_name).clone()),
                        email: Some((*email).clone()),
                        password: (!password.is_empty()).then(|| (*password).clone()),
                    },
                },
                None => UserFormValue::Create(NewUser {
                    first_name: (*first_name).clone(),
                    last_name: (*last_name).clone(),
                    email: (*email).clone(),
                    password: (*password).clone(),
                }),
            };
            on_save.emit(value);
        })
    };

    let on_cancel = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let title = if editing.is_some() {
        "Edit user"
    } else {
        "New user"
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

    let password_label = if editing.is_some() {
        "Password (leave blank to keep)"
    } else {
        "Password"
    };

    html! {
        <div class="fixed inset-0 bg-black bg-opacity-40 flex items-center justify-center z-10">
            <form onsubmit={on_submit} class="bg-white rounded-lg shadow-lg p-6 w-full max-w-md space-y-4">
                <h2 class="text-lg font-semibold">{title}</h2>
                if let Some(error) = &props.error {
                    <div class="bg-red-50 text-red-700 text-sm rounded p-3">{error.clone()}</div>
                }
                {field("First name", "text", &first_name, on_first_name, &field_errors.first_name)}
                {field("Last name", "text", &last_name, on_last_name, &field_errors.last_name)}
                {field("Email", "email", &email, on_email, &field_errors.email)}
                {field(password_label, "password", &password, on_password, &field_errors.password)}
                <div class="flex justify-end space-x-2">
                    <button
                        type="button"
                        onclick={on_cancel}
                        class="px-4 py-2 text-sm border border-gray-300 rounded-md"
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="submit"
                        disabled={props.submitting}
                        class="px-4 py-2 text-sm bg-blue-600 hover:bg-blue-700 text-white rounded-md disabled:opacity-50"
                    >
                        {if props.submitting { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
