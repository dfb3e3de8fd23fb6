use dioxus::prelude::*;
use store::{Field, MemoryStore, SortColumn, SortDirection, User};

use crate::admin::UserAdmin;
use crate::{use_admin_config, ConfirmationDialog, UserFormDialog, UserTable};

const USER_ADMIN_CSS: Asset = asset!("/assets/styling/user_admin.css");

/// The admin page: user table, add/edit form and delete confirmation.
///
/// Owns the [`UserAdmin`] controller for the session, backed by a fresh
/// [`MemoryStore`] seeded from the [`store::AdminConfig`] in context.
#[component]
pub fn UserAdminView() -> Element {
    let config = use_admin_config();
    let mut admin = use_signal({
        let config = config.clone();
        move || UserAdmin::new(MemoryStore::new(), &config)
    });

    let users = admin.read().users().to_vec();
    let form = admin.read().form().cloned();
    let confirm_open = admin.read().pending_delete().is_some();
    let delete_message = admin.read().delete_message().to_string();

    let handle_submit = move |_| {
        if let Err(e) = admin.write().submit_form() {
            tracing::debug!("Save rejected: {}", e);
        }
    };

    let handle_confirm_delete = move |_| {
        if let Err(e) = admin.write().confirm_delete() {
            tracing::error!("Delete failed: {}", e);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: USER_ADMIN_CSS }

        main {
            class: "user-admin",

            UserTable {
                users,
                page_size: config.table.page_size,
                page_size_options: config.table.page_size_options.clone(),
                on_edit: move |user: Option<User>| admin.write().edit(user),
                on_delete: move |id: String| admin.write().request_delete(id),
                on_search: move |query: String| admin.write().search(&query),
                on_sort: move |(direction, column): (SortDirection, SortColumn)| {
                    admin.write().sort(direction, column)
                },
            }

            if let Some(form) = form {
                UserFormDialog {
                    form,
                    on_input: move |(field, value): (Field, String)| {
                        admin.write().form_input(field, &value);
                    },
                    on_submit: handle_submit,
                    on_cancel: move |_| admin.write().close_form(),
                }
            }

            ConfirmationDialog {
                open: confirm_open,
                message: delete_message,
                on_confirm: handle_confirm_delete,
                on_close: move |_| admin.write().cancel_delete(),
            }
        }
    }
}
