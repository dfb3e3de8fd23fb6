//! This crate contains all shared UI for the workspace: the user admin page
//! controller, its form and table state, and the Dioxus components that
//! render them.

use dioxus::prelude::*;
use store::AdminConfig;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod admin;
pub use admin::{SaveError, UserAdmin};

pub mod form_state;
pub use form_state::{FormMode, UserFormState};

pub mod table_state;
pub use table_state::TableState;

pub mod views;

mod confirmation_dialog;
pub use confirmation_dialog::ConfirmationDialog;

mod user_form;
pub use user_form::UserFormDialog;

mod user_table;
pub use user_table::UserTable;

/// The [`AdminConfig`] provided by the launcher, or the defaults if none was.
pub fn use_admin_config() -> AdminConfig {
    try_use_context::<AdminConfig>().unwrap_or_default()
}
