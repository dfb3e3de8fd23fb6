//! # Page controller for the user admin screen
//!
//! [`UserAdmin`] coordinates the record store, the table and the two dialogs.
//! It owns:
//!
//! - the injected [`UserStore`], the only authoritative copy of the records;
//! - the displayed snapshot, recomputed from the store by [`UserAdmin::refresh`]
//!   after every mutation and every search or sort change;
//! - the open form, if any, as a [`UserFormState`];
//! - the id awaiting delete confirmation.
//!
//! Search and sort are kept as independent criteria in a [`ListQuery`], so each
//! refresh filters and then sorts the full canonical list.
//!
//! The controller is plain Rust; [`crate::views::UserAdminView`] keeps it in a
//! `Signal` and routes component events to it.

use store::{
    validate_record, AdminConfig, Field, ListQuery, SortColumn, SortDirection, StoreError, User,
    UserStore, ValidationErrors,
};
use thiserror::Error;

use crate::form_state::UserFormState;

pub const EMAIL_TAKEN_MESSAGE: &str = "Email already exists";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("Email already exists")]
    EmailTaken,
    #[error("invalid fields: {}", invalid_fields(.0).join(", "))]
    Invalid(ValidationErrors),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct UserAdmin<S: UserStore> {
    store: S,
    query: ListQuery,
    users: Vec<User>,
    form: Option<UserFormState>,
    pending_delete: Option<String>,
    delete_message: String,
}

impl<S: UserStore> UserAdmin<S> {
    /// Take ownership of `store`, add the seed records from `config`, and
    /// load the first snapshot, sorted by name ascending like a fresh table.
    pub fn new(store: S, config: &AdminConfig) -> Self {
        let mut query = ListQuery::new();
        query.set_sort(SortColumn::Name, SortDirection::Asc);
        let mut admin = Self {
            store,
            query,
            users: Vec::new(),
            form: None,
            pending_delete: None,
            delete_message: config.dialog.delete_message.clone(),
        };
        for user in &config.users {
            admin.seed(user.clone());
        }
        admin.refresh();
        admin
    }

    fn seed(&mut self, mut user: User) {
        let errors = validate_record(&user);
        if !errors.is_empty() {
            tracing::warn!(
                "Skipping seed user {:?}: invalid {:?}",
                user.email,
                invalid_fields(&errors)
            );
            return;
        }
        if !self.store.is_email_unique(&user.email, &user.id) {
            tracing::warn!("Skipping seed user {:?}: email already exists", user.email);
            return;
        }
        if user.id.is_empty() {
            user.id = new_id();
        }
        if let Err(e) = self.store.add(user) {
            tracing::warn!("Skipping seed user: {}", e);
        }
    }

    /// The snapshot handed to the table.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Recompute the snapshot from the store's canonical list.
    pub fn refresh(&mut self) {
        self.users = self.query.apply(self.store.list());
    }

    pub fn search(&mut self, query: &str) {
        tracing::debug!("Search {:?}", query);
        self.query.set_search(query);
        self.refresh();
    }

    pub fn sort(&mut self, direction: SortDirection, column: SortColumn) {
        tracing::debug!("Sort by {:?} {}", column, direction);
        self.query.set_sort(column, direction);
        self.refresh();
    }

    // Form dialog

    /// Open the form to edit `user`, or to add a new record when `None`.
    pub fn edit(&mut self, user: Option<User>) {
        self.form = Some(UserFormState::open(user));
    }

    pub fn form(&self) -> Option<&UserFormState> {
        self.form.as_ref()
    }

    pub fn is_form_open(&self) -> bool {
        self.form.is_some()
    }

    /// The user being edited, if the form is open in edit mode.
    pub fn selected(&self) -> Option<&User> {
        self.form
            .as_ref()
            .map(UserFormState::draft)
            .filter(|u| u.is_persisted())
    }

    /// Current uniqueness error shown on the email field.
    pub fn email_error(&self) -> Option<&str> {
        self.form.as_ref().and_then(UserFormState::email_conflict)
    }

    /// Forward a keystroke to the open form. Returns whether it was accepted.
    pub fn form_input(&mut self, field: Field, value: &str) -> bool {
        match self.form.as_mut() {
            Some(form) => form.input(field, value),
            None => false,
        }
    }

    /// Discard the open form and its edits.
    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Submit the open form. `Ok(None)` means the form is closed or still has
    /// field errors; `Ok(Some(id))` means the record was saved.
    pub fn submit_form(&mut self) -> Result<Option<String>, SaveError> {
        let Some(candidate) = self.form.as_mut().and_then(UserFormState::submit) else {
            return Ok(None);
        };
        self.save(candidate).map(Some)
    }

    /// Persist `candidate`, returning its id.
    ///
    /// The email must not be used by any other record in the store. A record
    /// without an id is added under a fresh one; otherwise the stored record
    /// is replaced. On success the form is closed. A candidate that fails
    /// [`validate_record`] is refused before the store is touched.
    pub fn save(&mut self, mut candidate: User) -> Result<String, SaveError> {
        let errors = validate_record(&candidate);
        if !errors.is_empty() {
            tracing::debug!("Refusing to save: invalid {:?}", invalid_fields(&errors));
            return Err(SaveError::Invalid(errors));
        }
        if !self.store.is_email_unique(&candidate.email, &candidate.id) {
            if let Some(form) = self.form.as_mut() {
                form.set_email_conflict(Some(EMAIL_TAKEN_MESSAGE.to_string()));
            }
            return Err(SaveError::EmailTaken);
        }

        if candidate.is_persisted() {
            let id = candidate.id.clone();
            self.store.update(candidate).inspect_err(|e| {
                tracing::warn!("Update failed: {}", e);
            })?;
            tracing::info!("Updated user {}", id);
            self.finish_save(id)
        } else {
            candidate.id = new_id();
            let id = candidate.id.clone();
            self.store.add(candidate)?;
            tracing::info!("Created user {}", id);
            self.finish_save(id)
        }
    }

    fn finish_save(&mut self, id: String) -> Result<String, SaveError> {
        self.refresh();
        self.close_form();
        Ok(id)
    }

    // Delete confirmation

    /// Ask for confirmation before deleting `id`. Does not touch the store.
    pub fn request_delete(&mut self, id: String) {
        self.pending_delete = Some(id);
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn delete_message(&self) -> &str {
        &self.delete_message
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the pending record. `Ok(None)` when nothing was pending.
    pub fn confirm_delete(&mut self) -> Result<Option<User>, StoreError> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(None);
        };
        let result = self.store.delete(&id);
        self.refresh();
        match result {
            Ok(user) => {
                tracing::info!("Deleted user {}", id);
                Ok(Some(user))
            }
            Err(e) => {
                tracing::warn!("Delete failed: {}", e);
                Err(e)
            }
        }
    }
}

fn invalid_fields(errors: &ValidationErrors) -> Vec<&'static str> {
    errors.iter().map(|(field, _)| field.as_str()).collect()
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
