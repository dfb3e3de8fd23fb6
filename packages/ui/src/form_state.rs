//! Editing state behind the user form dialog.
//!
//! A [`UserFormState`] exists only while the dialog is open; closing the dialog
//! drops it, which discards any in-progress edits. Keystrokes go through
//! [`UserFormState::input`], which applies the per-field input filters, and
//! [`UserFormState::submit`] hands back the candidate only when nothing blocks
//! it.
//!
//! When a keystroke is rejected or trimmed, the value the input shows no longer
//! matches the draft, yet re-rendering the draft would produce an identical
//! `value` attribute and no DOM update. [`UserFormState::revision`] is bumped in
//! that case so the dialog can key its text inputs on it and rebuild them from
//! the draft.

use store::locations;
use store::validate::ValidationErrors;
use store::{validate_record, Field, Gender, User};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UserFormState {
    mode: FormMode,
    draft: User,
    errors: ValidationErrors,
    email_conflict: Option<String>,
    revision: u32,
}

impl UserFormState {
    /// Open for `user` (edit mode) or for a blank record (add mode).
    pub fn open(user: Option<User>) -> Self {
        let (mode, draft) = match user {
            Some(user) => (FormMode::Edit, user),
            None => (FormMode::Add, User::default()),
        };
        Self {
            mode,
            draft,
            errors: ValidationErrors::new(),
            email_conflict: None,
            revision: 0,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Add User",
            FormMode::Edit => "Edit User",
        }
    }

    pub fn draft(&self) -> &User {
        &self.draft
    }

    pub fn value(&self, field: Field) -> &str {
        field.get(&self.draft)
    }

    /// City choices for the currently selected state.
    pub fn cities(&self) -> &'static [&'static str] {
        locations::cities(&self.draft.address.state)
    }

    /// Message to show under `field`, if any. A validation message on the
    /// email field takes precedence over a uniqueness conflict.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field).or(match field {
            Field::Email => self.email_conflict.as_deref(),
            _ => None,
        })
    }

    /// Changes whenever an input's displayed text must be replaced with the
    /// draft's value.
    pub fn revision(&self) -> u32 {
        self.revision
    }

    pub fn email_conflict(&self) -> Option<&str> {
        self.email_conflict.as_deref()
    }

    /// Flag (or clear) an email conflict reported by the caller. While set,
    /// [`Self::submit`] is blocked.
    pub fn set_email_conflict(&mut self, message: Option<String>) {
        self.email_conflict = message;
    }

    /// Apply one keystroke or selection to `field`.
    ///
    /// Leading whitespace is stripped. Returns `false` when the new value is
    /// rejected and the field keeps its previous contents: a non-digit in the
    /// PIN, an over-long value, or an unknown gender.
    pub fn input(&mut self, field: Field, value: &str) -> bool {
        let trimmed = value.trim_start();
        let accepted = self.apply(field, trimmed);
        if !accepted || trimmed.len() != value.len() {
            self.revision = self.revision.wrapping_add(1);
        }
        accepted
    }

    fn apply(&mut self, field: Field, value: &str) -> bool {
        if let Some(max) = field.max_len() {
            if value.chars().count() > max {
                return false;
            }
        }

        let address = &mut self.draft.address;
        match field {
            Field::Name => self.draft.name = value.to_string(),
            Field::Email => {
                self.draft.email = value.to_string();
                self.email_conflict = None;
            }
            Field::Linkedin => self.draft.linkedin = value.to_string(),
            Field::Gender => match value.parse::<Gender>() {
                Ok(gender) => self.draft.gender = gender,
                Err(_) => return false,
            },
            Field::Line1 => address.line1 = value.to_string(),
            Field::Line2 => address.line2 = value.to_string(),
            Field::State => {
                address.state = value.to_string();
                if !locations::is_city_of(&address.state, &address.city) {
                    address.city.clear();
                }
            }
            Field::City => address.city = value.to_string(),
            Field::Pin => {
                if !value.chars().all(|c| c.is_ascii_digit()) {
                    return false;
                }
                address.pin = value.to_string();
            }
        }
        true
    }

    /// Validate the draft. Returns the candidate when it may be saved;
    /// otherwise records the errors for display and returns `None`.
    pub fn submit(&mut self) -> Option<User> {
        self.errors = validate_record(&self.draft);
        if self.errors.is_empty() && self.email_conflict.is_none() {
            Some(self.draft.clone())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::validate::{
        EMAIL_MESSAGE, INVALID_CITY_MESSAGE, INVALID_STATE_MESSAGE, PIN_MESSAGE,
    };
    use store::Address;

    fn filled_form() -> UserFormState {
        let mut form = UserFormState::open(None);
        form.input(Field::Name, "Grace Hopper");
        form.input(Field::Email, "grace@navy.mil");
        form.input(Field::Linkedin, "https://linkedin.com/in/grace");
        form.input(Field::Line1, "1 Harbor Rd");
        form.input(Field::State, "New York");
        form.input(Field::City, "Buffalo");
        form.input(Field::Pin, "142010");
        form
    }

    #[test]
    fn test_add_mode_defaults() {
        let form = UserFormState::open(None);
        assert_eq!(form.mode(), FormMode::Add);
        assert_eq!(form.title(), "Add User");
        assert_eq!(form.draft().gender, Gender::Male);
        assert!(form.draft().id.is_empty());
        assert!(form.cities().is_empty());
    }

    #[test]
    fn test_edit_mode_prefills() {
        let user = User {
            id: "42".to_string(),
            name: "Linus".to_string(),
            gender: Gender::Other,
            address: Address {
                state: "Florida".to_string(),
                city: "Miami".to_string(),
                ..Address::default()
            },
            ..User::default()
        };
        let form = UserFormState::open(Some(user.clone()));
        assert_eq!(form.mode(), FormMode::Edit);
        assert_eq!(form.title(), "Edit User");
        assert_eq!(form.draft(), &user);
        assert_eq!(form.cities(), &["Miami", "Orlando", "Tampa"]);
    }

    #[test]
    fn test_leading_whitespace_is_stripped() {
        let mut form = UserFormState::open(None);
        assert!(form.input(Field::Name, "   Ada  "));
        assert_eq!(form.value(Field::Name), "Ada  ");
        assert!(form.input(Field::Line2, "\tSuite 5"));
        assert_eq!(form.value(Field::Line2), "Suite 5");
    }

    #[test]
    fn test_pin_rejects_non_digit_keystrokes() {
        let mut form = UserFormState::open(None);

        // Type "12a34" one keystroke at a time, as the input would report it
        let mut typed = String::new();
        for c in "12a34".chars() {
            let attempt = format!("{}{}", form.value(Field::Pin), c);
            if form.input(Field::Pin, &attempt) {
                typed = attempt;
            }
        }
        assert_eq!(typed, "1234");
        assert_eq!(form.value(Field::Pin), "1234");
    }

    #[test]
    fn test_revision_changes_when_display_must_be_reset() {
        let mut form = UserFormState::open(None);
        form.input(Field::Pin, "12");
        let before = form.revision();

        // Accepted as typed: the input already shows the draft
        form.input(Field::Pin, "123");
        assert_eq!(form.revision(), before);

        // Rejected: the input shows "123a" but the draft is still "123"
        assert!(!form.input(Field::Pin, "123a"));
        let after_reject = form.revision();
        assert_ne!(after_reject, before);

        // Trimmed: the input shows " Ada" but the draft is "Ada"
        assert!(form.input(Field::Name, " Ada"));
        assert_ne!(form.revision(), after_reject);
        assert_eq!(form.value(Field::Name), "Ada");

        // Once reset, typing continues from the draft value
        assert!(form.input(Field::Pin, "1234"));
        assert_eq!(form.value(Field::Pin), "1234");
    }

    #[test]
    fn test_max_length_rejects_overflow() {
        let mut form = UserFormState::open(None);
        assert!(form.input(Field::Pin, "123456"));
        assert!(!form.input(Field::Pin, "1234567"));
        assert_eq!(form.value(Field::Pin), "123456");

        assert!(form.input(Field::Name, &"n".repeat(50)));
        assert!(!form.input(Field::Name, &"n".repeat(51)));
    }

    #[test]
    fn test_unknown_gender_is_rejected() {
        let mut form = UserFormState::open(None);
        assert!(form.input(Field::Gender, "Female"));
        assert!(!form.input(Field::Gender, ""));
        assert_eq!(form.draft().gender, Gender::Female);
    }

    #[test]
    fn test_changing_state_clears_foreign_city() {
        let mut form = filled_form();
        assert_eq!(form.value(Field::City), "Buffalo");

        form.input(Field::State, "Texas");
        assert_eq!(form.value(Field::City), "");
        assert_eq!(form.cities(), &["Houston", "Dallas", "Austin"]);

        form.input(Field::City, "Austin");
        // Re-selecting the same state keeps a valid city
        form.input(Field::State, "Texas");
        assert_eq!(form.value(Field::City), "Austin");
    }

    #[test]
    fn test_submit_valid_form() {
        let mut form = filled_form();
        let user = form.submit().expect("form should submit");
        assert_eq!(user.name, "Grace Hopper");
        assert_eq!(user.address.city, "Buffalo");
        assert!(form.error(Field::Name).is_none());
    }

    #[test]
    fn test_submit_shows_errors_and_stays() {
        let mut form = filled_form();
        form.input(Field::Email, "not-an-email");
        form.input(Field::Pin, "12");

        assert!(form.submit().is_none());
        assert_eq!(form.error(Field::Email), Some(EMAIL_MESSAGE));
        assert_eq!(form.error(Field::Pin), Some(PIN_MESSAGE));
        assert!(form.error(Field::Name).is_none());

        // Errors stay until the next submit
        form.input(Field::Pin, "123456");
        assert_eq!(form.error(Field::Pin), Some(PIN_MESSAGE));
        form.input(Field::Email, "ok@ok.io");
        assert!(form.submit().is_some());
        assert!(form.error(Field::Pin).is_none());
    }

    #[test]
    fn test_email_conflict_blocks_until_email_edited() {
        let mut form = filled_form();
        form.set_email_conflict(Some("Email already exists".to_string()));

        assert!(form.submit().is_none());
        assert_eq!(form.error(Field::Email), Some("Email already exists"));

        // Typing in the email field clears the conflict
        form.input(Field::Email, "grace2@navy.mil");
        assert!(form.email_conflict().is_none());
        assert!(form.submit().is_some());
    }

    #[test]
    fn test_submit_checks_location_consistency() {
        let mut form = filled_form();
        form.draft.address.state = "Ohio".to_string();
        assert!(form.submit().is_none());
        assert_eq!(form.error(Field::State), Some(INVALID_STATE_MESSAGE));

        let mut form = filled_form();
        form.draft.address.city = "Chicago".to_string();
        assert!(form.submit().is_none());
        assert_eq!(form.error(Field::City), Some(INVALID_CITY_MESSAGE));
    }
}
