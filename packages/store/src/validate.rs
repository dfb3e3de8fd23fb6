//! # Field validation for user records
//!
//! [`validate`] checks a candidate [`User`] against the per-field rules and
//! returns every failure at once as a [`ValidationErrors`] map. Rules are
//! independent: a failing name does not stop the email from being checked.
//!
//! | Field | Rule |
//! |-------|------|
//! | name | 2 to 50 characters |
//! | email | matches `\S+@\S+\.\S+` |
//! | linkedin | matches `https?://(www\.)?linkedin\.com/.*$` |
//! | gender | always present, enforced by [`crate::Gender`] |
//! | line1, state, city | non-empty |
//! | pin | exactly six ASCII digits |
//!
//! [`validate_record`] adds the location membership check on top: the state
//! must be a known state and the city one of its cities. Everything that
//! writes to the store goes through it.
//!
//! Email uniqueness depends on the other stored records and is checked by
//! [`crate::UserStore::is_email_unique`], not here.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::locations;
use crate::models::{Field, User};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));
static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(www\.)?linkedin\.com/.*$").expect("linkedin pattern is valid")
});
static PIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("pin pattern is valid"));

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 50;

pub const NAME_MESSAGE: &str = "Name is required and should be between 2 and 50 characters";
pub const EMAIL_MESSAGE: &str = "Valid email is required";
pub const LINKEDIN_MESSAGE: &str = "Valid LinkedIn URL is required";
pub const LINE1_MESSAGE: &str = "Address Line 1 is required";
pub const STATE_MESSAGE: &str = "State is required";
pub const CITY_MESSAGE: &str = "City is required";
pub const PIN_MESSAGE: &str = "PIN should be exactly 6 digits";
pub const INVALID_STATE_MESSAGE: &str = "Select a valid state";
pub const INVALID_CITY_MESSAGE: &str = "Select a valid city";

/// Field → message map. Empty when the candidate is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Record `message` for `field`, replacing any earlier message.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// Check every field rule against `user`.
pub fn validate(user: &User) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let name_len = user.name.chars().count();
    if !(NAME_MIN..=NAME_MAX).contains(&name_len) {
        errors.insert(Field::Name, NAME_MESSAGE);
    }
    if !EMAIL_RE.is_match(&user.email) {
        errors.insert(Field::Email, EMAIL_MESSAGE);
    }
    if !LINKEDIN_RE.is_match(&user.linkedin) {
        errors.insert(Field::Linkedin, LINKEDIN_MESSAGE);
    }

    let address = &user.address;
    if address.line1.is_empty() {
        errors.insert(Field::Line1, LINE1_MESSAGE);
    }
    if address.state.is_empty() {
        errors.insert(Field::State, STATE_MESSAGE);
    }
    if address.city.is_empty() {
        errors.insert(Field::City, CITY_MESSAGE);
    }
    if !PIN_RE.is_match(&address.pin) {
        errors.insert(Field::Pin, PIN_MESSAGE);
    }

    errors
}

/// [`validate`] plus location membership. A non-empty state must be one of
/// [`locations::states`], and a non-empty city one of that state's cities.
pub fn validate_record(user: &User) -> ValidationErrors {
    let mut errors = validate(user);

    let address = &user.address;
    if !address.state.is_empty() && !locations::is_known_state(&address.state) {
        errors.insert(Field::State, INVALID_STATE_MESSAGE);
    } else if !address.city.is_empty() && !locations::is_city_of(&address.state, &address.city) {
        errors.insert(Field::City, INVALID_CITY_MESSAGE);
    }

    errors
}
