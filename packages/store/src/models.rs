//! # Domain models for user records
//!
//! Defines the record managed by the admin screen and the identifiers the form
//! and validator use to address its fields.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | A single user record. `id` is empty until the record has been saved. |
//! | [`Address`] | Postal address embedded in a [`User`]. Only `line2` is optional. |
//! | [`Gender`] | The three selectable genders. Displays and parses as `"Male"`, `"Female"`, `"Other"`. |
//! | [`Field`] | One editable field of a [`User`], including the nested address fields. |
//!
//! All record types are `Serialize + Deserialize` so seed records can be listed
//! in [`crate::AdminConfig`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A user record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier. Empty for a record that has not been saved yet.
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub linkedin: String,
    #[serde(default)]
    pub gender: Gender,
    pub address: Address,
}

impl User {
    /// Whether the record has been assigned an id by the store's owner.
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Postal address of a user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line1: String,
    #[serde(default)]
    pub line2: String,
    pub state: String,
    pub city: String,
    pub pin: String,
}

impl Address {
    /// Single-line rendering: `line1, line2, city, state, pin`.
    /// An empty `line2` is left out.
    pub fn summary(&self) -> String {
        [
            self.line1.as_str(),
            self.line2.as_str(),
            self.city.as_str(),
            self.state.as_str(),
            self.pin.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the [`Gender`] names.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown gender: {0:?}")]
pub struct ParseGenderError(pub String);

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| ParseGenderError(s.to_string()))
    }
}

/// An editable field of a [`User`].
///
/// Ordered the way the form lays them out, so iterating a
/// [`crate::ValidationErrors`] yields messages top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Linkedin,
    Gender,
    Line1,
    Line2,
    State,
    City,
    Pin,
}

impl Field {
    /// Stable key, used as the input `id` in the rendered form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Linkedin => "linkedin",
            Field::Gender => "gender",
            Field::Line1 => "line1",
            Field::Line2 => "line2",
            Field::State => "state",
            Field::City => "city",
            Field::Pin => "pin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Linkedin => "LinkedIn URL",
            Field::Gender => "Gender",
            Field::Line1 => "Address Line 1",
            Field::Line2 => "Address Line 2",
            Field::State => "State",
            Field::City => "City",
            Field::Pin => "PIN Code",
        }
    }

    /// Longest value the input accepts, if limited.
    pub fn max_len(&self) -> Option<usize> {
        match self {
            Field::Name => Some(50),
            Field::Email | Field::Linkedin => Some(255),
            Field::Pin => Some(6),
            _ => None,
        }
    }

    /// Read the current value of this field from `user`.
    pub fn get<'a>(&self, user: &'a User) -> &'a str {
        match self {
            Field::Name => &user.name,
            Field::Email => &user.email,
            Field::Linkedin => &user.linkedin,
            Field::Gender => user.gender.as_str(),
            Field::Line1 => &user.address.line1,
            Field::Line2 => &user.address.line2,
            Field::State => &user.address.state,
            Field::City => &user.address.city,
            Field::Pin => &user.address.pin,
        }
    }
}
