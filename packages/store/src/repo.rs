//! # The record store seam
//!
//! [`UserStore`] is the authoritative collection of [`User`] records. The page
//! controller is handed one store at construction and goes through this trait
//! for every read and mutation, so tests can run against an isolated
//! [`crate::MemoryStore`].
//!
//! Unknown ids are reported as [`StoreError::NotFound`] rather than ignored.

use crate::error::StoreError;
use crate::models::User;

pub trait UserStore {
    /// Every record, in insertion order.
    fn list(&self) -> &[User];

    /// Append `user`. Its id must not already be present.
    fn add(&mut self, user: User) -> Result<(), StoreError>;

    /// Replace the record whose id matches `user.id`.
    fn update(&mut self, user: User) -> Result<(), StoreError>;

    /// Remove and return the record with `id`.
    fn delete(&mut self, id: &str) -> Result<User, StoreError>;

    fn get(&self, id: &str) -> Option<&User> {
        self.list().iter().find(|u| u.id == id)
    }

    /// True unless another record (any id other than `except_id`) already
    /// uses `email`, compared case-insensitively.
    fn is_email_unique(&self, email: &str, except_id: &str) -> bool {
        let email = email.to_lowercase();
        self.list()
            .iter()
            .all(|u| u.id == except_id || u.email.to_lowercase() != email)
    }
}
