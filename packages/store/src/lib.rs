//! Domain layer for the user admin screen: records, reference data,
//! validation, the record store and list queries. No UI dependencies.

pub mod config;
pub mod error;
pub mod locations;
pub mod models;
pub mod query;
pub mod repo;
pub mod validate;

mod memory;
pub use memory::MemoryStore;

pub use config::{AdminConfig, DialogConfig, TableConfig};
pub use error::StoreError;
pub use models::{Address, Field, Gender, User};
pub use query::{ListQuery, SortColumn, SortDirection};
pub use repo::UserStore;
pub use validate::{validate, validate_record, ValidationErrors};
