//! # Admin screen configuration: `useradmin.toml`
//!
//! Optional TOML file read by the desktop launcher from the platform config
//! directory (filename: [`AdminConfig::filename`] = `"useradmin.toml"`). The web
//! build always uses [`AdminConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [table]
//! page_size = 5                  # must be one of page_size_options
//! page_size_options = [5, 10, 25]
//!
//! [dialog]
//! delete_message = "Are you sure you want to delete this user?"
//!
//! [[users]]                      # optional seed records, loaded at startup
//! name = "Ada Lovelace"
//! email = "ada@example.com"
//! linkedin = "https://linkedin.com/in/ada"
//! gender = "Female"
//! address = { line1 = "1 Engine Rd", state = "Texas", city = "Austin", pin = "733301" }
//! ```
//!
//! Every section carries `#[serde(default)]`, so a missing or empty file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

use crate::models::User;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub dialog: DialogConfig,
    /// Records added to the store when the screen starts.
    #[serde(default)]
    pub users: Vec<User>,
}

/// Pagination settings for the user table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
}

fn default_page_size() -> usize {
    5
}

fn default_page_size_options() -> Vec<usize> {
    vec![5, 10, 25]
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_size_options: default_page_size_options(),
        }
    }
}

impl TableConfig {
    /// Drop zero and duplicate options, keep them ascending, and make sure
    /// `page_size` is one of them.
    pub fn normalized(mut self) -> Self {
        self.page_size_options.retain(|n| *n > 0);
        self.page_size_options.sort_unstable();
        self.page_size_options.dedup();
        if self.page_size_options.is_empty() {
            self.page_size_options = default_page_size_options();
        }
        if !self.page_size_options.contains(&self.page_size) {
            self.page_size = self.page_size_options[0];
        }
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DialogConfig {
    #[serde(default = "default_delete_message")]
    pub delete_message: String,
}

fn default_delete_message() -> String {
    "Are you sure you want to delete this user?".to_string()
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            delete_message: default_delete_message(),
        }
    }
}

impl AdminConfig {
    /// Builder method to replace the seed records.
    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "useradmin.toml"
    }

    /// Parse from TOML string. The table section is normalized.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.table = config.table.normalized();
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
