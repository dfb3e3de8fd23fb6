//! Locating and reading `useradmin.toml` on the desktop.

use std::path::{Path, PathBuf};

use store::AdminConfig;

/// `<config_dir>/useradmin/useradmin.toml`, e.g.
/// `~/.config/useradmin/useradmin.toml` on Linux.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("useradmin")
        .join(AdminConfig::filename())
}

/// Read the config at `path`. A missing file means defaults; an unreadable
/// or malformed one is logged and also falls back to defaults.
pub fn load_from(path: &Path) -> AdminConfig {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("No config at {}, using defaults", path.display());
            return AdminConfig::default();
        }
        Err(e) => {
            tracing::error!("Failed to read {}: {}", path.display(), e);
            return AdminConfig::default();
        }
    };

    match AdminConfig::from_toml(&text) {
        Ok(config) => {
            tracing::info!(
                "Loaded {} ({} seed users)",
                path.display(),
                config.users.len()
            );
            config
        }
        Err(e) => {
            tracing::error!("Invalid config {}: {}", path.display(), e);
            AdminConfig::default()
        }
    }
}
