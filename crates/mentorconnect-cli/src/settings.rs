//! Layered configuration: TOML file, then `MENTORCONNECT_*` environment
//! variables. Command-line flags override both in `main`.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use mentorconnect_core::{listing::DEFAULT_PAGE_SIZE, session::AdminCredentials};
use serde::Deserialize;

/// Shape of `mentorconnect.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  /// JSON file holding the directory entities.
  #[serde(default = "default_data_path")]
  pub data_path:           PathBuf,
  #[serde(default = "default_page_size")]
  pub page_size:           usize,
  #[serde(default)]
  pub admin_email:         String,
  /// Argon2 PHC string; generate one with `mentorconnect hash-password`.
  #[serde(default)]
  pub admin_password_hash: String,
}

fn default_data_path() -> PathBuf { PathBuf::from("directory.json") }

fn default_page_size() -> usize { DEFAULT_PAGE_SIZE }

impl Settings {
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path.to_path_buf()).required(false))
      .add_source(config::Environment::with_prefix("MENTORCONNECT"))
      .build()
      .context("failed to read config file")?;

    settings
      .try_deserialize()
      .context("failed to deserialise Settings")
  }

  pub fn admin(&self) -> AdminCredentials {
    AdminCredentials {
      email:         self.admin_email.clone(),
      password_hash: self.admin_password_hash.clone(),
    }
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
