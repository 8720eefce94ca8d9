//! Platform-specific application data directory resolution.
//!
//! The configuration file lives in the conventional per-user application
//! data directory of each platform:
//!
//! - **Windows**: `%LOCALAPPDATA%\glix`
//! - **macOS**: `~/Library/Application Support/glix`
//! - **Linux**: `~/.local/share/glix`
//!
//! The directory is created on first use.

use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "glix";

#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    /// Resolves the application data directory for the current platform.
    ///
    /// Falls back to the current directory when the relevant environment
    /// variable (`HOME` / `LOCALAPPDATA`) is unset.
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(APP_NAME);

        Self { base_path }
    }

    /// Returns the full path for a file inside the data directory,
    /// creating the directory if it does not yet exist.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
