//! Tiny JSON state under the data dir: remembers the last run script so
//! `run -` can repeat it. Best-effort IO; failures never break the run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::utils::data_dir;

pub const STORAGE_FILE: &str = "storage.json";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Storage {
    #[serde(rename = "lastRunCommand", skip_serializing_if = "Option::is_none")]
    pub last_run_command: Option<String>,
}

fn storage_path() -> PathBuf {
    data_dir().join(STORAGE_FILE)
}

pub fn load_storage_from(path: &Path) -> Storage {
    let Ok(raw) = std::fs::read_to_string(path) else {
        return Storage::default();
    };
    serde_json::from_str(&raw).unwrap_or_default()
}

pub fn save_storage_to(path: &Path, storage: &Storage) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let raw = serde_json::to_string(storage)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    std::fs::write(path, raw)
}

pub fn load_storage() -> Storage {
    load_storage_from(&storage_path())
}

pub fn save_storage(storage: &Storage) -> std::io::Result<()> {
    save_storage_to(&storage_path(), storage)
}
