use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::Ledger;
use crate::utils::{ensure_dir, expenses_file};

use super::{Result, StorageBackend};

const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed JSON persistence for the expense ledger.
///
/// The document is pretty-printed UTF-8 with non-ASCII text kept verbatim.
/// Saves stage to a temporary sibling file and rename into place, so a failed
/// write never truncates the previous state.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Creates a store at `path`, or at the default data file when `None`.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: path.unwrap_or_else(expenses_file),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Ledger> {
        if !self.path.exists() {
            return Ok(Ledger::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(ledger)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
