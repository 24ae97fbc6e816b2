use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::{info, warn};

use crate::{errors::StorageError, ledger::Ledger};

use super::Result;

const TMP_SUFFIX: &str = "tmp";

/// Counts of entries brought in by a successful import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub incomes: usize,
    pub expenses: usize,
    pub subscriptions: usize,
}

impl ImportSummary {
    fn of(ledger: &Ledger) -> Self {
        Self {
            incomes: ledger.incomes().len(),
            expenses: ledger.expenses().len(),
            subscriptions: ledger.subscriptions().len(),
        }
    }
}

/// Renders the ledger as a pretty-printed snapshot document.
pub fn export_json(ledger: &Ledger) -> Result<String> {
    Ok(serde_json::to_string_pretty(ledger)?)
}

/// Parses a snapshot document into a standalone ledger.
///
/// Every element is validated while it is decoded, so the first invalid
/// entity fails the whole document.
pub fn parse_json(text: &str) -> Result<Ledger> {
    Ok(serde_json::from_str(text)?)
}

/// Replaces the contents of `ledger` with the snapshot in `text`.
///
/// On any parse or validation failure the ledger is left exactly as it was.
pub fn import_json(ledger: &mut Ledger, text: &str) -> Result<ImportSummary> {
    let incoming = parse_json(text).map_err(|err| {
        warn!(error = %err, "snapshot import rejected");
        err
    })?;
    let summary = ImportSummary::of(&incoming);
    ledger.replace_with(incoming);
    info!(?summary, "snapshot imported");
    Ok(summary)
}

pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = export_json(ledger)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }
    info!(path = %path.display(), "snapshot exported");
    Ok(())
}

pub fn load_ledger_from_path(path: &Path) -> Result<Ledger> {
    let data = fs::read_to_string(path)?;
    parse_json(&data)
}

/// Reads a snapshot file and swaps it into `ledger` with the same all-or-nothing rule as [`import_json`].
pub fn import_from_path(ledger: &mut Ledger, path: &Path) -> Result<ImportSummary> {
    let data = fs::read_to_string(path)?;
    import_json(ledger, &data)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.exists() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(StorageError::from)
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
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
