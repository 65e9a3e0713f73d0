//! Log files of a server installation.
//!
//! The server writes its logs to `<home>/logs`. Since 8.0 the main log is
//! rotated daily as `sonar.<YYYYMMDD>.log`; 7.x installations keep a single
//! `sonar.log`.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use crate::error::StoreError;

/// Name of the log folder inside the server home.
pub const LOG_FOLDER: &str = "logs";

/// Returns the log folder of the server installed at `home`.
pub fn log_folder(home: &Path) -> PathBuf {
    home.join(LOG_FOLDER)
}

/// Returns the main server log for `date`.
pub fn log_file(home: &Path, date: NaiveDate) -> PathBuf {
    let name = if home.to_string_lossy().contains("sonarqube-7.") {
        "sonar.log".to_string()
    } else {
        format!("sonar.{}.log", date.format("%Y%m%d"))
    };
    log_folder(home).join(name)
}

/// Lists the `*.log` file names in the log folder, sorted.
pub fn list_logs(home: &Path) -> Result<Vec<String>, StoreError> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(log_folder(home))? {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if name.ends_with(".log") {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Deletes every `*.log` file in the log folder.
///
/// Returns how many files were removed.
pub fn cleanup_logs(home: &Path) -> Result<usize, StoreError> {
    let folder = log_folder(home);
    let names = list_logs(home)?;
    for name in &names {
        std::fs::remove_file(folder.join(name))?;
        debug!(file = %name, "Removed log");
    }
    Ok(names.len())
}

/// Writes every `*.log` file to `out`, each under a `--- <name> ---` header.
pub fn print_logs(home: &Path, out: &mut impl Write) -> Result<(), StoreError> {
    let folder = log_folder(home);
    for name in list_logs(home)? {
        write!(out, "\n--- {name} ---\n")?;
        let content = std::fs::read(folder.join(&name))?;
        out.write_all(&content)?;
    }
    writeln!(out)?;
    Ok(())
}
