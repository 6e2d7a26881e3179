use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::AssetError;

/// Console reporter with an optional append-only run log.
///
/// The log file is never rotated or truncated; each run appends a
/// timestamped section header followed by every line the run prints.
pub struct RunLog {
    file: Option<File>,
}

impl RunLog {
    /// Console-only reporter.
    pub fn console() -> Self {
        RunLog { file: None }
    }

    /// Open the log file for appending and stamp a new run section.
    ///
    /// An unopenable log file is fatal: the caller aborts before any
    /// image work starts.
    pub fn with_file(path: &Path, task: &str) -> io::Result<Self> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(
            file,
            "\n----- {} run at {}",
            task,
            Local::now().to_rfc3339()
        )?;
        Ok(RunLog { file: Some(file) })
    }

    pub fn line(&mut self, msg: &str) {
        println!("{}", msg);
        if let Some(file) = &mut self.file {
            let _ = writeln!(file, "{}", msg);
        }
    }

    pub fn error(&mut self, msg: &str) {
        eprintln!("{}", msg);
        if let Some(file) = &mut self.file {
            let _ = writeln!(file, "{}", msg);
        }
    }
}

/// Outcome of one batch item, keyed by recipe identifier or file stem.
#[derive(Debug)]
pub struct ItemOutcome {
    pub id: String,
    pub result: Result<PathBuf, AssetError>,
}

impl ItemOutcome {
    pub fn ok(id: impl Into<String>, path: PathBuf) -> Self {
        ItemOutcome {
            id: id.into(),
            result: Ok(path),
        }
    }

    pub fn failed(id: impl Into<String>, err: AssetError) -> Self {
        ItemOutcome {
            id: id.into(),
            result: Err(err),
        }
    }
}

/// Print per-batch accounting after all items were attempted.
pub fn print_summary(task: &str, outcomes: &[ItemOutcome], log: &mut RunLog) {
    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    log.line(&format!(
        "{}: {} ok, {} failed",
        task,
        outcomes.len() - failed,
        failed
    ));
    if failed > 0 {
        log.error(&format!("Warning: {} items failed", failed));
    }
}
