//! Polling regeneration driver.
//!
//! No inotify-style watcher: the preview loop stats the source file on
//! a fixed interval and rebuilds when its metadata changes. Passes are
//! serialized by construction — the next poll happens only after the
//! previous build has fully written its output.

use std::path::Path;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::document;
use crate::error::Error;
use crate::Options;

/// Paths one build reads and writes.
#[derive(Debug, Clone)]
pub struct Paths {
    pub source: std::path::PathBuf,
    pub template: std::path::PathBuf,
    pub output: std::path::PathBuf,
}

/// Poll `paths.source` forever, regenerating on every metadata change
/// (the first iteration always builds). Returns only on error.
pub fn watch(paths: &Paths, options: &Options, interval: Duration) -> Result<(), Error> {
    let mut seen: Option<(SystemTime, u64)> = None;
    loop {
        let sig = signature(&paths.source)?;
        if seen != Some(sig) {
            println!("Building...");
            document::generate_file(
                &paths.source,
                &paths.template,
                &paths.output,
                options,
                &timestamp(),
            )?;
            seen = Some(sig);
        }
        thread::sleep(interval);
    }
}

fn signature(path: &Path) -> Result<(SystemTime, u64), Error> {
    let meta = std::fs::metadata(path).map_err(|e| Error::read(path, e))?;
    let modified = meta.modified().map_err(|e| Error::read(path, e))?;
    Ok((modified, meta.len()))
}

/// Wall-clock timestamp, `YYYY-M-D H:M:S`, unpadded, UTC.
pub fn timestamp() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let (year, month, day) = civil_from_days((secs / 86_400) as i64);
    let rem = secs % 86_400;
    format!(
        "{}-{}-{} {}:{}:{}",
        year,
        month,
        day,
        rem / 3600,
        (rem % 3600) / 60,
        rem % 60
    )
}

// Days-since-epoch to civil date (Howard Hinnant's algorithm).
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719_468;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    (if m <= 2 { y + 1 } else { y }, m, d)
}
