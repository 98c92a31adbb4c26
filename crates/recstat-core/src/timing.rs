//! File modification times as event timestamps, and their rendering.

use crate::error::StatusError;
use chrono::{DateTime, Local, TimeDelta, TimeZone};
use std::fmt::Display;
use std::io;
use std::path::Path;
use tracing::debug;

/// Last-modified time of the regular file at `path`.
///
/// `None` when the file does not exist, which callers read as "has not
/// happened yet".
pub fn last_modified(path: &Path) -> Option<DateTime<Local>> {
    let metadata = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                debug!(target: "recstat::report", "Cannot stat {}: {}", path.display(), e);
            }
            return None;
        }
    };
    if !metadata.is_file() {
        return None;
    }
    metadata.modified().ok().map(DateTime::<Local>::from)
}

/// Like [`last_modified`], but only absence maps to `None`.
///
/// For artifacts the report depends on, an unreadable location is an
/// error of its own rather than "not happened yet".
pub fn required_modified(path: &Path) -> crate::Result<Option<DateTime<Local>>> {
    match std::fs::metadata(path) {
        Ok(m) if m.is_file() => Ok(m.modified().ok().map(DateTime::<Local>::from)),
        Ok(_) => Ok(None),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StatusError::from_io(e, path)),
    }
}

/// A reference event time paired with the snapshot's "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingFact {
    pub reference: Option<DateTime<Local>>,
    pub now: DateTime<Local>,
}

impl TimingFact {
    /// Take the reference time from `path`'s modification time.
    pub fn from_file(path: &Path, now: DateTime<Local>) -> Self {
        Self {
            reference: last_modified(path),
            now,
        }
    }

    /// Take the reference time from a file that must be readable if present.
    pub fn from_required_file(path: &Path, now: DateTime<Local>) -> crate::Result<Self> {
        Ok(Self {
            reference: required_modified(path)?,
            now,
        })
    }

    /// Time elapsed since the reference event, if it happened.
    pub fn elapsed(&self) -> Option<TimeDelta> {
        self.reference.map(|at| self.now - at)
    }
}

/// Render a duration as `H:MM:SS`, prefixed with `N day(s), ` past a day.
///
/// Sub-second precision is dropped and negative spans render as zero.
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let total = elapsed.num_seconds().max(0);
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;
    let clock = format!("{hours}:{minutes:02}:{seconds:02}");
    match days {
        0 => clock,
        1 => format!("1 day, {clock}"),
        n => format!("{n} days, {clock}"),
    }
}

/// Render a timestamp in C `ctime` layout, e.g. `Thu Oct 15 09:30:00 2026`.
pub fn format_ctime<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%a %b %e %H:%M:%S %Y").to_string()
}
