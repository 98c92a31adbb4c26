//! Indexing phases as reported by the daemon in its progress file.

use std::fmt;

/// The daemon's `DbIxStatus` phase.
///
/// Encoded in the progress file as a small integer under the `phase` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbIxPhase {
    /// Nothing in progress.
    None,
    /// Walking and indexing files.
    Files,
    /// Purging documents for deleted files.
    Purge,
    /// Building the stemming database.
    StemDb,
    /// Closing the index.
    Closing,
    /// Real-time monitoring.
    Monitor,
    /// Indexing pass finished.
    Done,
}

impl DbIxPhase {
    /// Every phase, ordered by code.
    pub const ALL: [DbIxPhase; 7] = [
        DbIxPhase::None,
        DbIxPhase::Files,
        DbIxPhase::Purge,
        DbIxPhase::StemDb,
        DbIxPhase::Closing,
        DbIxPhase::Monitor,
        DbIxPhase::Done,
    ];

    /// Look up a phase by the code string found in the progress file.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(DbIxPhase::None),
            "1" => Some(DbIxPhase::Files),
            "2" => Some(DbIxPhase::Purge),
            "3" => Some(DbIxPhase::StemDb),
            "4" => Some(DbIxPhase::Closing),
            "5" => Some(DbIxPhase::Monitor),
            "6" => Some(DbIxPhase::Done),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            DbIxPhase::None => 0,
            DbIxPhase::Files => 1,
            DbIxPhase::Purge => 2,
            DbIxPhase::StemDb => 3,
            DbIxPhase::Closing => 4,
            DbIxPhase::Monitor => 5,
            DbIxPhase::Done => 6,
        }
    }

    /// The daemon's own constant name, e.g. `DBIXS_FILES`.
    pub fn name(self) -> &'static str {
        match self {
            DbIxPhase::None => "DBIXS_NONE",
            DbIxPhase::Files => "DBIXS_FILES",
            DbIxPhase::Purge => "DBIXS_PURGE",
            DbIxPhase::StemDb => "DBIXS_STEMDB",
            DbIxPhase::Closing => "DBIXS_CLOSING",
            DbIxPhase::Monitor => "DBIXS_MONITOR",
            DbIxPhase::Done => "DBIXS_DONE",
        }
    }

    /// Whether we have seen real progress files for this phase.
    ///
    /// Snapshots in the other phases are worth keeping for inspection.
    pub fn is_characterized(self) -> bool {
        !matches!(
            self,
            DbIxPhase::None | DbIxPhase::Closing | DbIxPhase::Monitor
        )
    }
}

impl fmt::Display for DbIxPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
