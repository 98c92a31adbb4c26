//! Human-readable rendering of a progress snapshot.

use crate::error::StatusError;
use crate::Result;
use recstat_types::{DbIxPhase, ProgressStatus};

/// Counters worth showing, in display order, with their labels.
pub const FIELD_DESCRIPTIONS: [(&str, &str); 5] = [
    ("docsdone", "Documents updated:"),
    ("filesdone", "Files tested:"),
    ("filerrors", "Failed files:"),
    ("totfiles", "Total files in index:"),
    ("dbtotdocs", "Starting number of indexed documents:"),
];

/// Render `status` as newline-separated lines.
///
/// Starts with the phase header, then each known counter the daemon
/// wrote, then what file (if any) is being indexed right now.
pub fn format_status(status: &ProgressStatus) -> Result<String> {
    let code = status
        .phase_code()
        .ok_or(StatusError::MissingField { field: "phase" })?;
    let phase =
        DbIxPhase::from_code(code).ok_or_else(|| StatusError::UnknownPhase(code.to_string()))?;

    let mut lines = vec![format!("DbIxStatus is {}: {}", code, phase.name())];

    for (field, description) in FIELD_DESCRIPTIONS {
        if let Some(value) = status.get(field) {
            lines.push(format!("{description} {value}"));
        }
    }

    if phase == DbIxPhase::Files {
        let file = status
            .get("fn")
            .ok_or(StatusError::MissingField { field: "fn" })?;
        lines.push(format!("Indexing this file: {file}"));
    } else {
        lines.push("Not indexing files now.".to_string());
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(pairs: &[(&str, &str)]) -> ProgressStatus {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_every_phase_has_a_header() {
        for phase in DbIxPhase::ALL {
            let code = phase.code().to_string();
            let status = snapshot(&[("phase", code.as_str()), ("fn", "/tmp/x.txt")]);
            let text = format_status(&status).unwrap();
            let header = text.lines().next().unwrap();
            assert_eq!(header, format!("DbIxStatus is {}: {}", code, phase.name()));
        }
    }

    #[test]
    fn test_unknown_phase() {
        for code in ["7", "x", "-1", "01"] {
            let err = format_status(&snapshot(&[("phase", code)])).unwrap_err();
            assert!(matches!(err, StatusError::UnknownPhase(ref c) if c == code));
        }
    }

    #[test]
    fn test_indexing_file_is_last_line() {
        let text = format_status(&snapshot(&[("phase", "1"), ("fn", "/tmp/x.txt")])).unwrap();
        assert_eq!(text.lines().last(), Some("Indexing this file: /tmp/x.txt"));
    }

    #[test]
    fn test_not_indexing_outside_files_phase() {
        let text = format_status(&snapshot(&[("phase", "2")])).unwrap();
        assert_eq!(text.lines().last(), Some("Not indexing files now."));
    }

    #[test]
    fn test_fn_ignored_outside_files_phase() {
        let text = format_status(&snapshot(&[("phase", "3"), ("fn", "/tmp/x.txt")])).unwrap();
        assert!(!text.contains("/tmp/x.txt"));
    }

    #[test]
    fn test_files_phase_without_fn() {
        let err = format_status(&snapshot(&[("phase", "1")])).unwrap_err();
        assert!(matches!(err, StatusError::MissingField { field: "fn" }));
    }

    #[test]
    fn test_fields_follow_table_order_not_file_order() {
        let status = snapshot(&[
            ("phase", "6"),
            ("dbtotdocs", "7"),
            ("totfiles", "500"),
            ("filesdone", "20"),
            ("docsdone", "10"),
            ("hugefile", "ignored"),
        ]);
        let text = format_status(&status).unwrap();
        assert_eq!(
            text,
            "DbIxStatus is 6: DBIXS_DONE\n\
             Documents updated: 10\n\
             Files tested: 20\n\
             Total files in index: 500\n\
             Starting number of indexed documents: 7\n\
             Not indexing files now."
        );
    }

    #[test]
    fn test_absent_fields_skipped() {
        let text = format_status(&snapshot(&[("phase", "2"), ("filerrors", "4")])).unwrap();
        assert_eq!(
            text,
            "DbIxStatus is 2: DBIXS_PURGE\nFailed files: 4\nNot indexing files now."
        );
    }
}
