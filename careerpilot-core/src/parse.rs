//! Free-text input parsing
//!
//! The certification, skill, and job application inputs arrive as plain text:
//! one entry per line, and for applications a pipe-delimited
//! `Company | Role | Status` record per line. These helpers turn that text
//! into the list forms the request payloads carry.

use crate::domain::context::JobApplication;

/// Status assigned to an application line that carries no status segment
pub const DEFAULT_APPLICATION_STATUS: &str = "pending";

/// Splits newline-delimited text into trimmed, non-empty lines
///
/// Order is preserved. Feeding the joined output back in yields the same
/// list, so re-editing round-trips cleanly.
pub fn split_lines(value: &str) -> Vec<String> {
    value
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Parses `Company | Role | Status` lines into application records
///
/// Each non-empty line becomes one record. Segments are trimmed; a missing
/// role segment becomes the empty string and a missing status segment
/// becomes [`DEFAULT_APPLICATION_STATUS`]. Segments past the third are
/// ignored.
pub fn parse_applications(value: &str) -> Vec<JobApplication> {
    split_lines(value)
        .iter()
        .map(|line| {
            let mut segments = line.split('|').map(str::trim);
            JobApplication {
                company: segments.next().unwrap_or_default().to_string(),
                role: segments.next().unwrap_or_default().to_string(),
                status: segments
                    .next()
                    .unwrap_or(DEFAULT_APPLICATION_STATUS)
                    .to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_trims_and_drops_empties() {
        let input = "  Rust\n\n  Kubernetes  \n\t\nSQL";
        assert_eq!(split_lines(input), vec!["Rust", "Kubernetes", "SQL"]);
    }

    #[test]
    fn test_split_lines_is_idempotent() {
        let input = " AWS Certified \n\nCKA\n GCP Professional ";
        let first = split_lines(input);
        let second = split_lines(&first.join("\n"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_full_application_line() {
        let apps = parse_applications("Acme | Engineer | interview");
        assert_eq!(
            apps,
            vec![JobApplication {
                company: "Acme".to_string(),
                role: "Engineer".to_string(),
                status: "interview".to_string(),
            }]
        );
    }

    #[test]
    fn test_company_only_line_defaults_status() {
        let apps = parse_applications("Acme");
        assert_eq!(apps[0].company, "Acme");
        assert_eq!(apps[0].role, "");
        assert_eq!(apps[0].status, DEFAULT_APPLICATION_STATUS);
    }

    #[test]
    fn test_empty_status_segment_is_kept_empty() {
        // A present-but-empty segment is not the same as a missing one.
        let apps = parse_applications("Acme | Engineer |");
        assert_eq!(apps[0].status, "");
    }

    #[test]
    fn test_extra_segments_ignored() {
        let apps = parse_applications("Acme | Engineer | offer | remote | urgent");
        assert_eq!(apps[0].status, "offer");
    }

    #[test]
    fn test_blank_lines_dropped() {
        let apps = parse_applications("\nAcme | SRE\n\n  \nGlobex | Analyst | applied\n");
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].company, "Acme");
        assert_eq!(apps[0].status, DEFAULT_APPLICATION_STATUS);
        assert_eq!(apps[1].company, "Globex");
        assert_eq!(apps[1].status, "applied");
    }
}
