//! Derived summaries over the application sequence.
//!
//! Nothing here is stored: the summary is recomputed from the current
//! sequence on every read, which is fine at the tens-to-hundreds scale
//! this tracker operates at.

use super::models::{status, ApplicationRecord};
use serde::Serialize;

/// Status counts over the current application sequence.
///
/// The buckets are not exhaustive: a record with an unrecognized status
/// contributes to `total` only. That is intended behavior, not a gap.
///
/// # Examples
///
/// ```
/// use apptrack::domain::{seed_applications, Stats};
///
/// let stats = Stats::tally(&seed_applications());
/// assert_eq!(stats.total, 3);
/// assert_eq!(stats.pending, 2);
/// assert_eq!(stats.interviews, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of records in the sequence
    pub total: usize,
    /// Records still marked "Not Applied"
    pub not_applied: usize,
    /// Records in "Applied" or "Screening"
    pub pending: usize,
    /// Records with an interview scheduled
    pub interviews: usize,
    /// Records that reached "Offer"
    pub offers: usize,
}

impl Stats {
    /// Computes the five counts from scratch in one pass.
    pub fn tally(records: &[ApplicationRecord]) -> Self {
        let mut stats = Stats {
            total: records.len(),
            ..Default::default()
        };
        for record in records {
            match record.status.as_str() {
                status::NOT_APPLIED => stats.not_applied += 1,
                status::APPLIED | status::SCREENING => stats.pending += 1,
                status::INTERVIEW_SCHEDULED => stats.interviews += 1,
                status::OFFER => stats.offers += 1,
                _ => {}
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::seed_applications;

    fn record_with_status(id: &str, status: &str) -> ApplicationRecord {
        let mut record = seed_applications().remove(0);
        record.id = id.to_string();
        record.status = status.to_string();
        record
    }

    #[test]
    fn test_tally_empty_sequence() {
        let stats = Stats::tally(&[]);
        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn test_tally_one_of_each_status() {
        let records = vec![
            record_with_status("1", status::APPLIED),
            record_with_status("2", status::SCREENING),
            record_with_status("3", status::INTERVIEW_SCHEDULED),
            record_with_status("4", status::OFFER),
            record_with_status("5", status::NOT_APPLIED),
        ];
        let stats = Stats::tally(&records);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.not_applied, 1);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.interviews, 1);
        assert_eq!(stats.offers, 1);
    }

    #[test]
    fn test_unrecognized_status_counts_toward_total_only() {
        let records = vec![
            record_with_status("1", "Ghosted"),
            record_with_status("2", status::OFFER),
        ];
        let stats = Stats::tally(&records);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.offers, 1);
        assert_eq!(
            stats.not_applied + stats.pending + stats.interviews,
            0
        );
    }

    #[test]
    fn test_status_match_is_case_sensitive() {
        let records = vec![record_with_status("1", "applied")];
        let stats = Stats::tally(&records);
        assert_eq!(stats.total, 1);
        assert_eq!(stats.pending, 0);
    }

    #[test]
    fn test_stats_serializes_with_camel_case_names() {
        let json = serde_json::to_string(&Stats::tally(&seed_applications())).unwrap();
        assert!(json.contains("\"notApplied\":0"));
        assert!(json.contains("\"total\":3"));
    }
}
