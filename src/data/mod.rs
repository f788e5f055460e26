//! In-memory model of an executed test run.

mod message;
mod status;
mod suite;

use chrono::{DateTime, Utc};

pub use message::{Message, MessageLevel};
pub use status::{KeywordType, TestStatus};
pub use suite::{Keyword, TestCase, TestSuite};

/// Elapsed time between two optional timestamps in milliseconds.
///
/// Missing timestamps yield zero, mirroring a run that was never started
/// or never finished.
pub fn elapsed_millis(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> i64 {
    match (start, end) {
        (Some(start), Some(end)) => (end - start).num_milliseconds(),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    #[test]
    fn elapsed_is_zero_without_both_timestamps() {
        let ts = Utc.with_ymd_and_hms(2011, 12, 4, 19, 0, 0).unwrap();
        assert_eq!(elapsed_millis(None, None), 0);
        assert_eq!(elapsed_millis(Some(ts), None), 0);
        assert_eq!(elapsed_millis(None, Some(ts)), 0);
    }

    #[test]
    fn elapsed_in_millis() {
        let start = Utc.with_ymd_and_hms(2011, 12, 4, 19, 0, 0).unwrap();
        let end = start + chrono::Duration::milliseconds(42001);
        assert_eq!(elapsed_millis(Some(start), Some(end)), 42001);
        assert_eq!(elapsed_millis(Some(end), Some(start)), -42001);
    }
}
