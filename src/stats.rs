//! Pass/fail statistics over a suite tree.

use serde::Serialize;
use serde_json::{json, Value};

use crate::data::{TestStatus, TestSuite};

/// Counters over all tests of a suite tree. Failed counts are derived.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub total_passed: usize,
    pub critical: usize,
    pub critical_passed: usize,
}

impl Statistics {
    pub fn from_suite(suite: &TestSuite) -> Self {
        let mut stats = Statistics::default();

        for test in suite.all_tests() {
            stats.total += 1;
            if test.status.is_passed() {
                stats.total_passed += 1;
            }
            if test.critical {
                stats.critical += 1;
                if test.status.is_passed() {
                    stats.critical_passed += 1;
                }
            }
        }

        stats
    }

    pub fn total_failed(&self) -> usize {
        self.total - self.total_passed
    }

    pub fn critical_failed(&self) -> usize {
        self.critical - self.critical_passed
    }

    /// Overall verdict of the run: passed iff no critical test failed.
    pub fn status(&self) -> TestStatus {
        if self.critical_failed() == 0 {
            TestStatus::Passed
        } else {
            TestStatus::Failed
        }
    }

    /// The two-line console summary, e.g.
    ///
    /// ```text
    /// 2 critical tests, 1 passed, 1 failed
    ///  2 tests total, 1 passed, 1 failed
    /// ```
    pub fn message(&self) -> String {
        format!(
            "{} critical test{}, {} passed, {} failed\n {} test{} total, {} passed, {} failed",
            self.critical,
            plural(self.critical),
            self.critical_passed,
            self.critical_failed(),
            self.total,
            plural(self.total),
            self.total_passed,
            self.total_failed(),
        )
    }

    /// Stats tuple of the JSON report model.
    pub fn as_model(&self) -> Value {
        json!([
            self.total,
            self.total_passed,
            self.critical,
            self.critical_passed
        ])
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::TestCase;

    // Expected console summaries for runs with known pass/fail counts.
    const TWO_CRITICAL_ONE_FAILED: &str =
        "2 critical tests, 1 passed, 1 failed\n 2 tests total, 1 passed, 1 failed";
    const ONE_CRITICAL_NONE_FAILED: &str =
        "1 critical test, 1 passed, 0 failed\n 1 test total, 1 passed, 0 failed";

    #[test]
    fn message_with_a_failure() {
        let stats = Statistics {
            total: 2,
            total_passed: 1,
            critical: 2,
            critical_passed: 1,
        };
        assert_eq!(stats.message(), TWO_CRITICAL_ONE_FAILED);
        assert_eq!(stats.status(), TestStatus::Failed);
    }

    #[test]
    fn message_with_all_passed() {
        let stats = Statistics {
            total: 1,
            total_passed: 1,
            critical: 1,
            critical_passed: 1,
        };
        assert_eq!(stats.message(), ONE_CRITICAL_NONE_FAILED);
        assert_eq!(stats.status(), TestStatus::Passed);
    }

    #[test]
    fn message_with_no_tests_uses_plural() {
        assert_eq!(
            Statistics::default().message(),
            "0 critical tests, 0 passed, 0 failed\n 0 tests total, 0 passed, 0 failed"
        );
    }

    #[test]
    fn counters_from_suite_tree() {
        let mut root = TestSuite::new("root");
        let mut sub1 = TestSuite::new("sub1");
        let mut sub2 = TestSuite::new("sub2");

        sub1.tests.push(
            TestCase::new("a")
                .with_status(TestStatus::Passed)
                .with_tags(vec!["t1", "t2"]),
        );
        sub1.tests.push(TestCase::new("b").with_tags(vec!["t1"]));
        sub2.tests.push(
            TestCase::new("c")
                .with_status(TestStatus::Passed)
                .with_tags(vec!["t1", "t2"]),
        );
        sub2.tests.push(TestCase::new("d").with_tags(vec!["t1"]));

        root.suites.push(sub1);
        root.suites.push(sub2);
        root.set_criticality(&["t2"]);

        let stats = Statistics::from_suite(&root);
        assert_eq!(
            stats,
            Statistics {
                total: 4,
                total_passed: 2,
                critical: 2,
                critical_passed: 2,
            }
        );
        assert_eq!(stats.total_failed(), 2);
        assert_eq!(stats.critical_failed(), 0);
        assert_eq!(stats.status(), TestStatus::Passed);
        assert_eq!(stats.as_model(), json!([4, 2, 2, 2]));
    }
}
