//! Suite, test and keyword structures.
//!
//! The structures are plain data. Everything derived from them (suite
//! status, statistics, report models) is computed by walking the tree.

use chrono::{DateTime, Utc};

use super::message::Message;
use super::status::{KeywordType, TestStatus};

#[derive(Clone, Debug)]
pub struct Keyword {
    pub name: String,
    pub kw_type: KeywordType,
    pub doc: String,
    pub args: Vec<String>,
    pub timeout: String,
    pub status: TestStatus,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub keywords: Vec<Keyword>,
    pub messages: Vec<Message>,
}

impl Keyword {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Keyword {
            name: name.into(),
            kw_type: KeywordType::Normal,
            doc: String::new(),
            args: Vec::new(),
            timeout: String::new(),
            status: TestStatus::Failed,
            start_time: None,
            end_time: None,
            keywords: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn with_type(mut self, kw_type: KeywordType) -> Self {
        self.kw_type = kw_type;
        self
    }
}

#[derive(Clone, Debug)]
pub struct TestCase {
    pub name: String,
    pub doc: String,
    pub tags: Vec<String>,
    pub critical: bool,
    pub timeout: String,
    pub status: TestStatus,
    pub message: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub keywords: Vec<Keyword>,
}

impl TestCase {
    pub fn new<T: Into<String>>(name: T) -> Self {
        TestCase {
            name: name.into(),
            doc: String::new(),
            tags: Vec::new(),
            critical: true,
            timeout: String::new(),
            status: TestStatus::Failed,
            message: String::new(),
            start_time: None,
            end_time: None,
            keywords: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: TestStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_tags<T: Into<String>>(mut self, tags: Vec<T>) -> Self {
        self.tags = tags.into_iter().map(|tag| tag.into()).collect();
        self
    }
}

#[derive(Clone, Debug)]
pub struct TestSuite {
    pub name: String,
    pub doc: String,
    pub metadata: Vec<(String, String)>,
    pub source: String,
    pub message: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub suites: Vec<TestSuite>,
    pub tests: Vec<TestCase>,
    pub keywords: Vec<Keyword>,
}

impl TestSuite {
    pub fn new<T: Into<String>>(name: T) -> Self {
        TestSuite {
            name: name.into(),
            doc: String::new(),
            metadata: Vec::new(),
            source: String::new(),
            message: String::new(),
            start_time: None,
            end_time: None,
            suites: Vec::new(),
            tests: Vec::new(),
            keywords: Vec::new(),
        }
    }

    /// Derived suite status: the suite has failed iff any critical test
    /// anywhere in the tree has failed. A suite without tests passes.
    pub fn status(&self) -> TestStatus {
        let failed = self
            .all_tests()
            .any(|test| test.critical && test.status.is_failed());

        if failed {
            TestStatus::Failed
        } else {
            TestStatus::Passed
        }
    }

    pub fn test_count(&self) -> usize {
        self.all_tests().count()
    }

    /// Marks tests as critical by tag. A test is critical when it carries
    /// at least one of the given tags; with no tags given, every test is
    /// critical.
    pub fn set_criticality(&mut self, critical_tags: &[&str]) {
        for test in &mut self.tests {
            test.critical = critical_tags.is_empty()
                || test.tags.iter().any(|tag| critical_tags.contains(&tag.as_str()));
        }

        for suite in &mut self.suites {
            suite.set_criticality(critical_tags);
        }
    }

    /// Iterates over all tests in the tree, this suite's own first.
    pub fn all_tests(&self) -> Box<dyn Iterator<Item = &TestCase> + '_> {
        Box::new(
            self.tests
                .iter()
                .chain(self.suites.iter().flat_map(|suite| suite.all_tests())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_suite() -> TestSuite {
        let mut root = TestSuite::new("root");
        let mut sub = TestSuite::new("sub");

        sub.tests.push(TestCase::new("t1").with_status(TestStatus::Passed));
        sub.tests.push(TestCase::new("t2"));
        root.suites.push(sub);
        root.tests.push(TestCase::new("t0").with_status(TestStatus::Passed));

        root
    }

    #[test]
    fn empty_suite_passes() {
        assert_eq!(TestSuite::new("empty").status(), TestStatus::Passed);
    }

    #[test]
    fn critical_failure_fails_the_suite() {
        let suite = sample_suite();
        assert_eq!(suite.test_count(), 3);
        assert_eq!(suite.status(), TestStatus::Failed);
    }

    #[test]
    fn non_critical_failure_does_not_fail_the_suite() {
        let mut suite = sample_suite();
        // Only t1 carries the critical tag, and t1 passed.
        suite.suites[0].tests[0].tags.push("crit".to_string());
        suite.set_criticality(&["crit"]);
        assert_eq!(suite.status(), TestStatus::Passed);
    }

    #[test]
    fn no_critical_tags_makes_everything_critical() {
        let mut suite = sample_suite();
        suite.set_criticality(&[]);
        assert!(suite.all_tests().all(|test| test.critical));
    }
}
