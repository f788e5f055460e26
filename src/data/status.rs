//! Statuses and keyword kinds.

/// Test status, i.e., if it is passing or failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestStatus {
    Failed,
    Passed,
}

impl TestStatus {
    pub fn is_failed(&self) -> bool {
        self == &TestStatus::Failed
    }

    pub fn is_passed(&self) -> bool {
        self == &TestStatus::Passed
    }

    /// Label shown in the status field of a console report line.
    pub fn label(&self) -> &'static str {
        match self {
            TestStatus::Failed => "FAIL",
            TestStatus::Passed => "PASS",
        }
    }

    /// Numeric code used by the JSON report model.
    pub fn code(&self) -> u64 {
        match self {
            TestStatus::Failed => 0,
            TestStatus::Passed => 1,
        }
    }
}

/// Kind of a keyword in the result model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeywordType {
    Normal,
    Setup,
    Teardown,
    For,
    ForItem,
}

impl KeywordType {
    pub fn code(&self) -> u64 {
        match self {
            KeywordType::Normal => 0,
            KeywordType::Setup => 1,
            KeywordType::Teardown => 2,
            KeywordType::For => 3,
            KeywordType::ForItem => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_and_codes() {
        assert_eq!(TestStatus::Passed.label(), "PASS");
        assert_eq!(TestStatus::Failed.label(), "FAIL");
        assert_eq!(TestStatus::Passed.code(), 1);
        assert_eq!(TestStatus::Failed.code(), 0);
        assert!(TestStatus::Passed.is_passed());
        assert!(TestStatus::Failed.is_failed());
    }
}
