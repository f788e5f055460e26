//! Log messages attached to keywords.

use chrono::{DateTime, Utc};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Fail,
}

impl MessageLevel {
    /// Numeric code used by the JSON report model.
    pub fn code(&self) -> u64 {
        match self {
            MessageLevel::Trace => 0,
            MessageLevel::Debug => 1,
            MessageLevel::Info => 2,
            MessageLevel::Warn => 3,
            MessageLevel::Fail => 4,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
    pub timestamp: Option<DateTime<Utc>>,
    /// Text that is already HTML and must not be escaped by report
    /// builders.
    pub html: bool,
}

impl Message {
    pub fn new<T: Into<String>>(text: T) -> Self {
        Message {
            text: text.into(),
            level: MessageLevel::Info,
            timestamp: None,
            html: false,
        }
    }
}
