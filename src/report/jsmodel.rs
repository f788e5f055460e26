//! Compact JSON model of a suite tree, as consumed by log viewers.
//!
//! Every string goes through a [`StringCache`] and appears in the model as
//! its index; timestamps are encoded relative to the first one seen. In
//! split mode the keyword trees of tests (and the nested content of
//! suite-level keywords) are built against their own string caches and
//! collected separately, so a viewer can load them on demand.

use std::mem;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use super::html;
use super::stringcache::StringCache;
use crate::data::{elapsed_millis, Keyword, Message, TestCase, TestStatus, TestSuite};
use crate::stats::Statistics;

struct JsBuildingContext {
    strings: StringCache,
    basemillis: Option<i64>,
    split_log: bool,
    split_results: Vec<(Value, Vec<String>)>,
}

impl JsBuildingContext {
    fn new(split_log: bool) -> Self {
        JsBuildingContext {
            strings: StringCache::new(),
            basemillis: None,
            split_log,
            split_results: Vec::new(),
        }
    }

    fn string(&mut self, text: &str) -> Value {
        Value::from(self.strings.add(text).0)
    }

    fn timestamp(&mut self, timestamp: Option<DateTime<Utc>>) -> Value {
        match timestamp {
            Some(timestamp) => {
                let millis = timestamp.timestamp_millis();
                let base = *self.basemillis.get_or_insert(millis);
                Value::from(millis - base)
            }
            None => Value::Null,
        }
    }

    fn start_split(&mut self) -> StringCache {
        mem::replace(&mut self.strings, StringCache::new())
    }

    fn end_split(&mut self, parent: StringCache, model: Value) -> u64 {
        let split = mem::replace(&mut self.strings, parent);
        self.split_results.push((model, split.dump()));
        self.split_results.len() as u64
    }
}

pub struct JsModelBuilder {
    context: JsBuildingContext,
}

impl JsModelBuilder {
    pub fn new() -> Self {
        Self::with_split_log(false)
    }

    pub fn with_split_log(split_log: bool) -> Self {
        JsModelBuilder {
            context: JsBuildingContext::new(split_log),
        }
    }

    /// Model shape: `[name, source, relsource, doc, metadata, status,
    /// suites, tests, keywords, stats]`. Docs and metadata values are
    /// HTML-formatted, names and metadata keys stay verbatim.
    pub fn build_suite(&mut self, suite: &TestSuite) -> Value {
        let name = self.context.string(&suite.name);
        let source = self.context.string(&suite.source);
        let relsource = self.context.string(&rel_source(&suite.source));
        let doc = self.context.string(&html::format(&suite.doc));

        let mut metadata = Vec::with_capacity(suite.metadata.len() * 2);
        for (key, value) in &suite.metadata {
            metadata.push(self.context.string(key));
            metadata.push(self.context.string(&html::format(value)));
        }

        let status = self.build_status(
            suite.status(),
            suite.start_time,
            suite.end_time,
            &suite.message,
        );

        let suites = suite
            .suites
            .iter()
            .map(|suite| self.build_suite(suite))
            .collect::<Vec<_>>();
        let tests = suite
            .tests
            .iter()
            .map(|test| self.build_test(test))
            .collect::<Vec<_>>();
        let keywords = suite
            .keywords
            .iter()
            .map(|keyword| self.build_keyword(keyword, true))
            .collect::<Vec<_>>();

        let stats = Statistics::from_suite(suite).as_model();

        json!([
            name, source, relsource, doc, metadata, status, suites, tests, keywords, stats
        ])
    }

    /// Strings interned by the main model, ordered by index.
    pub fn strings(&self) -> Vec<String> {
        self.context.strings.dump()
    }

    /// Models and string tables produced by split mode, in split-id order.
    pub fn split_results(&self) -> &[(Value, Vec<String>)] {
        &self.context.split_results
    }

    /// Model shape: `[name, timeout, critical, doc, tags, status, keywords]`.
    fn build_test(&mut self, test: &TestCase) -> Value {
        let name = self.context.string(&test.name);
        let timeout = self.context.string(&test.timeout);
        let critical = Value::from(test.critical as u64);
        let doc = self.context.string(&html::format(&test.doc));
        let tags = test
            .tags
            .iter()
            .map(|tag| self.context.string(tag))
            .collect::<Vec<_>>();

        let status = self.build_status(test.status, test.start_time, test.end_time, &test.message);

        let keywords = if self.context.split_log {
            let parent = self.context.start_split();
            let model = test
                .keywords
                .iter()
                .map(|keyword| self.build_keyword(keyword, false))
                .collect::<Vec<_>>();
            Value::from(self.context.end_split(parent, Value::Array(model)))
        } else {
            Value::Array(
                test.keywords
                    .iter()
                    .map(|keyword| self.build_keyword(keyword, false))
                    .collect(),
            )
        };

        json!([name, timeout, critical, doc, tags, status, keywords])
    }

    /// Model shape: `[type, name, timeout, doc, args, status, keywords,
    /// messages]`.
    fn build_keyword(&mut self, keyword: &Keyword, split: bool) -> Value {
        let kw_type = Value::from(keyword.kw_type.code());
        let name = self.context.string(&keyword.name);
        let timeout = self.context.string(&keyword.timeout);
        let doc = self.context.string(&html::format(&keyword.doc));
        let args = self.context.string(&keyword.args.join(", "));

        let status = self.build_status(keyword.status, keyword.start_time, keyword.end_time, "");

        let keywords = if split && self.context.split_log {
            let parent = self.context.start_split();
            let model = keyword
                .keywords
                .iter()
                .map(|keyword| self.build_keyword(keyword, false))
                .collect::<Vec<_>>();
            Value::from(self.context.end_split(parent, Value::Array(model)))
        } else {
            Value::Array(
                keyword
                    .keywords
                    .iter()
                    .map(|keyword| self.build_keyword(keyword, false))
                    .collect(),
            )
        };

        let messages = keyword
            .messages
            .iter()
            .map(|message| self.build_message(message))
            .collect::<Vec<_>>();

        json!([kw_type, name, timeout, doc, args, status, keywords, messages])
    }

    /// Model shape: `[timestamp, level, text]`. Texts already marked as
    /// HTML go into the model verbatim, everything else is escaped.
    fn build_message(&mut self, message: &Message) -> Value {
        let timestamp = self.context.timestamp(message.timestamp);
        let level = Value::from(message.level.code());
        let text = if message.html {
            message.text.clone()
        } else {
            html::escape(&message.text)
        };
        let text = self.context.string(&text);

        json!([timestamp, level, text])
    }

    /// Model shape: `[code, start, elapsed]`, plus the message when there
    /// is one.
    fn build_status(
        &mut self,
        status: TestStatus,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        message: &str,
    ) -> Value {
        let code = Value::from(status.code());
        let start_value = self.context.timestamp(start);
        let elapsed = Value::from(elapsed_millis(start, end));

        if message.is_empty() {
            json!([code, start_value, elapsed])
        } else {
            let message = self.context.string(message);
            json!([code, start_value, elapsed, message])
        }
    }
}

// Lexical file name component of a source path; no filesystem access.
fn rel_source(source: &str) -> String {
    Path::new(source)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
