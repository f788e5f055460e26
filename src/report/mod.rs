mod console;
pub mod html;
mod jsmodel;
mod stringcache;

use lazycell::LazyCell;

use crate::data::{TestCase, TestSuite};
use crate::logger::Logger;
use crate::stats::Statistics;

pub use console::{
    double_separator, pad_for, single_separator, status_line, ConsoleWriter, CONSOLE_WIDTH,
};
pub use jsmodel::JsModelBuilder;
pub use stringcache::{StringCache, StringIndex};

/// Sink for the rendering walk over a suite tree.
///
/// `end_suite` fires after all of the suite's tests and child suites, with
/// the statistics of that suite's subtree.
pub trait ReportWriter {
    fn start_suite(&mut self, suite: &TestSuite);
    fn end_suite(&mut self, suite: &TestSuite, stats: &Statistics);
    fn start_test(&mut self, _test: &TestCase) {}
    fn end_test(&mut self, test: &TestCase);
    fn error(&mut self, message: &str);
}

#[derive(Debug, PartialEq, Eq)]
pub enum InvalidSuite {
    NoTests,
}

/// A validated view over a finished run, with lazily computed statistics.
#[derive(Debug)]
pub struct Report<'a> {
    suite: &'a TestSuite,
    stats: LazyCell<Statistics>,
}

impl<'a> Report<'a> {
    pub fn new(suite: &'a TestSuite) -> Result<Self, InvalidSuite> {
        if suite.test_count() == 0 {
            Err(InvalidSuite::NoTests)
        } else {
            Ok(Report {
                suite,
                stats: LazyCell::new(),
            })
        }
    }

    pub fn suite(&self) -> &TestSuite {
        self.suite
    }

    pub fn stats(&self) -> &Statistics {
        self.stats
            .borrow_with(|| Statistics::from_suite(self.suite))
    }
}

/// Walks the suite tree depth-first and drives the writer callbacks.
pub fn render<W: ReportWriter>(report: &Report<'_>, writer: &mut W) {
    walk(report.suite(), writer, report.stats());
}

/// Same as [`render`], but logs how long the rendering took.
pub fn render_timed<W: ReportWriter>(report: &Report<'_>, writer: &mut W, logger: &mut Logger) {
    let handle = logger.perf("render");
    render(report, writer);
    handle.stop();
    logger.info(format!("rendered report of {} tests", report.stats().total));
}

fn walk<W: ReportWriter>(suite: &TestSuite, writer: &mut W, stats: &Statistics) {
    writer.start_suite(suite);

    for test in &suite.tests {
        writer.start_test(test);
        writer.end_test(test);
    }

    for suite in &suite.suites {
        walk(suite, writer, &Statistics::from_suite(suite));
    }

    writer.end_suite(suite, stats);
}
