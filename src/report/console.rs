//! Console rendering: status lines, separator rules and colored output.

use term::{
    color::{self, Color},
    StdoutTerminal,
};
use unicode_width::UnicodeWidthStr;

use super::ReportWriter;
use crate::config::{ColorMode, ReportConfig};
use crate::data::{TestCase, TestStatus, TestSuite};
use crate::stats::Statistics;

const NEWLINE: &'static str = "\n";

/// Width of console report lines.
pub const CONSOLE_WIDTH: usize = 78;

// Width of the "| PASS |" status field.
const STATUS_FIELD_WIDTH: usize = 8;

fn fill(len: usize, ch: char) -> String {
    (0..len).fold(String::with_capacity(len), |mut bar, _| {
        bar.push(ch);
        bar
    })
}

/// Separator rule drawn around suite headers and the run summary.
pub fn double_separator() -> String {
    fill(CONSOLE_WIDTH, '=')
}

/// Separator rule drawn between test status lines.
pub fn single_separator() -> String {
    fill(CONSOLE_WIDTH, '-')
}

/// Builds a status line: the name, `padding` spaces and the status field.
///
/// The result is always `name.len() + padding + status.len() + 4` bytes
/// long, the 4 extra coming from the `"| "` and `" |"` delimiters.
pub fn status_line(name: &str, padding: usize, status: &str) -> String {
    let mut line = String::with_capacity(name.len() + padding + status.len() + 4);
    line.push_str(name);
    line.push_str(&fill(padding, ' '));
    line.push_str("| ");
    line.push_str(status);
    line.push_str(" |");
    line
}

/// Padding that right-aligns the status field on a line of `width` columns.
/// Names too long to fit get no padding at all.
pub fn pad_for(name: &str, width: usize) -> usize {
    width.saturating_sub(name.width() + STATUS_FIELD_WIDTH)
}

/// Report writer producing the classic command-line report. Separators are
/// built once when the writer is created and reused for its whole lifetime.
pub struct ConsoleWriter {
    terminal: Box<StdoutTerminal>,
    double_sep: String,
    single_sep: String,
    width: usize,
    colors: bool,
    current_color: Option<Color>,
    depth: usize,
}

impl ConsoleWriter {
    pub fn new() -> Option<Self> {
        Self::with_config(&ReportConfig::default())
    }

    pub fn with_config(config: &ReportConfig) -> Option<Self> {
        let colors = match config.colors {
            ColorMode::Off => false,
            ColorMode::Auto | ColorMode::On => true,
        };

        Some(ConsoleWriter {
            terminal: term::stdout()?,
            double_sep: fill(config.width, '='),
            single_sep: fill(config.width, '-'),
            width: config.width,
            colors,
            current_color: None,
            depth: 0,
        })
    }

    fn header(suite: &TestSuite) -> String {
        if suite.doc.is_empty() {
            suite.name.clone()
        } else {
            format!("{} :: {}", suite.name, suite.doc)
        }
    }

    fn write_status_field(&mut self, status: TestStatus) {
        self.write("| ");
        match status {
            TestStatus::Passed => self.color(color::GREEN),
            TestStatus::Failed => self.color(color::RED),
        }
        self.write(status.label());
        self.reset_color();
        self.writeln(" |");
    }

    fn write<S: Into<String>>(&mut self, text: S) {
        let _ = write!(self.terminal, "{}", text.into());
    }

    fn writeln<S: Into<String>>(&mut self, text: S) {
        let _ = write!(self.terminal, "{}{}", text.into(), NEWLINE);
    }

    fn color(&mut self, color: Color) {
        if self.colors {
            self.terminal.fg(color).ok();
            self.current_color = Some(color);
        }
    }

    fn reset_color(&mut self) {
        if self.current_color.take().is_some() {
            self.terminal.reset().ok();
        }
    }
}

impl ReportWriter for ConsoleWriter {
    fn start_suite(&mut self, suite: &TestSuite) {
        self.depth += 1;

        let sep = self.double_sep.clone();
        self.writeln(sep.clone());
        self.writeln(Self::header(suite));
        self.writeln(sep);
    }

    // The summary footer belongs to the whole run, so it is written only
    // when the outermost suite ends.
    fn end_suite(&mut self, suite: &TestSuite, stats: &Statistics) {
        self.depth -= 1;
        if self.depth > 0 {
            return;
        }

        let sep = self.double_sep.clone();
        self.writeln(sep.clone());

        let padding = pad_for(&suite.name, self.width);
        self.write(suite.name.clone());
        self.write(fill(padding, ' '));
        self.write_status_field(stats.status());

        self.writeln(stats.message());
        self.writeln(sep);
    }

    fn end_test(&mut self, test: &TestCase) {
        let padding = pad_for(&test.name, self.width);
        self.write(test.name.clone());
        self.write(fill(padding, ' '));
        self.write_status_field(test.status);

        if test.status.is_failed() && !test.message.is_empty() {
            self.writeln(test.message.clone());
        }

        let sep = self.single_sep.clone();
        self.writeln(sep);
    }

    fn error(&mut self, message: &str) {
        self.color(color::RED);
        self.write("[ ERROR ]");
        self.reset_color();
        self.writeln(format!(" {}", message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_are_78_chars_of_their_character() {
        let double = double_separator();
        let single = single_separator();

        assert_eq!(double.len(), 78);
        assert!(double.chars().all(|ch| ch == '='));
        assert_eq!(single.len(), 78);
        assert!(single.chars().all(|ch| ch == '-'));
    }

    #[test]
    fn status_line_concatenation() {
        assert_eq!(status_line("Test", 2, "PASS"), "Test  | PASS |");
        assert_eq!(status_line("", 0, "FAIL"), "| FAIL |");
    }

    #[test]
    fn status_line_length() {
        for &(name, padding, status) in &[
            ("Some Test", 0, "PASS"),
            ("Some Test", 1, "FAIL"),
            ("", 30, "PASS"),
            ("x", 7, "UNKNOWN"),
        ] {
            assert_eq!(
                status_line(name, padding, status).len(),
                name.len() + padding + status.len() + 4
            );
        }
    }

    #[test]
    fn padding_right_aligns_the_status_field() {
        let name = "Some Test";
        let padding = pad_for(name, CONSOLE_WIDTH);
        assert_eq!(status_line(name, padding, "PASS").width(), CONSOLE_WIDTH);
    }

    #[test]
    fn padding_counts_display_width() {
        // Full-width characters occupy two columns each.
        assert_eq!(pad_for("テスト", 20), 20 - 6 - STATUS_FIELD_WIDTH);
    }

    #[test]
    fn too_long_names_get_no_padding() {
        assert_eq!(pad_for(&fill(100, 'x'), CONSOLE_WIDTH), 0);
    }
}
