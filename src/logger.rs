//! Run log written next to the generated reports.
//!
//! Lines are stamped with milliseconds since the logger was opened, so the
//! log doubles as a coarse timing trace of the rendering phases.

use std::fmt;
use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::path::Path;
use std::time::Instant;

pub struct Logger {
    file: File,
    opened: Instant,
}

impl Logger {
    pub fn new<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Logger {
            file: File::create(path)?,
            opened: Instant::now(),
        })
    }

    pub fn info<M: fmt::Display>(&mut self, message: M) {
        self.log("info", message);
    }

    pub fn warn<M: fmt::Display>(&mut self, message: M) {
        self.log("warn", message);
    }

    /// Starts timing a named phase. The phase is logged when the returned
    /// handle is stopped.
    pub fn perf<'a, S: Into<String>>(&'a mut self, id: S) -> PerfHandle<'a> {
        PerfHandle {
            logger: self,
            id: id.into(),
            started: Instant::now(),
        }
    }

    fn log<M: fmt::Display>(&mut self, level: &str, message: M) {
        let _ = writeln!(
            self.file,
            "{:>8}ms {:<5} {}",
            self.opened.elapsed().as_millis(),
            level,
            message
        );
    }
}

pub struct PerfHandle<'a> {
    logger: &'a mut Logger,
    id: String,
    started: Instant,
}

impl<'a> PerfHandle<'a> {
    pub fn stop(self) {
        let elapsed = self.started.elapsed().as_millis();
        self.logger.log(
            "perf",
            format!("phase \"{}\" finished in {} ms", self.id, elapsed),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::env;
    use std::fs;
    use std::process;

    #[test]
    fn messages_end_up_in_the_file() {
        let path = env::temp_dir().join(format!("verdict-logger-{}.log", process::id()));

        let mut logger = Logger::new(&path).unwrap();
        logger.info("starting");
        logger.warn("careful");
        logger.perf("render").stop();
        drop(logger);

        let content = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(content.contains("info  starting"));
        assert!(content.contains("warn  careful"));
        assert!(content.contains("perf  phase \"render\" finished in"));
        for line in content.lines() {
            assert!(line.contains("ms "));
        }
    }
}
