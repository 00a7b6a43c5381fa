//! Leveled status logger
//!
//! Prints `[LEVEL::source] message` lines, gated by a configured verbosity.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};

use crate::error::AppError;

/// Verbosity levels, ordered by value: lower means higher priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Level {
    /// Turns off all output
    Silent = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Info = 5,
    Verbose = 6,
    Debug = 7,
}

impl Level {
    pub(crate) const DEFAULT: Level = Level::Warning;

    pub(crate) const ALL: [Level; 7] = [
        Level::Silent,
        Level::Critical,
        Level::Error,
        Level::Warning,
        Level::Info,
        Level::Verbose,
        Level::Debug,
    ];

    pub(crate) fn name(self) -> &'static str {
        match self {
            Level::Silent => "SILENT",
            Level::Critical => "CRITICAL",
            Level::Error => "ERROR",
            Level::Warning => "WARNING",
            Level::Info => "INFO",
            Level::Verbose => "VERBOSE",
            Level::Debug => "DEBUG",
        }
    }

    /// Look a level up by name, ignoring ASCII case
    pub(crate) fn from_name(name: &str) -> Option<Level> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) struct Logger {
    level: Level,
    sink: RefCell<Box<dyn Write>>,
}

impl Logger {
    pub(crate) fn stdout(level: Level) -> Self {
        Self::with_sink(level, Box::new(io::stdout()))
    }

    pub(crate) fn with_sink(level: Level, sink: Box<dyn Write>) -> Self {
        Self {
            level,
            sink: RefCell::new(sink),
        }
    }

    pub(crate) fn level(&self) -> Level {
        self.level
    }

    pub(crate) fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Switch to the named level. An unknown name leaves the current level in place.
    pub(crate) fn set_level_by_name(&mut self, name: &str) -> Result<(), AppError> {
        let level = Level::from_name(name).ok_or_else(|| AppError::InvalidLevel {
            input: name.to_string(),
        })?;
        self.level = level;
        Ok(())
    }

    pub(crate) fn enabled(&self, level: Level) -> bool {
        self.level != Level::Silent && level <= self.level
    }

    pub(crate) fn log(&self, level: Level, source: &str, message: impl fmt::Display) {
        if !self.enabled(level) {
            return;
        }
        let mut sink = self.sink.borrow_mut();
        // Output is best effort, like print.
        let _ = writeln!(sink, "[{}::{}] {}", level.name(), source, message);
        let _ = sink.flush();
    }

    pub(crate) fn error(&self, source: &str, message: impl fmt::Display) {
        self.log(Level::Error, source, message);
    }

    pub(crate) fn warning(&self, source: &str, message: impl fmt::Display) {
        self.log(Level::Warning, source, message);
    }

    pub(crate) fn info(&self, source: &str, message: impl fmt::Display) {
        self.log(Level::Info, source, message);
    }

    pub(crate) fn verbose(&self, source: &str, message: impl fmt::Display) {
        self.log(Level::Verbose, source, message);
    }

    pub(crate) fn debug(&self, source: &str, message: impl fmt::Display) {
        self.log(Level::Debug, source, message);
    }

    /// Log `err` at ERROR and hand it back for propagation
    pub(crate) fn report(&self, source: &str, err: AppError) -> AppError {
        self.error(source, &err);
        err
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::rc::Rc;

    /// In-memory sink that tests can read back after logging.
    #[derive(Clone, Default)]
    pub(crate) struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl SharedBuf {
        pub(crate) fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).into_owned()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    pub(crate) fn buffered(level: Level) -> (Logger, SharedBuf) {
        let buf = SharedBuf::default();
        (Logger::with_sink(level, Box::new(buf.clone())), buf)
    }

    #[test]
    fn levels_order_by_value() {
        assert!(Level::Silent < Level::Critical);
        assert!(Level::Warning < Level::Info);
        assert!(Level::Verbose < Level::Debug);
        assert_eq!(Level::Debug as u8, 7);
        assert_eq!(Level::DEFAULT, Level::Warning);
    }

    #[test]
    fn name_lookup_is_bidirectional() {
        for level in Level::ALL {
            assert_eq!(Level::from_name(level.name()), Some(level));
        }
        assert_eq!(Level::from_name("verbose"), Some(Level::Verbose));
        assert_eq!(Level::from_name("LOUD"), None);
    }

    #[test]
    fn message_format() {
        let (log, buf) = buffered(Level::Info);
        log.info("main", "hello");
        assert_eq!(buf.contents(), "[INFO::main] hello\n");
    }

    #[test]
    fn messages_above_configured_level_are_dropped() {
        let (log, buf) = buffered(Level::Warning);
        log.error("a", "shown");
        log.warning("b", "shown too");
        log.info("c", "hidden");
        log.debug("d", "hidden");
        let out = buf.contents();
        assert!(out.contains("[ERROR::a] shown"));
        assert!(out.contains("[WARNING::b] shown too"));
        assert!(!out.contains("hidden"));
    }

    #[test]
    fn silent_suppresses_everything() {
        let (log, buf) = buffered(Level::Silent);
        log.log(Level::Critical, "main", "boom");
        log.log(Level::Silent, "main", "even this");
        assert!(buf.contents().is_empty());
    }

    #[test]
    fn set_level_by_name_rejects_unknown_names() {
        let (mut log, _) = buffered(Level::Warning);
        assert!(log.set_level_by_name("DEBUG").is_ok());
        assert_eq!(log.level(), Level::Debug);

        let err = log.set_level_by_name("chatty").unwrap_err();
        assert!(matches!(err, AppError::InvalidLevel { .. }));
        assert_eq!(log.level(), Level::Debug);
    }

    #[test]
    fn report_logs_and_returns_error() {
        let (log, buf) = buffered(Level::Error);
        let err = log.report("copy", AppError::InputClosed);
        assert!(matches!(err, AppError::InputClosed));
        assert_eq!(
            buf.contents(),
            "[ERROR::copy] Input closed before a choice was made\n"
        );
    }
}
