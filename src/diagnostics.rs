//! Diagnostic logging.
//!
//! The sink and verbosity are chosen when a [`Logger`] is constructed; a
//! [`NullLogger`] or [`Verbosity::Off`] turns every call into a no-op.
//! Logging is best effort and never affects motion.

use core::fmt;

use serde::Deserialize;

/// Diagnostic detail level, ordered from silent to most verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verbosity {
    /// Nothing is written.
    Off,
    /// Fatal conditions only.
    Error,
    /// Computed speeds, step counts and completion.
    #[default]
    Info,
    /// Per-move planning details and phase transitions.
    Debug,
}

impl Verbosity {
    /// Short tag used as a line prefix.
    pub fn tag(self) -> &'static str {
        match self {
            Verbosity::Off => "",
            Verbosity::Error => "ERROR",
            Verbosity::Info => "INFO",
            Verbosity::Debug => "DEBUG",
        }
    }
}

/// Text sink for diagnostic messages.
pub trait Logger {
    /// Most detailed level this logger emits.
    fn verbosity(&self) -> Verbosity;

    /// Write one message. Called only for enabled levels.
    fn write(&mut self, level: Verbosity, args: fmt::Arguments<'_>);

    /// Whether messages at `level` reach the sink.
    #[inline]
    fn enabled(&self, level: Verbosity) -> bool {
        level != Verbosity::Off && level <= self.verbosity()
    }

    /// Log a message at `level` if enabled.
    #[inline]
    fn log(&mut self, level: Verbosity, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            self.write(level, args);
        }
    }

    /// Log at error level.
    #[inline]
    fn error(&mut self, args: fmt::Arguments<'_>) {
        self.log(Verbosity::Error, args);
    }

    /// Log at info level.
    #[inline]
    fn info(&mut self, args: fmt::Arguments<'_>) {
        self.log(Verbosity::Info, args);
    }

    /// Log at debug level.
    #[inline]
    fn debug(&mut self, args: fmt::Arguments<'_>) {
        self.log(Verbosity::Debug, args);
    }
}

impl<L: Logger + ?Sized> Logger for &mut L {
    fn verbosity(&self) -> Verbosity {
        (**self).verbosity()
    }

    fn write(&mut self, level: Verbosity, args: fmt::Arguments<'_>) {
        (**self).write(level, args)
    }
}

/// Logger that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn verbosity(&self) -> Verbosity {
        Verbosity::Off
    }

    fn write(&mut self, _level: Verbosity, _args: fmt::Arguments<'_>) {}
}

/// Logger writing `LEVEL message` lines to any [`core::fmt::Write`] sink.
///
/// Suits a serial-port writer on target or a `heapless::String` in tests.
/// Write failures are ignored.
#[derive(Debug)]
pub struct FmtLogger<W: fmt::Write> {
    sink: W,
    verbosity: Verbosity,
}

impl<W: fmt::Write> FmtLogger<W> {
    /// Create a logger over `sink` emitting up to `verbosity`.
    pub fn new(sink: W, verbosity: Verbosity) -> Self {
        Self { sink, verbosity }
    }

    /// Borrow the underlying sink.
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Recover the underlying sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: fmt::Write> Logger for FmtLogger<W> {
    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn write(&mut self, level: Verbosity, args: fmt::Arguments<'_>) {
        let _ = write!(self.sink, "{} ", level.tag());
        let _ = self.sink.write_fmt(args);
        let _ = self.sink.write_str("\n");
    }
}

/// Logger forwarding to `defmt` (RTT or other defmt transport).
#[cfg(feature = "defmt")]
#[derive(Debug, Clone, Copy)]
pub struct DefmtLogger {
    verbosity: Verbosity,
}

#[cfg(feature = "defmt")]
impl DefmtLogger {
    /// Create a defmt logger emitting up to `verbosity`.
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

#[cfg(feature = "defmt")]
impl Logger for DefmtLogger {
    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn write(&mut self, level: Verbosity, args: fmt::Arguments<'_>) {
        let msg = defmt::Display2Format(&args);
        match level {
            Verbosity::Off => {}
            Verbosity::Error => defmt::error!("{}", msg),
            Verbosity::Info => defmt::info!("{}", msg),
            Verbosity::Debug => defmt::debug!("{}", msg),
        }
    }
}
