//! Non-blocking logging for RustMorseInput.
//!
//! # Architecture
//!
//! ```text
//! Menu / Config / Console     LogStream          Serial drain
//! ───────────────────────     ─────────          ────────────
//!
//! dev_info!() ──────────────▶ [L0][L1][L2] ────▶ UART / stdout
//! filtered by max level       lock-free ring     serial_log::drain
//! never blocks                drops when full
//! ```
//!
//! # Rules
//!
//! - Producers never block and never allocate; a full ring drops the message
//! - Messages above the stream's max level are discarded before formatting
//! - Only the serial drain reads the ring

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicU32, AtomicU8, Ordering};

/// Maximum message length.
pub const MAX_MSG_LEN: usize = 96;

/// Log buffer size (number of entries).
pub const LOG_BUFFER_SIZE: usize = 64;

/// Log level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl LogLevel {
    /// Convert to string for output.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    /// Convert from raw u8 value; out of range saturates at `Trace`.
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Error,
            1 => LogLevel::Warn,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    /// Parse a level name (case-insensitive), as typed on the console.
    pub fn parse(name: &str) -> Option<Self> {
        [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ]
        .into_iter()
        .find(|level| level.as_str().eq_ignore_ascii_case(name))
    }
}

/// Subsystem that produced a log entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum LogSource {
    System = 0,
    Menu = 1,
    Config = 2,
    Console = 3,
}

impl LogSource {
    pub fn as_str(self) -> &'static str {
        match self {
            LogSource::System => "sys",
            LogSource::Menu => "menu",
            LogSource::Config => "config",
            LogSource::Console => "console",
        }
    }
}

/// A single log entry.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct LogEntry {
    /// Timestamp in microseconds.
    pub timestamp_us: i64,
    pub level: LogLevel,
    pub source: LogSource,
    /// Message length.
    pub len: u8,
    /// Message bytes (not null-terminated).
    pub msg: [u8; MAX_MSG_LEN],
}

impl LogEntry {
    const EMPTY: LogEntry = LogEntry {
        timestamp_us: 0,
        level: LogLevel::Info,
        source: LogSource::System,
        len: 0,
        msg: [0; MAX_MSG_LEN],
    };

    /// Message text; truncation may have split a UTF-8 sequence.
    pub fn message(&self) -> &str {
        let bytes = &self.msg[..self.len as usize];
        match core::str::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => core::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or(""),
        }
    }
}

impl Default for LogEntry {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Lock-free log ring (single producer, single consumer).
///
/// Every producer runs on the device's one cooperative loop. The ring lives in
/// a `static`, so indices are atomic; a slot is published only after it is
/// fully written.
pub struct LogStream<const N: usize = LOG_BUFFER_SIZE> {
    entries: UnsafeCell<[LogEntry; N]>,
    write_idx: AtomicU32,
    read_idx: AtomicU32,
    dropped: AtomicU32,
    max_level: AtomicU8,
}

// SAFETY: The single producer writes a slot before publishing it via
// write_idx; the single consumer only reads slots below write_idx.
unsafe impl<const N: usize> Sync for LogStream<N> {}
unsafe impl<const N: usize> Send for LogStream<N> {}

impl<const N: usize> LogStream<N> {
    const MASK: usize = N - 1;

    /// Create a new empty log stream passing `Info` and above.
    pub const fn new() -> Self {
        assert!(N.is_power_of_two(), "Log buffer size must be power of 2");

        Self {
            entries: UnsafeCell::new([LogEntry::EMPTY; N]),
            write_idx: AtomicU32::new(0),
            read_idx: AtomicU32::new(0),
            dropped: AtomicU32::new(0),
            max_level: AtomicU8::new(LogLevel::Info as u8),
        }
    }

    /// Most verbose level currently accepted.
    #[inline]
    pub fn max_level(&self) -> LogLevel {
        LogLevel::from_u8(self.max_level.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn set_max_level(&self, level: LogLevel) {
        self.max_level.store(level as u8, Ordering::Relaxed);
    }

    /// True if a message at `level` would be queued.
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.max_level()
    }

    /// Push a log entry (never blocks).
    ///
    /// Returns `true` if message was queued, `false` if filtered or dropped.
    #[inline]
    pub fn push(&self, timestamp_us: i64, level: LogLevel, source: LogSource, msg: &[u8]) -> bool {
        if !self.enabled(level) {
            return false;
        }

        let write = self.write_idx.load(Ordering::Relaxed);
        let read = self.read_idx.load(Ordering::Acquire);

        // Ring full
        if write.wrapping_sub(read) >= N as u32 {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return false;
        }

        let idx = (write as usize) & Self::MASK;

        // SAFETY: Single producer; the slot is at or past write_idx, so the
        // consumer does not touch it until it is published below.
        unsafe {
            let entry = &mut (*self.entries.get())[idx];
            entry.timestamp_us = timestamp_us;
            entry.level = level;
            entry.source = source;
            entry.len = msg.len().min(MAX_MSG_LEN) as u8;
            entry.msg[..entry.len as usize].copy_from_slice(&msg[..entry.len as usize]);
        }

        self.write_idx.store(write.wrapping_add(1), Ordering::Release);
        true
    }

    /// Drain next log entry. Returns `None` if the ring is empty.
    #[inline]
    pub fn drain(&self) -> Option<LogEntry> {
        let read = self.read_idx.load(Ordering::Relaxed);
        let write = self.write_idx.load(Ordering::Acquire);

        if read == write {
            return None;
        }

        let idx = (read as usize) & Self::MASK;

        // SAFETY: Single consumer, slot below write_idx
        let entry = unsafe { (*self.entries.get())[idx] };

        self.read_idx.store(read.wrapping_add(1), Ordering::Release);
        Some(entry)
    }

    /// Get count of dropped messages.
    #[inline]
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Reset dropped counter (e.g., after reporting).
    #[inline]
    pub fn reset_dropped(&self) {
        self.dropped.store(0, Ordering::Relaxed);
    }

    /// Get number of entries waiting to be drained.
    #[inline]
    pub fn pending(&self) -> u32 {
        let read = self.read_idx.load(Ordering::Relaxed);
        let write = self.write_idx.load(Ordering::Acquire);
        write.wrapping_sub(read)
    }
}

impl<const N: usize> Default for LogStream<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a message into a buffer, truncating at the buffer end.
///
/// Returns the number of bytes written.
#[inline]
pub fn format_to_buffer(buf: &mut [u8], args: core::fmt::Arguments<'_>) -> usize {
    use core::fmt::Write;

    struct BufWriter<'a> {
        buf: &'a mut [u8],
        pos: usize,
    }

    impl Write for BufWriter<'_> {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            let bytes = s.as_bytes();
            let to_write = bytes.len().min(self.buf.len() - self.pos);
            self.buf[self.pos..self.pos + to_write].copy_from_slice(&bytes[..to_write]);
            self.pos += to_write;
            Ok(())
        }
    }

    let mut writer = BufWriter { buf, pos: 0 };
    let _ = core::fmt::write(&mut writer, args);
    writer.pos
}

/// Microseconds since boot on the device; 0 on the host (no timer).
#[inline]
pub fn timestamp_us() -> i64 {
    #[cfg(target_os = "espidf")]
    {
        // SAFETY: esp_timer is started by ESP-IDF before app main
        unsafe { esp_idf_svc::sys::esp_timer_get_time() }
    }

    #[cfg(not(target_os = "espidf"))]
    {
        0
    }
}

/// Log macro.
///
/// Formatting is skipped entirely when the level is filtered out.
///
/// # Example
///
/// ```ignore
/// dev_log!(LogLevel::Info, LOG_STREAM, Menu, timestamp, "{} -> {}", from, to);
/// ```
#[macro_export]
macro_rules! dev_log {
    ($level:expr, $stream:expr, $source:ident, $timestamp:expr, $($arg:tt)*) => {{
        let level = $level;
        if $stream.enabled(level) {
            let mut buf = [0u8; $crate::logging::MAX_MSG_LEN];
            let len = $crate::logging::format_to_buffer(&mut buf, format_args!($($arg)*));
            $stream.push(
                $timestamp,
                level,
                $crate::logging::LogSource::$source,
                &buf[..len],
            );
        }
    }};
}

/// Error log.
#[macro_export]
macro_rules! dev_error {
    ($stream:expr, $source:ident, $timestamp:expr, $($arg:tt)*) => {
        $crate::dev_log!($crate::logging::LogLevel::Error, $stream, $source, $timestamp, $($arg)*)
    };
}

/// Warning log.
#[macro_export]
macro_rules! dev_warn {
    ($stream:expr, $source:ident, $timestamp:expr, $($arg:tt)*) => {
        $crate::dev_log!($crate::logging::LogLevel::Warn, $stream, $source, $timestamp, $($arg)*)
    };
}

/// Info log.
#[macro_export]
macro_rules! dev_info {
    ($stream:expr, $source:ident, $timestamp:expr, $($arg:tt)*) => {
        $crate::dev_log!($crate::logging::LogLevel::Info, $stream, $source, $timestamp, $($arg)*)
    };
}

/// Debug log.
#[macro_export]
macro_rules! dev_debug {
    ($stream:expr, $source:ident, $timestamp:expr, $($arg:tt)*) => {
        $crate::dev_log!($crate::logging::LogLevel::Debug, $stream, $source, $timestamp, $($arg)*)
    };
}

/// Trace log (maximum verbosity).
#[macro_export]
macro_rules! dev_trace {
    ($stream:expr, $source:ident, $timestamp:expr, $($arg:tt)*) => {
        $crate::dev_log!($crate::logging::LogLevel::Trace, $stream, $source, $timestamp, $($arg)*)
    };
}
