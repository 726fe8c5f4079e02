//! Structured logging for X25519/Ed25519 operations.
//!
//! Modeled on the audit-log module this crate's teacher carried for its VRF
//! operations: a leveled, JSON-capable log entry keyed by which operation
//! produced it. Entries never include private key, seed, or scalar
//! material — only operation kind, a message, and optional timing/success
//! metadata.

use std::fmt;

/// Log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Verbose diagnostics, only ever emitted behind the `crypto-debug` feature.
    Debug,
    /// Routine operation outcome (e.g. a signature was produced or accepted).
    Info,
    /// A rejection that is expected behavior, not a bug (e.g. verify failed).
    Warning,
    /// An unexpected failure, such as RNG exhaustion.
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Which cryptographic operation a log entry describes.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// A private/public key pair was generated.
    KeyGeneration,
    /// An X25519 scalar multiplication was performed.
    ScalarMultiply,
    /// An Ed25519 signature was produced.
    Sign,
    /// A single Ed25519 signature was checked.
    Verify,
    /// A batch of Ed25519 signatures was checked.
    VerifyBatch,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::KeyGeneration => write!(f, "KEYGEN"),
            Operation::ScalarMultiply => write!(f, "SCALARMUL"),
            Operation::Sign => write!(f, "SIGN"),
            Operation::Verify => write!(f, "VERIFY"),
            Operation::VerifyBatch => write!(f, "VERIFY_BATCH"),
        }
    }
}

/// A single structured log entry.
#[derive(Debug)]
pub struct LogEntry {
    level: LogLevel,
    operation: Operation,
    message: String,
}

impl LogEntry {
    #[must_use]
    pub fn new(level: LogLevel, operation: Operation, message: String) -> Self {
        Self {
            level,
            operation,
            message,
        }
    }

    /// Renders as a single-line JSON object.
    #[must_use]
    pub fn to_json(&self) -> String {
        format!(
            "{{\"level\":\"{}\",\"operation\":\"{}\",\"message\":\"{}\"}}",
            self.level, self.operation, self.message
        )
    }
}

/// A minimum-level-gated logger. Silent unless the `crypto-debug` feature is
/// enabled, matching the teacher crate's posture of shipping quiet by
/// default and surfacing diagnostics only behind an explicit flag.
pub struct Logger {
    min_level: LogLevel,
}

impl Logger {
    #[must_use]
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn log(&self, entry: LogEntry) {
        #[cfg(feature = "crypto-debug")]
        if entry.level >= self.min_level {
            eprintln!("{}", entry.to_json());
        }
        #[cfg(not(feature = "crypto-debug"))]
        {
            let _ = (&self.min_level, &entry);
        }
    }

    pub fn debug(&self, operation: Operation, message: String) {
        self.log(LogEntry::new(LogLevel::Debug, operation, message));
    }

    pub fn info(&self, operation: Operation, message: String) {
        self.log(LogEntry::new(LogLevel::Info, operation, message));
    }

    pub fn warning(&self, operation: Operation, message: String) {
        self.log(LogEntry::new(LogLevel::Warning, operation, message));
    }

    pub fn error(&self, operation: Operation, message: String) {
        self.log(LogEntry::new(LogLevel::Error, operation, message));
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}
