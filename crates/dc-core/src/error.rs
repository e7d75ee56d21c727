//! Error types for the comparison driver.
//!
//! A validation or parse failure aborts only the comparison it belongs
//! to; whether the run stops or skips the pair is the driver's call
//! (`--skip-invalid`). Errors carry the input line they arose from and
//! format human-readably on stderr:
//!
//! ```text
//! ✗ Validation Failed
//!   Reason: line 3: P and Pt are of different sizes: 2 vs 3
//!   Fix: Ensure paired lines have equal length and each vector sums to 1, ...
//! ```

use std::path::PathBuf;
use thiserror::Error;

use dc_math::DivergenceError;

use crate::exit_codes::ExitCode;

/// Result type alias for driver operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the comparison driver.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid arguments: {0}")]
    Args(String),

    #[error("line {line}: invalid vector: {reason}")]
    Parse { line: usize, reason: String },

    #[error("line {line}: {source}")]
    Divergence { line: usize, source: DivergenceError },

    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::Args(_) => ExitCode::ArgsError,
            Error::Parse { .. } => ExitCode::ParseError,
            Error::Divergence { .. } => ExitCode::ValidationError,
            Error::Open { .. } | Error::Create { .. } | Error::Io(_) => ExitCode::IoError,
        }
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self {
            Error::Args(_) => "Invalid Arguments",
            Error::Parse { .. } => "Invalid Vector Line",
            Error::Divergence { .. } => "Validation Failed",
            Error::Open { .. } => "Cannot Open Input",
            Error::Create { .. } => "Cannot Write Output",
            Error::Io(_) => "I/O Error",
        }
    }

    /// Returns a human-readable remediation hint.
    pub fn remediation(&self) -> &'static str {
        match self {
            Error::Args(_) => "Run 'dc-core compare --help' for usage.",
            Error::Parse { .. } => {
                "Each input line must be a list of floats like [0.7, 0.2, 0.1]. Fix the line or rerun with --skip-invalid."
            }
            Error::Divergence { .. } => {
                "Ensure paired lines have equal length and each vector sums to 1, or rerun with --skip-invalid to skip bad pairs."
            }
            Error::Open { .. } => "Check that the input path exists and is readable.",
            Error::Create { .. } => "Check permissions and free space on the output directory.",
            Error::Io(_) => "Check disk space and permissions, then retry the operation.",
        }
    }
}

/// Format an error for human-readable stderr output.
///
/// Output format:
/// ```text
/// ✗ [Headline]
///   Reason: [Error message]
///   Fix: [Remediation hint]
/// ```
pub fn format_error_human(err: &Error, use_color: bool) -> String {
    let (red, cyan, reset) = if use_color {
        ("\x1b[31m", "\x1b[36m", "\x1b[0m")
    } else {
        ("", "", "")
    };

    format!(
        "{red}✗{reset} {headline}\n  Reason: {message}\n  {cyan}Fix:{reset} {remediation}",
        red = red,
        cyan = cyan,
        reset = reset,
        headline = err.headline(),
        message = err,
        remediation = err.remediation()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_mapping() {
        assert_eq!(
            Error::Parse {
                line: 1,
                reason: "x".into()
            }
            .exit_code(),
            ExitCode::ParseError
        );
        assert_eq!(
            Error::Divergence {
                line: 1,
                source: DivergenceError::EmptyInput
            }
            .exit_code(),
            ExitCode::ValidationError
        );
        assert_eq!(Error::Args("x".into()).exit_code(), ExitCode::ArgsError);
    }

    #[test]
    fn divergence_error_keeps_line_context() {
        let err = Error::Divergence {
            line: 3,
            source: DivergenceError::LengthMismatch {
                p_len: 2,
                pt_len: 3,
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("different sizes"));
    }

    #[test]
    fn format_error_human_plain() {
        let err = Error::Parse {
            line: 7,
            reason: "invalid float \"abc\"".into(),
        };
        let formatted = format_error_human(&err, false);
        assert!(formatted.contains("Invalid Vector Line"));
        assert!(formatted.contains("line 7"));
        assert!(formatted.contains("--skip-invalid"));
    }
}
