//! Exit codes for dc-core CLI.
//!
//! Exit codes communicate operation outcome without requiring output
//! parsing.
//!
//! Exit code ranges:
//! - 0-6: Operational outcomes (parse outcome from code, not output)
//! - 10-19: User/environment errors (recoverable by user action)
//! - 20-29: Internal errors (bugs, should be reported)

/// Exit codes for dc-core operations.
///
/// These codes are a stable contract for automation. Changes require
/// a major version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success: every pair compared
    Clean = 0,

    /// Run completed but some pairs were skipped (--skip-invalid)
    PartialFail = 3,

    /// Invalid arguments
    ArgsError = 10,

    /// An input line failed to parse as a vector
    ParseError = 11,

    /// A vector pair failed validation (length or normalization)
    ValidationError = 12,

    /// Internal error (bug - please report)
    InternalError = 20,

    /// I/O error
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates a fully clean run.
    pub fn is_success(self) -> bool {
        matches!(self, ExitCode::Clean)
    }

    /// Check if this exit code is an operational outcome (codes 0-6).
    /// These are not errors - they communicate workflow state.
    pub fn is_operational(self) -> bool {
        (self as i32) < 10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_values_are_stable() {
        assert_eq!(ExitCode::Clean.as_i32(), 0);
        assert_eq!(ExitCode::PartialFail.as_i32(), 3);
        assert_eq!(ExitCode::ParseError.as_i32(), 11);
        assert_eq!(ExitCode::IoError.as_i32(), 21);
    }

    #[test]
    fn exit_code_classification() {
        assert!(ExitCode::Clean.is_success());
        assert!(!ExitCode::PartialFail.is_success());
        assert!(ExitCode::PartialFail.is_operational());
        assert!(!ExitCode::ValidationError.is_operational());
    }
}
