//! Error handlers
//!
//! Logs load failures and maps them to process exit codes.

use crate::error::types::GameConfigError;
use log::error;

/// EX_USAGE from sysexits.h
pub const EXIT_USAGE: i32 = 64;
/// EX_DATAERR from sysexits.h
pub const EXIT_DATA_ERROR: i32 = 65;
/// EX_NOINPUT from sysexits.h
pub const EXIT_NO_INPUT: i32 = 66;

/// Handle a game configuration error
pub fn handle_error(err: &GameConfigError) {
    error!("Game configuration error: {}", err);
}

/// Convert error to process exit code
pub fn error_exit_code(err: &GameConfigError) -> i32 {
    match err {
        GameConfigError::Parse(_) => EXIT_NO_INPUT,
        GameConfigError::Validation(_) => EXIT_DATA_ERROR,
    }
}
