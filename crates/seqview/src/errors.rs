//! Error handling and exit codes.

use seqview_core::constants::exit_codes;
use seqview_core::SeqError;

/// Map a run error to the process exit code.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    let code = match err.downcast_ref::<SeqError>() {
        Some(SeqError::Unsupported(_)) => exit_codes::ERROR_UNSUPPORTED,
        Some(SeqError::Config(_)) => exit_codes::ERROR_CONFIG,
        None => exit_codes::ERROR_GENERIC,
    };
    u8::try_from(code).unwrap_or(1)
}
