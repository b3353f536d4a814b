/*
 * Responsibility
 * - External comment id (string) <-> internal id (Uuid)
 * - Keep the id format decision here so handlers/services never parse ids themselves
 *
 * No thiserror here:
 * - the error type is local to this module and carries no source
 */
use std::{error::Error, fmt};

use uuid::Uuid;

pub type Result<T> = std::result::Result<T, IdCodecError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdCodecError {
    DecodeInvalidFormat,
}

impl fmt::Display for IdCodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdCodecError::DecodeInvalidFormat => write!(f, "invalid comment id format"),
        }
    }
}

impl Error for IdCodecError {}

/// Parse the external form of a comment id. Performs no I/O.
pub fn decode(public_id: &str) -> Result<Uuid> {
    Uuid::parse_str(public_id).map_err(|_| IdCodecError::DecodeInvalidFormat)
}

/// Render a comment id in its external (hyphenated, lowercase) form.
pub fn encode(id: Uuid) -> String {
    id.hyphenated().to_string()
}
