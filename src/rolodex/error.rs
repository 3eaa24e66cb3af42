use crate::phone::PhoneNumber;
use thiserror::Error;

/// Every way a directory operation can fail.
///
/// All variants are recoverable: a failing operation leaves the directory
/// exactly as it was before the call, and nothing here ever terminates the
/// process. The caller decides whether to re-prompt, skip, or give up.
#[derive(Error, Debug)]
pub enum RolodexError {
    #[error("invalid phone number {0:?}: expected a 10-digit North American number")]
    InvalidPhoneFormat(String),

    #[error("phone number {0} already belongs to another record")]
    DuplicatePhoneNumber(PhoneNumber),

    #[error("name cannot be empty")]
    EmptyName,

    #[error("index {index} is out of range for a directory of {len} records")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no current record")]
    NoCurrentRecord,

    #[error("no record matches that name and number")]
    NotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RolodexError>;
