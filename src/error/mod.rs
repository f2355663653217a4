use thiserror::Error;

use crate::db::DbError;

/// Domain error taxonomy for the ledger core.
///
/// Every variant except `Storage` means the request itself was invalid;
/// `Storage` means the store failed and is the only case a caller may retry.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Duplicate nickname: {0}")]
    DuplicateNickname(String),
    #[error("Already minted: {0}")]
    AlreadyMinted(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Storage error: {0}")]
    Storage(#[from] DbError),
}

pub type LedgerResult<T> = Result<T, LedgerError>;

impl From<sea_orm::DbErr> for LedgerError {
    fn from(err: sea_orm::DbErr) -> Self {
        LedgerError::Storage(DbError::from(err))
    }
}
