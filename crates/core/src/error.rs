use thiserror::Error;

use crate::catalog::{self, CatalogError};
use crate::quiz_bank::{self, QuizBankError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    QuizBank(#[from] QuizBankError),
}

/// Validates the built-in catalog and quiz bank without panicking.
///
/// # Errors
///
/// Returns the first validation failure in either table.
pub fn check_builtin_tables() -> Result<(), Error> {
    catalog::builtin_catalog()?;
    quiz_bank::builtin_bank()?;
    Ok(())
}
