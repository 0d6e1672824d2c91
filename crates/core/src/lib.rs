pub mod catalog;
pub mod error;
pub mod model;
pub mod quiz;
pub mod quiz_bank;
pub mod scan;
pub mod scene;
pub mod session;
pub mod stepper;
pub mod time;

pub use catalog::{Catalog, CatalogError};
pub use error::{Error, check_builtin_tables};
pub use quiz_bank::{QuizBank, QuizBankError};
