pub use crate::cli::{command, run_app, run_menu};
pub use crate::domain::{Contact, contact};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactStore, DEFAULT_FILE_PATH};
pub use crate::validation::{validate_email, validate_name, validate_number};
