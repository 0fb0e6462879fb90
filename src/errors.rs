use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("A contact with phone number {0} already exists")]
    DuplicateKey(String),

    #[error("Contact {0} Not found")]
    NotFound(String),

    #[error("No contacts available to display")]
    EmptyStore,

    #[error("The file '{}' does not exist", .0.display())]
    NotFoundFile(PathBuf),

    #[error("Incorrect format in line {line_no}: {line}")]
    MalformedLine { line_no: usize, line: String },

    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),
}
