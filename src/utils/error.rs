// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Usage: term_extractor <html-file>")]
    MissingArgument,

    #[error("Error: {} not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Read, UTF-8 decode and stdout write failures
}

impl AppError {
    /// Errors that are reported to the user on stdout rather than propagated out of `main`.
    pub fn is_usage(&self) -> bool {
        matches!(self, AppError::MissingArgument | AppError::FileNotFound(_))
    }
}
