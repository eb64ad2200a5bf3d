//! Unified application error type.
//! All modules (db, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Pre-flight checks
    // ---------------------------
    #[error("Cannot find the .db file in path '{}'", .0.display())]
    SourceNotFound(PathBuf),

    #[error("'{}' already exists, please supply a path to a file which doesn't exist", .0.display())]
    OutputExists(PathBuf),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type AppResult<T> = Result<T, AppError>;
