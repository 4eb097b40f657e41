//! Unified application error type.
//! All modules (net, auth, scrape, workflow, cli) return AppError to keep
//! the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

/// Login phase at which an authentication request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    /// POST to the client/administrator login endpoint.
    ClientLogin,
    /// Scraping the employee impersonation code from the admin landing page.
    EmployeeCode,
    /// GET to the impersonation endpoint.
    Impersonate,
    /// Direct POST to the employee login endpoint.
    EmployeeLogin,
}

impl std::fmt::Display for AuthPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AuthPhase::ClientLogin => "client login",
            AuthPhase::EmployeeCode => "employee code",
            AuthPhase::Impersonate => "impersonation",
            AuthPhase::EmployeeLogin => "employee login",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // HTTP transport
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Fetch error for {path}: status={status}")]
    Fetch { path: String, status: u16 },

    #[error("Post error for {path}: status={status}")]
    Post { path: String, status: u16 },

    // ---------------------------
    // Authentication
    // ---------------------------
    #[error("Login rejected at {phase} (status={status})")]
    Auth { phase: AuthPhase, status: u16 },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid day '{0}': expected YYYYMMDD or YYYY-MM-DD")]
    InvalidDay(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration; please run `kintai init`")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
