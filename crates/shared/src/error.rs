use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    EmptyUrl,
    MalformedUrl,
    NotAPdf,
    FileTooLarge,
    MissingFields,
    InvalidEmail,
    InvalidPhone,
    PasswordMismatch,
    WeakPassword,
}

/// Which inline banner an error is reported through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorBanner {
    Url,
    File,
    Auth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("Please enter a URL")]
    EmptyUrl,
    #[error("Please enter a valid URL")]
    MalformedUrl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FileError {
    #[error("Please select a valid PDF file")]
    NotAPdf,
    #[error("File size exceeds 50MB limit")]
    FileTooLarge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 8 characters with uppercase, lowercase, and numbers")]
    WeakPassword,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error(transparent)]
    Url(#[from] UrlError),
    #[error(transparent)]
    File(#[from] FileError),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl FlowError {
    pub fn code(&self) -> ErrorCode {
        match self {
            FlowError::Url(UrlError::EmptyUrl) => ErrorCode::EmptyUrl,
            FlowError::Url(UrlError::MalformedUrl) => ErrorCode::MalformedUrl,
            FlowError::File(FileError::NotAPdf) => ErrorCode::NotAPdf,
            FlowError::File(FileError::FileTooLarge) => ErrorCode::FileTooLarge,
            FlowError::Auth(AuthError::MissingFields) => ErrorCode::MissingFields,
            FlowError::Auth(AuthError::InvalidEmail) => ErrorCode::InvalidEmail,
            FlowError::Auth(AuthError::InvalidPhone) => ErrorCode::InvalidPhone,
            FlowError::Auth(AuthError::PasswordMismatch) => ErrorCode::PasswordMismatch,
            FlowError::Auth(AuthError::WeakPassword) => ErrorCode::WeakPassword,
        }
    }

    pub fn banner(&self) -> ErrorBanner {
        match self {
            FlowError::Url(_) => ErrorBanner::Url,
            FlowError::File(_) => ErrorBanner::File,
            FlowError::Auth(_) => ErrorBanner::Auth,
        }
    }

    /// URL banners dismiss themselves; file and auth banners stay until replaced.
    pub fn auto_dismisses(&self) -> bool {
        matches!(self, FlowError::Url(_))
    }
}
