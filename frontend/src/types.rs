//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Upload Types** - File selection and upload status
//! - **Backend Types** - Health check state
//! - **Log Types** - Activity log shown in the UI
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// =============================================================================
// Upload Types
// =============================================================================

/// A file picked by the user, as seen by the upload logic.
///
/// Only the metadata is kept here; the platform handle stays with the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name as reported by the picker
    pub name: String,
    /// MIME type as reported by the picker
    pub mime_type: String,
}

/// Upload workflow status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UploadStatus {
    /// Nothing selected yet
    #[default]
    Idle,
    /// A valid MP4 is selected (local file name)
    Selected(String),
    /// Upload in flight (local file name)
    Uploading(String),
    /// Upload finished (server-assigned file name)
    Success(String),
    /// Validation or upload failed
    Failed(String),
}

impl UploadStatus {
    /// Status line shown under the upload buttons.
    pub fn status_text(&self) -> Option<String> {
        match self {
            UploadStatus::Idle => None,
            UploadStatus::Selected(name) => Some(format!("File selected: {}", name)),
            UploadStatus::Uploading(_) => Some("Uploading...".to_string()),
            UploadStatus::Success(name) => Some(format!("Upload successful: {}", name)),
            UploadStatus::Failed(_) => Some("Upload failed".to_string()),
        }
    }

    /// Error message, if the status is a failure.
    pub fn error(&self) -> Option<&str> {
        match self {
            UploadStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self, UploadStatus::Uploading(_))
    }
}

// =============================================================================
// Backend Types
// =============================================================================

/// State of the backend health panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HealthState {
    /// A health request is in flight
    pub loading: bool,
    /// Last JSON payload returned by `/health`
    pub snapshot: Option<Value>,
    /// Last health check failure
    pub error: Option<String>,
}

/// Everything the UI renders, owned by the [`UploadClient`](crate::UploadClient).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientState {
    pub selected: Option<SelectedFile>,
    pub status: UploadStatus,
    pub health: HealthState,
    /// Body of the last successful upload response
    pub last_upload: Option<Value>,
}

// =============================================================================
// Log Types
// =============================================================================

/// Log severity level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LogLevel {
    /// Informational message
    Info,
    /// Success/completion message
    Success,
    /// Error message
    Error,
    /// Warning message
    Warning,
}

impl LogLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Info => "log-info",
            LogLevel::Success => "log-success",
            LogLevel::Error => "log-error",
            LogLevel::Warning => "log-warning",
        }
    }
}

/// A single activity log entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Severity level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Upload and health check errors.
///
/// The `Display` output is exactly what the UI shows.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    /// Picked file is not an MP4.
    #[error("Please select an MP4 file")]
    InvalidFileType,

    /// Upload requested with nothing selected.
    #[error("Please select a file first")]
    NoFileSelected,

    /// Backend answered with a non-2xx status.
    #[error("{context} with status: {status}")]
    Status { context: &'static str, status: u16 },

    /// Request never got a response.
    #[error("HTTP request failed: {0}")]
    Network(String),

    /// Response body was not the expected JSON.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl UploadError {
    /// Non-2xx answer from the upload endpoint.
    pub fn upload_status(status: u16) -> Self {
        UploadError::Status {
            context: "Upload failed",
            status,
        }
    }

    /// Non-2xx answer from the health endpoint.
    pub fn health_status(status: u16) -> Self {
        UploadError::Status {
            context: "Backend responded",
            status,
        }
    }

    /// Local errors are raised before any request is sent.
    pub fn is_local(&self) -> bool {
        matches!(self, UploadError::InvalidFileType | UploadError::NoFileSelected)
    }
}

/// Result type alias for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;
