//! Application configuration.
//!
//! Centralized configuration for the Vidup frontend. The constants are the
//! defaults of a local docker-compose deployment; [`ClientConfig`] carries
//! them at runtime so another backend can be targeted without a rebuild of
//! the upload logic.

/// Backend API base URL.
///
/// Port 8081 is the port exposed to the host by docker-compose.
pub const BACKEND_URL: &str = "http://localhost:8081";

/// Health check endpoint.
pub const HEALTH_PATH: &str = "/health";

/// Multipart-only upload endpoint.
pub const UPLOAD_VIDEO_PATH: &str = "/upload-video";

/// Upload endpoint taking the bucket and object name as query parameters.
pub const UPLOAD_RAW_VIDEO_PATH: &str = "/upload-raw-video";

/// Object store bucket the videos land in.
pub const STORAGE_BUCKET: &str = "bucket";

/// Multipart field carrying the file bytes.
pub const FILE_FIELD: &str = "file";

/// The only MIME type accepted by the picker.
pub const ACCEPTED_MIME_TYPE: &str = "video/mp4";

/// Object name used when sanitization strips every character.
pub const DEFAULT_FILE_NAME: &str = "uploaded_file.mp4";

/// Maximum activity log entries to keep in memory.
pub const MAX_LOG_ENTRIES: usize = 100;

/// Which upload contract the backend speaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadEndpoint {
    /// `POST /upload-video`, multipart body only.
    Multipart,
    /// `POST /upload-raw-video?bucket=..&file=..`, multipart body.
    Raw,
}

impl UploadEndpoint {
    /// Path of the endpoint, relative to the backend URL.
    pub fn path(&self) -> &'static str {
        match self {
            UploadEndpoint::Multipart => UPLOAD_VIDEO_PATH,
            UploadEndpoint::Raw => UPLOAD_RAW_VIDEO_PATH,
        }
    }
}

/// Runtime configuration of an [`UploadClient`](crate::UploadClient).
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub backend_url: String,
    pub endpoint: UploadEndpoint,
    pub bucket: String,
}

impl ClientConfig {
    /// Config pointing at another backend, keeping the default contract.
    pub fn with_backend(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            ..Self::default()
        }
    }

    /// Full URL of the health endpoint.
    pub fn health_url(&self) -> String {
        format!("{}{}", self.backend_url.trim_end_matches('/'), HEALTH_PATH)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: BACKEND_URL.to_string(),
            endpoint: UploadEndpoint::Raw,
            bucket: STORAGE_BUCKET.to_string(),
        }
    }
}
