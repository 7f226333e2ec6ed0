//! UI Components for the Vidup application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//!
//! # Feature Components
//! - [`BackendSection`] - Health check and last backend payload
//! - [`UploadSection`] - MP4 selection and upload
//! - [`LogsPanel`] - Activity log of selections, uploads and health checks

mod hero;
mod health;
mod upload;
mod logs;

pub use hero::*;
pub use health::*;
pub use upload::*;
pub use logs::*;
