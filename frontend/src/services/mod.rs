//! Backend communication services.
//!
//! # Services
//!
//! - [`transport`] - HTTP seam between the upload logic and the browser
//! - [`upload`] - MP4 upload workflow and backend health check

pub mod transport;
pub mod upload;

pub use transport::*;
pub use upload::*;
