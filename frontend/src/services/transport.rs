//! HTTP transport used by the upload client.
//!
//! The [`Transport`] trait is the only place the upload workflow touches the
//! network. [`BrowserTransport`] implements it with `gloo-net` and
//! `FormData`; tests substitute a recording transport.

use gloo_net::http::{Request, Response};
use web_sys::{File, FormData};

/// Status and raw body of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A file handle coming from the platform's file picker.
pub trait FileHandle: Clone {
    /// File name as reported by the picker.
    fn name(&self) -> String;

    /// MIME type as reported by the picker (may be empty).
    fn mime_type(&self) -> String;
}

impl FileHandle for File {
    fn name(&self) -> String {
        File::name(self)
    }

    fn mime_type(&self) -> String {
        self.type_()
    }
}

/// Minimal HTTP client needed by [`UploadClient`](crate::UploadClient).
///
/// Futures are not `Send`: everything runs on the browser event loop.
/// Errors are transport failures only; non-2xx statuses are returned as
/// regular responses.
#[allow(async_fn_in_trait)]
pub trait Transport {
    type File: FileHandle;

    /// `GET url`.
    async fn get(&self, url: &str) -> Result<HttpResponse, String>;

    /// `POST url` with a multipart body holding `file` under `field`.
    async fn post_multipart(
        &self,
        url: &str,
        field: &str,
        file: &Self::File,
        file_name: &str,
    ) -> Result<HttpResponse, String>;
}

/// `fetch`-backed transport for the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    type File = File;

    async fn get(&self, url: &str) -> Result<HttpResponse, String> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        read_response(response).await
    }

    async fn post_multipart(
        &self,
        url: &str,
        field: &str,
        file: &File,
        file_name: &str,
    ) -> Result<HttpResponse, String> {
        let form_data = FormData::new().map_err(|e| format!("Failed to create FormData: {:?}", e))?;

        form_data
            .append_with_blob_and_filename(field, file, file_name)
            .map_err(|e| format!("Failed to append file: {:?}", e))?;

        let request = Request::post(url)
            .body(form_data)
            .map_err(|e| format!("Failed to build request: {}", e))?;

        let response = request.send().await.map_err(|e| e.to_string())?;

        read_response(response).await
    }
}

async fn read_response(response: Response) -> Result<HttpResponse, String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response body: {}", e))?;

    Ok(HttpResponse { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(199, "").is_success());
        assert!(!HttpResponse::new(301, "").is_success());
        assert!(!HttpResponse::new(500, "").is_success());
    }
}
