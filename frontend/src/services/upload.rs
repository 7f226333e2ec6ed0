//! MP4 upload workflow.
//!
//! [`UploadClient`] owns the UI-facing [`ClientState`] and drives it through
//! file selection, upload and health checks. Every state change is pushed to
//! an optional observer, which the Leptos components use to feed a signal.
//!
//! ```text
//! Idle ──select(mp4)──▶ Selected ──upload──▶ Uploading ──2xx──▶ Success
//!   │                                            │
//!   └──select(other)──▶ Failed ◀──non-2xx/network/bad JSON──┘
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;
use serde_json::Value;

use crate::config::{ClientConfig, UploadEndpoint, ACCEPTED_MIME_TYPE, DEFAULT_FILE_NAME, FILE_FIELD};
use crate::services::transport::{FileHandle, Transport};
use crate::types::{ClientState, SelectedFile, UploadError, UploadResult, UploadStatus};

/// Characters left unescaped in query values.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'.').remove(b'_').remove(b'-');

/// Response of the upload endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    /// Object name assigned by the server
    #[serde(default)]
    pub file_name: Option<String>,
}

/// Keep only `[A-Za-z0-9._-]`.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect()
}

/// Object name sent to the backend for a local file name.
pub fn object_name(local_name: &str) -> String {
    let sanitized = sanitize_file_name(local_name);
    if sanitized.is_empty() {
        DEFAULT_FILE_NAME.to_string()
    } else {
        sanitized
    }
}

/// Full upload URL for the configured endpoint contract.
pub fn upload_url(config: &ClientConfig, object_name: &str) -> String {
    let base = format!(
        "{}{}",
        config.backend_url.trim_end_matches('/'),
        config.endpoint.path()
    );

    match config.endpoint {
        UploadEndpoint::Multipart => base,
        UploadEndpoint::Raw => format!(
            "{}?bucket={}&file={}",
            base,
            utf8_percent_encode(&config.bucket, QUERY_VALUE),
            utf8_percent_encode(object_name, QUERY_VALUE)
        ),
    }
}

/// Cancellation flag shared between a view and the requests it starts.
///
/// Results of a request are dropped once its token is cancelled.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// How an async operation ended.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<T> {
    /// The request ran (or failed validation) and its result was applied.
    Completed(UploadResult<T>),
    /// Another request of the same kind was already in flight.
    Ignored,
    /// The token was cancelled before the result could be applied.
    Cancelled,
}

type Observer = Box<dyn Fn(&ClientState)>;

/// Upload workflow for a single panel.
///
/// All methods take `&self`; state lives behind `RefCell`/`Cell` and no
/// borrow is held across an `.await`.
pub struct UploadClient<T: Transport> {
    transport: T,
    config: ClientConfig,
    state: RefCell<ClientState>,
    selected: RefCell<Option<T::File>>,
    uploading: Cell<bool>,
    observer: Option<Observer>,
}

impl<T: Transport> UploadClient<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self {
            transport,
            config,
            state: RefCell::new(ClientState::default()),
            selected: RefCell::new(None),
            uploading: Cell::new(false),
            observer: None,
        }
    }

    /// Register a callback run after every state change.
    pub fn with_observer(mut self, observer: impl Fn(&ClientState) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ClientState {
        self.state.borrow().clone()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading.get()
    }

    fn update(&self, f: impl FnOnce(&mut ClientState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            f(&mut state);
            state.clone()
        };
        if let Some(observer) = &self.observer {
            observer(&snapshot);
        }
    }

    fn fail_upload(&self, error: &UploadError) {
        self.selected.replace(None);
        let message = error.to_string();
        self.update(|state| {
            state.selected = None;
            state.status = UploadStatus::Failed(message);
        });
    }

    /// Take a file from the picker.
    ///
    /// Anything but `video/mp4` is rejected locally and clears the previous
    /// selection. Ignored while an upload is running.
    pub fn select_file(&self, candidate: T::File) -> UploadStatus {
        if self.uploading.get() {
            log::warn!("⏳ Upload in progress, ignoring selection of {}", candidate.name());
            return self.state.borrow().status.clone();
        }

        let file = SelectedFile {
            name: candidate.name(),
            mime_type: candidate.mime_type(),
        };

        if file.mime_type != ACCEPTED_MIME_TYPE {
            log::warn!("⚠️ Rejected {} ({:?}): not an MP4", file.name, file.mime_type);
            self.fail_upload(&UploadError::InvalidFileType);
        } else {
            log::info!("🎬 File selected: {}", file.name);
            self.selected.replace(Some(candidate));
            let status = UploadStatus::Selected(file.name.clone());
            self.update(|state| {
                state.selected = Some(file);
                state.status = status;
            });
        }

        self.state.borrow().status.clone()
    }

    /// Upload the currently selected file.
    pub async fn upload_selected(&self, token: &CancelToken) -> Outcome<String> {
        if self.uploading.get() {
            log::warn!("⏳ Upload already in progress, ignoring");
            return Outcome::Ignored;
        }

        let file = self.selected.borrow().clone();
        match file {
            Some(file) => self.upload(file, token).await,
            None => {
                let error = UploadError::NoFileSelected;
                self.fail_upload(&error);
                Outcome::Completed(Err(error))
            }
        }
    }

    /// Send `file` to the configured upload endpoint.
    ///
    /// Returns the server-assigned file name. At most one upload runs at a
    /// time: a call made while another is in flight sends nothing and
    /// returns [`Outcome::Ignored`]. Nothing is sent once `token` is cancelled.
    pub async fn upload(&self, file: T::File, token: &CancelToken) -> Outcome<String> {
        if token.is_cancelled() {
            log::info!("🚫 Upload of {} cancelled before sending", file.name());
            return Outcome::Cancelled;
        }

        if self.uploading.replace(true) {
            log::warn!("⏳ Upload already in progress, ignoring {}", file.name());
            return Outcome::Ignored;
        }

        if file.mime_type() != ACCEPTED_MIME_TYPE {
            self.uploading.set(false);
            let error = UploadError::InvalidFileType;
            self.fail_upload(&error);
            return Outcome::Completed(Err(error));
        }

        let local_name = file.name();
        let object_name = object_name(&local_name);
        let url = upload_url(&self.config, &object_name);
        let previous = self.state.borrow().status.clone();

        log::info!("📤 Uploading {} as {}", local_name, object_name);
        self.update(|state| state.status = UploadStatus::Uploading(local_name.clone()));

        let result = self.send_upload(&url, &file, &object_name).await;
        self.uploading.set(false);

        if token.is_cancelled() {
            log::info!("🚫 Upload of {} cancelled", local_name);
            self.update(|state| state.status = previous);
            return Outcome::Cancelled;
        }

        match result {
            Ok((file_name, body)) => {
                log::info!("✅ Upload successful: {}", file_name);
                self.selected.replace(None);
                let status = UploadStatus::Success(file_name.clone());
                self.update(|state| {
                    state.selected = None;
                    state.status = status;
                    state.last_upload = Some(body);
                });
                Outcome::Completed(Ok(file_name))
            }
            Err(error) => {
                log::error!("❌ Error uploading {}: {}", local_name, error);
                self.fail_upload(&error);
                Outcome::Completed(Err(error))
            }
        }
    }

    async fn send_upload(
        &self,
        url: &str,
        file: &T::File,
        object_name: &str,
    ) -> UploadResult<(String, Value)> {
        let response = self
            .transport
            .post_multipart(url, FILE_FIELD, file, object_name)
            .await
            .map_err(UploadError::Network)?;

        if !response.is_success() {
            return Err(UploadError::upload_status(response.status));
        }

        let body: Value = serde_json::from_str(&response.body)
            .map_err(|e| UploadError::Decode(e.to_string()))?;
        let parsed: UploadResponse = serde_json::from_value(body.clone())
            .map_err(|e| UploadError::Decode(e.to_string()))?;

        let file_name = parsed
            .file_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| object_name.to_string());

        Ok((file_name, body))
    }

    /// `GET /health` and keep the JSON payload for display.
    ///
    /// On failure the previous snapshot is kept and the error is recorded.
    pub async fn check_backend_health(&self, token: &CancelToken) -> Outcome<Value> {
        if self.state.borrow().health.loading {
            return Outcome::Ignored;
        }

        self.update(|state| {
            state.health.loading = true;
            state.health.error = None;
        });

        let result = self.fetch_health().await;

        if token.is_cancelled() {
            self.update(|state| state.health.loading = false);
            return Outcome::Cancelled;
        }

        match &result {
            Ok(snapshot) => {
                log::info!("💚 Backend healthy");
                let snapshot = snapshot.clone();
                self.update(|state| {
                    state.health.loading = false;
                    state.health.snapshot = Some(snapshot);
                });
            }
            Err(error) => {
                log::error!("❌ Error fetching from backend: {}", error);
                let message = error.to_string();
                self.update(|state| {
                    state.health.loading = false;
                    state.health.error = Some(message);
                });
            }
        }

        Outcome::Completed(result)
    }

    async fn fetch_health(&self) -> UploadResult<Value> {
        let response = self
            .transport
            .get(&self.config.health_url())
            .await
            .map_err(UploadError::Network)?;

        if !response.is_success() {
            return Err(UploadError::health_status(response.status));
        }

        serde_json::from_str(&response.body).map_err(|e| UploadError::Decode(e.to_string()))
    }
}
