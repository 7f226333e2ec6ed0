//! MP4 upload component.
//!
//! Hidden file input behind a "Select MP4 File" button, an upload button,
//! and the status/error lines projected from the client state.

use std::rc::Rc;

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement};

use crate::components::{add_log, pretty_json};
use crate::services::{CancelToken, Outcome};
use crate::{BrowserClient, ClientState, LogEntry, LogLevel, UploadStatus, ACCEPTED_MIME_TYPE};

#[component]
pub fn UploadSection(
    client: Rc<BrowserClient>,
    state: ReadSignal<ClientState>,
    token: CancelToken,
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let select_client = client.clone();
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            let name = file.name();
            match select_client.select_file(file) {
                UploadStatus::Selected(_) => {
                    add_log(set_logs, LogLevel::Info, &format!("🎬 File selected: {}", name));
                }
                UploadStatus::Failed(message) => {
                    add_log(set_logs, LogLevel::Warning, &format!("⚠️ {}: {}", message, name));
                }
                _ => {}
            }
        }

        // Allow picking the same file again
        input.set_value("");
    };

    let on_upload = move |_| {
        let client = client.clone();
        let token = token.clone();

        spawn_local(async move {
            match client.upload_selected(&token).await {
                Outcome::Completed(Ok(file_name)) => {
                    add_log(set_logs, LogLevel::Success, &format!("✅ Upload successful: {}", file_name));
                }
                Outcome::Completed(Err(e)) if e.is_local() => {
                    add_log(set_logs, LogLevel::Warning, &format!("⚠️ {}", e));
                }
                Outcome::Completed(Err(e)) => {
                    add_log(set_logs, LogLevel::Error, &format!("❌ Upload failed: {}", e));
                }
                Outcome::Ignored | Outcome::Cancelled => {}
            }
        });
    };

    let trigger_file_input = move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id("fileInput") {
                    if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                        html_input.click();
                    }
                }
            }
        }
    };

    let is_uploading = move || state.with(|s| s.status.is_uploading());
    let status_text = move || state.with(|s| s.status.status_text());
    let error = move || state.with(|s| s.status.error().map(str::to_string));

    view! {
        <div class="card">
            <h2>"MP4 File Upload"</h2>

            <input
                type="file"
                id="fileInput"
                accept=ACCEPTED_MIME_TYPE
                style="display:none"
                on:change=on_file_change
            />

            <button
                on:click=trigger_file_input
                disabled=is_uploading
                style="margin-right: 10px;"
            >
                "Select MP4 File"
            </button>

            <button
                on:click=on_upload
                disabled=move || is_uploading() || state.with(|s| s.selected.is_none())
            >
                {move || if is_uploading() { "⏳ Uploading..." } else { "Upload to MinIO" }}
            </button>

            <Show
                when=move || status_text().is_some()
                fallback=|| view! { }
            >
                <div class="upload-status">{move || status_text().unwrap_or_default()}</div>
            </Show>

            <Show
                when=move || error().is_some()
                fallback=|| view! { }
            >
                <div class="error-message">"Error: " {move || error().unwrap_or_default()}</div>
            </Show>

            <Show
                when=move || state.with(|s| s.last_upload.is_some())
                fallback=|| view! { }
            >
                <div class="data">
                    <pre>
                        {move || state.with(|s| s.last_upload.as_ref().map(pretty_json).unwrap_or_default())}
                    </pre>
                </div>
            </Show>
        </div>
    }
}
