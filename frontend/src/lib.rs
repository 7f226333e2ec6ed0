//! Vidup - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading MP4 videos to the object store
//! through the Vidup backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── BackendSection (health check)                          │
//! │  ├── UploadSection (select + upload MP4)                    │
//! │  └── LogsPanel (when activity exists)                       │
//! └─────────────────────────────────────────────────────────────┘
//!                 │ ClientState signal ▲
//!                 ▼                    │ observer
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UploadClient<BrowserTransport>                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Backend URL, endpoints and bucket
//! - [`types`] - Common types (UploadStatus, ClientState, LogEntry, errors)
//! - [`components`] - UI components
//! - [`services`] - Upload workflow and HTTP transport

use std::rc::Rc;

use leptos::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Upload
    SelectedFile, UploadStatus,
    // Backend
    ClientState, HealthState,
    // Logs
    LogEntry, LogLevel,
    // Errors
    UploadError, UploadResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

/// Upload client wired to the browser's `fetch`.
pub type BrowserClient = UploadClient<BrowserTransport>;

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let (state, set_state) = create_signal(ClientState::default());
    let (logs, set_logs) = create_signal(Vec::<LogEntry>::new());

    let client = Rc::new(
        UploadClient::new(BrowserTransport, ClientConfig::default()).with_observer(move |s| {
            // Requests may finish after the view is gone
            _ = set_state.try_set(s.clone());
        }),
    );

    let token = CancelToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });

    log::info!("🔗 Backend: {}", client.config().backend_url);

    view! {
        <div class="container">
            <Hero/>

            <BackendSection
                client=client.clone()
                state=state
                token=token.clone()
                set_logs=set_logs
            />

            <UploadSection
                client=client
                state=state
                token=token
                set_logs=set_logs
            />

            <Show
                when=move || !logs.get().is_empty()
                fallback=|| view! { }
            >
                <LogsPanel logs=logs set_logs=set_logs/>
            </Show>
        </div>
    }
}
