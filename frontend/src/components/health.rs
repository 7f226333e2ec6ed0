//! Backend connection panel.
//!
//! Calls `/health` and shows the last JSON payload returned by the backend,
//! pretty-printed.

use std::rc::Rc;

use leptos::*;

use crate::components::add_log;
use crate::services::{CancelToken, Outcome};
use crate::{BrowserClient, ClientState, LogEntry, LogLevel};

/// Pretty-print a JSON payload for display.
pub fn pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[component]
pub fn BackendSection(
    client: Rc<BrowserClient>,
    state: ReadSignal<ClientState>,
    token: CancelToken,
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let on_fetch = move |_| {
        let client = client.clone();
        let token = token.clone();

        spawn_local(async move {
            match client.check_backend_health(&token).await {
                Outcome::Completed(Ok(_)) => {
                    add_log(set_logs, LogLevel::Success, "💚 Backend is healthy");
                }
                Outcome::Completed(Err(e)) => {
                    add_log(set_logs, LogLevel::Error, &format!("❌ Health check failed: {}", e));
                }
                Outcome::Ignored | Outcome::Cancelled => {}
            }
        });
    };

    let loading = move || state.with(|s| s.health.loading);

    view! {
        <div class="card">
            <h2>"Backend Connection"</h2>
            <button on:click=on_fetch disabled=loading>
                {move || if loading() { "Loading..." } else { "Fetch from Backend" }}
            </button>

            <Show
                when=move || state.with(|s| s.health.error.is_some())
                fallback=|| view! { }
            >
                <div class="error-message">
                    "Error: " {move || state.with(|s| s.health.error.clone().unwrap_or_default())}
                </div>
            </Show>

            <Show
                when=move || state.with(|s| s.health.snapshot.is_some())
                fallback=|| view! { }
            >
                <div class="data">
                    <pre>
                        {move || state.with(|s| s.health.snapshot.as_ref().map(pretty_json).unwrap_or_default())}
                    </pre>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_json() {
        let value = serde_json::json!({"status": "ok"});
        assert_eq!(pretty_json(&value), "{\n  \"status\": \"ok\"\n}");
    }
}
