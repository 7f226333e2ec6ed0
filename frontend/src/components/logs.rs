//! Activity log panel.
//!
//! Keeps a capped, timestamped list of what happened in the session and
//! displays it with auto-scroll support.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::{LogEntry, LogLevel, MAX_LOG_ENTRIES};

/// Request animation frame helper for smooth scrolling
fn request_animation_frame(f: impl FnOnce() + 'static) {
    let closure = Closure::once(f);
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {:?}", e);
        }
    }
    closure.forget();
}

/// Append an entry, dropping the oldest ones past [`MAX_LOG_ENTRIES`].
pub fn push_log(logs: &mut Vec<LogEntry>, entry: LogEntry) {
    logs.push(entry);
    if logs.len() > MAX_LOG_ENTRIES {
        let overflow = logs.len() - MAX_LOG_ENTRIES;
        logs.drain(..overflow);
    }
}

/// Record a message in the activity log and the browser console.
pub fn add_log(set_logs: WriteSignal<Vec<LogEntry>>, level: LogLevel, message: &str) {
    let entry = LogEntry {
        level,
        message: message.to_string(),
        timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
    };

    // Signal may already be disposed if the panel was unmounted
    set_logs.try_update(|logs| push_log(logs, entry));

    log::info!("{}", message);
}

/// Activity log panel component
#[component]
pub fn LogsPanel(
    /// Signal for logs data
    logs: ReadSignal<Vec<LogEntry>>,
    /// Set logs signal (for clearing)
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let logs_container = create_node_ref::<leptos::html::Div>();

    // Auto-scroll to bottom when logs change
    create_effect(move |_| {
        let _ = logs.get();

        if let Some(container) = logs_container.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <div class="logs-panel">
            <div class="logs-header">
                <span class="logs-title">"📋 Activity"</span>
                <button
                    class="logs-clear"
                    on:click=move |_| set_logs.set(vec![])
                >
                    "Clear"
                </button>
            </div>
            <div class="logs-content" node_ref=logs_container>
                <For
                    each=move || logs.get().into_iter().enumerate()
                    key=|(i, entry)| (*i, entry.timestamp.clone())
                    children=move |(_, entry)| {
                        view! {
                            <div class=format!("log-entry {}", entry.level.css_class())>
                                <span class="log-time">"[" {entry.timestamp.clone()} "] "</span>
                                {entry.message.clone()}
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            level: LogLevel::Info,
            message: message.to_string(),
            timestamp: "12:00:00".to_string(),
        }
    }

    #[test]
    fn test_push_log_caps_entries() {
        let mut logs = Vec::new();
        for i in 0..MAX_LOG_ENTRIES + 5 {
            push_log(&mut logs, entry(&i.to_string()));
        }

        assert_eq!(logs.len(), MAX_LOG_ENTRIES);
        assert_eq!(logs[0].message, "5");
        assert_eq!(logs.last().unwrap().message, (MAX_LOG_ENTRIES + 4).to_string());
    }
}
