//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Vidup - MP4 Upload"</h1>
            <p class="subtitle">
                "Send MP4 videos to the object store through the backend. "
                "Check that the backend is reachable before uploading."
            </p>
        </div>
    }
}
