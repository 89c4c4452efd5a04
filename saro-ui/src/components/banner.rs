//! Banners

use leptos::*;

/// Persistent warning shown while no base URL is configured
#[component]
pub fn ConfigBanner() -> impl IntoView {
    view! {
        <div class="bg-amber-900/60 border-b border-amber-700 text-amber-100 px-6 py-3 text-sm">
            <strong>"Configuration required: "</strong>
            "SARO_API_URL is not set. Set "
            <code class="px-1 bg-amber-950 rounded">"window.SARO_CONFIG.apiUrl"</code>
            " in config.js or rebuild with SARO_API_URL."
        </div>
    }
}

/// Inline page error, hidden when `error` is `None`
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|message| view! {
            <div class="bg-red-900/40 border border-red-700 text-red-200 rounded-lg px-4 py-3 text-sm">
                {message}
            </div>
        })
    }
}
