//! Header Component

use leptos::*;

use crate::state::GlobalState;

/// Breadcrumb bar with the sidebar toggle
#[component]
pub fn Header() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let nav = state.nav;

    view! {
        <header class="h-16 flex items-center justify-between px-6 border-b border-slate-800 bg-slate-900">
            <div class="flex items-center space-x-4">
                <button
                    on:click=move |_| nav.update(|n| n.toggle_sidebar())
                    class="px-2 py-1 rounded text-slate-300 hover:bg-slate-800"
                    title="Toggle sidebar"
                >
                    "☰"
                </button>
                <div class="text-sm">
                    <span class="text-slate-500">"SARO / "</span>
                    <span class="text-white font-medium">{move || nav.with(|n| n.active().title())}</span>
                </div>
            </div>
            <div class="text-xs text-slate-500">
                {move || if state.is_configured() {
                    state.client.base().as_str().to_string()
                } else {
                    "API not configured".to_string()
                }}
            </div>
        </header>
    }
}
