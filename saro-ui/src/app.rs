//! App Root Component
//!
//! Builds the shared client, provides global state and renders exactly one
//! page component for the active page.

use leptos::*;
use saro::PageId;

use crate::components::{ConfigBanner, Header, Sidebar, Toast};
use crate::pages;
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_global_state();
    let configured = state.is_configured();
    let nav = state.nav;

    // Only changes of the active page remount; sidebar toggles do not.
    let active = create_memo(move |_| nav.with(|n| n.active()));

    view! {
        <div class="min-h-screen bg-slate-950 text-white flex">
            <Sidebar />

            <div class="flex-1 flex flex-col min-w-0">
                <Header />

                <Show when=move || !configured>
                    <ConfigBanner />
                </Show>

                <main class="flex-1 px-6 py-8 overflow-auto">
                    {move || page_view(active.get())}
                </main>
            </div>

            <Toast />
        </div>
    }
}

fn page_view(page: PageId) -> View {
    match page {
        PageId::Overview => view! { <pages::Overview /> }.into_view(),
        PageId::Onboarding => view! { <pages::Onboarding /> }.into_view(),
        PageId::Ingestion => view! { <pages::Ingestion /> }.into_view(),
        PageId::Audit => view! { <pages::Audit /> }.into_view(),
        PageId::Enterprise => view! { <pages::Enterprise /> }.into_view(),
        PageId::Agentic => view! { <pages::Agentic /> }.into_view(),
        PageId::Autonomous => view! { <pages::Autonomous /> }.into_view(),
        PageId::AuditFlow => view! { <pages::AuditFlow /> }.into_view(),
        PageId::ModelChecker => view! { <pages::ModelChecker /> }.into_view(),
        PageId::PolicyLibrary => view! { <pages::PolicyLibrary /> }.into_view(),
        PageId::FeedLog => view! { <pages::FeedLog /> }.into_view(),
        PageId::Reports => view! { <pages::Reports /> }.into_view(),
    }
}
