//! Sidebar Navigation
//!
//! Section headings with one entry per page; the active entry is highlighted.

use leptos::*;
use saro::{NavSection, PageId};

use crate::state::{GlobalState, Navigate};

/// Sidebar navigation component
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let nav = state.nav;

    view! {
        <aside
            class="w-64 shrink-0 bg-slate-900 border-r border-slate-800 min-h-screen"
            class:hidden=move || !nav.with(|n| n.sidebar_open())
        >
            <div class="h-16 flex items-center px-6 border-b border-slate-800">
                <span class="text-xl font-bold text-white">"SARO"</span>
                <span class="ml-2 text-xs text-slate-400">"AI Regulatory Intelligence"</span>
            </div>

            <nav class="py-4 space-y-6">
                {NavSection::ALL
                    .into_iter()
                    .map(|section| view! { <SectionLinks section=section /> })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[component]
fn SectionLinks(section: NavSection) -> impl IntoView {
    view! {
        <div>
            <div class="px-6 mb-2 text-xs uppercase tracking-wider text-slate-500">
                {section.label()}
            </div>
            {PageId::in_section(section)
                .map(|page| view! { <NavLink page=page /> })
                .collect_view()}
        </div>
    }
}

/// Individual navigation entry
#[component]
fn NavLink(page: PageId) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_context::<Navigate>().expect("Navigate not found");
    let nav = state.nav;

    view! {
        <button
            on:click=move |_| navigate.call(page)
            class="w-full flex items-center justify-between px-6 py-2 text-sm text-slate-300 hover:text-white hover:bg-slate-800 transition-colors"
            class:bg-slate-800=move || nav.with(|n| n.active() == page)
            class:text-white=move || nav.with(|n| n.active() == page)
        >
            <span>{page.label()}</span>
            {page.badge().map(|badge| view! {
                <span class="text-[10px] px-2 py-0.5 rounded bg-blue-600 text-white">{badge}</span>
            })}
        </button>
    }
}
