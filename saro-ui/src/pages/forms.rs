//! Form Widgets
//!
//! Inputs bound to a field of a page model through `create_slice`, plus the
//! checklist panel shared by the pipeline and model checker pages.

use leptos::*;
use saro::pages::checklist::{BotRun, ChecklistReview};
use serde_json::Value;

use crate::components::json_view::{field, status_class};

/// Page title and subtitle
#[component]
pub fn PageHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div>
            <h1 class="text-3xl font-bold">{title}</h1>
            <p class="text-slate-400 mt-1">{subtitle}</p>
        </div>
    }
}

/// Panel wrapper
#[component]
pub fn Panel(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="bg-slate-900 border border-slate-800 rounded-xl p-6 space-y-4">
            <h2 class="text-lg font-semibold">{title}</h2>
            {children()}
        </section>
    }
}

const INPUT_CLASS: &str = "w-full bg-slate-800 rounded-lg px-4 py-2 border border-slate-700 \
                           focus:border-blue-500 focus:outline-none";

#[component]
pub fn TextField(
    label: &'static str,
    value: Signal<String>,
    set_value: SignalSetter<String>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm text-slate-400 mb-1">{label}</span>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class=INPUT_CLASS
            />
        </label>
    }
}

#[component]
pub fn TextArea(
    label: &'static str,
    value: Signal<String>,
    set_value: SignalSetter<String>,
    #[prop(default = 6)] rows: u32,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm text-slate-400 mb-1">{label}</span>
            <textarea
                rows=rows
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class=INPUT_CLASS
            />
        </label>
    }
}

#[component]
pub fn SelectField(
    label: &'static str,
    options: Vec<&'static str>,
    value: Signal<String>,
    set_value: SignalSetter<String>,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm text-slate-400 mb-1">{label}</span>
            <select
                on:change=move |ev| set_value.set(event_target_value(&ev))
                prop:value=move || value.get()
                class=INPUT_CLASS
            >
                {options
                    .into_iter()
                    .map(|option| view! {
                        <option value=option selected=move || value.get() == option>{option}</option>
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Primary action button that shows `busy_label` while a request is out
#[component]
pub fn ActionButton(
    label: &'static str,
    #[prop(default = "Working...")] busy_label: &'static str,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| on_click.call(())
            disabled=move || busy.get()
            class="px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-slate-700 rounded-lg font-medium transition-colors"
        >
            {move || if busy.get() { busy_label } else { label }}
        </button>
    }
}

/// Small secondary button, used for demo loaders and row actions
#[component]
pub fn ChipButton(#[prop(into)] label: String, #[prop(into)] on_click: Callback<()>) -> impl IntoView {
    view! {
        <button
            on:click=move |_| on_click.call(())
            class="px-3 py-1 text-xs rounded-full bg-slate-800 hover:bg-slate-700 border border-slate-700"
        >
            {label}
        </button>
    }
}

/// Checklist items with a resolved toggle and a bot launcher per item
#[component]
pub fn ChecklistPanel(
    #[prop(into)] items: Signal<Vec<Value>>,
    #[prop(into)] review: Signal<ChecklistReview>,
    #[prop(into)] on_toggle: Callback<usize>,
    #[prop(into)] on_fix: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            {move || {
                items
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let status = field(&item, "status");
                        let resolved = move || review.with(|r| r.is_resolved(index));
                        let bot = move || review.with(|r| r.bot(index));
                        view! {
                            <div
                                class="flex items-start justify-between bg-slate-800 rounded-lg px-4 py-3"
                                class:opacity-50=resolved
                            >
                                <div class="space-y-1">
                                    <div class="font-medium">{field(&item, "check")}</div>
                                    <div class=format!("text-xs uppercase {}", status_class(&status))>{status.clone()}</div>
                                    <div class="text-sm text-slate-400">{field(&item, "recommendation")}</div>
                                </div>
                                <div class="flex items-center space-x-2 shrink-0">
                                    <label class="text-xs text-slate-400 flex items-center space-x-1">
                                        <input
                                            type="checkbox"
                                            prop:checked=resolved
                                            on:change=move |_| on_toggle.call(index)
                                        />
                                        <span>"Resolved"</span>
                                    </label>
                                    {move || match bot() {
                                        Some(BotRun::Running) => view! {
                                            <span class="text-xs text-blue-300">"Bot running..."</span>
                                        }.into_view(),
                                        Some(BotRun::Done) => view! {
                                            <span class="text-xs text-green-400">"✓ Bot dispatched"</span>
                                        }.into_view(),
                                        Some(BotRun::Failed) => view! {
                                            <span class="text-xs text-red-400">"✕ Bot failed"</span>
                                        }.into_view(),
                                        None => view! {
                                            <ChipButton label="Fix with bot" on_click=move |_: ()| on_fix.call(index) />
                                        }.into_view(),
                                    }}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
