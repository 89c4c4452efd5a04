//! Overview Page
//!
//! Dashboard summary, persona workflow and compliance status. The summary
//! refreshes on a fixed interval while the page is mounted.

use gloo_timers::callback::Interval;
use leptos::*;
use saro::config::DashboardConfig;
use saro::pages::overview::{Persona, QUICK_ENTRIES};
use saro::pages::OverviewPage;
use saro::PageId;

use super::forms::{ChipButton, PageHeader, Panel};
use crate::components::json_view::{status_class, text};
use crate::components::{ErrorBanner, Loading, StatCard};
use crate::state::global::mount_fetch;
use crate::state::{GlobalState, Navigate};

/// Module rows: summary key, label, target page and the two stats shown
const MODULES: [(&str, &str, PageId, [(&str, &str); 2]); 4] = [
    (
        "mvp1_ingestion",
        "Ingestion & Forecast",
        PageId::Ingestion,
        [("documents_total", "docs"), ("jurisdictions_covered", "jurisdictions")],
    ),
    (
        "mvp2_audit",
        "Audit & Compliance",
        PageId::Audit,
        [("audits_total", "audits"), ("regulations_tracked", "regs")],
    ),
    (
        "mvp3_enterprise",
        "Enterprise",
        PageId::Enterprise,
        [("active_tenants", "tenants"), ("integrations_active", "integrations")],
    ),
    (
        "mvp4_agentic",
        "Agentic Guardrails",
        PageId::Agentic,
        [("guardrail_checks_today", "checks today"), ("reports_generated", "reports")],
    ),
];

/// Overview page component
#[component]
pub fn Overview() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let page = create_rw_signal(OverviewPage::new(Persona::default()));

    page.update(|p| p.loading = true);
    mount_fetch(
        page,
        {
            let client = state.client.clone();
            async move { OverviewPage::fetch(&client, Persona::default()).await }
        },
        OverviewPage::apply,
    );

    let poll_ms = u32::try_from(DashboardConfig::default().poll_interval_secs * 1000).unwrap_or(30_000);
    let client = state.client.clone();
    let interval = Interval::new(poll_ms, move || {
        let client = client.clone();
        spawn_local(async move {
            let result = client.dashboard().await;
            page.try_update(|p| p.apply_poll(result));
        });
    });
    on_cleanup(move || drop(interval));

    let client = state.client.clone();
    let select_persona = move |persona: Persona| {
        if page.try_update(|p| p.select_persona(persona)) == Some(true) {
            let client = client.clone();
            mount_fetch(
                page,
                async move { OverviewPage::fetch_persona(&client, persona).await },
                OverviewPage::apply_persona,
            );
        }
    };

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <PageHeader title="SARO Overview" subtitle="Regulatory intelligence across every module" />
                <div class="text-sm text-slate-400">
                    {move || page.with(|p| p.last_refreshed
                        .map(|ts| format!("Last refreshed {}", ts.format("%H:%M:%S")))
                        .unwrap_or_else(|| "Not refreshed".to_string()))}
                </div>
            </div>

            <ErrorBanner error=Signal::derive(move || page.with(|p| p.error.clone())) />

            <div class="flex space-x-2">
                {Persona::ALL
                    .into_iter()
                    .map(|persona| {
                        let select_persona = select_persona.clone();
                        view! {
                            <button
                                on:click=move |_| select_persona(persona)
                                class="px-4 py-2 rounded-lg text-sm bg-slate-900 border border-slate-800 hover:border-blue-500"
                                class:border-blue-500=move || page.with(|p| p.persona == persona)
                                title=persona.description()
                            >
                                {persona.name()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                if page.with(|p| p.loading) {
                    view! { <Loading /> }.into_view()
                } else {
                    view! { <ModuleCards page=page /> }.into_view()
                }
            }}

            <QuickEntries />

            <div class="grid md:grid-cols-2 gap-8">
                <Workflow page=page />
                <ComplianceStatus page=page />
            </div>
        </div>
    }
}

#[component]
fn ModuleCards(page: RwSignal<OverviewPage>) -> impl IntoView {
    let navigate = use_context::<Navigate>().expect("Navigate not found");

    view! {
        <div class="grid md:grid-cols-2 gap-4">
            {MODULES
                .into_iter()
                .map(|(key, label, target, stats)| view! {
                    <button
                        on:click=move |_| navigate.call(target)
                        class="text-left flex items-center justify-between bg-slate-900 border border-slate-800 hover:border-blue-500 rounded-lg px-4 py-3"
                    >
                        <div>
                            <div class="font-semibold">{label}</div>
                            <div class="text-xs text-slate-400">
                                {move || stats
                                    .iter()
                                    .map(|(stat, unit)| format!("{} {}", module_field(page, key, stat), unit))
                                    .collect::<Vec<_>>()
                                    .join(" · ")}
                            </div>
                        </div>
                        <span class="text-slate-500">"→"</span>
                    </button>
                })
                .collect_view()}
        </div>
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <StatCard label="Documents" value=Signal::derive(move || module_field(page, "mvp1_ingestion", "documents_total")) />
            <StatCard label="Compliance" value=Signal::derive(move || compliance_percent(page)) />
            <StatCard label="Tenants" value=Signal::derive(move || module_field(page, "mvp3_enterprise", "active_tenants")) />
            <StatCard label="Guardrail checks" value=Signal::derive(move || module_field(page, "mvp4_agentic", "guardrail_checks_today")) />
        </div>
    }
}

fn module_field(page: RwSignal<OverviewPage>, module: &str, key: &str) -> String {
    page.with(|p| text(p.module(module).and_then(|m| m.get(key))))
}

fn compliance_percent(page: RwSignal<OverviewPage>) -> String {
    page.with(|p| {
        p.module("mvp2_audit")
            .and_then(|m| m.get("avg_compliance_score"))
            .and_then(|score| score.as_f64())
            .map(|score| format!("{:.0}%", score * 100.0))
            .unwrap_or_else(|| "—".to_string())
    })
}

#[component]
fn QuickEntries() -> impl IntoView {
    let navigate = use_context::<Navigate>().expect("Navigate not found");

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            {QUICK_ENTRIES
                .into_iter()
                .map(|entry| view! {
                    <button
                        on:click=move |_| navigate.call(entry.target)
                        class="text-left bg-slate-900 border border-slate-800 hover:border-blue-500 rounded-lg p-4 transition-colors"
                    >
                        <div class="font-semibold">{entry.label}</div>
                        <div class="text-xs text-slate-400 mt-1">{entry.description}</div>
                    </button>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Workflow(page: RwSignal<OverviewPage>) -> impl IntoView {
    let navigate = use_context::<Navigate>().expect("Navigate not found");

    view! {
        <Panel title="Your Workflow">
            {move || {
                let steps = page.with(|p| p.quick_steps());
                if steps.is_empty() {
                    return view! { <p class="text-sm text-slate-500">"No workflow for this persona yet."</p> }.into_view();
                }
                steps
                    .into_iter()
                    .map(|step| view! {
                        <div class="flex items-center justify-between bg-slate-800 rounded-lg px-4 py-3">
                            <div>
                                <div class="font-medium">{step.action.clone()}</div>
                                <div class="text-sm text-slate-400">{step.detail.clone()}</div>
                            </div>
                            {step.target.map(|target| view! {
                                <ChipButton label="Go" on_click=move |_: ()| navigate.call(target) />
                            })}
                        </div>
                    })
                    .collect_view()
            }}
        </Panel>
    }
}

#[component]
fn ComplianceStatus(page: RwSignal<OverviewPage>) -> impl IntoView {
    let navigate = use_context::<Navigate>().expect("Navigate not found");

    view! {
        <Panel title="Compliance Status">
            <div class="text-sm text-slate-400">
                {move || {
                    let (critical, warn) = page.with(|p| p.compliance_counts());
                    format!("{} critical, {} warnings", critical, warn)
                }}
            </div>
            {move || {
                page.with(|p| p.fixes())
                    .into_iter()
                    .map(|fix| view! {
                        <div class="flex items-center justify-between bg-slate-800 rounded-lg px-4 py-3">
                            <div>
                                <div class="font-medium">{fix.check.clone()}</div>
                                <div class=format!("text-xs uppercase {}", status_class(&fix.status))>
                                    {format!("{} · {}", fix.module, fix.status)}
                                </div>
                            </div>
                            <ChipButton label=format!("Fix in {}", fix.target.label()) on_click=move |_: ()| navigate.call(fix.target) />
                        </div>
                    })
                    .collect_view()
            }}
        </Panel>
    }
}
