//! Audit Reports Page

use leptos::*;
use saro::pages::reports::compliance_score;
use saro::pages::ReportsPage;
use saro::PageId;
use serde_json::Value;

use super::forms::{PageHeader, Panel};
use crate::components::json_view::{field, status_class, text};
use crate::components::{ErrorBanner, InlineLoading, StatCard};
use crate::state::global::{mount_fetch, run_on_copy};
use crate::state::{GlobalState, Navigate};

fn percent(score: Option<f64>) -> String {
    score
        .map(|s| format!("{:.0}%", s * 100.0))
        .unwrap_or_else(|| "—".to_string())
}

fn score_class(score: Option<f64>) -> &'static str {
    match score {
        Some(s) if s >= 0.75 => "text-green-400",
        Some(_) => "text-amber-400",
        None => "text-slate-400",
    }
}

/// Reports page component
#[component]
pub fn Reports() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_context::<Navigate>().expect("Navigate not found");
    let page = create_rw_signal(ReportsPage::default());

    let client = state.client.clone();
    page.update(|p| p.loading = true);
    mount_fetch(page, async move { ReportsPage::fetch(&client).await }, ReportsPage::apply);

    // The list carries summaries only; the full report is fetched on select.
    let client = state.client.clone();
    let open = move |index: usize| {
        let Some(Some(report_id)) = page.try_update(|p| {
            p.select(index);
            p.selected_id().map(str::to_string)
        }) else {
            return;
        };
        let client = client.clone();
        run_on_copy(page, move |mut p: ReportsPage| async move {
            p.open(&client, &report_id).await;
            p
        });
    };

    view! {
        <div class="space-y-6">
            <PageHeader title="Audit Reports" subtitle="Standards-aligned compliance reports with evidence chains" />

            <div class="bg-slate-900 border border-slate-800 rounded-lg px-4 py-3 text-sm text-slate-400">
                "Reports are generated from the "
                <button on:click=move |_| navigate.call(PageId::Audit) class="text-blue-300 underline">
                    "Audit & Compliance"
                </button>
                " page: run an audit, then open Standards Report."
            </div>

            <ErrorBanner error=Signal::derive(move || page.with(|p| p.error.clone())) />

            <Show when=move || !page.with(|p| p.loading) fallback=|| view! { <InlineLoading /> }>
                <div class="grid md:grid-cols-2 gap-6">
                    <Panel title="Generated Reports">
                        {move || {
                            let reports = page.with(|p| p.reports.clone());
                            if reports.is_empty() {
                                return view! { <p class="text-sm text-slate-500">"No reports yet"</p> }.into_view();
                            }
                            reports
                                .into_iter()
                                .enumerate()
                                .map(|(index, report)| {
                                    let report_id = field(&report, "report_id");
                                    let score = compliance_score(&report);
                                    let open = open.clone();
                                    let selected = {
                                        let report_id = report_id.clone();
                                        move || page.with(|p| p.selected_id() == Some(report_id.as_str()))
                                    };
                                    view! {
                                        <button
                                            on:click=move |_| open(index)
                                            class="w-full text-left bg-slate-800 hover:bg-slate-700 rounded-lg px-4 py-3"
                                            class:ring-1=selected
                                        >
                                            <div class="flex justify-between items-center">
                                                <span class="font-medium">{field(&report, "model_name")}</span>
                                                <span class=format!("font-mono text-lg font-bold {}", score_class(score))>{percent(score)}</span>
                                            </div>
                                            <div class="text-xs text-slate-500 font-mono">
                                                {format!("{} · {}", report_id, field(&report, "generated_at"))}
                                            </div>
                                        </button>
                                    }
                                })
                                .collect_view()
                        }}
                    </Panel>
                    <ReportDetail page=page />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ReportDetail(page: RwSignal<ReportsPage>) -> impl IntoView {
    view! {
        <Panel title="Report">
            {move || match page.with(|p| p.selected.clone()) {
                None => view! { <p class="text-sm text-slate-500">"Select a report to view details"</p> }.into_view(),
                Some(report) => {
                    let summary = report.get("executive_summary").cloned().unwrap_or(Value::Null);
                    let ready = report.get("ready_for_submission").and_then(Value::as_bool).unwrap_or(false);
                    let mapping = report.get("standards_mapping").and_then(Value::as_array).cloned().unwrap_or_default();
                    let evidence = report.get("evidence_chain").and_then(Value::as_array).cloned().unwrap_or_default();
                    view! {
                        <div class="flex justify-between items-start">
                            <div>
                                <div class="font-bold">{field(&report, "model_name")}</div>
                                <div class="text-xs text-slate-500 font-mono">{field(&report, "report_id")}</div>
                            </div>
                            <span class:text-green-400=ready class:text-amber-400=!ready class="text-xs">
                                {if ready { "✓ Ready" } else { "Review Required" }}
                            </span>
                        </div>
                        <div class="grid grid-cols-2 gap-3">
                            <StatCard label="Compliance" value=percent(compliance_score(&report)) />
                            <StatCard label="Mitigation" value=format!("{}%", field(&summary, "mitigation_percent")) />
                            <StatCard label="Fine avoided" value=format!("${}", field(&summary, "estimated_fine_avoided_usd")) />
                            <StatCard label="Gaps" value=field(&report, "gaps_identified") />
                        </div>
                        <h3 class="text-xs uppercase text-slate-500">{format!("Standards mapping: {}", field(&report, "standard"))}</h3>
                        <div class="divide-y divide-slate-800">
                            {mapping
                                .into_iter()
                                .map(|m| {
                                    let score = m.get("compliance_score").and_then(Value::as_f64);
                                    let status = field(&m, "status");
                                    view! {
                                        <div class="py-2">
                                            <div class="flex justify-between text-sm">
                                                <span>
                                                    <span class="text-blue-300 text-xs mr-2">{field(&m, "article")}</span>
                                                    {field(&m, "finding_category")}
                                                </span>
                                                <span class="space-x-2">
                                                    <span class=format!("font-mono text-xs {}", score_class(score))>{percent(score)}</span>
                                                    <span class=format!("text-xs {}", status_class(&status))>{status.replace('_', " ")}</span>
                                                </span>
                                            </div>
                                            <div class="text-xs text-slate-500">{field(&m, "requirement")}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <h3 class="text-xs uppercase text-slate-500">"Evidence chain"</h3>
                        <div class="divide-y divide-slate-800 text-sm">
                            {evidence
                                .into_iter()
                                .map(|e| view! {
                                    <div class="py-1 flex space-x-2">
                                        <span class="text-xs text-slate-400 w-20 shrink-0">{text(e.get("type"))}</span>
                                        <span>{text(e.get("event"))}</span>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </Panel>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_render_as_whole_percentages() {
        assert_eq!(percent(Some(0.834)), "83%");
        assert_eq!(percent(None), "—");
        assert_eq!(score_class(Some(0.75)), "text-green-400");
        assert_eq!(score_class(Some(0.5)), "text-amber-400");
    }
}
