//! Agentic Guardrails Page
//!
//! Four panels with their own error slots: guardrail checks, compliance
//! reports, training and commercial readiness.

use leptos::*;
use saro::pages::agentic::{AgenticTab, DEMO_TEXTS};
use saro::pages::AgenticPage;

use super::forms::{ActionButton, ChipButton, PageHeader, Panel, TextArea, TextField};
use crate::components::json_view::field;
use crate::components::{ErrorBanner, JsonView, RecordTable, TabBar};
use crate::state::global::{mount_fetch, run_request};
use crate::state::GlobalState;

/// Agentic page component
#[component]
pub fn Agentic() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let page = create_rw_signal(AgenticPage::default());

    let client = state.client.clone();
    mount_fetch(page, async move { AgenticPage::fetch(&client).await }, AgenticPage::apply);

    let tab = Signal::derive(move || page.with(|p| p.tab));

    view! {
        <div class="space-y-6">
            <PageHeader title="Agentic Guardrails" subtitle="Runtime guardrails, compliance reports and GA readiness" />

            <ErrorBanner error=Signal::derive(move || page.with(|p| p.error.clone())) />

            <TabBar
                tabs=vec![
                    (AgenticTab::Guardrails, "Guardrails"),
                    (AgenticTab::Compliance, "Compliance Reports"),
                    (AgenticTab::Training, "Training"),
                    (AgenticTab::Commercial, "Commercial"),
                ]
                active=tab
                on_select=move |t: AgenticTab| page.update(|p| p.tab = t)
            />

            {move || match tab.get() {
                AgenticTab::Guardrails => view! { <Guardrails page=page /> }.into_view(),
                AgenticTab::Compliance => view! { <ComplianceReports page=page /> }.into_view(),
                AgenticTab::Training => view! { <Training page=page /> }.into_view(),
                AgenticTab::Commercial => view! { <Commercial page=page /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn Guardrails(page: RwSignal<AgenticPage>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (text, set_text) =
        create_slice(page, |p| p.guard_form.output_text.clone(), |p, v| p.guard_form.output_text = v);
    let (model, set_model) = create_slice(page, |p| p.guard_form.model_id.clone(), |p, v| p.guard_form.model_id = v);

    let client = state.client.clone();
    let check = move |_: ()| {
        let client = client.clone();
        run_request(
            page,
            AgenticPage::begin_check,
            move |request| async move { client.check_guardrails(&request).await },
            AgenticPage::finish_check,
        );
    };

    view! {
        <div class="grid md:grid-cols-2 gap-6">
            <Panel title="Check Model Output">
                <div class="flex flex-wrap gap-2">
                    {DEMO_TEXTS
                        .iter()
                        .enumerate()
                        .map(|(index, demo)| view! {
                            <ChipButton label=demo.label on_click=move |_: ()| page.update(|p| p.use_demo(index)) />
                        })
                        .collect_view()}
                </div>
                <TextField label="Model" value=model set_value=set_model />
                <TextArea label="Output text" value=text set_value=set_text rows=5 />
                <ActionButton
                    label="Check Guardrails"
                    busy_label="Checking..."
                    busy=Signal::derive(move || page.with(|p| p.checking))
                    on_click=check
                />
                <ErrorBanner error=Signal::derive(move || page.with(|p| p.guard_error.clone())) />
            </Panel>
            <Panel title="Verdict">
                {move || page.with(|p| p.guard_result.clone()).map(|verdict| view! { <JsonView value=verdict /> })}
                {move || page.with(|p| p.guard_stats.clone()).map(|stats| view! {
                    <h3 class="text-sm text-slate-400">"Guardrail statistics"</h3>
                    <JsonView value=stats />
                })}
            </Panel>
        </div>
    }
}

#[component]
fn ComplianceReports(page: RwSignal<AgenticPage>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (model, set_model) =
        create_slice(page, |p| p.report_form.model_name.clone(), |p, v| p.report_form.model_name = v);
    let (report_type, set_report_type) =
        create_slice(page, |p| p.report_form.report_type.clone(), |p, v| p.report_form.report_type = v);

    let client = state.client.clone();
    let generate = move |_: ()| {
        let client = client.clone();
        run_request(
            page,
            AgenticPage::begin_report,
            move |request| async move { client.generate_compliance_report(&request).await },
            AgenticPage::finish_report,
        );
    };

    view! {
        <div class="grid md:grid-cols-2 gap-6">
            <Panel title="Generate Report">
                <TextField label="Model name" value=model set_value=set_model />
                <TextField label="Report type" value=report_type set_value=set_report_type />
                <ActionButton
                    label="Generate"
                    busy_label="Generating..."
                    busy=Signal::derive(move || page.with(|p| p.generating))
                    on_click=generate
                />
                <ErrorBanner error=Signal::derive(move || page.with(|p| p.report_error.clone())) />
                {move || page.with(|p| p.report_result.clone()).map(|report| view! { <JsonView value=report /> })}
            </Panel>
            <Panel title="Regulations">
                <RecordTable
                    rows=Signal::derive(move || page.with(|p| p.regulations.clone()))
                    columns=&[("name", "Regulation"), ("jurisdiction", "Jurisdiction"), ("status", "Status")]
                />
            </Panel>
        </div>
    }
}

#[component]
fn Training(page: RwSignal<AgenticPage>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let client = state.client.clone();

    let enroll = move |course_id: String| {
        let client = client.clone();
        let request = page.try_update(|p| p.begin_enroll(&course_id));
        let Some(request) = request else {
            return;
        };
        spawn_local(async move {
            let result = client.enroll_course(&request).await;
            page.try_update(|p| p.finish_enroll(&course_id, result));
        });
    };

    view! {
        <Panel title="Courses">
            {move || page.with(|p| p.enroll_message.clone()).map(|message| view! {
                <div class="text-sm text-blue-300">{message}</div>
            })}
            <div class="space-y-2">
                {move || {
                    page.with(|p| p.courses.clone())
                        .into_iter()
                        .map(|course| {
                            let course_id = field(&course, "course_id");
                            let enroll = enroll.clone();
                            view! {
                                <div class="flex items-center justify-between bg-slate-800 rounded-lg px-4 py-3">
                                    <div>
                                        <div class="font-medium">{field(&course, "title")}</div>
                                        <div class="text-xs text-slate-400">{field(&course, "duration")}</div>
                                    </div>
                                    <ChipButton label="Enroll" on_click=move |_: ()| enroll(course_id.clone()) />
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Panel>
    }
}

#[component]
fn Commercial(page: RwSignal<AgenticPage>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (tenant, set_tenant) = create_slice(page, |p| p.billing_tenant.clone(), |p, v| p.billing_tenant = v);

    let client = state.client.clone();
    let lookup = move |_: ()| {
        let client = client.clone();
        run_request(
            page,
            AgenticPage::begin_billing,
            move |tenant_id| async move { client.billing(&tenant_id).await },
            AgenticPage::finish_billing,
        );
    };

    view! {
        <div class="grid md:grid-cols-2 gap-6">
            <Panel title="GA Readiness">
                {move || page.with(|p| p.ga_readiness.clone()).map(|ga| view! { <JsonView value=ga /> })}
            </Panel>
            <Panel title="Billing">
                <TextField label="Tenant ID" value=tenant set_value=set_tenant placeholder="TENANT-001" />
                <ActionButton label="Look up" busy=Signal::derive(|| false) on_click=lookup />
                {move || page.with(|p| p.billing.clone()).map(|billing| view! { <JsonView value=billing /> })}
            </Panel>
        </div>
    }
}
