//! Audit & Compliance Page

use leptos::*;
use saro::api::dto::RiskLevel;
use saro::pages::audit::{AuditTab, REPORT_STANDARDS};
use saro::pages::policy_library::JURISDICTIONS;
use saro::pages::AuditPage;

use super::forms::{ActionButton, PageHeader, Panel, SelectField, TextArea, TextField};
use crate::components::json_view::field;
use crate::components::{ErrorBanner, JsonView, RecordTable, StatCard, TabBar};
use crate::state::global::{mount_fetch, run_request};
use crate::state::GlobalState;

/// Audit page component
#[component]
pub fn Audit() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let page = create_rw_signal(AuditPage::default());

    let client = state.client.clone();
    mount_fetch(page, async move { AuditPage::fetch(&client).await }, AuditPage::apply);

    let tab = Signal::derive(move || page.with(|p| p.tab));

    view! {
        <div class="space-y-6">
            <PageHeader title="Audit & Compliance" subtitle="Audit models against the regulations that apply to them" />

            <ErrorBanner error=Signal::derive(move || page.with(|p| p.error.clone())) />

            <TabBar
                tabs=vec![
                    (AuditTab::Run, "Run Audit"),
                    (AuditTab::History, "History"),
                    (AuditTab::Matrix, "Compliance Matrix"),
                    (AuditTab::Report, "Standards Report"),
                ]
                active=tab
                on_select=move |t: AuditTab| page.update(|p| p.tab = t)
            />

            {move || match tab.get() {
                AuditTab::Run => view! { <RunAudit page=page /> }.into_view(),
                AuditTab::History => view! {
                    <Panel title="Audit History">
                        <RecordTable
                            rows=Signal::derive(move || page.with(|p| p.audits.clone()))
                            columns=&[("audit_id", "Audit"), ("model_name", "Model"), ("compliance_score", "Score"), ("status", "Status")]
                        />
                    </Panel>
                }.into_view(),
                AuditTab::Matrix => view! {
                    <Panel title="Compliance Matrix">
                        {move || page.with(|p| p.matrix.clone()).map(|matrix| view! { <JsonView value=matrix /> })}
                    </Panel>
                }.into_view(),
                AuditTab::Report => view! { <StandardsReport page=page /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn RunAudit(page: RwSignal<AuditPage>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (model_name, set_model_name) = create_slice(page, |p| p.form.model_name.clone(), |p, v| p.form.model_name = v);
    let (model_version, set_model_version) =
        create_slice(page, |p| p.form.model_version.clone(), |p, v| p.form.model_version = v);
    let (use_case, set_use_case) = create_slice(page, |p| p.form.use_case.clone(), |p, v| p.form.use_case = v);
    let (jurisdiction, set_jurisdiction) =
        create_slice(page, |p| p.form.jurisdiction.clone(), |p, v| p.form.jurisdiction = v);
    let (risk, set_risk) = create_slice(
        page,
        |p| p.form.risk_category.as_str().to_string(),
        |p, v: String| p.form.risk_category = RiskLevel::parse(&v).unwrap_or_default(),
    );
    let (training, set_training) = create_slice(
        page,
        |p| p.form.training_data_description.clone().unwrap_or_default(),
        |p, v: String| p.form.training_data_description = Some(v).filter(|s| !s.trim().is_empty()),
    );

    let client = state.client.clone();
    let run = move |_: ()| {
        let client = client.clone();
        run_request(
            page,
            AuditPage::begin_audit,
            move |request| async move { client.run_audit(&request).await },
            AuditPage::finish_audit,
        );
    };

    view! {
        <div class="grid md:grid-cols-2 gap-6">
            <Panel title="Model">
                <div class="grid grid-cols-2 gap-4">
                    <TextField label="Model name" value=model_name set_value=set_model_name placeholder="CreditScorer-v3" />
                    <TextField label="Version" value=model_version set_value=set_model_version />
                </div>
                <TextField label="Use case" value=use_case set_value=set_use_case placeholder="credit scoring" />
                <div class="grid grid-cols-2 gap-4">
                    <SelectField label="Jurisdiction" options=JURISDICTIONS[1..].to_vec() value=jurisdiction set_value=set_jurisdiction />
                    <SelectField
                        label="Risk category"
                        options=RiskLevel::ALL.iter().map(|r| r.as_str()).collect()
                        value=risk
                        set_value=set_risk
                    />
                </div>
                <TextArea label="Training data" value=training set_value=set_training rows=3 />
                <ActionButton
                    label="Run Audit"
                    busy_label="Auditing..."
                    busy=Signal::derive(move || page.with(|p| p.submitting))
                    on_click=run
                />
            </Panel>
            <Panel title="Result">
                {move || page.with(|p| p.result.clone()).map(|result| view! {
                    <div class="grid grid-cols-2 gap-4">
                        <StatCard label="Compliance score" value=field(&result, "compliance_score") />
                        <StatCard label="Status" value=field(&result, "status") />
                    </div>
                    <JsonView value=result />
                })}
            </Panel>
        </div>
    }
}

#[component]
fn StandardsReport(page: RwSignal<AuditPage>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (standard, set_standard) =
        create_slice(page, |p| p.report_standard.clone(), |p, v| p.report_standard = v);

    let client = state.client.clone();
    let generate = move |_: ()| {
        let client = client.clone();
        run_request(
            page,
            AuditPage::begin_report,
            move |request| async move { client.generate_audit_report(&request).await },
            AuditPage::finish_report,
        );
    };

    view! {
        <Panel title="Standards Report">
            <p class="text-sm text-slate-400">"Generates a report from the latest audit result."</p>
            <SelectField label="Standard" options=REPORT_STANDARDS.to_vec() value=standard set_value=set_standard />
            <ActionButton
                label="Generate Report"
                busy_label="Generating..."
                busy=Signal::derive(move || page.with(|p| p.generating_report))
                on_click=generate
            />
            {move || page.with(|p| p.report.clone()).map(|report| view! { <JsonView value=report /> })}
        </Panel>
    }
}
