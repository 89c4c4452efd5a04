//! Audit Flow Page
//!
//! Runs a model output through the agent pipeline and works the resulting
//! checklist; also extracts requirements from free-form policy documents.

use leptos::*;
use saro::pages::audit_flow::{AuditFlowTab, DEMO_SCENARIOS, NONSTANDARD_DEMOS};
use saro::pages::AuditFlowPage;

use super::forms::{ActionButton, ChecklistPanel, ChipButton, PageHeader, Panel, SelectField, TextArea, TextField};
use super::output_form::OutputFormFields;
use crate::components::json_view::status_class;
use crate::components::{ErrorBanner, JsonView, RecordTable, TabBar};
use crate::state::global::{mount_fetch, run_on_copy, run_request};
use crate::state::GlobalState;

const DOC_JURISDICTIONS: [&str; 6] = ["EU", "US", "UK", "GLOBAL", "SG", "CN"];

/// Audit flow page component
#[component]
pub fn AuditFlow() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let page = create_rw_signal(AuditFlowPage::default());

    let client = state.client.clone();
    mount_fetch(page, async move { AuditFlowPage::fetch(&client).await }, AuditFlowPage::apply);

    let tab = Signal::derive(move || page.with(|p| p.tab));

    view! {
        <div class="space-y-6">
            <PageHeader title="Audit Flow" subtitle="Model output → agent checklist → remediation" />

            <ErrorBanner error=Signal::derive(move || page.with(|p| p.error.clone())) />

            <TabBar
                tabs=vec![
                    (AuditFlowTab::Pipeline, "Pipeline"),
                    (AuditFlowTab::NonStandard, "Non-standard Documents"),
                    (AuditFlowTab::History, "Run History"),
                ]
                active=tab
                on_select=move |t: AuditFlowTab| page.update(|p| p.tab = t)
            />

            {move || match tab.get() {
                AuditFlowTab::Pipeline => view! { <Pipeline page=page /> }.into_view(),
                AuditFlowTab::NonStandard => view! { <NonStandard page=page /> }.into_view(),
                AuditFlowTab::History => view! { <RunHistory page=page /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn Pipeline(page: RwSignal<AuditFlowPage>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (form, set_form) = create_slice(page, |p| p.form.clone(), |p, f| p.form = f);

    let client = state.client.clone();
    let run = move |_: ()| {
        let client = client.clone();
        run_request(
            page,
            AuditFlowPage::begin_run,
            move |submission| async move { client.run_agent(&submission).await },
            AuditFlowPage::finish_run,
        );
    };

    let client = state.client.clone();
    let fix = move |index: usize| {
        let client = client.clone();
        run_on_copy(page, move |mut p: AuditFlowPage| async move {
            p.fix_item(&client, index).await;
            p
        });
    };

    view! {
        <div class="grid md:grid-cols-2 gap-6">
            <Panel title="Model Output">
                <div class="flex flex-wrap gap-2">
                    {DEMO_SCENARIOS
                        .iter()
                        .enumerate()
                        .map(|(index, demo)| view! {
                            <ChipButton label=demo.label on_click=move |_: ()| page.update(|p| p.use_demo(index)) />
                        })
                        .collect_view()}
                </div>
                <OutputFormFields form=form set_form=set_form />
                <ActionButton
                    label="Run Pipeline"
                    busy_label="Running agent..."
                    busy=Signal::derive(move || page.with(|p| p.running))
                    on_click=run
                />
            </Panel>
            <Panel title="Checklist">
                {move || page.with(|p| p.verdict().map(str::to_string)).map(|verdict| view! {
                    <div class=format!("text-2xl font-bold {}", status_class(&verdict))>{verdict}</div>
                })}
                <ChecklistPanel
                    items=Signal::derive(move || page.with(|p| p.checklist()))
                    review=Signal::derive(move || page.with(|p| p.review.clone()))
                    on_toggle=move |i: usize| page.update(|p| p.review.toggle_resolved(i))
                    on_fix=fix
                />
            </Panel>
        </div>
    }
}

#[component]
fn NonStandard(page: RwSignal<AuditFlowPage>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (title, set_title) = create_slice(page, |p| p.doc_form.title.clone(), |p, v| p.doc_form.title = v);
    let (jurisdiction, set_jurisdiction) =
        create_slice(page, |p| p.doc_form.jurisdiction.clone(), |p, v| p.doc_form.jurisdiction = v);
    let (content, set_content) = create_slice(page, |p| p.doc_form.content.clone(), |p, v| p.doc_form.content = v);

    let client = state.client.clone();
    let extract = move |_: ()| {
        let client = client.clone();
        run_request(
            page,
            AuditFlowPage::begin_extract,
            move |document| async move { client.ingest_nonstandard(&document).await },
            AuditFlowPage::finish_extract,
        );
    };

    view! {
        <div class="grid md:grid-cols-2 gap-6">
            <Panel title="Document">
                <div class="flex flex-wrap gap-2">
                    {NONSTANDARD_DEMOS
                        .iter()
                        .enumerate()
                        .map(|(index, (label, _))| view! {
                            <ChipButton label=*label on_click=move |_: ()| page.update(|p| p.use_document_demo(index)) />
                        })
                        .collect_view()}
                </div>
                <TextField label="Title" value=title set_value=set_title />
                <SelectField label="Jurisdiction" options=DOC_JURISDICTIONS.to_vec() value=jurisdiction set_value=set_jurisdiction />
                <TextArea label="Content" value=content set_value=set_content rows=10 />
                <ActionButton
                    label="Extract Requirements"
                    busy_label="Extracting..."
                    busy=Signal::derive(move || page.with(|p| p.extracting))
                    on_click=extract
                />
            </Panel>
            <Panel title="Extracted">
                {move || page.with(|p| p.doc_result.clone()).map(|result| view! { <JsonView value=result /> })}
            </Panel>
        </div>
    }
}

#[component]
fn RunHistory(page: RwSignal<AuditFlowPage>) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-6">
            <Panel title="Runs">
                <RecordTable
                    rows=Signal::derive(move || page.with(|p| p.runs.clone()))
                    columns=&[("run_id", "Run"), ("model_name", "Model"), ("policy", "Policy"), ("created_at", "Created")]
                    on_select=move |i: usize| page.update(|p| p.select_run(i))
                />
            </Panel>
            <Panel title="Run Detail">
                {move || match page.with(|p| p.selected_run.clone()) {
                    Some(run) => view! { <JsonView value=run /> }.into_view(),
                    None => view! { <p class="text-sm text-slate-500">"Select a run to see its checklist."</p> }.into_view(),
                }}
            </Panel>
        </div>
    }
}
