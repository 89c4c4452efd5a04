//! Model Output Checker Page

use leptos::*;
use saro::pages::model_checker::DEMO_SCENARIOS;
use saro::pages::ModelCheckerPage;

use super::forms::{ActionButton, ChecklistPanel, PageHeader, Panel};
use super::output_form::OutputFormFields;
use crate::components::json_view::{field, status_class};
use crate::components::{ErrorBanner, RecordTable};
use crate::state::global::{mount_fetch, run_on_copy, run_request};
use crate::state::GlobalState;

/// Model checker page component
#[component]
pub fn ModelChecker() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let page = create_rw_signal(ModelCheckerPage::default());

    let client = state.client.clone();
    mount_fetch(page, async move { ModelCheckerPage::fetch(&client).await }, ModelCheckerPage::apply);

    let (form, set_form) = create_slice(page, |p| p.form.clone(), |p, f| p.form = f);

    let client = state.client.clone();
    let check = move |_: ()| {
        let client = client.clone();
        run_request(
            page,
            ModelCheckerPage::begin_check,
            move |submission| async move { client.upload_model_output(&submission).await },
            ModelCheckerPage::finish_check,
        );
    };

    // Picking a demo submits it straight away.
    let client = state.client.clone();
    let run_demo = move |index: usize| {
        let client = client.clone();
        page.update(|p| p.checking = true);
        run_on_copy(page, move |mut p: ModelCheckerPage| async move {
            p.run_demo(&client, index).await;
            p.checking = false;
            p
        });
    };

    let client = state.client.clone();
    let fix = move |index: usize| {
        let client = client.clone();
        run_on_copy(page, move |mut p: ModelCheckerPage| async move {
            p.fix_item(&client, index).await;
            p
        });
    };

    view! {
        <div class="space-y-6">
            <PageHeader title="Model Output Checker" subtitle="Check a model's output against a policy and fix what fails" />

            <ErrorBanner error=Signal::derive(move || page.with(|p| p.error.clone())) />

            <Panel title="Demo Scenarios">
                <div class="grid md:grid-cols-3 gap-3">
                    {DEMO_SCENARIOS
                        .iter()
                        .enumerate()
                        .map(|(index, demo)| {
                            let run_demo = run_demo.clone();
                            view! {
                                <button
                                    on:click=move |_| run_demo(index)
                                    class="text-left bg-slate-800 hover:bg-slate-700 rounded-lg p-3"
                                >
                                    <div class="font-medium text-sm">{demo.label}</div>
                                    <div class="text-xs text-slate-400">{demo.description}</div>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Panel>

            <div class="grid md:grid-cols-2 gap-6">
                <Panel title="Output">
                    <OutputFormFields form=form set_form=set_form />
                    <ActionButton
                        label="Check Output"
                        busy_label="Checking..."
                        busy=Signal::derive(move || page.with(|p| p.checking))
                        on_click=check
                    />
                </Panel>
                <Panel title="Checklist">
                    {move || page.with(|p| p.verdict().map(str::to_string)).map(|verdict| view! {
                        <div class=format!("text-2xl font-bold {}", status_class(&verdict))>{verdict}</div>
                    })}
                    {move || page.with(|p| p.result.clone()).map(|upload| view! {
                        <p class="text-xs text-slate-500">{format!("Upload {}", field(&upload, "upload_id"))}</p>
                    })}
                    <ChecklistPanel
                        items=Signal::derive(move || page.with(|p| p.checklist()))
                        review=Signal::derive(move || page.with(|p| p.review.clone()))
                        on_toggle=move |i: usize| page.update(|p| p.review.toggle_resolved(i))
                        on_fix=fix
                    />
                </Panel>
            </div>

            <Panel title="History">
                <RecordTable
                    rows=Signal::derive(move || page.with(|p| p.history.clone()))
                    columns=&[("upload_id", "Upload"), ("model_name", "Model"), ("policy", "Policy"), ("uploaded_at", "Uploaded")]
                    on_select=move |i: usize| page.update(|p| p.select_upload(i))
                />
            </Panel>
        </div>
    }
}
