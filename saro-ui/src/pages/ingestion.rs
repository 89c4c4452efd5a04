//! Ingestion & Forecast Page

use leptos::*;
use saro::pages::ingestion::{IngestionTab, DOCUMENT_LIMIT};
use saro::pages::policy_library::JURISDICTIONS;
use saro::pages::IngestionPage;

use super::forms::{ActionButton, PageHeader, Panel, SelectField, TextArea, TextField};
use crate::components::{ErrorBanner, JsonView, RecordTable, TabBar};
use crate::state::global::{mount_fetch, run_request};
use crate::state::GlobalState;

const DOC_TYPES: [&str; 4] = ["regulation", "guidance", "standard", "enforcement"];

/// Ingestion page component
#[component]
pub fn Ingestion() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let page = create_rw_signal(IngestionPage::default());

    let client = state.client.clone();
    mount_fetch(
        page,
        async move { IngestionPage::fetch(&client, "EU").await },
        IngestionPage::apply,
    );

    let (title, set_title) = create_slice(page, |p| p.form.title.clone(), |p, v| p.form.title = v);
    let (content, set_content) = create_slice(page, |p| p.form.content.clone(), |p, v| p.form.content = v);
    let (jurisdiction, set_jurisdiction) =
        create_slice(page, |p| p.form.jurisdiction.clone(), |p, v| p.form.jurisdiction = v);
    let (doc_type, set_doc_type) = create_slice(page, |p| p.form.doc_type.clone(), |p, v| p.form.doc_type = v);
    let (source, set_source) = create_slice(
        page,
        |p| p.form.source.clone().unwrap_or_default(),
        |p, v: String| p.form.source = Some(v).filter(|s| !s.trim().is_empty()),
    );

    let client = state.client.clone();
    let toasts = state.clone();
    let ingest = move |_: ()| {
        let client = client.clone();
        let toasts = toasts.clone();
        run_request(
            page,
            IngestionPage::begin_ingest,
            move |document| async move { client.ingest_document(&document).await },
            move |p, result| {
                let ok = result.is_ok();
                p.finish_ingest(result);
                if ok {
                    toasts.show_success("Document ingested");
                }
            },
        );
    };

    let client = state.client.clone();
    let forecast_jurisdiction = Signal::derive(move || page.with(|p| p.forecast_jurisdiction.clone()));
    let set_forecast_jurisdiction = SignalSetter::map(move |jurisdiction: String| {
        if page.try_update(|p| p.select_jurisdiction(&jurisdiction)) == Some(true) {
            let client = client.clone();
            mount_fetch(
                page,
                async move { client.forecast(&jurisdiction).await },
                IngestionPage::apply_forecast,
            );
        }
    });

    let tab = Signal::derive(move || page.with(|p| p.tab));

    view! {
        <div class="space-y-6">
            <PageHeader title="Regulatory Ingestion & Forecast" subtitle="Ingest documents, browse the corpus and forecast regulatory change" />

            <ErrorBanner error=Signal::derive(move || page.with(|p| p.error.clone())) />

            <TabBar
                tabs=vec![
                    (IngestionTab::Ingest, "Ingest"),
                    (IngestionTab::Documents, "Documents"),
                    (IngestionTab::Forecast, "Forecast"),
                ]
                active=tab
                on_select=move |t: IngestionTab| page.update(|p| p.tab = t)
            />

            {move || match tab.get() {
                IngestionTab::Ingest => view! {
                    <div class="grid md:grid-cols-2 gap-6">
                        <Panel title="New Document">
                            <TextField label="Title" value=title set_value=set_title />
                            <div class="grid grid-cols-2 gap-4">
                                <SelectField label="Jurisdiction" options=JURISDICTIONS[1..].to_vec() value=jurisdiction set_value=set_jurisdiction />
                                <SelectField label="Type" options=DOC_TYPES.to_vec() value=doc_type set_value=set_doc_type />
                            </div>
                            <TextField label="Source" value=source set_value=set_source placeholder="Optional URL or publisher" />
                            <TextArea label="Content" value=content set_value=set_content rows=10 />
                            <ActionButton
                                label="Ingest Document"
                                busy_label="Ingesting..."
                                busy=Signal::derive(move || page.with(|p| p.submitting))
                                on_click=ingest.clone()
                            />
                        </Panel>
                        <Panel title="Result">
                            {move || page.with(|p| p.result.clone()).map(|result| view! { <JsonView value=result /> })}
                        </Panel>
                    </div>
                }.into_view(),
                IngestionTab::Documents => view! {
                    <Panel title="Documents">
                        <p class="text-xs text-slate-500">{format!("Latest {} documents", DOCUMENT_LIMIT)}</p>
                        <RecordTable
                            rows=Signal::derive(move || page.with(|p| p.documents.clone()))
                            columns=&[("title", "Title"), ("jurisdiction", "Jurisdiction"), ("doc_type", "Type"), ("risk_score", "Risk")]
                        />
                        {move || page.with(|p| p.stats.clone()).map(|stats| view! { <JsonView value=stats /> })}
                    </Panel>
                }.into_view(),
                IngestionTab::Forecast => view! {
                    <Panel title="Regulatory Forecast">
                        <SelectField label="Jurisdiction" options=JURISDICTIONS[1..].to_vec() value=forecast_jurisdiction set_value=set_forecast_jurisdiction />
                        {move || page.with(|p| p.forecast.clone()).map(|forecast| view! { <JsonView value=forecast /> })}
                    </Panel>
                }.into_view(),
            }}
        </div>
    }
}
